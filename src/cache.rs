pub(crate) mod antialias;
pub(crate) mod buffered;
pub(crate) mod memoized;
