pub(crate) mod linear;
pub(crate) mod radial;
pub(crate) mod stops;
