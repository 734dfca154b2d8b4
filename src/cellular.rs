pub(crate) mod metric;
pub(crate) mod worley;
