//! Coordinate transforms. Each node maps an output coordinate back into its
//! child's input space, so there are no sampling holes.

pub mod affine;
pub mod non_linear;
