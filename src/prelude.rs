//! Convenience re-exports for glob-importing callers: `use pinsketch::prelude::*;`.

pub use crate::bma::berlekamp_massey;
pub use crate::field::Element;
pub use crate::frobenius::frobenius;
pub use crate::poly::{gcd, trace, Poly};
pub use crate::roots::find_roots;
pub use crate::sketch::Sketch;
