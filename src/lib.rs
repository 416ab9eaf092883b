#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Set reconciliation via PinSketch-style BCH codes over `GF(2^64)`.
//!
//! Two peers, each holding a set of 64-bit elements, encode their set as a
//! fixed-capacity [`Sketch`]. Merging their sketches and decoding the result
//! recovers the symmetric difference of the two sets, as long as that
//! difference is no larger than the sketch's capacity — without either peer
//! ever sending the other its full set.
//!
//! The pipeline is leaves-first: [`field`] (the finite field itself) is used
//! by [`poly`] (polynomials over that field), which is used by [`frobenius`],
//! [`bma`] and [`roots`], which [`sketch`] ties together into the public
//! encode/merge/decode surface.

pub mod field;
pub mod poly;
pub mod frobenius;
pub mod bma;
pub mod roots;
pub mod sketch;

pub mod prelude;

pub use field::Element;
pub use poly::Poly;
pub use sketch::Sketch;

pub use bma::berlekamp_massey;
pub use frobenius::frobenius;
pub use roots::find_roots;
