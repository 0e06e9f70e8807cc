//! Sparse triplet and dense matrix types and their kernels.
//!
//! All internal math goes through the traits in [`math_traits`](self), which
//! are implemented generically for floats of type [`FloatT`].

mod adjoint;
mod coo;
mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod symmetric;
mod vecmath;

pub use coo::*;
pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub(crate) use matrix_traits::*;
pub use matrix_types::*;

#[cfg(test)]
mod tests;
