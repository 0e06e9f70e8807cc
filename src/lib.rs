//! __coomat__ provides sparse matrices in coordinate ("triplet") form together
//! with the arithmetic kernels an interior-point nonlinear solver needs to
//! assemble Karush-Kuhn-Tucker (KKT) system blocks:
//!
//! * [`CooMatrix`](crate::algebra::CooMatrix): a general sparse matrix stored
//!   as three parallel (row, column, value) arrays, with sparse
//!   matrix-vector products, upper-triangle scatter-adds into a dense
//!   destination, and a weighted Gram block kernel computing
//!   `W += α·M·D⁻¹·Mᵀ` restricted to the upper triangle.
//! * [`Symmetric`](crate::algebra::Symmetric) views over triplet matrices
//!   holding only upper-triangle entries, with mirrored matrix-vector
//!   products and sub-diagonal extraction.
//!
//! Triplet data is assumed sorted row-major with ascending columns and no
//! duplicates.  The kernels trust this for performance; verification is
//! available through [`CooMatrix::check_format`](crate::algebra::CooMatrix),
//! runs as a debug assertion at kernel entry, and can be forced on in
//! optimized builds with the `deepchecks` feature.
//!
//! All types are single-threaded: the row-index cache uses interior
//! mutability and stores are not `Sync`.

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of this crate as reported by cargo.
pub fn version() -> &'static str {
    VERSION
}

pub mod algebra;
