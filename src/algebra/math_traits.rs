#![allow(non_snake_case)]

use super::{FloatT, Matrix};

// All internal math goes through these core traits, which are
// implemented generically for floats of type FloatT.

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath {
    type T;

    /// set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise negation of entries.
    fn negate(&mut self) -> &mut Self;

    /// Dot product
    fn dot(&self, y: &Self) -> Self::T;

    /// Infinity norm
    fn norm_inf(&self) -> Self::T;

    /// Maximum absolute difference to another vector (used for unit testing)
    fn norm_inf_diff(&self, b: &Self) -> Self::T;

    /// Checks if all elements are finite, i.e. no Infs or NaNs
    fn is_finite(&self) -> bool;
}

/// Matrix-vector product operations for matrices of
/// [`FloatT`](crate::algebra::FloatT)

pub trait MatrixVectorMultiply {
    type T: FloatT;

    /// BLAS-like general matrix-vector multiply.  Produces `y = a*self*x + b*y`
    fn gemv(&self, y: &mut [Self::T], x: &[Self::T], a: Self::T, b: Self::T);
}

pub trait SymMatrixVectorMultiply {
    type T: FloatT;

    /// BLAS-like symmetric matrix-vector multiply.  Produces `y = a*self*x + b*y`.
    /// The matrix source data should be triu.
    fn symv(&self, y: &mut [Self::T], x: &[Self::T], a: Self::T, b: Self::T);
}

/// Scatter-add of sparse entries into the upper triangle of a dense
/// destination block.
///
/// Destinations hold only their upper triangle, so every mapped entry
/// must land at `(i, j)` with `i <= j`.  That contract is a debug
/// assertion for general sources and an unconditional check for
/// symmetric ones, where `row <= col` is the structural invariant of
/// the stored data.

pub trait BlockTriuScatter {
    type T: FloatT;

    /// `W[row_start.., col_start..] += a * self`, upper triangle entries only
    fn add_to_triu_block(
        &self,
        W: &mut Matrix<Self::T>,
        row_start: usize,
        col_start: usize,
        a: Self::T,
    );

    /// `W[row_start.., col_start..] += a * self^T`, upper triangle entries only
    fn trans_add_to_triu_block(
        &self,
        W: &mut Matrix<Self::T>,
        row_start: usize,
        col_start: usize,
        a: Self::T,
    );
}
