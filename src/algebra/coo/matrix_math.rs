#![allow(non_snake_case)]

use super::deep_assert;
use crate::algebra::*;
use itertools::izip;
use std::cmp::Ordering;

impl<T: FloatT> MatrixVectorMultiply for CooMatrix<T> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        _coo_axpby_N(self, y, x, a, b);
    }
}

impl<T: FloatT> MatrixVectorMultiply for Adjoint<'_, CooMatrix<T>> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        _coo_axpby_T(self.src, y, x, a, b);
    }
}

impl<T: FloatT> BlockTriuScatter for CooMatrix<T> {
    type T = T;

    fn add_to_triu_block(&self, W: &mut Matrix<T>, row_start: usize, col_start: usize, a: T) {
        assert!(row_start + self.nrows() <= W.nrows());
        assert!(col_start + self.ncols() <= W.ncols());
        assert!(W.is_square());

        for (&row, &col, &v) in izip!(&self.rowval, &self.colval, &self.nzval) {
            let (i, j) = (row + row_start, col + col_start);
            deep_assert!(
                i <= j,
                "source entries must map inside the upper triangle of the destination"
            );
            W[(i, j)] += a * v;
        }
    }

    fn trans_add_to_triu_block(&self, W: &mut Matrix<T>, row_start: usize, col_start: usize, a: T) {
        assert!(row_start + self.ncols() <= W.nrows());
        assert!(col_start + self.nrows() <= W.ncols());
        assert!(W.is_square());

        for (&row, &col, &v) in izip!(&self.rowval, &self.colval, &self.nzval) {
            let (i, j) = (col + row_start, row + col_start);
            deep_assert!(
                i <= j,
                "source entries must map inside the upper triangle of the destination"
            );
            W[(i, j)] += a * v;
        }
    }
}

impl<T> CooMatrix<T>
where
    T: FloatT,
{
    /// Weighted Gram block accumulation: for a diagonal weight vector `d`
    /// of length `n` with nonzero entries, computes
    ///
    /// ```text
    /// W[s+i, s+j] += a * Σ_k M[i,k] * M[j,k] / d[k]     for 0 <= i <= j < m
    /// ```
    ///
    /// i.e. the upper triangle of `a * M * Diagonal(d)⁻¹ * Mᵀ` added onto
    /// the square diagonal block of `W` starting at `(s, s)`,
    /// `s = dest_start`.
    ///
    /// Diagonal entries are single scans of each row's nonzero range.
    /// Off-diagonal entries are sparse dot products between two rows,
    /// computed by a merge-join over their sorted column lists, so the
    /// cost stays proportional to row lengths rather than to `n`.
    ///
    /// The first call builds the row-start index; entries must be in
    /// sorted row-major order by then and the nonzero layout must not
    /// change afterwards.
    pub fn add_gram_dinv_to_triu_block(
        &self,
        W: &mut Matrix<T>,
        dest_start: usize,
        a: T,
        d: &[T],
    ) {
        assert_eq!(d.len(), self.ncols());
        assert!(dest_start + self.nrows() <= W.nrows());
        assert!(W.is_square());

        let starts = self.row_starts();

        for i in 0..self.nrows() {
            //j == i: sum of squared entries of row i over the weights
            let mut acc = T::zero();
            for k in starts[i]..starts[i + 1] {
                acc += self.nzval[k] * self.nzval[k] / d[self.colval[k]];
            }
            W[(i + dest_start, i + dest_start)] += a * acc;

            //j > i: weighted dot product of rows i and j, both column
            //lists sorted ascending, advanced in tandem
            for j in (i + 1)..self.nrows() {
                let mut acc = T::zero();
                let mut ki = starts[i];
                let mut kj = starts[j];
                while ki < starts[i + 1] && kj < starts[j + 1] {
                    match self.colval[ki].cmp(&self.colval[kj]) {
                        Ordering::Equal => {
                            acc += self.nzval[ki] / d[self.colval[ki]] * self.nzval[kj];
                            ki += 1;
                            kj += 1;
                        }
                        Ordering::Less => ki += 1,
                        Ordering::Greater => kj += 1,
                    }
                }
                W[(i + dest_start, j + dest_start)] += a * acc;
            }
        }
    }
}

// sparse triplet matrix-vector multiply, no transpose
#[allow(non_snake_case)]
fn _coo_axpby_N<T: FloatT>(A: &CooMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    A.verify_format();

    //first do the b*y part.  b == 0 overwrites, so a stale y
    //holding NaN is still cleared
    if b == T::zero() {
        y.fill(T::zero());
    } else if b == T::one() {
    } else if b == -T::one() {
        y.negate();
    } else {
        y.scale(b);
    }

    // if a is zero, we're done
    if a == T::zero() {
        return;
    }

    assert_eq!(x.len(), A.n);
    assert_eq!(y.len(), A.m);

    //y += a*A*x
    if a == T::one() {
        for (&row, &col, &v) in izip!(&A.rowval, &A.colval, &A.nzval) {
            y[row] += v * x[col];
        }
    } else if a == -T::one() {
        for (&row, &col, &v) in izip!(&A.rowval, &A.colval, &A.nzval) {
            y[row] -= v * x[col];
        }
    } else {
        for (&row, &col, &v) in izip!(&A.rowval, &A.colval, &A.nzval) {
            y[row] += a * v * x[col];
        }
    }
}

// sparse triplet matrix-vector multiply, transposed
#[allow(non_snake_case)]
fn _coo_axpby_T<T: FloatT>(A: &CooMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    A.verify_format();

    //first do the b*y part
    if b == T::zero() {
        y.fill(T::zero());
    } else if b == T::one() {
    } else if b == -T::one() {
        y.negate();
    } else {
        y.scale(b);
    }

    // if a is zero, we're done
    if a == T::zero() {
        return;
    }

    assert_eq!(x.len(), A.m);
    assert_eq!(y.len(), A.n);

    //y += a*A^T*x
    if a == T::one() {
        for (&row, &col, &v) in izip!(&A.rowval, &A.colval, &A.nzval) {
            y[col] += v * x[row];
        }
    } else if a == -T::one() {
        for (&row, &col, &v) in izip!(&A.rowval, &A.colval, &A.nzval) {
            y[col] -= v * x[row];
        }
    } else {
        for (&row, &col, &v) in izip!(&A.rowval, &A.colval, &A.nzval) {
            y[col] += a * v * x[row];
        }
    }
}
