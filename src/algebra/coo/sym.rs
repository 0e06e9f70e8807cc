#![allow(non_snake_case)]

use super::deep_assert;
use crate::algebra::*;
use itertools::izip;

impl<T: FloatT> SymMatrixVectorMultiply for Symmetric<'_, CooMatrix<T>> {
    type T = T;

    fn symv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        _coo_symv(self.src, y, x, a, b);
    }
}

impl<T: FloatT> BlockTriuScatter for Symmetric<'_, CooMatrix<T>> {
    type T = T;

    fn add_to_triu_block(&self, W: &mut Matrix<T>, row_start: usize, col_start: usize, a: T) {
        let A = self.src;
        assert!(row_start + A.nrows() <= W.nrows());
        assert!(col_start + A.ncols() <= W.ncols());
        assert!(W.is_square());

        for (&row, &col, &v) in izip!(&A.rowval, &A.colval, &A.nzval) {
            assert!(
                row <= col,
                "symmetric triplet matrices must contain only upper triangle entries"
            );
            let (i, j) = (row + row_start, col + col_start);
            deep_assert!(
                i <= j,
                "blocks not aligned; source entries must map inside the upper triangle of the destination"
            );
            W[(i, j)] += a * v;
        }
    }

    fn trans_add_to_triu_block(&self, W: &mut Matrix<T>, row_start: usize, col_start: usize, a: T) {
        let A = self.src;
        assert!(row_start + A.ncols() <= W.nrows());
        assert!(col_start + A.nrows() <= W.ncols());
        assert!(W.is_square());

        for (&row, &col, &v) in izip!(&A.rowval, &A.colval, &A.nzval) {
            assert!(
                row <= col,
                "symmetric triplet matrices must contain only upper triangle entries"
            );
            let (i, j) = (col + row_start, row + col_start);
            deep_assert!(
                i <= j,
                "blocks not aligned; source entries must map inside the upper triangle of the destination"
            );
            W[(i, j)] += a * v;
        }
    }
}

impl<'a, T> Symmetric<'a, CooMatrix<T>>
where
    T: FloatT,
{
    /// Extracts a run of the source diagonal and adds it into a vector:
    /// for every stored diagonal entry with
    /// `row ∈ [src_start, src_start + n_elems)`, adds `a*value` into
    /// `dest[dest_start + row - src_start]`.
    ///
    /// With `num_elems == None` the run covers as many entries as fit
    /// in `dest` starting at `dest_start`.
    pub fn add_subdiag_to(
        &self,
        src_start: usize,
        a: T,
        dest: &mut [T],
        dest_start: usize,
        num_elems: Option<usize>,
    ) {
        let A = self.src;
        assert!(dest_start <= dest.len());

        let n_elems = num_elems.unwrap_or(dest.len() - dest_start);
        assert!(dest_start + n_elems <= dest.len());
        assert!(src_start + n_elems <= A.nrows());

        for (&row, &col, &v) in izip!(&A.rowval, &A.colval, &A.nzval) {
            if row == col && row >= src_start && row < src_start + n_elems {
                dest[dest_start + row - src_start] += a * v;
            }
        }
    }
}

// symmetric sparse triplet matrix-vector multiply.  Off-diagonal
// entries are stored once and mirrored across the diagonal here.
#[allow(non_snake_case)]
fn _coo_symv<T: FloatT>(A: &CooMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    assert!(A.is_square());
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

    assert_eq!(x.len(), A.n);
    assert_eq!(y.len(), A.m);

    //y += a*A*x, mirroring the strict upper triangle
    for (&row, &col, &v) in izip!(&A.rowval, &A.colval, &A.nzval) {
        y[row] += a * v * x[col];

        if row != col {
            //don't double up on the diagonal
            y[col] += a * v * x[row];
        }
    }
}
