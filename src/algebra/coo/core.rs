#![allow(non_snake_case)]

use super::deep_assert;
use crate::algebra::{
    Adjoint, FloatT, Matrix, MatrixShape, ShapedMatrix, SparseFormatError, Symmetric, VectorMath,
};
use std::cell::OnceCell;
use std::iter::zip;

/// Sparse matrix in coordinate (triplet) format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.   ⋅]
///     [ ⋅  2.   ⋅]
///     [4.   ⋅  5.]
/// ```
///
/// ```no_run
/// use coomat::algebra::CooMatrix;
///
/// let A : CooMatrix<f64> = CooMatrix::new(
///    3,                        // m
///    3,                        // n
///    vec![0, 0, 1, 2, 2],      // rowval
///    vec![0, 1, 1, 0, 2],      // colval
///    vec![1., 3., 2., 4., 5.], // nzval
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
///
/// ```
///
/// The arithmetic kernels assume (and verify in debug builds, or always
/// with the `deepchecks` feature) that entries are sorted row-major with
/// strictly ascending columns within each row, i.e. no duplicates.

#[derive(Debug, Clone)]
pub struct CooMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of row indices, one per nonzero
    pub rowval: Vec<usize>,
    /// vector of column indices, one per nonzero
    pub colval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
    /// lazily built row start offsets into the triplet arrays,
    /// with `row_starts[m] == nnz`
    pub(crate) row_starts: OnceCell<Vec<usize>>,
}

// the lazy row-start cache is derived data and does not participate
// in equality
impl<T: PartialEq> PartialEq for CooMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m
            && self.n == other.n
            && self.rowval == other.rowval
            && self.colval == other.colval
            && self.nzval == other.nzval
    }
}

impl<T> CooMatrix<T>
where
    T: FloatT,
{
    /// `CooMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__ ensure that indices are
    /// all in bounds or that entries are arranged in sorted row-major,
    /// column-ascending order.  Use [`try_new`](CooMatrix::try_new) to
    /// validate those conditions at construction.

    pub fn new(m: usize, n: usize, rowval: Vec<usize>, colval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), colval.len());
        assert_eq!(rowval.len(), nzval.len());
        CooMatrix {
            m,
            n,
            rowval,
            colval,
            nzval,
            row_starts: OnceCell::new(),
        }
    }

    /// Verified `CooMatrix` constructor.
    ///
    /// Performs a full O(nnz) format validation and only returns a matrix
    /// whose entries are in bounds and in sorted row-major order, the
    /// precondition assumed by the unchecked kernels.
    pub fn try_new(
        m: usize,
        n: usize,
        rowval: Vec<usize>,
        colval: Vec<usize>,
        nzval: Vec<T>,
    ) -> Result<Self, SparseFormatError> {
        if rowval.len() != colval.len() || rowval.len() != nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }
        let out = Self::new(m, n, rowval, colval, nzval);
        out.check_format()?;
        Ok(out)
    }

    /// allocate space for a sparse matrix with `nnz` elements
    ///
    /// All three triplet arrays are zero initialized, so the caller is
    /// expected to populate them before relying on the sorted-order
    /// contract.
    pub fn spalloc(m: usize, n: usize, nnz: usize) -> Self {
        let rowval = vec![0; nnz];
        let colval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];

        CooMatrix::new(m, n, rowval, colval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.rowval.len()
    }

    /// transpose
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// symmetric view
    ///
    /// The stored entries must all lie in the upper triangle; the view
    /// mirrors off-diagonal contributions across the diagonal.
    pub fn sym(&self) -> Symmetric<'_, Self> {
        debug_assert!(self.is_triu());
        Symmetric { src: self }
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() || self.colval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for index values out of bounds
        if !self.rowval.iter().all(|r| r < &self.m) {
            return Err(SparseFormatError::BadRowIndex);
        }
        if !self.colval.iter().all(|c| c < &self.n) {
            return Err(SparseFormatError::BadColIndex);
        }

        //check for sorted row-major order with strictly ascending
        //columns within each row (strictness excludes duplicates)
        for k in 1..self.nnz() {
            if self.rowval[k] < self.rowval[k - 1] {
                return Err(SparseFormatError::BadOrdering);
            }
            if self.rowval[k] == self.rowval[k - 1] && self.colval[k] <= self.colval[k - 1] {
                return Err(SparseFormatError::BadOrdering);
            }
        }

        Ok(())
    }

    /// True if every stored entry lies in the upper triangle
    pub fn is_triu(&self) -> bool {
        // structural entries only, regardless of the values
        // that may be assigned to them
        zip(&self.rowval, &self.colval).all(|(r, c)| r <= c)
    }

    /// set all nonzero values to zero, leaving the sparsity
    /// pattern untouched
    pub fn set_zero(&mut self) {
        self.nzval.set(T::zero());
    }

    /// set all nonzero values to a constant
    pub fn set_constant(&mut self, c: T) {
        self.nzval.set(c);
    }

    /// maximum absolute value over the nonzeros, as a flat
    /// 1-D reduction over the value array
    pub fn max_abs(&self) -> T {
        self.nzval.norm_inf()
    }

    /// True if every stored value is finite, i.e. no Infs or NaNs.
    ///
    /// Arithmetic kernels never raise on non-finite data; detection
    /// is opt-in through this query.
    pub fn is_finite(&self) -> bool {
        self.verify_format();
        self.nzval.is_finite()
    }

    /// a new matrix with the same dimensions and nonzero count,
    /// with all three triplet arrays zeroed
    pub fn clone_shape(&self) -> Self {
        CooMatrix::spalloc(self.m, self.n, self.nnz())
    }

    /// Row start offsets into the triplet arrays, CSR style:
    /// `row_starts()[i]` is the position of the first entry of row `i`
    /// and `row_starts()[m]` equals `nnz`.
    ///
    /// Built lazily on first use and reused for the lifetime of the
    /// matrix.  Requires sorted entries; a single linear pass must
    /// consume exactly `nnz` entries.
    pub(crate) fn row_starts(&self) -> &[usize] {
        self.row_starts.get_or_init(|| self.build_row_starts())
    }

    fn build_row_starts(&self) -> Vec<usize> {
        self.verify_format();

        let nnz = self.nnz();
        let mut starts = vec![0; self.m + 1];
        let mut it = 0;
        for i in 0..self.m {
            let mut next = starts[i];
            while it < nnz && self.rowval[it] == i {
                next += 1;
                it += 1;
            }
            starts[i + 1] = next;
        }
        debug_assert_eq!(it, nnz, "triplet entries are not sorted by row");
        starts
    }

    // format verification at kernel entry: debug builds only, unless
    // the "deepchecks" feature forces it on
    #[inline]
    pub(crate) fn verify_format(&self) {
        deep_assert!(self.check_format().is_ok(), "malformed triplet data");
    }

    /// Returns the value at the given (row,col) index as an Option.
    /// Returns None if the given index is not a structural nonzero.
    ///
    /// # Panics
    /// Panics if the given index is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> Option<T> {
        let (row, col) = idx;
        assert!(row < self.nrows() && col < self.ncols());

        zip(zip(&self.rowval, &self.colval), &self.nzval)
            .find(|((&r, &c), _v)| r == row && c == col)
            .map(|(_rc, &v)| v)
    }
}

// ---------------------------------------------------------------------
// Operations deliberately left unsupported for triplet matrices.  The
// KKT assembly path never needs them, and no semantics were ever fixed
// for them, so they fail fast rather than guessing.

impl<T> CooMatrix<T>
where
    T: FloatT,
{
    /// dense product `Y = a*self*X + b*Y`; unsupported
    pub fn gemm(&self, _Y: &mut Matrix<T>, _X: &Matrix<T>, _a: T, _b: T) {
        unimplemented!("sparse-dense products are not supported for triplet matrices");
    }

    /// dense product `Y = a*self^T*X + b*Y`; unsupported
    pub fn trans_gemm(&self, _Y: &mut Matrix<T>, _X: &Matrix<T>, _a: T, _b: T) {
        unimplemented!("sparse-dense products are not supported for triplet matrices");
    }

    /// dense product `Y = a*self*X^T + b*Y`; unsupported
    pub fn gemm_trans(&self, _Y: &mut Matrix<T>, _X: &Matrix<T>, _a: T, _b: T) {
        unimplemented!("sparse-dense products are not supported for triplet matrices");
    }

    /// sparse product `self * B`; unsupported
    pub fn spmm(&self, _B: &CooMatrix<T>) -> CooMatrix<T> {
        unimplemented!("sparse-sparse products are not supported for triplet matrices");
    }

    /// `self += a*I`; unsupported
    pub fn add_diagonal(&mut self, _a: T) {
        unimplemented!("diagonal addition is not supported for triplet matrices");
    }

    /// `self[start.., start..] += a*Diagonal(d)`; unsupported
    pub fn add_sub_diagonal(&mut self, _start: usize, _a: T, _d: &[T]) {
        unimplemented!("diagonal addition is not supported for triplet matrices");
    }

    /// `self += a*X`; unsupported
    pub fn add_matrix(&mut self, _a: T, _X: &CooMatrix<T>) {
        unimplemented!("matrix addition is not supported for triplet matrices");
    }

    /// overwrite `self` with the entries of another triplet matrix;
    /// unsupported
    pub fn copy_from(&mut self, _src: &CooMatrix<T>) {
        unimplemented!("copy_from is not supported for triplet matrices");
    }
}

impl<T> ShapedMatrix for CooMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
    fn is_square(&self) -> bool {
        self.m == self.n
    }
}

#[test]
fn test_coo_get_entry() {
    // A =
    //[ ⋅   4.0    ⋅  12.0]
    //[1.0  5.0    ⋅    ⋅ ]
    //[ ⋅   6.0  10.0   ⋅ ]
    //[2.0   ⋅   11.0 13.0]

    let A = CooMatrix::new(
        4,                                           // m
        4,                                           // n
        vec![0, 0, 1, 1, 2, 2, 3, 3, 3],             // rowval
        vec![1, 3, 0, 1, 1, 2, 0, 2, 3],             // colval
        vec![4., 12., 1., 5., 6., 10., 2., 11., 13.] // nzval
    );

    assert_eq!(A.get_entry((0, 1)).unwrap(), 4.);
    assert_eq!(A.get_entry((0, 3)).unwrap(), 12.);
    assert_eq!(A.get_entry((1, 0)).unwrap(), 1.);
    assert_eq!(A.get_entry((2, 2)).unwrap(), 10.);
    assert_eq!(A.get_entry((3, 3)).unwrap(), 13.);

    assert!(A.get_entry((0, 0)).is_none());
    assert!(A.get_entry((1, 2)).is_none());
    assert!(A.get_entry((3, 1)).is_none());
}
