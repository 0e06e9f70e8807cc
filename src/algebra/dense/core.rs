#![allow(non_snake_case)]

use crate::algebra::{DenseMatrix, FloatT, MatrixShape, ShapedMatrix, VectorMath};
use std::ops::{Index, IndexMut};

/// Dense matrix in row-major order.
///
/// This type is the destination collaborator for the sparse
/// upper-triangle scatter kernels.  It carries storage, dimensions
/// and `(row, col)` indexing only; no dense algebra is implemented
/// on it here.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in row-major order
    pub data: Vec<T>,
}

impl<T> DenseMatrix for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.n + idx.1
    }
    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        Self {
            m,
            n,
            data: src.to_vec(),
        }
    }

    pub fn set_zero(&mut self) {
        self.data.set(T::zero());
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data()[self.index_linear(idx)]
    }
}

impl<T> ShapedMatrix for Matrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.nrows() {
            write!(f, "[ ")?;
            for j in 0..self.ncols() {
                write!(f, " {:?}", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}

#[test]
fn test_row_major_indexing() {
    // A =
    //[1. 2. 3.]
    //[4. 5. 6.]
    let A = Matrix::new_from_slice((2, 3), &[1., 2., 3., 4., 5., 6.]);
    assert_eq!(A[(0, 0)], 1.);
    assert_eq!(A[(0, 2)], 3.);
    assert_eq!(A[(1, 0)], 4.);
    assert_eq!(A[(1, 2)], 6.);

    let mut B = Matrix::zeros((2, 3));
    B[(1, 1)] = 7.;
    assert_eq!(B.data, vec![0., 0., 0., 0., 7., 0.]);
}
