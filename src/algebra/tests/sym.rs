#![allow(non_snake_case)]
use crate::algebra::*;

fn test_sym_matrix_3x3() -> CooMatrix<f64> {
    // stored upper triangle of
    // M =
    //[1.0   ⋅   2.0]
    //[ ⋅   3.0   ⋅ ]
    //[2.0   ⋅   4.0]
    CooMatrix::new(
        3,
        3,
        vec![0, 0, 1, 2],
        vec![0, 2, 1, 2],
        vec![1., 2., 3., 4.],
    )
}

fn test_sym_matrix_diag_entries() -> CooMatrix<f64> {
    // diagonal entries (0,0)=5 and (2,2)=7 amid off-diagonal ones
    CooMatrix::new(
        3,
        3,
        vec![0, 0, 1, 2],
        vec![0, 1, 2, 2],
        vec![5., 1., 2., 7.],
    )
}

#[test]
fn test_symv_mirrors_off_diagonal() {
    // single stored entry (0,1) = 3 represents both (0,1) and (1,0)
    let A = CooMatrix::new(2, 2, vec![0], vec![1], vec![3.]);
    let S = A.sym();

    let mut y = vec![0.; 2];
    S.symv(&mut y, &[1., 0.], 1., 0.);
    assert_eq!(y, vec![0., 3.]);

    let mut y = vec![0.; 2];
    S.symv(&mut y, &[0., 1.], 1., 0.);
    assert_eq!(y, vec![3., 0.]);
}

#[test]
fn test_symv() {
    let A = test_sym_matrix_3x3();
    let S = A.sym();

    // M*[1,1,1] = [3, 3, 6], diagonal applied once
    let mut y = vec![0.; 3];
    S.symv(&mut y, &[1., 1., 1.], 1., 0.);
    assert_eq!(y, vec![3., 3., 6.]);

    // y = a*M*x + b*y
    let mut y = vec![1., 2., 3.];
    S.symv(&mut y, &[1., 0., -1.], 2., -1.);
    // M*x = [-1, 0, -2]
    assert_eq!(y, vec![-3., -2., -7.]);

    // b == 0 overwrites a stale NaN
    let mut y = vec![f64::NAN, 0., 0.];
    S.symv(&mut y, &[1., 1., 1.], 1., 0.);
    assert!(y.is_finite());
}

#[test]
fn test_symv_empty() {
    let A = CooMatrix::<f64>::spalloc(2, 2, 0);
    let S = A.sym();

    let mut y = vec![4., 8.];
    S.symv(&mut y, &[1., 1.], 3., 0.5);
    assert_eq!(y, vec![2., 4.]);
}

#[test]
fn test_sym_add_to_triu_block() {
    let A = test_sym_matrix_3x3();
    let S = A.sym();

    let mut W = Matrix::zeros((4, 4));
    S.add_to_triu_block(&mut W, 1, 1, 2.);
    assert_eq!(W[(1, 1)], 2.);
    assert_eq!(W[(1, 3)], 4.);
    assert_eq!(W[(2, 2)], 6.);
    assert_eq!(W[(3, 3)], 8.);
    assert_eq!(W[(1, 2)], 0.);

    // transposed scatter lands in the upper triangle when the
    // destination block sits far enough above the diagonal
    let mut Wt = Matrix::zeros((6, 6));
    S.trans_add_to_triu_block(&mut Wt, 0, 3, 2.);
    assert_eq!(Wt[(0, 3)], 2.);
    assert_eq!(Wt[(2, 3)], 4.);
    assert_eq!(Wt[(1, 4)], 6.);
    assert_eq!(Wt[(2, 5)], 8.);
}

#[test]
#[should_panic]
#[cfg(any(debug_assertions, feature = "deepchecks"))]
fn test_symv_rejects_unsorted_entries() {
    let A = CooMatrix::new(2, 2, vec![1, 0], vec![1, 0], vec![1., 2.]);
    let S = Symmetric { src: &A };

    let mut y = vec![0.; 2];
    S.symv(&mut y, &[1., 1.], 1., 0.);
}

#[test]
#[should_panic]
fn test_sym_scatter_rejects_lower_entries() {
    // a stored entry below the diagonal violates the symmetric
    // structural invariant and must be caught, not assumed away
    let A = CooMatrix::new(2, 2, vec![1], vec![0], vec![3.]);
    let S = Symmetric { src: &A };

    let mut W = Matrix::zeros((2, 2));
    S.add_to_triu_block(&mut W, 0, 0, 1.);
}

#[test]
fn test_add_subdiag_to() {
    let A = test_sym_matrix_diag_entries();
    let S = A.sym();

    // diagonal entries are [5, 0, 7]; alpha = 2
    let mut dest = vec![0.; 3];
    S.add_subdiag_to(0, 2., &mut dest, 0, Some(3));
    assert_eq!(dest, vec![10., 0., 14.]);

    // None selects as many entries as fit in the destination
    let mut dest = vec![0.; 3];
    S.add_subdiag_to(0, 1., &mut dest, 0, None);
    assert_eq!(dest, vec![5., 0., 7.]);

    // windowed extraction starting mid-diagonal, offset destination
    let mut dest = vec![0., 0., 100.];
    S.add_subdiag_to(2, 1., &mut dest, 1, Some(1));
    assert_eq!(dest, vec![0., 7., 100.]);

    // accumulates onto existing values
    let mut dest = vec![1., 1., 1.];
    S.add_subdiag_to(0, 1., &mut dest, 0, None);
    assert_eq!(dest, vec![6., 1., 8.]);
}
