/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

/// Borrowed transpose view of a matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Adjoint<'a, M> {
    /// the matrix being viewed
    pub src: &'a M,
}

/// Borrowed symmetric view of a matrix whose stored entries form
/// its upper triangle
#[derive(Debug, Clone, PartialEq)]
pub struct Symmetric<'a, M> {
    /// the matrix being viewed
    pub src: &'a M,
}
