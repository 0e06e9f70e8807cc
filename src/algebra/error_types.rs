use thiserror::Error;

/// Error type returned by sparse triplet format validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Row index exceeds the matrix row dimension
    #[error("Row index exceeds the matrix row dimension")]
    BadRowIndex,
    /// Column index exceeds the matrix column dimension
    #[error("Column index exceeds the matrix column dimension")]
    BadColIndex,
    /// Entries are not sorted row-major with strictly ascending columns,
    /// or a duplicate (row, col) pair is present
    #[error("Entries are not in sorted row-major, column-ascending order")]
    BadOrdering,
}
