use thiserror::Error;

// Unified error type for linex

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinexError {
    #[error("dimension mismatch: {left} vs {right}")]
    ShapeMismatch { left: usize, right: usize },
    #[error("index {index} out of range (len {len})")]
    OutOfBounds { index: usize, len: usize },
    #[error("matrix is {rows}x{cols}, expected square")]
    NonSquare { rows: usize, cols: usize },
    #[error("matrix is not symmetric within tolerance")]
    NotSymmetric,
    #[error("cannot normalize: length is zero or nan")]
    ZeroLength,
}
