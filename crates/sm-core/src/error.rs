use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    #[error("matmul dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    MatmulMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error(
        "invalid shape for strassen: [{rows_a}x{cols_a}] @ [{rows_b}x{cols_b}] \
         (operands must be square, equal, and a power of two)"
    )]
    InvalidShape {
        rows_a: usize,
        cols_a: usize,
        rows_b: usize,
        cols_b: usize,
    },
    #[error("scratch pool has no level for dimension {dimension}")]
    PoolRange { dimension: usize },
    #[error("invalid cutoff {0}: must be at least 1")]
    InvalidCutoff(usize),
    #[error("matrix of {rows}x{cols} elements overflows usize")]
    SizeOverflow { rows: usize, cols: usize },
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
