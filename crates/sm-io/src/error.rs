use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("invalid integer '{token}' at value {position}")]
    Parse { token: String, position: usize },
    #[error("{count} matrices of dimension {dimension} exceed addressable memory")]
    InputTooLarge { dimension: usize, count: usize },
    #[error("input has too few values: expected {expected}, found {found}")]
    TooFewValues { expected: usize, found: usize },
    #[error("matrix error: {0}")]
    Matrix(#[from] sm_core::MatrixError),
}

pub type Result<T> = std::result::Result<T, IoError>;
