use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnotworkError {
    #[error("Index {index} out of range for curve of {len} knots")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("Curve has no knots")]
    EmptyCurve,

    #[error("Non-finite value: {0}")]
    NonFinite(String),
}

pub type Result<T> = std::result::Result<T, KnotworkError>;
