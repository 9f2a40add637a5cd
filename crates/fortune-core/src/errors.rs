//! Error types for the fortune core library.

#[cfg(feature = "python")]
use pyo3::exceptions::{PyRuntimeError, PyValueError};
#[cfg(feature = "python")]
use pyo3::PyErr;

/// Top-level error enum for the fortune core library.
///
/// Every variant except `Json` is a caller-input problem; the engine itself
/// has no transient or fatal failure modes.
#[derive(Debug, thiserror::Error)]
pub enum FortuneError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid MBTI input: {0}")]
    InvalidMbtiInput(String),

    #[error("Missing selection: {0}")]
    MissingSelection(String),

    #[error("Batch of {size} requests exceeds limit of {limit}")]
    BatchLimit { size: usize, limit: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(feature = "python")]
impl From<FortuneError> for PyErr {
    fn from(err: FortuneError) -> PyErr {
        match &err {
            FortuneError::InvalidDate(_)
            | FortuneError::InvalidMbtiInput(_)
            | FortuneError::MissingSelection(_)
            | FortuneError::BatchLimit { .. } => PyValueError::new_err(err.to_string()),
            FortuneError::Json(_) => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

pub type FortuneResult<T> = Result<T, FortuneError>;
