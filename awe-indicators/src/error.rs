//! Query errors.

use thiserror::Error;

/// Errors surfaced by an indicator query.
///
/// The first four are input-validation faults and carry the offending name.
/// Any other fault is reported as [`QueryError::Execution`]; its cause is
/// logged, not returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("invalid indicator '{0}'")]
    InvalidIndicator(String),

    #[error("invalid filter '{0}'")]
    InvalidFilter(String),

    #[error("invalid transformation '{0}'")]
    InvalidTransform(String),

    #[error("invalid summary function '{0}'")]
    InvalidSummary(String),

    #[error("error executing indicator query")]
    Execution,
}

/// Result type for indicator queries.
pub type QueryResult<T> = Result<T, QueryError>;

/// Log an unexpected fault and collapse it into [`QueryError::Execution`].
pub(crate) fn execution_fault(cause: impl std::fmt::Display) -> QueryError {
    log::error!("indicator query failed: {}", cause);
    QueryError::Execution
}
