use thiserror::Error;

/// Errors raised while building specifications from user-facing expressions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The direction token after `:` is neither `asc` nor `desc`.
    #[error("invalid sort direction '{direction}' in '{expression}' (expected 'asc' or 'desc')")]
    InvalidSortDirection {
        expression: String,
        direction: String,
    },
    /// The sort expression has no property name before the direction.
    #[error("sort expression '{expression}' does not name a property")]
    EmptyPropertyName { expression: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
