//! Analytics errors

use std::fmt::Display;

use thiserror::Error;

/// Errors raised by analytics queries
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    /// A lookup key never occurred in the derived buckets
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    /// A caller-supplied argument is outside its domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AnalyticsError {
    pub fn not_found(entity: &'static str, key: impl Display) -> Self {
        AnalyticsError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AnalyticsError::InvalidArgument(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AnalyticsError::NotFound { .. })
    }
}
