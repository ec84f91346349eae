//! Error types for input parsing, batch files and configuration

use thiserror::Error;

/// Everything that can go wrong outside the calculator itself.
///
/// The arithmetic core is total; these errors only come from the boundary
/// (request parsing, CSV files) and from configuration.
#[derive(Error, Debug)]
pub enum AffordabilityError {
    #[error("missing numeric field `{field}`")]
    Missing { field: &'static str },

    #[error("malformed numeric field `{field}`: {value:?}")]
    Malformed {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("non-finite value for field `{field}`: {value:?}")]
    NonFinite { field: &'static str, value: String },

    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl AffordabilityError {
    /// True for errors a caller should answer with a client-error status
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Missing { .. } | Self::Malformed { .. } | Self::NonFinite { .. } | Self::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AffordabilityError>;
