use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("malformed {kind} descriptor: expected a string or an object with {fields}")]
    MalformedDescriptor {
        kind: &'static str,
        fields: &'static str,
    },

    #[error("non-finite value for {field}: {value}")]
    NonFiniteValue { field: &'static str, value: f64 },

    #[error("match weights must sum to 1.0, got {total}")]
    InvalidWeights { total: f64 },

    #[error("{signal} provider failed: {message}")]
    Provider {
        signal: &'static str,
        message: String,
    },

    #[error("config error: {0}")]
    Config(String),
}

/// Reject NaN and infinities before they reach a comparison.
pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, MatchError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MatchError::NonFiniteValue { field, value })
    }
}
