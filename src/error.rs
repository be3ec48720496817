//! Error types for filter construction and configuration

use thiserror::Error;

/// Errors raised at the boundary of the filtering API.
///
/// Steady-state numeric edge cases (zero speed, repeated timestamps) are
/// handled inside the filters and never show up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("unsupported signal type `{0}`")]
    UnsupportedType(String),

    #[error("expected {expected} channel values, got {actual}")]
    ChannelCountMismatch { expected: usize, actual: usize },

    #[error("channel values {values:?} do not form a valid {kind}")]
    InvalidValue { kind: &'static str, values: Vec<f64> },
}

impl FilterError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        FilterError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
