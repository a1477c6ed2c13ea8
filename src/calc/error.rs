use thiserror::Error;

/// Errors raised by the calculator engine.
///
/// None of these are reachable through ordinary key sequences except
/// `NonFinite`, which a division by zero produces on Equals.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("value must be finite, got {value}")]
    NonFinite { value: f64 },

    #[error("value {value} needs exponential notation")]
    ExponentialRange { value: f64 },

    #[error("digit must be 0-9, got {digit}")]
    InvalidDigit { digit: u8 },

    #[error("malformed expression stack: {reason}")]
    MalformedStack { reason: String },
}

impl EngineError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedStack {
            reason: reason.into(),
        }
    }
}
