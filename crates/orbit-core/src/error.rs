//! Error types for pipeline operations.
//!
//! Two families of failure exist inside the core:
//!
//! - [`ValidationError`]: a malformed or out-of-range input detected before
//!   any stage runs. Recoverable: fix the input and retry.
//! - [`Error::Processing`]: a stage-internal failure (degenerate buffer,
//!   shape violation). The chain aborts and no partial buffer is returned.

use thiserror::Error;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Unknown effect identifier.
    #[error("unknown effect: '{0}'")]
    UnknownEffect(String),

    /// The requested effect sequence is empty or contains an empty identifier.
    #[error("effect chain must contain at least one non-empty effect identifier")]
    EmptyChain,

    /// Unknown parameter name.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Parameter value out of range.
    #[error("parameter '{param}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the parameter.
        param: &'static str,
        /// The value that was out of range.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// Parameter value is NaN or infinite.
    #[error("parameter '{param}' must be a finite number, got {value}")]
    NotFinite {
        /// Name of the parameter.
        param: &'static str,
        /// The offending value.
        value: f32,
    },

    /// Invalid parameter format.
    #[error("invalid format for parameter '{param}': {reason}")]
    InvalidFormat {
        /// Name of the parameter.
        param: String,
        /// Description of the format error.
        reason: String,
    },

    /// Sample rate of zero.
    #[error("sample rate must be positive")]
    ZeroSampleRate,
}

/// Errors surfaced by the processing core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Input rejected before any stage executed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A stage failed while running.
    #[error("stage '{stage}' failed: {reason}")]
    Processing {
        /// Display label of the failing stage.
        stage: String,
        /// Description of the failure.
        reason: String,
    },
}

impl Error {
    /// Create a processing error for the named stage.
    pub fn processing(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Processing {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error was raised before any stage ran.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Convenience result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_names_parameter() {
        let err = ValidationError::OutOfRange {
            param: "pan_speed",
            value: 5.0,
            min: 0.01,
            max: 2.0,
        };
        let msg = err.to_string();
        assert_eq!(msg, "parameter 'pan_speed' must be between 0.01 and 2, got 5");
    }

    #[test]
    fn unknown_effect_display() {
        let err = ValidationError::UnknownEffect("chorus".to_string());
        assert_eq!(err.to_string(), "unknown effect: 'chorus'");
    }

    #[test]
    fn validation_is_transparent() {
        let err: Error = ValidationError::EmptyChain.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), ValidationError::EmptyChain.to_string());
    }

    #[test]
    fn processing_display_names_stage() {
        let err = Error::processing("Reverb", "empty buffer");
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "stage 'Reverb' failed: empty buffer");
    }
}
