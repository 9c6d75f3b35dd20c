// Error types for the mindlink signal-processing core
//
// This module defines custom error types for spectral-transform and
// classifier-training operations, providing structured error handling with
// numeric error codes for callers that report across process boundaries.
//
// Degenerate-but-expected signal conditions (near-zero band power, near-zero
// projection norm, near-zero variance) are NOT errors: each is recovered
// locally with a documented fallback at the site where it occurs.

use log::error;
use std::fmt;

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling when
/// results are surfaced to a host application.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}

/// Log a signal error with structured context
///
/// The logging is non-blocking and will not panic on failure.
pub fn log_signal_error(err: &SignalError, context: &str) {
    error!(
        "Signal error in {}: code={}, component=SpectralEngine, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Log a training error with structured context
///
/// The logging is non-blocking and will not panic on failure.
pub fn log_training_error(err: &TrainingError, context: &str) {
    error!(
        "Training error in {}: code={}, component=LdaModel, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Signal and transform contract violations
///
/// These cover caller errors on the DSP path: a transform requested for a
/// size the radix-2 engine cannot handle, or a statistic requested over an
/// empty buffer. No partial result is ever produced for these.
///
/// Error code range: 1001-1002
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// Transform size is not a power of two
    NotPowerOfTwo { size: usize },

    /// Zero-length buffer where a statistic (mean, variance) is undefined
    EmptyBuffer,
}

impl ErrorCode for SignalError {
    fn code(&self) -> i32 {
        match self {
            SignalError::NotPowerOfTwo { .. } => 1001,
            SignalError::EmptyBuffer => 1002,
        }
    }

    fn message(&self) -> String {
        match self {
            SignalError::NotPowerOfTwo { size } => {
                format!("transform size must be a power of two (got {})", size)
            }
            SignalError::EmptyBuffer => {
                "sample buffer is empty; statistics are undefined".to_string()
            }
        }
    }
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SignalError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for SignalError {}

/// Classifier training errors
///
/// These cover the LDA training contract: training is refused outright when
/// the sample set cannot produce a usable model, and the model is left
/// untouched.
///
/// Error code range: 2001-2003
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainingError {
    /// Training requested with an empty sample set
    NoSamples,

    /// All samples of one class label are missing
    MissingClass { label: u8 },

    /// Feature vectors in the sample set have inconsistent lengths
    DimensionMismatch { expected: usize, got: usize },
}

impl ErrorCode for TrainingError {
    fn code(&self) -> i32 {
        match self {
            TrainingError::NoSamples => 2001,
            TrainingError::MissingClass { .. } => 2002,
            TrainingError::DimensionMismatch { .. } => 2003,
        }
    }

    fn message(&self) -> String {
        match self {
            TrainingError::NoSamples => "no training samples provided".to_string(),
            TrainingError::MissingClass { label } => {
                format!("no training samples with label {}", label)
            }
            TrainingError::DimensionMismatch { expected, got } => {
                format!(
                    "feature vector length mismatch: expected {}, got {}",
                    expected, got
                )
            }
        }
    }
}

impl fmt::Display for TrainingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrainingError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for TrainingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_error_codes() {
        assert_eq!(SignalError::NotPowerOfTwo { size: 100 }.code(), 1001);
        assert_eq!(SignalError::EmptyBuffer.code(), 1002);
    }

    #[test]
    fn test_training_error_codes() {
        assert_eq!(TrainingError::NoSamples.code(), 2001);
        assert_eq!(TrainingError::MissingClass { label: 1 }.code(), 2002);
        assert_eq!(
            TrainingError::DimensionMismatch {
                expected: 6,
                got: 4
            }
            .code(),
            2003
        );
    }

    #[test]
    fn test_signal_error_display() {
        let err = SignalError::NotPowerOfTwo { size: 100 };
        assert!(err.message().contains("power of two"));
        assert!(err.message().contains("100"));

        let err = SignalError::EmptyBuffer;
        assert!(err.message().contains("empty"));
    }

    #[test]
    fn test_training_error_display() {
        let err = TrainingError::MissingClass { label: 0 };
        assert!(err.message().contains("label 0"));

        let err = TrainingError::DimensionMismatch {
            expected: 6,
            got: 4,
        };
        assert!(err.message().contains("expected 6"));
        assert!(err.message().contains("got 4"));
    }

    #[test]
    fn test_error_code_trait() {
        let signal_err: &dyn ErrorCode = &SignalError::EmptyBuffer;
        assert_eq!(signal_err.code(), 1002);

        let training_err: &dyn ErrorCode = &TrainingError::NoSamples;
        assert_eq!(training_err.code(), 2001);
    }

    #[test]
    fn test_error_propagation() {
        fn may_fail() -> Result<(), SignalError> {
            Err(SignalError::NotPowerOfTwo { size: 7 })
        }

        fn caller() -> Result<(), SignalError> {
            may_fail()?;
            Ok(())
        }

        assert!(caller().is_err());
    }
}
