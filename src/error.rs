//! Error types for stepsqrt
//!
//! The numeric kernels never fail. Errors only come from the configuration
//! and parsing surfaces around them.

use thiserror::Error;

/// Result type alias using stepsqrt's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or driving a square root computation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Strategy name not recognised
    #[error("Unknown sqrt strategy '{name}' (expected 'transcendental' or 'newton-raphson')")]
    UnknownStrategy {
        /// The name that failed to parse
        name: String,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Writing results to the output stream failed
    #[error("Failed to write output: {kind}")]
    Output {
        /// Kind of the underlying I/O failure
        kind: std::io::ErrorKind,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
