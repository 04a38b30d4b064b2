//! Square root with selectable evaluation strategy
//!
//! Two interchangeable algorithms compute the same function:
//!
//! - **Transcendental**: `exp(0.5 * ln(x))`, one diagnostic event
//! - **Newton-Raphson**: ten fixed steps from the initial guess `x`, one
//!   diagnostic event per step
//!
//! Which one runs is a [`Strategy`] carried in [`SqrtOptions`]. The default is
//! fixed at build time by the `log-exp` cargo feature, and any caller can
//! override it at run time.
//!
//! Every strategy maps `x <= 0` to `0.0` without emitting a diagnostic.

pub mod scalar;

use std::fmt;
use std::str::FromStr;

use crate::diagnostics::{NoopObserver, SqrtObserver};
use crate::error::{Error, Result};

pub use scalar::{
    NEWTON_ITERATIONS, NEWTON_RESTART, newton_sqrt_scalar, newton_step,
    transcendental_sqrt_scalar,
};

// ============================================================================
// Strategy
// ============================================================================

/// Algorithm used to evaluate the square root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Closed form via natural log and exponential
    Transcendental,

    /// Fixed-count Newton-Raphson iteration
    NewtonRaphson,
}

impl Strategy {
    /// Strategy selected by the build.
    ///
    /// `Transcendental` when the `log-exp` feature is enabled (the default),
    /// `NewtonRaphson` otherwise.
    pub const fn detect() -> Self {
        if cfg!(feature = "log-exp") {
            Strategy::Transcendental
        } else {
            Strategy::NewtonRaphson
        }
    }

    /// Canonical name, as accepted by [`FromStr`]
    pub const fn name(&self) -> &'static str {
        match self {
            Strategy::Transcendental => "transcendental",
            Strategy::NewtonRaphson => "newton-raphson",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transcendental" | "log-exp" | "exp" => Ok(Strategy::Transcendental),
            "newton-raphson" | "newton" | "iterative" => Ok(Strategy::NewtonRaphson),
            _ => Err(Error::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Options for [`sqrt_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SqrtOptions {
    /// Evaluation strategy
    pub strategy: Strategy,
}

impl SqrtOptions {
    /// Options using the build-selected strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Compute the square root of `x` with the given options.
///
/// Non-positive input returns `0.0` and reports nothing. Otherwise the
/// selected strategy runs and reports its progress to `observer`.
///
/// NaN is not `<= 0` and propagates through either strategy.
pub fn sqrt_with(x: f64, options: &SqrtOptions, observer: &mut dyn SqrtObserver) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }

    match options.strategy {
        Strategy::Transcendental => {
            let result = transcendental_sqrt_scalar(x);
            observer.transcendental(x, result);
            result
        }
        Strategy::NewtonRaphson => {
            newton_sqrt_scalar(x, |i, result| observer.iteration(i, x, result))
        }
    }
}

/// Square root through the transcendental path, without diagnostics
pub fn transcendental_sqrt(x: f64) -> f64 {
    let options = SqrtOptions::new().with_strategy(Strategy::Transcendental);
    sqrt_with(x, &options, &mut NoopObserver)
}

/// Square root through the Newton-Raphson path, without diagnostics
pub fn newton_sqrt(x: f64) -> f64 {
    let options = SqrtOptions::new().with_strategy(Strategy::NewtonRaphson);
    sqrt_with(x, &options, &mut NoopObserver)
}
