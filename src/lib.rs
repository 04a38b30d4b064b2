//! # stepsqrt
//!
//! **Square root by closed form or by fixed-count Newton-Raphson.**
//!
//! stepsqrt computes `sqrt(x)` for `f64` with one of two strategies:
//!
//! - **Transcendental**: `exp(0.5 * ln(x))`
//! - **Newton-Raphson**: exactly ten steps starting from `x`, no convergence test
//!
//! Non-positive input always yields `0.0`. Nothing in the numeric path fails;
//! progress reports go to a caller-supplied [`SqrtObserver`](diagnostics::SqrtObserver).
//!
//! ## Quick Start
//!
//! ```rust
//! use stepsqrt::prelude::*;
//!
//! assert!((mysqrt(4.0) - 2.0).abs() < 1e-3);
//! assert_eq!(mysqrt(-5.0), 0.0);
//!
//! let options = SqrtOptions::new().with_strategy(Strategy::NewtonRaphson);
//! let mut recorder = RecordingObserver::new();
//! let root = sqrt_with(2.0, &options, &mut recorder);
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-3);
//! assert_eq!(recorder.events().len(), 10);
//! ```
//!
//! ## Feature Flags
//!
//! - `log-exp` (default): default strategy is `Transcendental`; without it the
//!   default is `NewtonRaphson`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod diagnostics;
pub mod error;

use algorithm::sqrt::{SqrtOptions, sqrt_with};
use diagnostics::LogObserver;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::sqrt::{
        SqrtOptions, Strategy, newton_sqrt, sqrt_with, transcendental_sqrt,
    };
    pub use crate::diagnostics::{
        DiagnosticEvent, LogObserver, NoopObserver, RecordingObserver, SqrtObserver,
        WriterObserver,
    };
    pub use crate::error::{Error, Result};
    pub use crate::mysqrt;
}

/// Square root of `x` with the build-selected strategy.
///
/// Returns `0.0` for `x <= 0`. Diagnostics are sent to the `log` facade at
/// debug level; use [`sqrt_with`] to pick the strategy or the observer.
pub fn mysqrt(x: f64) -> f64 {
    sqrt_with(x, &SqrtOptions::default(), &mut LogObserver)
}
