//! Common test utilities
#![allow(dead_code)]

use stepsqrt::prelude::*;

/// Both evaluation strategies, for tests that must hold on either path
pub const STRATEGIES: [Strategy; 2] = [Strategy::Transcendental, Strategy::NewtonRaphson];

/// Options pinned to one strategy
pub fn options(strategy: Strategy) -> SqrtOptions {
    SqrtOptions::new().with_strategy(strategy)
}

/// Evaluate without diagnostics
pub fn sqrt_via(strategy: Strategy, x: f64) -> f64 {
    sqrt_with(x, &options(strategy), &mut NoopObserver)
}

/// Evaluate and keep every diagnostic event
pub fn sqrt_recorded(strategy: Strategy, x: f64) -> (f64, Vec<DiagnosticEvent>) {
    let mut recorder = RecordingObserver::new();
    let result = sqrt_with(x, &options(strategy), &mut recorder);
    (result, recorder.into_events())
}

/// Assert `actual` is within `rtol` relative error of `expected`
pub fn assert_close(actual: f64, expected: f64, rtol: f64, msg: &str) {
    let diff = (actual - expected).abs();
    let tol = rtol * expected.abs();
    assert!(
        diff <= tol,
        "{}: actual={}, expected={}, diff={}, tol={}",
        msg,
        actual,
        expected,
        diff,
        tol
    );
}
