//! Scalar square root kernels
//!
//! Both kernels are pure. They assume `x > 0`; the non-positive clamp lives in
//! the dispatch layer so the two paths share it.

/// Number of Newton-Raphson steps, regardless of how close the estimate is.
pub const NEWTON_ITERATIONS: usize = 10;

/// Value an estimate is reset to when it is no longer positive.
pub const NEWTON_RESTART: f64 = 0.1;

// ============================================================================
// Transcendental Path
// ============================================================================

/// Compute sqrt(x) through the identity sqrt(x) = exp(0.5 * ln(x)).
///
/// Exact up to IEEE rounding of `ln` and `exp`.
#[inline]
pub fn transcendental_sqrt_scalar(x: f64) -> f64 {
    (x.ln() * 0.5).exp()
}

// ============================================================================
// Newton-Raphson Path
// ============================================================================

/// One Newton step on f(r) = r^2 - x, with f'(r) = 2r.
///
/// A non-positive `current` is first restarted at [`NEWTON_RESTART`], which
/// keeps the division finite.
#[inline]
pub fn newton_step(x: f64, current: f64) -> f64 {
    let r = if current <= 0.0 { NEWTON_RESTART } else { current };
    let delta = x - r * r;
    r + 0.5 * delta / r
}

/// Compute sqrt(x) with a fixed number of Newton-Raphson steps.
///
/// The initial estimate is `x` itself. `on_iteration` receives the step index
/// and the estimate after that step.
///
/// # Accuracy
///
/// No convergence test is made. Inputs within a few orders of magnitude of 1
/// land well inside 1e-3 relative error; very large inputs do not converge in
/// ten steps.
pub fn newton_sqrt_scalar<F>(x: f64, mut on_iteration: F) -> f64
where
    F: FnMut(usize, f64),
{
    let mut result = x;
    for i in 0..NEWTON_ITERATIONS {
        result = newton_step(x, result);
        on_iteration(i, result);
    }
    result
}
