//! Numeric algorithms
//!
//! # Available Algorithms
//!
//! - [`sqrt`] - square root with build-time default and run-time strategy override

pub mod sqrt;
