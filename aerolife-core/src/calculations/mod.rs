//! Life support mass calculations.
//!
//! This module holds the estimator configuration, the estimator itself and
//! the small numeric helpers shared with the presentation layer.

pub mod common;
pub mod estimator;

pub use estimator::{ConfigError, EstimateError, EstimatorConfig, MassEstimator, estimate};
