pub mod calculations;
pub mod models;

pub use calculations::{ConfigError, EstimateError, EstimatorConfig, MassEstimator, estimate};
pub use models::*;
