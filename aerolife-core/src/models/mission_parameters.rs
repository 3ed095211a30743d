use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::EstimateError;
use crate::models::{MissionType, RecyclingLevel};

/// Inputs to a single mass estimate.
///
/// The input form keeps `crew_size` within 1..=10 and `duration_days` within
/// 1..=1000; the estimator itself only rejects zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionParameters {
    pub crew_size: u32,
    pub duration_days: u32,
    pub mission_type: MissionType,
    pub recycling_level: RecyclingLevel,
}

impl MissionParameters {
    pub fn new(
        crew_size: u32,
        duration_days: u32,
        mission_type: MissionType,
        recycling_level: RecyclingLevel,
    ) -> Self {
        Self {
            crew_size,
            duration_days,
            mission_type,
            recycling_level,
        }
    }

    /// Builds parameters from the raw string selections of a form or request.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] if either selection is not a
    /// recognised value.
    ///
    /// # Example
    ///
    /// ```
    /// use aerolife_core::{MissionParameters, RecyclingLevel};
    ///
    /// let params = MissionParameters::parse(3, 180, "medium-lunar", "high").unwrap();
    /// assert_eq!(params.recycling_level, RecyclingLevel::High);
    ///
    /// assert!(MissionParameters::parse(3, 180, "medium-lunar", "extreme").is_err());
    /// ```
    pub fn parse(
        crew_size: u32,
        duration_days: u32,
        mission_type: &str,
        recycling_level: &str,
    ) -> Result<Self, EstimateError> {
        Ok(Self {
            crew_size,
            duration_days,
            mission_type: mission_type.parse()?,
            recycling_level: recycling_level.parse()?,
        })
    }

    /// Crew size multiplied by mission duration.
    pub fn person_days(&self) -> Decimal {
        Decimal::from(self.crew_size) * Decimal::from(self.duration_days)
    }
}
