//! Consumable mass estimate for a crewed mission.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Person-days: crew size × duration in days |
//! | 2    | Food: person-days × food rate |
//! | 3    | Water: person-days × water rate × (1 − water recovery) |
//! | 4    | Oxygen: person-days × oxygen rate × (1 − oxygen recovery) |
//! | 5    | Subtotal: food + water + oxygen |
//! | 6    | Margin: subtotal × margin fraction (20%) |
//! | 7    | Total: subtotal + margin |
//!
//! Recovery fractions come from the [`RecyclingTable`] entry for the chosen
//! [`RecyclingLevel`](crate::RecyclingLevel). The mission type is carried on
//! the input but does not enter any step.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use aerolife_core::{MassEstimator, MissionParameters, MissionType, RecyclingLevel};
//!
//! let estimator = MassEstimator::standard();
//! let params = MissionParameters::new(3, 180, MissionType::MediumLunar, RecyclingLevel::High);
//!
//! let breakdown = estimator.estimate(&params).unwrap();
//!
//! assert_eq!(breakdown.food_mass_kg, dec!(334.8));
//! assert_eq!(breakdown.water_mass_kg, dec!(283.5));
//! assert_eq!(breakdown.oxygen_mass_kg, dec!(113.4));
//! assert_eq!(breakdown.margin_kg, dec!(146.34));
//! assert_eq!(breakdown.total_mass_kg, dec!(878.04));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::remaining_fraction;
use crate::models::{
    ConsumptionRates, MassBreakdown, MissionParameters, RecyclingLevel, RecyclingTable,
};

/// Errors returned by [`MassEstimator::estimate`] and the input parsers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EstimateError {
    /// An input is outside its domain or is not a recognised value.
    #[error("invalid input: {field} = {value:?}")]
    InvalidInput { field: &'static str, value: String },
}

impl EstimateError {
    pub(crate) fn invalid_input(
        field: &'static str,
        value: impl ToString,
    ) -> Self {
        Self::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}

/// Errors raised when an [`EstimatorConfig`] holds an out-of-range constant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A consumption rate must be positive.
    #[error("{consumable} consumption rate must be positive, got {rate}")]
    InvalidConsumptionRate {
        consumable: &'static str,
        rate: Decimal,
    },

    /// A recovery fraction must lie in `[0, 1]`.
    #[error("{consumable} recovery fraction for '{level}' must be between 0 and 1, got {fraction}")]
    InvalidRecoveryFraction {
        level: RecyclingLevel,
        consumable: &'static str,
        fraction: Decimal,
    },

    /// The margin fraction must be non-negative.
    #[error("margin fraction must be non-negative, got {0}")]
    InvalidMarginFraction(Decimal),
}

/// Constants the estimator works from.
///
/// Built once at startup and shared by reference. The user surfaces never
/// change these; [`EstimatorConfig::STANDARD`] is what the application uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Per-person daily demand for food, water and oxygen.
    pub consumption: ConsumptionRates,

    /// Recovery fractions per recycling tier.
    pub recycling: RecyclingTable,

    /// Contingency added on top of the consumable subtotal.
    ///
    /// Applied as `subtotal × margin_fraction`; 0.2 for the standard config.
    pub margin_fraction: Decimal,
}

impl EstimatorConfig {
    pub const STANDARD: Self = Self {
        consumption: ConsumptionRates::STANDARD,
        recycling: RecyclingTable::STANDARD,
        margin_fraction: dec!(0.2),
    };

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - any consumption rate is zero or negative
    /// - any recovery fraction is outside `[0, 1]`
    /// - `margin_fraction` is negative
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use aerolife_core::{ConfigError, EstimatorConfig};
    ///
    /// let mut config = EstimatorConfig::STANDARD;
    /// config.margin_fraction = dec!(-0.1);
    ///
    /// assert_eq!(config.validate(), Err(ConfigError::InvalidMarginFraction(dec!(-0.1))));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("food", self.consumption.food_kg_per_person_day),
            ("water", self.consumption.water_kg_per_person_day),
            ("oxygen", self.consumption.oxygen_kg_per_person_day),
        ];
        for (consumable, rate) in rates {
            if rate <= Decimal::ZERO {
                return Err(ConfigError::InvalidConsumptionRate { consumable, rate });
            }
        }

        for (level, profile) in self.recycling.entries() {
            let fractions = [
                ("water", profile.water_recovery_fraction),
                ("oxygen", profile.oxygen_recovery_fraction),
            ];
            for (consumable, fraction) in fractions {
                if fraction < Decimal::ZERO || fraction > Decimal::ONE {
                    return Err(ConfigError::InvalidRecoveryFraction {
                        level,
                        consumable,
                        fraction,
                    });
                }
            }
        }

        if self.margin_fraction < Decimal::ZERO {
            return Err(ConfigError::InvalidMarginFraction(self.margin_fraction));
        }
        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Calculator for the consumable mass breakdown.
///
/// Holds only its immutable [`EstimatorConfig`], so one instance can serve
/// any number of callers and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MassEstimator {
    config: EstimatorConfig,
}

impl MassEstimator {
    /// Creates an estimator from a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails
    /// [`EstimatorConfig::validate`].
    pub fn new(config: EstimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            margin_fraction = %config.margin_fraction,
            "mass estimator configured"
        );
        Ok(Self { config })
    }

    /// Estimator over the fixed consumption rates and recycling table.
    pub const fn standard() -> Self {
        Self {
            config: EstimatorConfig::STANDARD,
        }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Calculates the mass breakdown for one set of mission parameters.
    ///
    /// Pure: identical parameters always give identical results, and nothing
    /// is rounded.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] if `crew_size` or
    /// `duration_days` is zero.
    pub fn estimate(
        &self,
        params: &MissionParameters,
    ) -> Result<MassBreakdown, EstimateError> {
        if params.crew_size == 0 {
            return Err(EstimateError::invalid_input("crew_size", params.crew_size));
        }
        if params.duration_days == 0 {
            return Err(EstimateError::invalid_input(
                "duration_days",
                params.duration_days,
            ));
        }

        let person_days = params.person_days();
        let profile = self.config.recycling.profile(params.recycling_level);
        let rates = &self.config.consumption;

        let food_mass_kg = self.food_mass(person_days, rates.food_kg_per_person_day);
        let water_mass_kg = self.recycled_mass(
            person_days,
            rates.water_kg_per_person_day,
            profile.water_recovery_fraction,
        );
        let oxygen_mass_kg = self.recycled_mass(
            person_days,
            rates.oxygen_kg_per_person_day,
            profile.oxygen_recovery_fraction,
        );

        let subtotal = food_mass_kg + water_mass_kg + oxygen_mass_kg;
        let margin_kg = self.margin(subtotal);

        // normalize() only drops trailing zeros of the scale
        Ok(MassBreakdown {
            food_mass_kg: food_mass_kg.normalize(),
            water_mass_kg: water_mass_kg.normalize(),
            oxygen_mass_kg: oxygen_mass_kg.normalize(),
            margin_kg: margin_kg.normalize(),
            total_mass_kg: (subtotal + margin_kg).normalize(),
        })
    }

    /// Food is never recycled.
    fn food_mass(
        &self,
        person_days: Decimal,
        rate: Decimal,
    ) -> Decimal {
        person_days * rate
    }

    fn recycled_mass(
        &self,
        person_days: Decimal,
        rate: Decimal,
        recovery_fraction: Decimal,
    ) -> Decimal {
        person_days * rate * remaining_fraction(recovery_fraction)
    }

    fn margin(
        &self,
        subtotal: Decimal,
    ) -> Decimal {
        subtotal * self.config.margin_fraction
    }
}

impl Default for MassEstimator {
    fn default() -> Self {
        Self::standard()
    }
}

/// Estimates with the standard configuration.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use aerolife_core::{MissionParameters, estimate};
///
/// let params = MissionParameters::parse(1, 1, "short-leo", "none").unwrap();
/// assert_eq!(estimate(params).unwrap().total_mass_kg, dec!(5.952));
/// ```
pub fn estimate(params: MissionParameters) -> Result<MassBreakdown, EstimateError> {
    MassEstimator::standard().estimate(&params)
}
