use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::EstimateError;

/// Recycling efficiency tier of the life support system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecyclingLevel {
    #[default]
    None,
    Partial,
    High,
}

impl RecyclingLevel {
    pub fn all() -> &'static [RecyclingLevel] {
        &[
            RecyclingLevel::None,
            RecyclingLevel::Partial,
            RecyclingLevel::High,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Partial => "partial",
            Self::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all().iter().copied().find(|l| l.as_str() == wanted)
    }
}

impl fmt::Display for RecyclingLevel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecyclingLevel {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| EstimateError::invalid_input("recycling_level", s))
    }
}

/// Share of raw water and oxygen demand recovered by onboard recycling.
///
/// Both fractions lie in `[0, 1]`. Food is never recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecyclingProfile {
    pub water_recovery_fraction: Decimal,
    pub oxygen_recovery_fraction: Decimal,
}

impl RecyclingProfile {
    pub const NONE: Self = Self {
        water_recovery_fraction: dec!(0.0),
        oxygen_recovery_fraction: dec!(0.0),
    };

    pub const PARTIAL: Self = Self {
        water_recovery_fraction: dec!(0.5),
        oxygen_recovery_fraction: dec!(0.3),
    };

    pub const HIGH: Self = Self {
        water_recovery_fraction: dec!(0.85),
        oxygen_recovery_fraction: dec!(0.75),
    };
}

/// Lookup from [`RecyclingLevel`] to its [`RecyclingProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecyclingTable {
    pub none: RecyclingProfile,
    pub partial: RecyclingProfile,
    pub high: RecyclingProfile,
}

impl RecyclingTable {
    /// The fixed table: none (0, 0), partial (0.5, 0.3), high (0.85, 0.75).
    pub const STANDARD: Self = Self {
        none: RecyclingProfile::NONE,
        partial: RecyclingProfile::PARTIAL,
        high: RecyclingProfile::HIGH,
    };

    pub fn profile(
        &self,
        level: RecyclingLevel,
    ) -> RecyclingProfile {
        match level {
            RecyclingLevel::None => self.none,
            RecyclingLevel::Partial => self.partial,
            RecyclingLevel::High => self.high,
        }
    }

    /// Every `(level, profile)` pair in tier order.
    pub fn entries(&self) -> [(RecyclingLevel, RecyclingProfile); 3] {
        [
            (RecyclingLevel::None, self.none),
            (RecyclingLevel::Partial, self.partial),
            (RecyclingLevel::High, self.high),
        ]
    }
}

impl Default for RecyclingTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
