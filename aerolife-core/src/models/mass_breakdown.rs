use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bars of the breakdown chart, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassCategory {
    Food,
    Water,
    Oxygen,
    Margin,
}

impl MassCategory {
    pub fn all() -> &'static [MassCategory] {
        &[
            MassCategory::Food,
            MassCategory::Water,
            MassCategory::Oxygen,
            MassCategory::Margin,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Water => "water",
            Self::Oxygen => "oxygen",
            Self::Margin => "margin",
        }
    }
}

impl fmt::Display for MassCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Consumable mass required for a mission, in kilograms.
///
/// Values are unrounded. `margin_kg` is the contingency on top of the three
/// consumables and `total_mass_kg` includes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MassBreakdown {
    pub food_mass_kg: Decimal,
    pub water_mass_kg: Decimal,
    pub oxygen_mass_kg: Decimal,
    pub margin_kg: Decimal,
    pub total_mass_kg: Decimal,
}

impl MassBreakdown {
    /// Food, water and oxygen without the margin.
    pub fn subtotal_kg(&self) -> Decimal {
        self.food_mass_kg + self.water_mass_kg + self.oxygen_mass_kg
    }

    pub fn mass_of(
        &self,
        category: MassCategory,
    ) -> Decimal {
        match category {
            MassCategory::Food => self.food_mass_kg,
            MassCategory::Water => self.water_mass_kg,
            MassCategory::Oxygen => self.oxygen_mass_kg,
            MassCategory::Margin => self.margin_kg,
        }
    }

    /// Chart rows: every category paired with its mass.
    pub fn categories(&self) -> Vec<(MassCategory, Decimal)> {
        MassCategory::all()
            .iter()
            .map(|&c| (c, self.mass_of(c)))
            .collect()
    }
}
