use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Raw per-person daily demand for each consumable, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionRates {
    pub food_kg_per_person_day: Decimal,
    pub water_kg_per_person_day: Decimal,
    pub oxygen_kg_per_person_day: Decimal,
}

impl ConsumptionRates {
    /// Food 0.62, water 3.5, oxygen 0.84 kg per person per day.
    pub const STANDARD: Self = Self {
        food_kg_per_person_day: dec!(0.62),
        water_kg_per_person_day: dec!(3.5),
        oxygen_kg_per_person_day: dec!(0.84),
    };

    /// Combined demand of all consumables before any recycling.
    pub fn total_kg_per_person_day(&self) -> Decimal {
        self.food_kg_per_person_day + self.water_kg_per_person_day + self.oxygen_kg_per_person_day
    }
}

impl Default for ConsumptionRates {
    fn default() -> Self {
        Self::STANDARD
    }
}
