mod consumption;
mod mass_breakdown;
mod mission_parameters;
mod mission_type;
mod recycling;

pub use consumption::ConsumptionRates;
pub use mass_breakdown::{MassBreakdown, MassCategory};
pub use mission_parameters::MissionParameters;
pub use mission_type::MissionType;
pub use recycling::{RecyclingLevel, RecyclingProfile, RecyclingTable};
