//! Application state: the estimator built at startup plus the current form.

use aerolife_core::{EstimateError, MassBreakdown, MassEstimator, MissionParameters};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::form::InputForm;

/// One computed estimate and the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub parameters: MissionParameters,
    pub breakdown: MassBreakdown,
    /// Margin fraction the estimator applied, for the summary label.
    pub margin_fraction: Decimal,
}

/// Main application state.
///
/// The estimator is fixed for the life of the process; only the form
/// changes, and every change is followed by a fresh [`App::compute`].
#[derive(Debug, Clone)]
pub struct App {
    estimator: MassEstimator,
    form: InputForm,
}

impl App {
    pub fn new(
        estimator: MassEstimator,
        form: InputForm,
    ) -> Self {
        Self { estimator, form }
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut InputForm {
        &mut self.form
    }

    /// Runs the estimator over the current form values.
    pub fn compute(&self) -> Result<Report, EstimateError> {
        let parameters = self.form.parameters();
        let breakdown = self.estimator.estimate(&parameters)?;

        info!(
            crew_size = parameters.crew_size,
            duration_days = parameters.duration_days,
            mission_type = %parameters.mission_type,
            recycling_level = %parameters.recycling_level,
            total_mass_kg = %breakdown.total_mass_kg,
            "estimate computed"
        );

        Ok(Report {
            parameters,
            breakdown,
            margin_fraction: self.estimator.config().margin_fraction,
        })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(MassEstimator::standard(), InputForm::new())
    }
}

#[cfg(test)]
mod tests {
    use aerolife_core::RecyclingLevel;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn compute_uses_form_values() {
        let mut app = App::default();
        app.form_mut().set_recycling_level("high").unwrap();

        let report = app.compute().unwrap();

        assert_eq!(report.parameters.recycling_level, RecyclingLevel::High);
        assert_eq!(report.breakdown.total_mass_kg, dec!(878.04));
        assert_eq!(report.margin_fraction, dec!(0.2));
    }

    #[test]
    fn compute_reflects_each_change() {
        let mut app = App::default();
        let before = app.compute().unwrap();

        app.form_mut().set_crew_size(6);
        let after = app.compute().unwrap();

        assert_eq!(after.breakdown.food_mass_kg, before.breakdown.food_mass_kg * dec!(2));
    }
}
