//! Terminal report: inputs, chart, summary and the assumptions behind them.

use rust_decimal::Decimal;

use crate::app::Report;
use crate::render::bars::{BAR_WIDTH, render_bars};
use crate::utils::format_kg;

pub const TITLE: &str = "AeroLife";
pub const TAGLINE: &str = "life support mass estimates for human space missions";
pub const DISCLAIMER: &str = "free. early-phase. transparent assumptions.";

pub const ASSUMPTIONS: [&str; 4] = [
    "early-phase estimates (not flight-certified)",
    "food is not recyclable",
    "water & oxygen recycling are approximate",
    "system hardware mass not included",
];

/// Margin fraction as a whole-number percentage, e.g. `0.2` → `20`.
fn margin_percent(fraction: Decimal) -> Decimal {
    (fraction * Decimal::ONE_HUNDRED).normalize()
}

/// Total and per-category masses as thousands-separated whole kilograms.
pub fn render_summary(report: &Report) -> String {
    let b = &report.breakdown;
    format!(
        "total life support mass: {}\n\
         \n\
         - food: {}\n\
         - water: {}\n\
         - oxygen: {}\n\
         - safety margin ({}%): {}\n",
        format_kg(b.total_mass_kg),
        format_kg(b.food_mass_kg),
        format_kg(b.water_mass_kg),
        format_kg(b.oxygen_mass_kg),
        margin_percent(report.margin_fraction),
        format_kg(b.margin_kg),
    )
}

fn render_inputs(report: &Report) -> String {
    let p = &report.parameters;
    format!(
        "crew size: {} | duration: {} days | mission: {} | recycling: {}\n",
        p.crew_size,
        p.duration_days,
        p.mission_type.label(),
        p.recycling_level,
    )
}

fn render_assumptions() -> String {
    let mut out = String::from("notes & assumptions\n");
    for note in ASSUMPTIONS {
        out.push_str(&format!("- {note}\n"));
    }
    out
}

/// The full terminal report.
pub fn render_text(report: &Report) -> String {
    [
        format!("{TITLE}\n{TAGLINE}\n"),
        render_inputs(report),
        format!(
            "mass breakdown (kg)\n{}",
            render_bars(&report.breakdown, BAR_WIDTH)
        ),
        render_summary(report),
        format!("{DISCLAIMER}\n"),
        render_assumptions(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::app::App;

    fn high_recycling_report() -> Report {
        let mut app = App::default();
        app.form_mut().set_recycling_level("high").unwrap();
        app.compute().unwrap()
    }

    #[test]
    fn summary_rounds_to_whole_kilograms() {
        let summary = render_summary(&high_recycling_report());

        assert_eq!(
            summary,
            "total life support mass: 878 kg\n\
             \n\
             - food: 335 kg\n\
             - water: 284 kg\n\
             - oxygen: 113 kg\n\
             - safety margin (20%): 146 kg\n"
        );
    }

    #[test]
    fn summary_uses_thousands_separators() {
        let mut app = App::default();
        app.form_mut().set_crew_size(10);
        app.form_mut().set_duration_days(1000);

        let summary = render_summary(&app.compute().unwrap());

        // 10,000 person-days * 4.96 kg * 1.2
        assert!(summary.starts_with("total life support mass: 59,520 kg\n"));
        assert!(summary.contains("- water: 35,000 kg\n"));
    }

    #[test]
    fn margin_percent_is_whole_number() {
        assert_eq!(margin_percent(dec!(0.2)).to_string(), "20");
        assert_eq!(margin_percent(dec!(0.125)).to_string(), "12.5");
    }

    #[test]
    fn report_contains_every_section() {
        let text = render_text(&high_recycling_report());

        assert!(text.starts_with("AeroLife\nlife support mass estimates"));
        assert!(text.contains("mission: short (leo) | recycling: high"));
        assert!(text.contains("mass breakdown (kg)\nfood "));
        assert!(text.contains("total life support mass: 878 kg"));
        assert!(text.contains(DISCLAIMER));
        for note in ASSUMPTIONS {
            assert!(text.contains(note), "missing note: {note}");
        }
    }
}
