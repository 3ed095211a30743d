//! Presentation of a [`Report`]: terminal text, SVG chart and JSON.

pub mod bars;
pub mod svg;
pub mod text;

use clap::ValueEnum;

use crate::app::Report;

/// Output format for the report on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Chart, summary and notes for a terminal.
    #[default]
    Text,
    /// Parameters and unrounded breakdown as JSON.
    Json,
}

/// Renders `report` in the requested format.
pub fn render_report(
    report: &Report,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(text::render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Pretty JSON with masses as exact decimal strings.
pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::app::App;

    #[test]
    fn json_lists_parameters_and_breakdown() {
        let mut app = App::default();
        app.form_mut().set_recycling_level("high").unwrap();
        let report = app.compute().unwrap();

        let json = render_report(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["parameters"]["crew_size"], 3);
        assert_eq!(value["parameters"]["mission_type"], "short-leo");
        assert_eq!(value["parameters"]["recycling_level"], "high");
        assert_eq!(value["breakdown"]["total_mass_kg"], "878.04");
        assert_eq!(value["breakdown"]["water_mass_kg"], "283.5");
    }

    #[test]
    fn text_format_is_the_terminal_report() {
        let report = App::default().compute().unwrap();

        let rendered = render_report(&report, OutputFormat::Text).unwrap();

        assert_eq!(rendered, text::render_text(&report));
    }
}
