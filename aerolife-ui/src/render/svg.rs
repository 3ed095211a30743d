//! Vertical bar chart of the breakdown as an SVG document.

use std::path::{Path, PathBuf};

use aerolife_core::{MassBreakdown, MassCategory};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;
use tracing::info;

use crate::utils::{format_si, to_chart_value};

const BAR_COLOR: RGBColor = RGBColor(99, 110, 250);
const FONT: &str = "sans-serif";

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to draw chart: {0}")]
    Draw(String),

    #[error("failed to write chart to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn draw_error(e: impl std::fmt::Display) -> ChartError {
    ChartError::Draw(e.to_string())
}

fn category_label(value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::CenterOf(i) => MassCategory::all()
            .get(*i as usize)
            .map(|c| c.label().to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Renders the four categories as bars with SI value labels.
pub fn render_svg(
    breakdown: &MassBreakdown,
    (width, height): (u32, u32),
) -> Result<String, ChartError> {
    let values: Vec<f64> = breakdown
        .categories()
        .into_iter()
        .map(|(_, mass)| to_chart_value(mass))
        .collect();
    let y_max = values.iter().copied().fold(0.0_f64, f64::max).max(1.0) * 1.15;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("mass breakdown (kg)", (FONT, 22))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..values.len() as u32).into_segmented(), 0f64..y_max)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("category")
            .y_desc("mass (kg)")
            .axis_desc_style((FONT, 15))
            .x_label_formatter(&category_label)
            .y_label_formatter(&|v| format_si(*v))
            .draw()
            .map_err(draw_error)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BAR_COLOR.filled())
                    .margin(18)
                    .data(values.iter().enumerate().map(|(i, v)| (i as u32, *v))),
            )
            .map_err(draw_error)?;

        let label_style = TextStyle::from((FONT, 14).into_font()).pos(Pos::new(
            HPos::Center,
            VPos::Bottom,
        ));
        chart
            .draw_series(values.iter().enumerate().map(|(i, v)| {
                Text::new(
                    format_si(*v),
                    (SegmentValue::CenterOf(i as u32), *v),
                    label_style.clone(),
                )
            }))
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
    }
    Ok(svg)
}

/// Renders the chart and writes it to `path`.
pub fn write_svg(
    path: &Path,
    breakdown: &MassBreakdown,
    size: (u32, u32),
) -> Result<(), ChartError> {
    let svg = render_svg(breakdown, size)?;
    std::fs::write(path, svg).map_err(|source| ChartError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "chart written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use aerolife_core::{MissionParameters, estimate};

    use super::*;

    fn breakdown() -> MassBreakdown {
        estimate(MissionParameters::parse(3, 180, "medium-lunar", "high").unwrap()).unwrap()
    }

    #[test]
    fn svg_document_has_every_category() {
        let svg = render_svg(&breakdown(), (640, 400)).unwrap();

        assert!(svg.contains("<svg"));
        for category in MassCategory::all() {
            assert!(svg.contains(category.label()), "missing {category}");
        }
    }

    #[test]
    fn svg_labels_bars_with_si_values() {
        let svg = render_svg(&breakdown(), (640, 400)).unwrap();

        assert!(svg.contains("330"));
        assert!(svg.contains("150"));
    }

    #[test]
    fn category_label_ignores_segment_edges() {
        assert_eq!(category_label(&SegmentValue::CenterOf(1)), "water");
        assert_eq!(category_label(&SegmentValue::Exact(1)), "");
        assert_eq!(category_label(&SegmentValue::Last), "");
    }

    #[test]
    fn write_svg_reports_bad_path() {
        let result = write_svg(
            Path::new("/this/path/does/not/exist/chart.svg"),
            &breakdown(),
            (320, 200),
        );

        assert!(matches!(result, Err(ChartError::Write { .. })));
    }
}
