//! Horizontal bar chart for the terminal.

use aerolife_core::{MassBreakdown, MassCategory};

use crate::utils::{format_si, to_chart_value};

/// Width in characters of the longest bar.
pub const BAR_WIDTH: usize = 40;

const BAR_CHAR: char = '█';

/// Draws one bar per category, scaled so the heaviest fills `width`
/// characters, each followed by its SI label.
///
/// ```text
/// food    ███████████                               330
/// water   █████████                                 280
/// ```
pub fn render_bars(
    breakdown: &MassBreakdown,
    width: usize,
) -> String {
    let rows: Vec<(MassCategory, f64)> = breakdown
        .categories()
        .into_iter()
        .map(|(category, mass)| (category, to_chart_value(mass)))
        .collect();

    let max = rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let label_width = rows
        .iter()
        .map(|(c, _)| c.label().len())
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    for (category, value) in &rows {
        let len = bar_length(*value, max, width);
        let bar: String = std::iter::repeat_n(BAR_CHAR, len).collect();
        let pad = " ".repeat(width - len);
        out.push_str(&format!(
            "{:<label_width$}  {bar}{pad}  {}\n",
            category.label(),
            format_si(*value)
        ));
    }
    out
}

/// Non-zero values always get at least one block.
fn bar_length(
    value: f64,
    max: f64,
    width: usize,
) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let scaled = (value / max * width as f64).round() as usize;
    scaled.clamp(1, width)
}

#[cfg(test)]
mod tests {
    use aerolife_core::{MissionParameters, estimate};
    use pretty_assertions::assert_eq;

    use super::*;

    fn bars_for(recycling: &str) -> Vec<String> {
        let params = MissionParameters::parse(3, 180, "short-leo", recycling).unwrap();
        let breakdown = estimate(params).unwrap();
        render_bars(&breakdown, 20)
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn block_count(line: &str) -> usize {
        line.chars().filter(|&c| c == BAR_CHAR).count()
    }

    #[test]
    fn one_row_per_category_in_order() {
        let lines = bars_for("high");

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("food "));
        assert!(lines[1].starts_with("water "));
        assert!(lines[2].starts_with("oxygen "));
        assert!(lines[3].starts_with("margin "));
    }

    #[test]
    fn heaviest_category_fills_the_width() {
        // without recycling water dominates: 1890 kg of 2678.4
        let lines = bars_for("none");

        assert_eq!(block_count(&lines[1]), 20);
        assert!(block_count(&lines[0]) < 20);
    }

    #[test]
    fn rows_end_with_si_labels() {
        let lines = bars_for("high");

        assert!(lines[0].ends_with("  330"));
        assert!(lines[1].ends_with("  280"));
        assert!(lines[2].ends_with("  110"));
        assert!(lines[3].ends_with("  150"));
    }

    #[test]
    fn bar_length_handles_zero() {
        assert_eq!(bar_length(0.0, 10.0, 40), 0);
        assert_eq!(bar_length(5.0, 0.0, 40), 0);
        assert_eq!(bar_length(0.01, 1000.0, 40), 1);
    }
}
