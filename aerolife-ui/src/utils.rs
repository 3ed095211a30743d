use aerolife_core::calculations::common::round_whole_kg;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// SI prefixes from yocto to yotta, indexed by `exponent / 3 + 8`.
const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Significant digits shown on chart bar labels.
const SI_SIGNIFICANT_DIGITS: i32 = 2;

/// Inserts `,` between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a mass as a thousands-separated whole number of kilograms,
/// without the unit (e.g. `12,345`).
///
/// Rounds half to even.
pub fn format_whole_kg(value: Decimal) -> String {
    let rounded = round_whole_kg(value);
    let whole = rounded.to_i128().unwrap_or_default();
    let grouped = group_thousands(&whole.unsigned_abs().to_string());
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Same as [`format_whole_kg`] with the ` kg` unit appended.
pub fn format_kg(value: Decimal) -> String {
    format!("{} kg", format_whole_kg(value))
}

/// Formats a value with two significant digits and an SI prefix
/// (`330`, `1.7k`, `990m`), as used for chart bar labels.
pub fn format_si(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value:.1}");
    }

    let magnitude = |v: f64| v.abs().log10().floor() as i32;
    let step = 10f64.powi(magnitude(value) - (SI_SIGNIFICANT_DIGITS - 1));
    let rounded = (value / step).round() * step;

    let exponent = magnitude(rounded);
    let group = exponent.div_euclid(3).clamp(-8, 8);
    let scaled = rounded / 10f64.powi(group * 3);
    let decimals = (SI_SIGNIFICANT_DIGITS - 1 - (exponent - group * 3)).max(0) as usize;
    let prefix = SI_PREFIXES[(group + 8) as usize];

    format!("{scaled:.decimals$}{prefix}")
}

/// Converts a mass to `f64` for charting.
pub fn to_chart_value(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_whole_kg_groups_thousands() {
        assert_eq!(format_whole_kg(dec!(12345)), "12,345");
        assert_eq!(format_whole_kg(dec!(1234567.4)), "1,234,567");
    }

    #[test]
    fn format_whole_kg_leaves_small_values_alone() {
        assert_eq!(format_whole_kg(dec!(878.04)), "878");
        assert_eq!(format_whole_kg(dec!(5.952)), "6");
        assert_eq!(format_whole_kg(dec!(0.4)), "0");
    }

    #[test]
    fn format_whole_kg_rounds_half_to_even() {
        assert_eq!(format_whole_kg(dec!(283.5)), "284");
        assert_eq!(format_whole_kg(dec!(10712.5)), "10,712");
    }

    #[test]
    fn format_kg_appends_unit() {
        assert_eq!(format_kg(dec!(3214.08)), "3,214 kg");
    }

    #[test]
    fn format_si_two_significant_digits() {
        assert_eq!(format_si(334.8), "330");
        assert_eq!(format_si(146.34), "150");
        assert_eq!(format_si(28.35), "28");
        assert_eq!(format_si(5.952), "6.0");
    }

    #[test]
    fn format_si_uses_prefixes() {
        assert_eq!(format_si(1674.0), "1.7k");
        assert_eq!(format_si(35000.0), "35k");
        assert_eq!(format_si(0.992), "990m");
    }

    #[test]
    fn format_si_carries_into_next_prefix() {
        assert_eq!(format_si(999.0), "1.0k");
    }

    #[test]
    fn format_si_zero() {
        assert_eq!(format_si(0.0), "0.0");
    }
}
