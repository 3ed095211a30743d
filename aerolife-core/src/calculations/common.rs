//! Numeric helpers shared by the estimator and its callers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a mass to whole kilograms using round-half-to-even.
///
/// The estimator never rounds; this is for display only.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use aerolife_core::calculations::common::round_whole_kg;
///
/// assert_eq!(round_whole_kg(dec!(878.04)), dec!(878));
/// assert_eq!(round_whole_kg(dec!(0.5)), dec!(0));
/// assert_eq!(round_whole_kg(dec!(1.5)), dec!(2));
/// ```
pub fn round_whole_kg(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

/// Share of raw demand still to be carried after recovering `recovered`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use aerolife_core::calculations::common::remaining_fraction;
///
/// assert_eq!(remaining_fraction(dec!(0.85)), dec!(0.15));
/// ```
pub fn remaining_fraction(recovered: Decimal) -> Decimal {
    Decimal::ONE - recovered
}
