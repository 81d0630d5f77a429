//! Decimal rounding rules
//!
//! Currency totals and averages are reported to the cent; claim densities to
//! the thousandth. Both use round-half-even, so `0.125` becomes `0.12` and
//! `0.135` becomes `0.14`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for currency figures
pub const CURRENCY_DP: u32 = 2;

/// Decimal places for claim density figures
pub const DENSITY_DP: u32 = 3;

/// Rounds a currency amount to the nearest hundredth
///
/// The result always carries exactly two decimal places, so whole amounts
/// render as `"400.00"` and zero as `"0.00"`.
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(CURRENCY_DP);
    rounded
}

/// Rounds a density to the nearest thousandth
pub fn round_density(density: Decimal) -> Decimal {
    density.round_dp_with_strategy(DENSITY_DP, RoundingStrategy::MidpointNearestEven)
}
