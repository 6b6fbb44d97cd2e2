use rust_decimal::{Decimal, RoundingStrategy};

use crate::tickers::PLACEHOLDER;

/// Reads a price from raw text. Blank input is treated as absent.
pub fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok()
}

/// Formats a price with two decimals, or [`PLACEHOLDER`] when it is absent or
/// not a finite number.
///
/// Exact midpoints round away from zero (`1.125` shows as `1.13`). Everything
/// else rounds on the exact binary value, so `1.005` (stored just below the
/// midpoint) shows as `1.00`.
pub fn fmt_price(price: Option<f64>) -> String {
    match price {
        Some(value) if value.is_finite() => match Decimal::from_f64_retain(value) {
            Some(exact) => {
                let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                format!("{rounded:.2}")
            }
            // beyond the decimal range no digit after the point is significant
            None => format!("{value:.2}"),
        },
        _ => PLACEHOLDER.to_string(),
    }
}
