use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

/// Returns `(min, max)` over finite prices, or `None` when nothing is finite.
#[must_use]
pub fn finite_min_max(prices: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    prices
        .into_iter()
        .filter(|price| price.is_finite())
        .fold(None, |acc, price| match acc {
            None => Some((price, price)),
            Some((min, max)) => Some((min.min(price), max.max(price))),
        })
}

#[cfg(test)]
mod tests {
    use super::finite_min_max;

    #[test]
    fn min_max_skips_non_finite_prices() {
        let range = finite_min_max([3.0, f64::NAN, -1.0, f64::INFINITY, 7.5]);
        assert_eq!(range, Some((-1.0, 7.5)));
    }

    #[test]
    fn min_max_of_empty_input_is_none() {
        assert_eq!(finite_min_max(std::iter::empty()), None);
    }
}
