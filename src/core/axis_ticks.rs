use smallvec::SmallVec;

use crate::core::Domain;

/// Number of intervals between the lowest and highest axis tick.
pub const TICK_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

/// Evenly spaced ticks over `domain`, from the top value down to `min`.
///
/// Yields `tick_count + 1` entries labelled with two decimals.
#[must_use]
pub fn axis_ticks(domain: Domain, tick_count: usize) -> SmallVec<[AxisTick; 8]> {
    let step = domain.span() / tick_count.max(1) as f64;
    (0..=tick_count)
        .rev()
        .map(|i| {
            let value = domain.min + step * i as f64;
            AxisTick {
                value,
                label: format!("{value:.2}"),
            }
        })
        .collect()
}
