use serde::{Deserialize, Serialize};

/// Producer of the next series price, given the previous one.
pub trait PriceGenerator {
    fn next_price(&mut self, last_price: f64) -> f64;
}

impl<F> PriceGenerator for F
where
    F: FnMut(f64) -> f64,
{
    fn next_price(&mut self, last_price: f64) -> f64 {
        self(last_price)
    }
}

/// Built-in generator selection for [`RealtimeSeriesConfig`](super::RealtimeSeriesConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorMode {
    /// Whole prices uniform in `101..=120`, ignoring start price and deltas.
    #[default]
    FixedRange,
    /// Signed step of `min_delta..=max_delta` away from the previous price.
    RandomWalk,
}

/// SplitMix64 stream; small, seedable and good enough for demo data.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeds from the wall clock.
    #[must_use]
    pub fn from_clock() -> Self {
        let nanos = chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default();
        Self::new(nanos as u64)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform whole number in `low..=high`.
    pub fn next_in_inclusive(&mut self, low: i64, high: i64) -> i64 {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let span = (high - low) as u64 + 1;
        low + (self.next_u64() % span) as i64
    }
}

/// Default producer: whole prices uniform in `101..=120`.
///
/// Neither the configured start price nor the deltas are consulted.
#[derive(Debug, Clone)]
pub struct FixedRangeGenerator {
    rng: SplitMix64,
    low: i64,
    high: i64,
}

impl FixedRangeGenerator {
    pub const LOW: i64 = 101;
    pub const HIGH: i64 = 120;

    #[must_use]
    pub fn new(rng: SplitMix64) -> Self {
        Self {
            rng,
            low: Self::LOW,
            high: Self::HIGH,
        }
    }
}

impl PriceGenerator for FixedRangeGenerator {
    fn next_price(&mut self, _last_price: f64) -> f64 {
        self.rng.next_in_inclusive(self.low, self.high) as f64
    }
}

/// Opt-in producer that actually uses `min_delta`/`max_delta`.
#[derive(Debug, Clone)]
pub struct RandomWalkGenerator {
    rng: SplitMix64,
    min_delta: f64,
    max_delta: f64,
}

impl RandomWalkGenerator {
    #[must_use]
    pub fn new(rng: SplitMix64, min_delta: f64, max_delta: f64) -> Self {
        Self {
            rng,
            min_delta: min_delta.min(max_delta),
            max_delta: min_delta.max(max_delta),
        }
    }
}

impl PriceGenerator for RandomWalkGenerator {
    fn next_price(&mut self, last_price: f64) -> f64 {
        let magnitude = self.min_delta + self.rng.next_unit() * (self.max_delta - self.min_delta);
        let signed = if self.rng.next_u64() & 1 == 0 {
            magnitude
        } else {
            -magnitude
        };
        last_price + signed
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedRangeGenerator, PriceGenerator, RandomWalkGenerator, SplitMix64};

    #[test]
    fn fixed_range_stays_in_observed_band() {
        let mut generator = FixedRangeGenerator::new(SplitMix64::new(7));
        for _ in 0..1_000 {
            let price = generator.next_price(100.0);
            assert!((101.0..=120.0).contains(&price), "price {price}");
            assert_eq!(price.fract(), 0.0);
        }
    }

    #[test]
    fn random_walk_steps_within_deltas() {
        let mut generator = RandomWalkGenerator::new(SplitMix64::new(11), 3.0, 10.0);
        let mut last = 100.0;
        for _ in 0..1_000 {
            let next = generator.next_price(last);
            let step = (next - last).abs();
            assert!((3.0..=10.0).contains(&step), "step {step}");
            last = next;
        }
    }

    #[test]
    fn same_seed_yields_same_stream() {
        let mut a = SplitMix64::new(42);
        let mut b = SplitMix64::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn closures_are_generators() {
        let mut step_up = |last: f64| last + 1.0;
        assert_eq!(step_up.next_price(4.0), 5.0);
    }
}
