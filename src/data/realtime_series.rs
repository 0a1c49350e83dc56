use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::SeriesPoint;
use crate::core::primitives::datetime_to_unix_millis;
use crate::error::{ChartError, ChartResult};

use super::{
    FixedRangeGenerator, GeneratorMode, IntervalSchedule, PriceGenerator, RandomWalkGenerator,
    ScheduleTick, SeriesBuffer, SeriesHandle, SplitMix64,
};

/// Realtime data source settings.
///
/// `min_delta`/`max_delta` only matter with [`GeneratorMode::RandomWalk`];
/// the default fixed-range generator ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtimeSeriesConfig {
    pub start_price: f64,
    pub max_points: usize,
    pub min_delta: f64,
    pub max_delta: f64,
    pub interval_ms: u64,
    pub generator: GeneratorMode,
    pub seed: Option<u64>,
}

impl Default for RealtimeSeriesConfig {
    fn default() -> Self {
        Self {
            start_price: 100.0,
            max_points: 30,
            min_delta: 3.0,
            max_delta: 10.0,
            interval_ms: 1_000,
            generator: GeneratorMode::FixedRange,
            seed: None,
        }
    }
}

impl RealtimeSeriesConfig {
    #[must_use]
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_start_price(mut self, start_price: f64) -> Self {
        self.start_price = start_price;
        self
    }

    #[must_use]
    pub fn with_generator(mut self, generator: GeneratorMode) -> Self {
        self.generator = generator;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.start_price.is_finite() {
            return Err(ChartError::InvalidConfig(
                "start_price must be finite".to_owned(),
            ));
        }
        if self.max_points == 0 {
            return Err(ChartError::InvalidConfig(
                "max_points must be >= 1".to_owned(),
            ));
        }
        if self.interval_ms == 0 {
            return Err(ChartError::InvalidConfig(
                "interval_ms must be > 0".to_owned(),
            ));
        }
        if !self.min_delta.is_finite() || !self.max_delta.is_finite() {
            return Err(ChartError::InvalidConfig(
                "min_delta and max_delta must be finite".to_owned(),
            ));
        }
        if self.min_delta > self.max_delta {
            return Err(ChartError::InvalidConfig(
                "min_delta must be <= max_delta".to_owned(),
            ));
        }
        Ok(())
    }

    fn build_generator(&self) -> Box<dyn PriceGenerator> {
        let rng = self.seed.map_or_else(SplitMix64::from_clock, SplitMix64::new);
        match self.generator {
            GeneratorMode::FixedRange => Box::new(FixedRangeGenerator::new(rng)),
            GeneratorMode::RandomWalk => {
                Box::new(RandomWalkGenerator::new(rng, self.min_delta, self.max_delta))
            }
        }
    }
}

pub type TickCallback = Box<dyn FnMut(&SeriesPoint)>;

/// Bounded realtime series fed by a periodic producer.
///
/// The host drives time: `start` seeds the buffer and arms the interval,
/// `poll` produces at most one point per call once an interval has elapsed.
/// `stop` only disarms the interval, so the last buffer stays readable.
pub struct RealtimeSeries {
    config: RealtimeSeriesConfig,
    buffer: Rc<RefCell<SeriesBuffer>>,
    schedule: IntervalSchedule,
    generator: Box<dyn PriceGenerator>,
    clock: fn() -> DateTime<Utc>,
    last_price: f64,
    on_tick: Option<TickCallback>,
}

impl fmt::Debug for RealtimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealtimeSeries")
            .field("config", &self.config)
            .field("len", &self.buffer.borrow().len())
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl RealtimeSeries {
    pub fn new(config: RealtimeSeriesConfig) -> ChartResult<Self> {
        let generator = config.build_generator();
        Self::with_boxed_generator(config, generator)
    }

    /// Uses `generator` instead of the one selected by `config.generator`.
    pub fn with_generator(
        config: RealtimeSeriesConfig,
        generator: impl PriceGenerator + 'static,
    ) -> ChartResult<Self> {
        Self::with_boxed_generator(config, Box::new(generator))
    }

    fn with_boxed_generator(
        config: RealtimeSeriesConfig,
        generator: Box<dyn PriceGenerator>,
    ) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            max_points = config.max_points,
            interval_ms = config.interval_ms,
            generator = ?config.generator,
            "create realtime series"
        );
        Ok(Self {
            buffer: Rc::new(RefCell::new(SeriesBuffer::new(config.max_points))),
            schedule: IntervalSchedule::new(config.interval()),
            generator,
            clock: Utc::now,
            last_price: config.start_price,
            on_tick: None,
            config,
        })
    }

    /// Replaces the wall clock used to timestamp produced points.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn config(&self) -> &RealtimeSeriesConfig {
        &self.config
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.schedule.is_armed()
    }

    /// When the next point is due, if running.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.schedule.next_deadline()
    }

    /// Live buffer handle; it stays the same buffer across restarts.
    #[must_use]
    pub fn data(&self) -> SeriesHandle {
        SeriesHandle::new(Rc::clone(&self.buffer))
    }

    /// Seeds the buffer with `start_price`, reports the seed through
    /// `on_tick` and arms the interval.
    ///
    /// Returns `false` without touching anything when already running.
    pub fn start(&mut self, now: Instant, on_tick: impl FnMut(&SeriesPoint) + 'static) -> bool {
        if self.is_running() {
            trace!("realtime series already running");
            return false;
        }

        let seed = SeriesPoint::new((self.clock)(), self.config.start_price);
        self.buffer.borrow_mut().reset_to(seed);
        self.last_price = seed.price;

        let mut on_tick: TickCallback = Box::new(on_tick);
        on_tick(&seed);
        self.on_tick = Some(on_tick);
        self.schedule.arm(now);
        debug!(start_price = seed.price, "realtime series started");
        true
    }

    /// Produces the due point, if any, and reports it through the callback.
    pub fn poll(&mut self, now: Instant) -> Option<SeriesPoint> {
        match self.schedule.poll(now) {
            ScheduleTick::Idle => None,
            ScheduleTick::Due { missed } => {
                if missed > 0 {
                    warn!(missed, "realtime series fell behind; coalescing ticks");
                }
                let point = self.produce();
                if let Some(on_tick) = self.on_tick.as_mut() {
                    on_tick(&point);
                }
                Some(point)
            }
        }
    }

    /// Halts production immediately; the buffer keeps its points.
    pub fn stop(&mut self) {
        if self.is_running() {
            debug!(len = self.buffer.borrow().len(), "realtime series stopped");
        }
        self.schedule.disarm();
        self.on_tick = None;
    }

    fn produce(&mut self) -> SeriesPoint {
        let price = self.generator.next_price(self.last_price);
        let point = SeriesPoint::new((self.clock)(), price);
        self.last_price = price;

        let mut buffer = self.buffer.borrow_mut();
        let evicted = buffer.push(point);
        trace!(
            time_ms = datetime_to_unix_millis(point.time),
            price,
            len = buffer.len(),
            evicted = evicted.is_some(),
            "append series point"
        );
        point
    }
}
