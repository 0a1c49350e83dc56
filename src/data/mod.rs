pub mod buffer;
pub mod generator;
pub mod realtime_series;
pub mod schedule;

pub use buffer::{SeriesBuffer, SeriesHandle};
pub use generator::{
    FixedRangeGenerator, GeneratorMode, PriceGenerator, RandomWalkGenerator, SplitMix64,
};
pub use realtime_series::{RealtimeSeries, RealtimeSeriesConfig, TickCallback};
pub use schedule::{IntervalSchedule, ScheduleTick};
