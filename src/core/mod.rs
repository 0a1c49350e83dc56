pub mod axis_ticks;
pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod types;

pub use axis_ticks::{AxisTick, TICK_COUNT, axis_ticks};
pub use line_series::{LinePath, project_line_path};
pub use scale::{Domain, Scale, ScaleGeometry};
pub use types::{SeriesPoint, Viewport};
