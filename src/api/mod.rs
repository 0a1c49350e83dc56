mod chart_config;
mod live_chart;
mod render_pipe;

pub use chart_config::LiveChartConfig;
pub use live_chart::LiveChart;
pub use render_pipe::{RenderContexts, RenderLayers, RenderPipe};
