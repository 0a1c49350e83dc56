//! livechart: a minimal real-time line-chart engine.
//!
//! A [`core::Scale`] maps series indices and prices to pixels, an
//! [`layers::AxisLayer`] and a [`layers::LineLayer`] draw into separate
//! [`render::DrawSurface`]s, and [`api::RenderPipe`] clears and redraws them
//! in a fixed order. [`data::RealtimeSeries`] keeps the bounded buffer the
//! line layer reads, and [`api::LiveChart`] ties one tick to one frame.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod layers;
pub mod render;
pub mod telemetry;

pub use api::{LiveChart, LiveChartConfig, RenderContexts, RenderLayers, RenderPipe};
pub use error::{ChartError, ChartResult};
