use serde::{Deserialize, Serialize};

use crate::core::ScaleGeometry;
use crate::data::RealtimeSeriesConfig;
use crate::error::ChartResult;
use crate::layers::{AxisStyle, LineStyle};

/// Public bootstrap configuration of a [`LiveChart`](super::LiveChart).
///
/// Serializable so hosts can keep chart setup next to their own settings.
/// Geometry has no default and must always be given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiveChartConfig {
    pub geometry: ScaleGeometry,
    #[serde(default)]
    pub series: RealtimeSeriesConfig,
    #[serde(default)]
    pub axis_style: AxisStyle,
    #[serde(default)]
    pub line_style: LineStyle,
}

impl LiveChartConfig {
    #[must_use]
    pub fn new(geometry: ScaleGeometry) -> Self {
        Self {
            geometry,
            series: RealtimeSeriesConfig::default(),
            axis_style: AxisStyle::default(),
            line_style: LineStyle::default(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: RealtimeSeriesConfig) -> Self {
        self.series = series;
        self
    }

    #[must_use]
    pub fn with_axis_style(mut self, axis_style: AxisStyle) -> Self {
        self.axis_style = axis_style;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.geometry.validate()?;
        self.series.validate()?;
        self.axis_style.validate()?;
        self.line_style.validate()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
