use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineCap, LineJoin, PathStroke};

/// Colors and sizes of the axis layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    pub line_color: Color,
    pub line_width: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Length of each tick mark, drawn outward from the axis line.
    pub tick_length_px: f64,
    /// Gap between the axis line and the start of a label.
    pub label_offset_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgb8(0x33, 0x41, 0x55),
            line_width: 1.0,
            label_color: Color::rgb8(0x64, 0x74, 0x8b),
            label_font_size_px: 12.0,
            tick_length_px: 4.0,
            label_offset_px: 6.0,
        }
    }
}

impl AxisStyle {
    pub fn validate(&self) -> ChartResult<()> {
        require_positive("axis_style.line_width", self.line_width)?;
        require_positive("axis_style.label_font_size_px", self.label_font_size_px)?;
        require_non_negative("axis_style.tick_length_px", self.tick_length_px)?;
        require_non_negative("axis_style.label_offset_px", self.label_offset_px)?;
        self.line_color.validate()?;
        self.label_color.validate()
    }
}

/// Stroke of the series line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb8(0x38, 0xBD, 0xF8),
            width: 2.0,
        }
    }
}

impl LineStyle {
    /// Round caps and joins are fixed; only color and width vary.
    #[must_use]
    pub fn stroke(self) -> PathStroke {
        PathStroke {
            width: self.width,
            color: self.color,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        require_positive("line_style.width", self.width)?;
        self.stroke().validate()
    }
}

fn require_positive(field: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidConfig(format!(
            "{field} must be finite and > 0, got {value}"
        )))
    }
}

fn require_non_negative(field: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidConfig(format!(
            "{field} must be finite and >= 0, got {value}"
        )))
    }
}
