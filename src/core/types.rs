use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;

/// Pixel size reported by a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One timestamped sample of the realtime series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time: DateTime<Utc>,
    pub price: f64,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(time: DateTime<Utc>, price: f64) -> Self {
        Self { time, price }
    }

    pub fn from_decimal(time: DateTime<Utc>, price: Decimal) -> ChartResult<Self> {
        Ok(Self {
            time,
            price: decimal_to_f64(price, "price")?,
        })
    }
}
