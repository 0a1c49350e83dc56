use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{Scale, ScaleGeometry, SeriesPoint};
use crate::data::{RealtimeSeries, SeriesHandle};
use crate::error::ChartResult;
use crate::layers::{AxisLayer, LineLayer};

use super::{LiveChartConfig, RenderContexts, RenderLayers, RenderPipe};

/// One realtime line chart: scale, axis and line layers, and the data source.
///
/// Every produced point goes through the same sequence before the next one
/// is looked at: domain refresh from the buffer range, line invalidation,
/// full render. The host calls [`LiveChart::poll`] from its event loop at
/// least once per interval; a render pass is assumed to be shorter than the
/// interval, and late polls coalesce missed ticks.
pub struct LiveChart {
    scale: Rc<Scale>,
    axis: AxisLayer,
    line: LineLayer,
    series: RealtimeSeries,
    ticks_tx: Sender<SeriesPoint>,
    ticks_rx: Receiver<SeriesPoint>,
    frames_rendered: u64,
}

impl LiveChart {
    pub fn new(config: LiveChartConfig) -> ChartResult<Self> {
        let series = RealtimeSeries::new(config.series)?;
        Self::with_series(config, series)
    }

    /// Uses a prepared series (custom generator or clock); `config.series`
    /// is ignored.
    pub fn with_series(config: LiveChartConfig, series: RealtimeSeries) -> ChartResult<Self> {
        config.geometry.validate()?;
        config.axis_style.validate()?;
        config.line_style.validate()?;

        let scale = Rc::new(Scale::new(config.geometry)?);
        let axis = AxisLayer::with_style(Rc::clone(&scale), config.axis_style);
        let line = LineLayer::with_style(series.data(), Rc::clone(&scale), config.line_style);
        let (ticks_tx, ticks_rx) = mpsc::channel();
        debug!(
            width = config.geometry.width,
            height = config.geometry.height,
            padding = config.geometry.padding,
            "create live chart"
        );

        Ok(Self {
            scale,
            axis,
            line,
            series,
            ticks_tx,
            ticks_rx,
            frames_rendered: 0,
        })
    }

    #[must_use]
    pub fn scale(&self) -> &Rc<Scale> {
        &self.scale
    }

    #[must_use]
    pub fn data(&self) -> SeriesHandle {
        self.series.data()
    }

    #[must_use]
    pub fn series(&self) -> &RealtimeSeries {
        &self.series
    }

    #[must_use]
    pub fn axis_layer(&self) -> &AxisLayer {
        &self.axis
    }

    #[must_use]
    pub fn line_layer(&self) -> &LineLayer {
        &self.line
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.series.is_running()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.series.next_deadline()
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Starts the series and renders its seed point.
    ///
    /// Returns `Ok(false)` when already running; nothing is redrawn then.
    pub fn start(&mut self, now: Instant, contexts: &mut RenderContexts<'_>) -> ChartResult<bool> {
        let ticks_tx = self.ticks_tx.clone();
        let started = self.series.start(now, move |point| {
            // The receiver lives as long as the chart that owns this series.
            let _ = ticks_tx.send(*point);
        });
        if !started {
            return Ok(false);
        }
        self.drain_ticks(contexts)?;
        Ok(true)
    }

    /// Produces the due point, if any, and renders it.
    ///
    /// Returns the number of rendered ticks (0 or 1).
    pub fn poll(&mut self, now: Instant, contexts: &mut RenderContexts<'_>) -> ChartResult<usize> {
        self.series.poll(now);
        self.drain_ticks(contexts)
    }

    /// Stops producing points; the last frame and buffer stay as they are.
    pub fn stop(&mut self) {
        self.series.stop();
        while self.ticks_rx.try_recv().is_ok() {}
    }

    /// Fits the scale domain to the buffer's price range and invalidates
    /// the line path.
    pub fn refresh_domain(&mut self) {
        if let Some((min, max)) = self.series.data().price_range() {
            self.scale.set_domain(min, max);
        }
        self.line.mark_dirty();
    }

    /// Replaces the scale with one of a new geometry, keeping the domain,
    /// and rebinds both layers to it.
    pub fn rebind_geometry(&mut self, geometry: ScaleGeometry) -> ChartResult<()> {
        let scale = Rc::new(Scale::new(geometry)?);
        let domain = self.scale.domain();
        scale.set_domain(domain.min, domain.max);
        self.axis.rebind_scale(Rc::clone(&scale));
        self.line.rebind_scale(Rc::clone(&scale));
        self.scale = scale;
        debug!(
            width = geometry.width,
            height = geometry.height,
            padding = geometry.padding,
            "rebind live chart geometry"
        );
        Ok(())
    }

    /// Clears and redraws both surfaces without touching data or domain.
    pub fn render(&mut self, contexts: &mut RenderContexts<'_>) -> ChartResult<()> {
        let mut layers = RenderLayers {
            axis: &mut self.axis,
            line: &mut self.line,
        };
        RenderPipe::render(&mut layers, contexts)?;
        self.frames_rendered += 1;
        Ok(())
    }

    fn drain_ticks(&mut self, contexts: &mut RenderContexts<'_>) -> ChartResult<usize> {
        let mut rendered = 0;
        while let Ok(point) = self.ticks_rx.try_recv() {
            trace!(price = point.price, "render tick");
            self.refresh_domain();
            self.render(contexts)?;
            rendered += 1;
        }
        Ok(rendered)
    }
}
