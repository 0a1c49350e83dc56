use std::cell::RefCell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use livechart::core::{LinePath, Scale, ScaleGeometry, SeriesPoint, Viewport};
use livechart::data::{SeriesBuffer, SeriesHandle};
use livechart::layers::{AxisLayer, LineLayer};
use livechart::render::{
    ClearRect, DrawSurface, LinePrimitive, PathStroke, RecordingSurface, TextPrimitive,
};
use livechart::{ChartError, ChartResult, RenderContexts, RenderLayers, RenderPipe};

type CallLog = Rc<RefCell<Vec<String>>>;

struct LoggingSurface {
    name: &'static str,
    log: CallLog,
    inner: RecordingSurface,
    clears: Vec<ClearRect>,
    fail_on_line: bool,
}

impl LoggingSurface {
    fn new(name: &'static str, log: &CallLog, viewport: Viewport) -> Self {
        Self {
            name,
            log: Rc::clone(log),
            inner: RecordingSurface::new(viewport),
            clears: Vec::new(),
            fail_on_line: false,
        }
    }

    fn record(&self, call: &str) {
        self.log.borrow_mut().push(format!("{}:{call}", self.name));
    }
}

impl DrawSurface for LoggingSurface {
    fn size(&self) -> Viewport {
        self.inner.size()
    }

    fn clear_rect(&mut self, rect: ClearRect) -> ChartResult<()> {
        self.record("clear");
        self.clears.push(rect);
        self.inner.clear_rect(rect)
    }

    fn stroke_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        if self.fail_on_line {
            return Err(ChartError::Backend("surface lost".to_owned()));
        }
        self.record("line");
        self.inner.stroke_line(line)
    }

    fn stroke_path(&mut self, path: &LinePath, stroke: &PathStroke) -> ChartResult<()> {
        self.record("path");
        self.inner.stroke_path(path, stroke)
    }

    fn fill_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        self.record("text");
        self.inner.fill_text(text)
    }
}

fn chart_layers() -> (AxisLayer, LineLayer) {
    let scale = Rc::new(Scale::new(ScaleGeometry::new(100.0, 100.0, 10.0)).expect("valid scale"));
    scale.set_domain(1.0, 3.0);
    let mut buffer = SeriesBuffer::new(8);
    for (second, price) in [1.0, 3.0, 2.0].into_iter().enumerate() {
        let time = Utc.timestamp_opt(second as i64, 0).unwrap();
        buffer.push(SeriesPoint::new(time, price));
    }
    let axis = AxisLayer::new(Rc::clone(&scale));
    let line = LineLayer::new(SeriesHandle::from(buffer), scale);
    (axis, line)
}

#[test]
fn clears_every_surface_before_drawing_in_stack_order() {
    let log = CallLog::default();
    let mut axis_surface = LoggingSurface::new("axis", &log, Viewport::new(100, 100));
    let mut line_surface = LoggingSurface::new("line", &log, Viewport::new(100, 100));
    let (mut axis, mut line) = chart_layers();

    RenderPipe::render(
        &mut RenderLayers {
            axis: &mut axis,
            line: &mut line,
        },
        &mut RenderContexts {
            axis: &mut axis_surface,
            line: &mut line_surface,
        },
    )
    .expect("render");

    let calls = log.borrow();
    assert_eq!(calls[0], "axis:clear");
    assert_eq!(calls[1], "line:clear");
    assert_eq!(calls[2], "axis:line");
    assert_eq!(calls.last().map(String::as_str), Some("line:path"));

    let first_line_call = calls.iter().position(|call| call.starts_with("line:path"));
    let last_axis_call = calls.iter().rposition(|call| call.starts_with("axis:"));
    assert!(last_axis_call < first_line_call);
    assert_eq!(calls.iter().filter(|call| call.ends_with(":clear")).count(), 2);
}

#[test]
fn clear_covers_surface_size_not_chart_geometry() {
    let log = CallLog::default();
    let mut axis_surface = LoggingSurface::new("axis", &log, Viewport::new(300, 200));
    let mut line_surface = LoggingSurface::new("line", &log, Viewport::new(64, 48));
    let (mut axis, mut line) = chart_layers();

    RenderPipe::render(
        &mut RenderLayers {
            axis: &mut axis,
            line: &mut line,
        },
        &mut RenderContexts {
            axis: &mut axis_surface,
            line: &mut line_surface,
        },
    )
    .expect("render");

    assert_eq!(axis_surface.clears, [ClearRect::new(0.0, 0.0, 300.0, 200.0)]);
    assert_eq!(line_surface.clears, [ClearRect::new(0.0, 0.0, 64.0, 48.0)]);
}

#[test]
fn repeated_renders_replace_previous_output() {
    let mut axis_surface = RecordingSurface::new(Viewport::new(100, 100));
    let mut line_surface = RecordingSurface::new(Viewport::new(100, 100));
    let (mut axis, mut line) = chart_layers();

    for _ in 0..3 {
        RenderPipe::render(
            &mut RenderLayers {
                axis: &mut axis,
                line: &mut line,
            },
            &mut RenderContexts {
                axis: &mut axis_surface,
                line: &mut line_surface,
            },
        )
        .expect("render");
    }

    assert_eq!(axis_surface.clear_count(), 3);
    assert_eq!(axis_surface.frame().lines.len(), 2 + 6);
    assert_eq!(axis_surface.frame().texts.len(), 6);
    assert_eq!(line_surface.frame().paths.len(), 1);
    assert!(line_surface.frame().lines.is_empty());
    assert_eq!(line.rebuild_count(), 1);
}

#[test]
fn backend_failure_aborts_the_pass() {
    let log = CallLog::default();
    let mut axis_surface = LoggingSurface::new("axis", &log, Viewport::new(100, 100));
    axis_surface.fail_on_line = true;
    let mut line_surface = LoggingSurface::new("line", &log, Viewport::new(100, 100));
    let (mut axis, mut line) = chart_layers();

    let err = RenderPipe::render(
        &mut RenderLayers {
            axis: &mut axis,
            line: &mut line,
        },
        &mut RenderContexts {
            axis: &mut axis_surface,
            line: &mut line_surface,
        },
    )
    .expect_err("axis surface fails");

    assert!(matches!(err, ChartError::Backend(_)));
    assert_eq!(*log.borrow(), ["axis:clear", "line:clear"]);
    assert_eq!(line.rebuild_count(), 0);
}
