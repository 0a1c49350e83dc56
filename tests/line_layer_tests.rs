use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{TimeZone, Utc};
use livechart::core::{Scale, ScaleGeometry, SeriesPoint, Viewport};
use livechart::data::{RealtimeSeries, RealtimeSeriesConfig, SeriesBuffer, SeriesHandle};
use livechart::layers::{Layer, LineLayer};
use livechart::render::{LineCap, LineJoin, RecordingSurface};

fn handle_with_prices(prices: &[f64]) -> SeriesHandle {
    let mut buffer = SeriesBuffer::new(prices.len().max(1));
    for (second, price) in prices.iter().enumerate() {
        let time = Utc.timestamp_opt(second as i64, 0).unwrap();
        buffer.push(SeriesPoint::new(time, *price));
    }
    SeriesHandle::from(buffer)
}

fn scale_100() -> Rc<Scale> {
    Rc::new(Scale::new(ScaleGeometry::new(100.0, 100.0, 10.0)).expect("valid scale"))
}

#[test]
fn fewer_than_two_points_stroke_nothing() {
    for prices in [&[][..], &[42.0][..]] {
        let mut layer = LineLayer::new(handle_with_prices(prices), scale_100());
        let mut surface = RecordingSurface::new(Viewport::new(100, 100));
        layer.draw(&mut surface).expect("draw");
        assert_eq!(surface.path_stroke_count(), 0);
        assert!(layer.cached_path().is_none());
        assert!(!layer.is_dirty());
    }
}

#[test]
fn path_visits_mapped_points_in_buffer_order() {
    let scale = scale_100();
    scale.set_domain(10.0, 20.0);
    let mut layer = LineLayer::new(handle_with_prices(&[10.0, 20.0, 15.0]), Rc::clone(&scale));
    let mut surface = RecordingSurface::new(Viewport::new(100, 100));
    layer.draw(&mut surface).expect("draw");

    let record = &surface.frame().paths[0];
    assert_eq!(
        record.path.vertices(),
        &[(10.0, 90.0), (50.0, 10.0), (90.0, 50.0)]
    );
    assert_eq!(record.stroke.width, 2.0);
    assert_eq!(record.stroke.cap, LineCap::Round);
    assert_eq!(record.stroke.join, LineJoin::Round);
}

#[test]
fn repeated_draws_reuse_cached_path() {
    let mut layer = LineLayer::new(handle_with_prices(&[1.0, 2.0, 3.0]), scale_100());
    let mut surface = RecordingSurface::new(Viewport::new(100, 100));

    for _ in 0..5 {
        layer.draw(&mut surface).expect("draw");
    }
    assert_eq!(layer.rebuild_count(), 1);
    assert_eq!(surface.path_stroke_count(), 5);

    layer.mark_dirty();
    layer.draw(&mut surface).expect("draw");
    layer.draw(&mut surface).expect("draw");
    assert_eq!(layer.rebuild_count(), 2);
}

#[test]
fn stale_path_is_kept_until_marked_dirty() {
    let scale = scale_100();
    scale.set_domain(0.0, 10.0);
    let mut layer = LineLayer::new(handle_with_prices(&[0.0, 10.0]), Rc::clone(&scale));
    let mut surface = RecordingSurface::new(Viewport::new(100, 100));
    layer.draw(&mut surface).expect("draw");
    let before = layer.cached_path().cloned();

    scale.set_domain(0.0, 20.0);
    layer.draw(&mut surface).expect("draw without invalidation");
    assert_eq!(layer.cached_path().cloned(), before);

    layer.mark_dirty();
    layer.draw(&mut surface).expect("draw after invalidation");
    assert_eq!(layer.cached_path().map(|path| path.vertices()[1]), Some((90.0, 50.0)));
}

#[test]
fn layer_observes_live_buffer_without_copying() {
    let config = RealtimeSeriesConfig::default()
        .with_max_points(4)
        .with_interval(Duration::from_millis(10));
    let mut series =
        RealtimeSeries::with_generator(config, |last: f64| last + 1.0).expect("series");
    let mut layer = LineLayer::new(series.data(), scale_100());
    let mut surface = RecordingSurface::new(Viewport::new(100, 100));

    let start = Instant::now();
    series.start(start, |_| {});
    layer.draw(&mut surface).expect("draw seed");
    assert_eq!(surface.path_stroke_count(), 0);

    series.poll(start + Duration::from_millis(10));
    layer.mark_dirty();
    layer.draw(&mut surface).expect("draw two points");
    assert_eq!(surface.path_stroke_count(), 1);
    assert_eq!(layer.cached_path().map(|path| path.vertices().len()), Some(2));
    assert_eq!(series.data().len(), 2);
}
