use approx::assert_abs_diff_eq;
use livechart::core::{Domain, Scale, ScaleGeometry};

fn scale_100() -> Scale {
    Scale::new(ScaleGeometry::new(100.0, 100.0, 10.0)).expect("valid scale")
}

#[test]
fn map_x_with_at_most_one_point_returns_padding() {
    let scale = scale_100();
    for index in [0, 1, 7, 1_000] {
        assert_eq!(scale.map_x(index, 0), 10.0);
        assert_eq!(scale.map_x(index, 1), 10.0);
    }
}

#[test]
fn map_x_spans_drawable_width() {
    let scale = Scale::new(ScaleGeometry::new(300.0, 120.0, 15.0)).expect("valid scale");
    assert_eq!(scale.map_x(0, 7), 15.0);
    assert_abs_diff_eq!(scale.map_x(6, 7), 285.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.map_x(3, 7), 150.0, epsilon = 1e-9);
}

#[test]
fn equal_domain_bounds_are_normalized() {
    let scale = scale_100();
    scale.set_domain(5.0, 5.0);
    assert_eq!(scale.domain(), Domain { min: 5.0, max: 6.0 });
}

#[test]
fn map_y_is_inverted() {
    let scale = scale_100();
    scale.set_domain(10.0, 20.0);
    assert_eq!(scale.map_y(10.0), 90.0);
    assert_eq!(scale.map_y(20.0), 10.0);
    assert_eq!(scale.map_y(15.0), 50.0);
}

#[test]
fn map_y_extrapolates_outside_domain() {
    let scale = scale_100();
    scale.set_domain(0.0, 10.0);
    assert_eq!(scale.map_y(20.0), -70.0);
    assert_eq!(scale.map_y(-10.0), 170.0);
}

#[test]
fn domain_update_is_visible_through_shared_handle() {
    let scale = std::rc::Rc::new(scale_100());
    let reader = std::rc::Rc::clone(&scale);
    scale.set_domain(0.0, 50.0);
    assert_eq!(reader.domain(), Domain { min: 0.0, max: 50.0 });
    assert_eq!(reader.map_y(50.0), 10.0);
}

#[test]
fn padding_larger_than_half_size_is_accepted() {
    let scale = Scale::new(ScaleGeometry::new(10.0, 10.0, 8.0)).expect("not enforced");
    assert_eq!(scale.map_x(1, 2), 2.0);
}
