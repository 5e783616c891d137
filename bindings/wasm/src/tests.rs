use std::f64::consts::PI;

use super::*;

#[test]
fn test_constructors_and_area() {
    assert_eq!(Circle::new(1.0).area(), PI);
    assert_eq!(Square::new(2.0).side(), 2.0);
    assert_eq!(Triangle::new(3.0, 4.0).area(), 6.0);
}

#[test]
fn test_wrap_shapes_shares_handles() {
    let circle = Circle::new(1.1).to_shape();
    let mut list = ShapeList::new();
    assert_eq!(wrap_shapes(&list), 0.0);

    list.push(&circle);
    list.push(&Square::new(2.2).to_shape());
    list.push(&Triangle::new(3.3, 4.4).to_shape());
    assert_eq!(list.length(), 3);
    assert!((wrap_shapes(&list) - (PI * 1.21 + 4.84 + 7.26)).abs() < 1e-12);

    let mut twice = ShapeList::new();
    twice.push(&circle);
    twice.push(&circle);
    assert_eq!(wrap_shapes(&twice), circle.area() + circle.area());
}

#[test]
fn test_optional_factories() {
    assert!(maybe_make_circle(false).is_none());
    assert!(maybe_make_square(false).is_none());
    assert!(maybe_make_triangle(false).is_none());

    assert_eq!(maybe_make_circle(true).map(|c| c.radius()), Some(1.1));
    assert_eq!(maybe_make_square(true).map(|s| s.side()), Some(2.2));
    assert_eq!(
        maybe_make_triangle(true).map(|t| t.area()),
        Some(0.5 * 3.3 * 4.4)
    );
}

#[test]
fn test_variant_recoverable() {
    let v = get_shape_variant(true);
    assert_eq!(v.kind(), ShapeKind::Circle);
    assert_eq!(v.as_circle().map(|c| c.radius()), Some(5.0));
    assert!(v.as_square().is_none());

    let v = get_shape_variant(false);
    assert_eq!(v.kind(), ShapeKind::Square);
    assert_eq!(v.as_square().map(|s| s.area()), Some(36.0));
    assert!(v.as_circle().is_none());
}

#[test]
fn test_composite() {
    let c = CompositeShape::new();
    assert_eq!(c.area(), 0.0);
    c.add(&Circle::new(2.0).to_shape());

    let c2 = CompositeShape::new();
    c2.add(&Square::new(3.0).to_shape());
    c.add(&c2.to_shape());

    assert_eq!(c.length(), 2);
    assert!((c.area() - (PI * 4.0 + 9.0)).abs() < 1e-12);

    let back = c.to_shape().as_composite();
    assert_eq!(back.map(|b| b.length()), Some(2));
}

#[test]
fn test_make_composite() {
    let comp = make_composite();
    assert_eq!(comp.length(), 3);
    assert!((comp.area() - (PI + 10.0)).abs() < 1e-12);
}

#[test]
fn test_describe() {
    let json: serde_json::Value = serde_json::from_str(&Square::new(6.0).to_shape().describe())
        .unwrap_or(serde_json::Value::Null);
    assert_eq!(
        json,
        serde_json::json!({ "kind": "square", "side": 6.0, "area": 36.0 })
    );
}
