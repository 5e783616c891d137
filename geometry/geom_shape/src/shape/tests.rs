use std::f64::consts::PI;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_circle_area() {
    assert_eq!(Circle::new(1.0).area(), PI);
    assert_eq!(Circle::new(2.0).area(), PI * 2.0 * 2.0);
    assert_eq!(Circle::new(0.0).area(), 0.0);
}

#[test]
fn test_square_area() {
    assert_eq!(Square::new(2.0).area(), 4.0);
    assert_eq!(Square::new(6.0).area(), 36.0);
}

#[test]
fn test_triangle_area() {
    assert_eq!(Triangle::new(3.0, 4.0).area(), 0.5 * 3.0 * 4.0);
    assert_eq!(Triangle::new(3.3, 4.4).area(), 0.5 * 3.3 * 4.4);
}

#[test]
fn test_parameters_stored_verbatim() {
    let t = Triangle::new(-3.0, 4.0);
    assert_eq!(t.base(), -3.0);
    assert_eq!(t.height(), 4.0);
    assert_eq!(t.area(), -6.0);

    assert_eq!(Circle::new(-1.5).radius(), -1.5);
    assert_eq!(Square::new(-2.0).side(), -2.0);
    assert_eq!(Square::new(-2.0).area(), 4.0);
}

#[test]
fn test_non_finite_inputs_propagate() {
    assert!(Circle::new(f64::NAN).area().is_nan());
    assert_eq!(Square::new(f64::INFINITY).area(), f64::INFINITY);
}

#[test]
fn test_shape_dispatch() {
    assert_eq!(Shape::circle(1.0).area(), PI);
    assert_eq!(Shape::square(2.0).area(), 4.0);
    assert_eq!(Shape::triangle(3.0, 4.0).area(), 6.0);
    assert_eq!(Shape::from(CompositeShape::new()).area(), 0.0);
}

#[test]
fn test_shape_kind() {
    assert_eq!(Shape::circle(1.0).kind(), ShapeKind::Circle);
    assert_eq!(Shape::square(1.0).kind(), ShapeKind::Square);
    assert_eq!(Shape::triangle(1.0, 1.0).kind(), ShapeKind::Triangle);
    assert_eq!(
        Shape::from(CompositeShape::new()).kind(),
        ShapeKind::Composite
    );
    assert_eq!(ShapeKind::Triangle.to_string(), "triangle");
}

#[test]
fn test_borrowing_downcasts() {
    let shape = Shape::circle(5.0);
    assert_eq!(shape.as_circle().map(|c| c.radius()), Some(5.0));
    assert!(shape.as_square().is_none());
    assert!(shape.as_triangle().is_none());
    assert!(shape.as_composite().is_none());
}

#[test]
fn test_owning_downcast_returns_same_handle() {
    let handle = Square::shared(6.0);
    let shape = Shape::from(handle.clone());

    let back = Heap::<Square>::try_from(shape);
    assert!(matches!(&back, Ok(h) if Heap::ptr_eq(h, &handle)));
}

#[test]
fn test_owning_downcast_mismatch() {
    let err = Heap::<Circle>::try_from(Shape::square(6.0));
    assert_eq!(
        err.err(),
        Some(ShapeError::KindMismatch {
            expected: ShapeKind::Circle,
            found: ShapeKind::Square,
        })
    );

    let err = CompositeShape::try_from(Shape::triangle(1.0, 2.0));
    assert_eq!(
        err.err().map(|e| e.to_string()),
        Some("expected a composite, found a triangle".to_string())
    );
}

#[test]
fn test_clone_shares_payload() {
    let a = Shape::circle(1.1);
    let b = a.clone();
    assert!(Shape::ptr_eq(&a, &b));
    assert!(!Shape::ptr_eq(&a, &Shape::circle(1.1)));
    assert!(!Shape::ptr_eq(&a, &Shape::square(1.1)));
}

#[test]
fn test_display() {
    assert_eq!(Shape::circle(1.1).to_string(), "Circle(r=1.1)");
    assert_eq!(Shape::square(2.2).to_string(), "Square(side=2.2)");
    assert_eq!(
        Shape::triangle(3.3, 4.4).to_string(),
        "Triangle(base=3.3, height=4.4)"
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_serialize_tagged() {
    let json = serde_json::to_value(Shape::triangle(3.0, 4.0)).ok();
    assert_eq!(
        json,
        Some(serde_json::json!({ "kind": "triangle", "base": 3.0, "height": 4.0 }))
    );
}
