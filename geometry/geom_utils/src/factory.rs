//! Optional factories and the preset composite.

use geom_shape::{Circle, CompositeShape, Heap, Shape, Square, Triangle};

use crate::{
    MAYBE_CIRCLE_RADIUS, MAYBE_SQUARE_SIDE, MAYBE_TRIANGLE_BASE, MAYBE_TRIANGLE_HEIGHT,
    PRESET_CIRCLE_RADIUS, PRESET_SQUARE_SIDE, PRESET_TRIANGLE_BASE, PRESET_TRIANGLE_HEIGHT,
};

/// `Circle(1.1)` when `flag` is set, otherwise `None`.
#[tracing::instrument(level = "trace")]
pub fn maybe_make_circle(flag: bool) -> Option<Heap<Circle>> {
    flag.then(|| Circle::shared(MAYBE_CIRCLE_RADIUS))
}

/// `Square(2.2)` when `flag` is set, otherwise `None`.
#[tracing::instrument(level = "trace")]
pub fn maybe_make_square(flag: bool) -> Option<Heap<Square>> {
    flag.then(|| Square::shared(MAYBE_SQUARE_SIDE))
}

/// `Triangle(3.3, 4.4)` when `flag` is set, otherwise `None`.
#[tracing::instrument(level = "trace")]
pub fn maybe_make_triangle(flag: bool) -> Option<Heap<Triangle>> {
    flag.then(|| Triangle::shared(MAYBE_TRIANGLE_BASE, MAYBE_TRIANGLE_HEIGHT))
}

/// A fresh composite holding `[Circle(1.0), Square(2.0), Triangle(3.0, 4.0)]`.
#[tracing::instrument(level = "trace")]
pub fn make_composite() -> CompositeShape {
    let composite = CompositeShape::new();
    composite.add_all([
        Shape::circle(PRESET_CIRCLE_RADIUS),
        Shape::square(PRESET_SQUARE_SIDE),
        Shape::triangle(PRESET_TRIANGLE_BASE, PRESET_TRIANGLE_HEIGHT),
    ]);
    composite
}
