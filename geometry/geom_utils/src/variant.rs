//! Tagged-union return.

use std::fmt;

use geom_shape::{Circle, Heap, Shape, ShapeKind, Square};

use crate::{VARIANT_CIRCLE_RADIUS, VARIANT_SQUARE_SIDE};

/// Either a circle or a square, with the variant kept visible to the caller.
#[derive(Clone, Debug)]
pub enum ShapeVariant {
    Circle(Heap<Circle>),
    Square(Heap<Square>),
}

impl ShapeVariant {
    pub fn area(&self) -> f64 {
        match self {
            ShapeVariant::Circle(c) => c.area(),
            ShapeVariant::Square(s) => s.area(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeVariant::Circle(_) => ShapeKind::Circle,
            ShapeVariant::Square(_) => ShapeKind::Square,
        }
    }
}

impl From<ShapeVariant> for Shape {
    fn from(variant: ShapeVariant) -> Self {
        match variant {
            ShapeVariant::Circle(c) => Shape::Circle(c),
            ShapeVariant::Square(s) => Shape::Square(s),
        }
    }
}

impl fmt::Display for ShapeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeVariant::Circle(c) => c.fmt(f),
            ShapeVariant::Square(s) => s.fmt(f),
        }
    }
}

/// `Circle(5.0)` when `flag` is set, otherwise `Square(6.0)`.
#[tracing::instrument(level = "trace")]
pub fn get_shape_variant(flag: bool) -> ShapeVariant {
    if flag {
        ShapeVariant::Circle(Circle::shared(VARIANT_CIRCLE_RADIUS))
    } else {
        ShapeVariant::Square(Square::shared(VARIANT_SQUARE_SIDE))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn test_true_is_circle() {
        let v = get_shape_variant(true);
        assert_eq!(v.kind(), ShapeKind::Circle);
        assert!(matches!(&v, ShapeVariant::Circle(c) if c.radius() == 5.0));
        assert!((v.area() - PI * 25.0).abs() < 1e-12);
        assert!((v.area() - 78.539_816_339_744_83).abs() < 1e-12);
    }

    #[test]
    fn test_false_is_square() {
        let v = get_shape_variant(false);
        assert_eq!(v.kind(), ShapeKind::Square);
        assert_eq!(v.area(), 36.0);
    }

    #[test]
    fn test_identity_survives_widening() {
        let ShapeVariant::Square(handle) = get_shape_variant(false) else {
            panic!("flag=false must yield a square");
        };
        let shape = Shape::from(ShapeVariant::Square(handle.clone()));
        assert_eq!(shape.kind(), ShapeKind::Square);
        assert!(shape.as_square().is_some_and(|s| Heap::ptr_eq(s, &handle)));
    }

    #[test]
    fn test_display() {
        assert_eq!(get_shape_variant(true).to_string(), "Circle(r=5)");
        assert_eq!(get_shape_variant(false).to_string(), "Square(side=6)");
    }
}
