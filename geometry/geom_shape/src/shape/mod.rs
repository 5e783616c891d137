//! Shape variants and the closed `Shape` sum.
//!
//! Concrete shapes store their constructor parameters verbatim. `Shape` holds
//! a shared handle to one of them, so cloning a `Shape` never copies the
//! payload and the concrete variant stays recoverable after the value has been
//! passed around as a plain `Shape`.

use std::f64::consts::PI;
use std::fmt;

use crate::{CompositeShape, Heap, ShapeError};

/// Discriminant of a [`Shape`], without the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Composite,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Composite => "composite",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Circle

/// A circle of the given radius.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }

    /// Allocate a shared circle handle.
    pub fn shared(radius: f64) -> Heap<Circle> {
        Heap::new(Circle::new(radius))
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// `π · r · r`
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(r={})", self.radius)
    }
}

// Square

/// A square with the given side length.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Square { side }
    }

    /// Allocate a shared square handle.
    pub fn shared(side: f64) -> Heap<Square> {
        Heap::new(Square::new(side))
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square(side={})", self.side)
    }
}

// Triangle

/// A triangle described by base and height.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Triangle {
    base: f64,
    height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Self {
        Triangle { base, height }
    }

    /// Allocate a shared triangle handle.
    pub fn shared(base: f64, height: f64) -> Heap<Triangle> {
        Heap::new(Triangle::new(base, height))
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// `0.5 · b · h`
    pub fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle(base={}, height={})", self.base, self.height)
    }
}

// Shape

/// Any shape, held through a shared handle.
///
/// The set of variants is closed so hosts can always recover the concrete
/// type with [`Shape::kind`] and the `as_*` accessors.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "lowercase")
)]
pub enum Shape {
    Circle(Heap<Circle>),
    Square(Heap<Square>),
    Triangle(Heap<Triangle>),
    Composite(CompositeShape),
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle(Circle::shared(radius))
    }

    pub fn square(side: f64) -> Self {
        Shape::Square(Square::shared(side))
    }

    pub fn triangle(base: f64, height: f64) -> Self {
        Shape::Triangle(Triangle::shared(base, height))
    }

    /// Area of the shape. Composites sum their children in insertion order.
    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.area(),
            Shape::Square(s) => s.area(),
            Shape::Triangle(t) => t.area(),
            Shape::Composite(c) => c.area(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Composite(_) => ShapeKind::Composite,
        }
    }

    /// True when both shapes are handles to the same allocation.
    pub fn ptr_eq(a: &Shape, b: &Shape) -> bool {
        match (a, b) {
            (Shape::Circle(x), Shape::Circle(y)) => Heap::ptr_eq(x, y),
            (Shape::Square(x), Shape::Square(y)) => Heap::ptr_eq(x, y),
            (Shape::Triangle(x), Shape::Triangle(y)) => Heap::ptr_eq(x, y),
            (Shape::Composite(x), Shape::Composite(y)) => CompositeShape::ptr_eq(x, y),
            _ => false,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => c.fmt(f),
            Shape::Square(s) => s.fmt(f),
            Shape::Triangle(t) => t.fmt(f),
            Shape::Composite(c) => c.fmt(f),
        }
    }
}

/// Conversions and downcasts between `Shape` and one concrete handle type.
///
/// Generates `From<$handle>`, `From<$payload>` (allocating), a borrowing
/// accessor and an owning `TryFrom<Shape>` that hands back the same handle.
macro_rules! shape_variant {
    ($variant:ident, $payload:ty, $handle:ty, $accessor:ident) => {
        impl From<$handle> for Shape {
            fn from(handle: $handle) -> Self {
                Shape::$variant(handle)
            }
        }

        impl From<$payload> for Shape {
            fn from(value: $payload) -> Self {
                Shape::$variant(<$handle>::from(value))
            }
        }

        impl Shape {
            pub fn $accessor(&self) -> Option<&$handle> {
                match self {
                    Shape::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl TryFrom<Shape> for $handle {
            type Error = ShapeError;

            fn try_from(shape: Shape) -> Result<Self, Self::Error> {
                match shape {
                    Shape::$variant(inner) => Ok(inner),
                    other => {
                        let err = ShapeError::KindMismatch {
                            expected: ShapeKind::$variant,
                            found: other.kind(),
                        };
                        tracing::debug!(%err, "shape downcast failed");
                        Err(err)
                    }
                }
            }
        }
    };
}

impl From<Circle> for Heap<Circle> {
    fn from(value: Circle) -> Self {
        Heap::new(value)
    }
}

impl From<Square> for Heap<Square> {
    fn from(value: Square) -> Self {
        Heap::new(value)
    }
}

impl From<Triangle> for Heap<Triangle> {
    fn from(value: Triangle) -> Self {
        Heap::new(value)
    }
}

shape_variant!(Circle, Circle, Heap<Circle>, as_circle);
shape_variant!(Square, Square, Heap<Square>, as_square);
shape_variant!(Triangle, Triangle, Heap<Triangle>, as_triangle);

impl From<CompositeShape> for Shape {
    fn from(composite: CompositeShape) -> Self {
        Shape::Composite(composite)
    }
}

impl Shape {
    pub fn as_composite(&self) -> Option<&CompositeShape> {
        match self {
            Shape::Composite(c) => Some(c),
            _ => None,
        }
    }
}

impl TryFrom<Shape> for CompositeShape {
    type Error = ShapeError;

    fn try_from(shape: Shape) -> Result<Self, Self::Error> {
        match shape {
            Shape::Composite(c) => Ok(c),
            other => {
                let err = ShapeError::KindMismatch {
                    expected: ShapeKind::Composite,
                    found: other.kind(),
                };
                tracing::debug!(%err, "shape downcast failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests;
