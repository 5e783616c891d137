//! Factory and aggregation utilities over the geomkit shape model.
//!
//! These are the free functions a host binding exposes next to the shape
//! classes. Each one exercises one marshalling concern:
//!
//! - [`wrap_shapes`]: a polymorphic sequence input
//! - [`maybe_make_circle`] and friends: optional returns
//! - [`get_shape_variant`]: a tagged-union return
//! - [`make_composite`]: a shared, mutable aggregate
//!
//! The constants below are fixed; tests on both sides of a binding compare
//! against them bit for bit.

mod aggregate;
mod factory;
mod variant;

pub use aggregate::wrap_shapes;
pub use factory::{make_composite, maybe_make_circle, maybe_make_square, maybe_make_triangle};
pub use variant::{get_shape_variant, ShapeVariant};

pub use geom_shape::{Circle, CompositeShape, Heap, Shape, ShapeError, ShapeKind, Square, Triangle};

/// Radius of the circle from [`maybe_make_circle`].
pub const MAYBE_CIRCLE_RADIUS: f64 = 1.1;
/// Side of the square from [`maybe_make_square`].
pub const MAYBE_SQUARE_SIDE: f64 = 2.2;
/// Base of the triangle from [`maybe_make_triangle`].
pub const MAYBE_TRIANGLE_BASE: f64 = 3.3;
/// Height of the triangle from [`maybe_make_triangle`].
pub const MAYBE_TRIANGLE_HEIGHT: f64 = 4.4;

/// Radius of the circle from `get_shape_variant(true)`.
pub const VARIANT_CIRCLE_RADIUS: f64 = 5.0;
/// Side of the square from `get_shape_variant(false)`.
pub const VARIANT_SQUARE_SIDE: f64 = 6.0;

/// Children of [`make_composite`]: circle radius, square side, triangle base and height.
pub const PRESET_CIRCLE_RADIUS: f64 = 1.0;
pub const PRESET_SQUARE_SIDE: f64 = 2.0;
pub const PRESET_TRIANGLE_BASE: f64 = 3.0;
pub const PRESET_TRIANGLE_HEIGHT: f64 = 4.0;
