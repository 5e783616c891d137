//! Shape model for geomkit.
//!
//! Three primitive shapes (`Circle`, `Square`, `Triangle`) and a
//! `CompositeShape` that sums the areas of its children, all held through
//! reference-counted [`Heap`] handles so one shape can be shared by many
//! holders, including host-language objects on the other side of a binding.
//!
//! # Area formulae
//!
//! | Shape | Area |
//! |-------|------|
//! | `Circle(r)` | `π · r · r` |
//! | `Square(s)` | `s · s` |
//! | `Triangle(b, h)` | `0.5 · b · h` |
//! | `CompositeShape` | `0.0 + Σ child.area()`, insertion order |
//!
//! Inputs are stored verbatim and never validated: negative dimensions give
//! negative or zero areas, and NaN/∞ propagate as IEEE-754 dictates.
//!
//! ```text
//! let c = CompositeShape::new();
//! c.add(Shape::circle(2.0));
//! c.add(Shape::square(3.0));
//! assert!((c.area() - (4.0 * PI + 9.0)).abs() < 1e-12);
//! ```

mod composite;
mod error;
mod heap;
mod shape;
pub mod stack;

pub use composite::CompositeShape;
pub use error::ShapeError;
pub use heap::Heap;
pub use shape::{Circle, Shape, ShapeKind, Square, Triangle};
