//! Composite shapes.
//!
//! A `CompositeShape` is a shared handle to an ordered list of child shapes.
//! Clones of the handle see the same list, so a composite nested inside
//! another composite still reflects children added to it later.
//!
//! Composites may nest but must not form a cycle; nothing here detects one.

use std::fmt;

use parking_lot::RwLock;

use crate::stack::ensure_sufficient_stack;
use crate::{Heap, Shape};

/// An ordered aggregate of shapes whose area is the sum of its children.
#[derive(Clone)]
pub struct CompositeShape(Heap<RwLock<Vec<Shape>>>);

impl CompositeShape {
    /// Create an empty composite.
    pub fn new() -> Self {
        CompositeShape(Heap::new(RwLock::new(Vec::new())))
    }

    /// Append a child. The child handle is shared, not copied.
    pub fn add(&self, shape: Shape) {
        let mut children = self.0.write();
        children.push(shape);
        tracing::trace!(len = children.len(), "composite child added");
    }

    /// Append every shape from `shapes`, in iteration order.
    ///
    /// `shapes` is drained before the lock is taken, so it may read this
    /// composite.
    pub fn add_all(&self, shapes: impl IntoIterator<Item = Shape>) -> &Self {
        let shapes: Vec<Shape> = shapes.into_iter().collect();
        let mut children = self.0.write();
        children.extend(shapes);
        tracing::trace!(len = children.len(), "composite children added");
        self
    }

    /// Left-fold sum of the children's areas, starting from `0.0`.
    ///
    /// An empty composite yields exactly `0.0`.
    pub fn area(&self) -> f64 {
        ensure_sufficient_stack(|| {
            self.0
                .read()
                .iter()
                .fold(0.0, |total, child| total + child.area())
        })
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Snapshot of the child handles, in insertion order.
    pub fn children(&self) -> Vec<Shape> {
        self.0.read().clone()
    }

    /// True when both handles refer to the same composite.
    pub fn ptr_eq(a: &CompositeShape, b: &CompositeShape) -> bool {
        Heap::ptr_eq(&a.0, &b.0)
    }
}

/// Tears down nested composites with a worklist instead of recursing.
impl Drop for CompositeShape {
    fn drop(&mut self) {
        let Some(children) = Heap::get_mut(&mut self.0) else {
            return;
        };
        let mut pending = std::mem::take(children.get_mut());
        while let Some(child) = pending.pop() {
            let Shape::Composite(mut nested) = child else {
                continue;
            };
            // Still shared elsewhere: the other holder keeps its children.
            if let Some(grandchildren) = Heap::get_mut(&mut nested.0) {
                pending.append(grandchildren.get_mut());
            }
        }
    }
}

impl Default for CompositeShape {
    fn default() -> Self {
        CompositeShape::new()
    }
}

impl Extend<Shape> for CompositeShape {
    fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl FromIterator<Shape> for CompositeShape {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        let composite = CompositeShape::new();
        composite.add_all(iter);
        composite
    }
}

impl fmt::Debug for CompositeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("CompositeShape")
                .field("children", &*self.0.read())
                .finish()
        })
    }
}

impl fmt::Display for CompositeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.len();
        let noun = if len == 1 { "child" } else { "children" };
        write!(f, "CompositeShape({len} {noun})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CompositeShape {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        ensure_sufficient_stack(|| {
            let children = self.0.read();
            let mut state = serializer.serialize_struct("CompositeShape", 1)?;
            state.serialize_field("children", &*children)?;
            state.end()
        })
    }
}
