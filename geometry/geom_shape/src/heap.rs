//! Shared handle for shape payloads.
//!
//! Every shape lives behind a `Heap<T>`, a reference-counted pointer. Cloning
//! a handle shares the payload, so the same circle can sit in a caller's list
//! and inside several composites at once; it is freed when the last handle
//! drops.
//!
//! The constructor is `pub(crate)`: outside this crate handles are obtained
//! from the shape factories (`Circle::shared`, `Shape::circle`, ...).

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A reference-counted shape handle.
///
/// # Thread Safety
/// Uses `Arc` internally, so handles are `Send + Sync` whenever the payload is.
///
/// # Zero-Cost Abstraction
/// `#[repr(transparent)]` keeps the layout identical to `Arc<T>`.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// True when both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// Number of live handles to this allocation.
    #[inline]
    pub fn holders(this: &Self) -> usize {
        Arc::strong_count(&this.0)
    }

    /// Mutable access to the payload, only when this is the last handle.
    #[inline]
    pub(crate) fn get_mut(this: &mut Self) -> Option<&mut T> {
        Arc::get_mut(&mut this.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "serde")]
impl<T: ?Sized + serde::Serialize> serde::Serialize for Heap<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (*self.0).serialize(serializer)
    }
}
