//! Shape errors.
//!
//! Area computation never fails. The only failure in the shape model is asking
//! a `Shape` for a variant it does not hold.

use thiserror::Error;

use crate::ShapeKind;

/// Errors produced by the shape model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// An owning downcast targeted the wrong variant.
    #[error("expected a {expected}, found a {found}")]
    KindMismatch { expected: ShapeKind, found: ShapeKind },
}
