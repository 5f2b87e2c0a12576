//! Capability surface the broadcasting core requires from a numeric layer.

use crate::shape::Shape;

/// Minimal array capability the broadcasting routines are written against.
///
/// The core never names a concrete array type. Any storage layer able to
/// report its shape, prepend a singleton axis, concatenate along an axis, and
/// allocate a fresh array of a given shape can be broadcast. Every method
/// returns a newly allocated array that owns its storage independently of the
/// receiver.
pub trait ArrayLike: Clone {
    /// Borrow the array's current shape.
    fn shape(&self) -> &Shape;

    /// Returns a new array with one extra leading axis of length 1.
    fn with_leading_singleton(&self) -> Self;

    /// Returns a new array formed by concatenating `parts` along `axis`.
    ///
    /// The core only ever passes clones of a single array, so all parts share
    /// one shape and `axis` is in range; implementations may treat a
    /// violation as a caller bug.
    fn concat(parts: &[Self], axis: usize) -> Self;

    /// Allocates an array of `shape` whose contents are unspecified.
    ///
    /// The result exists purely to carry a target shape for expansion; the
    /// core never reads its elements.
    fn allocate_uninitialized(shape: &Shape) -> Self;
}
