//! Right-aligned shape broadcasting over a pluggable array capability.
//!
//! The crate answers one question: given two arrays with possibly different
//! shapes, can they be combined element-wise, and what do they look like once
//! both conform to the common shape? [`mutually_expandable`] is the
//! non-failing compatibility probe, [`expand_as`] materializes one array to
//! another's shape, and [`mutually_broadcast`] composes the two into the full
//! pipeline. Storage is abstracted behind [`ArrayLike`], so any numeric layer
//! that can report a shape, prepend a singleton axis, and concatenate copies
//! along an axis can participate.

pub mod array;
pub mod broadcast;
pub mod shape;

pub use array::ArrayLike;
pub use broadcast::{expand_as, mutually_broadcast, mutually_expandable, BroadcastError};
pub use shape::Shape;
