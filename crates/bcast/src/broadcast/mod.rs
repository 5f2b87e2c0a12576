//! Shape broadcasting: compatibility probing, expansion, and the combined
//! pipeline.

mod expand;
mod resolve;

pub use expand::expand_as;
pub use resolve::mutually_expandable;

use thiserror::Error;

use crate::array::ArrayLike;
use crate::shape::Shape;

/// Static shape incompatibilities raised by the committing operations.
///
/// Both kinds are structural and deterministic: retrying with the same inputs
/// cannot succeed, so callers either surface them or map them into their own
/// domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BroadcastError {
    /// An axis of the source is neither 1 nor equal to the target's length.
    #[error(
        "cannot expand axis {axis}: source length {dim_source} is neither 1 \
         nor the target length {dim_target}"
    )]
    DimensionMismatch {
        /// Outermost-first index of the padded axis under comparison.
        axis: usize,
        /// The source's length at that axis.
        dim_source: usize,
        /// The target's length at that axis.
        dim_target: usize,
    },
    /// The two shapes share no common broadcast shape.
    #[error("shapes {lhs} and {rhs} are not mutually expandable")]
    Incompatible {
        /// Shape of the first operand, as passed in.
        lhs: Shape,
        /// Shape of the second operand, as passed in.
        rhs: Shape,
    },
}

/// Broadcasts two arrays against each other, returning both expanded to
/// their common shape.
///
/// Compatibility is probed up front, so incompatible inputs fail before
/// anything is allocated. On success, a placeholder of the combined shape
/// carries the target for both expansions; those expansions cannot fail once
/// the probe has passed, and a failure there would be an internal
/// inconsistency between the probe and the expander, not a caller error.
pub fn mutually_broadcast<A: ArrayLike>(lhs: &A, rhs: &A) -> Result<(A, A), BroadcastError> {
    let combined = mutually_expandable(lhs.shape(), rhs.shape()).ok_or_else(|| {
        BroadcastError::Incompatible {
            lhs: lhs.shape().clone(),
            rhs: rhs.shape().clone(),
        }
    })?;
    let template = A::allocate_uninitialized(&combined);
    let expanded_lhs =
        expand_as(lhs, &template).expect("probe accepted lhs but expansion rejected it");
    let expanded_rhs =
        expand_as(rhs, &template).expect("probe accepted rhs but expansion rejected it");
    Ok((expanded_lhs, expanded_rhs))
}
