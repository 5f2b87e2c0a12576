//! Materializing expansion of one array to another array's shape.

use crate::array::ArrayLike;
use crate::broadcast::resolve::{padded_dim, AxisVec};
use crate::broadcast::BroadcastError;
use crate::shape::Shape;

/// Expands `source` to the shape of `target_like`, replicating singleton
/// axes.
///
/// The walk mirrors [`mutually_expandable`](crate::mutually_expandable):
/// ranks are aligned by prepending singleton axes to a working copy of the
/// source, then each right-aligned axis pair yields a replication factor: 1
/// when the lengths already agree, the target length when the source axis is
/// a singleton, and a [`BroadcastError::DimensionMismatch`] naming the axis
/// otherwise. Factors are applied outermost-to-innermost by concatenating
/// copies of the working array along the axis, so axis indices stay valid as
/// outer axes are finalized.
///
/// This is a materializing expansion: the result is a freshly allocated
/// array of the target shape whose cost is proportional to the target's
/// element count. Neither input is touched.
pub fn expand_as<A: ArrayLike>(source: &A, target_like: &A) -> Result<A, BroadcastError> {
    let source_dims = source.shape().dims();
    let target_dims = target_like.shape().dims();
    let rank = source_dims.len().max(target_dims.len());

    // One replication factor and one output length per axis, innermost-first,
    // reversed afterwards into the outermost-first order the concat loop
    // walks.
    let mut factors = AxisVec::with_capacity(rank);
    let mut out_dims = AxisVec::with_capacity(rank);
    for step in 0..rank {
        let dim_source = padded_dim(source_dims, step);
        let dim_target = padded_dim(target_dims, step);
        if dim_source == dim_target {
            factors.push(1);
            out_dims.push(dim_source);
        } else if dim_source == 1 {
            factors.push(dim_target);
            out_dims.push(dim_target);
        } else {
            return Err(BroadcastError::DimensionMismatch {
                axis: rank - 1 - step,
                dim_source,
                dim_target,
            });
        }
    }
    factors.reverse();
    out_dims.reverse();

    // A factor of 0 means a singleton axis meets a zero-length target axis.
    // The result is empty, so allocating it at the output shape materializes
    // it completely; concatenating zero copies cannot.
    if factors.contains(&0) {
        return Ok(A::allocate_uninitialized(&Shape::new(out_dims.into_vec())));
    }

    let mut working = source.clone();
    while working.shape().rank() < rank {
        working = working.with_leading_singleton();
    }
    for (axis, &factor) in factors.iter().enumerate() {
        if factor > 1 {
            let copies = vec![working; factor];
            working = A::concat(&copies, axis);
        }
    }
    Ok(working)
}
