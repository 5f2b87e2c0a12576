//! Compatibility probing between two shapes under the right-aligned rule.

use smallvec::SmallVec;

use crate::shape::Shape;

/// Compact per-axis scratch sized for the common low-rank case.
pub(crate) type AxisVec = SmallVec<[usize; 4]>;

/// Decides whether two shapes are mutually expandable and, when they are,
/// returns the combined broadcast shape.
///
/// Axes are compared right-aligned: the walk starts at the innermost axis and
/// treats missing outer axes on the shorter shape as length 1. An axis pair
/// merges when the lengths agree or either side is 1; the first incompatible
/// pair short-circuits the walk. Per-axis results are collected
/// innermost-first and reversed once at the end. This probe never fails:
/// `None` is the whole story for incompatible inputs.
pub fn mutually_expandable(lhs: &Shape, rhs: &Shape) -> Option<Shape> {
    let a = lhs.dims();
    let b = rhs.dims();
    let rank = a.len().max(b.len());

    let mut combined = AxisVec::with_capacity(rank);
    for step in 0..rank {
        let dim_a = padded_dim(a, step);
        let dim_b = padded_dim(b, step);
        let merged = if dim_a == dim_b {
            dim_a
        } else if dim_a == 1 {
            dim_b
        } else if dim_b == 1 {
            dim_a
        } else {
            return None;
        };
        combined.push(merged);
    }
    combined.reverse();
    Some(Shape::new(combined.into_vec()))
}

/// Axis length `step` positions in from the innermost axis, padding missing
/// outer axes with 1.
pub(crate) fn padded_dim(dims: &[usize], step: usize) -> usize {
    if step < dims.len() {
        dims[dims.len() - 1 - step]
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(dims: &[usize]) -> Shape {
        Shape::new(dims.to_vec())
    }

    #[test]
    fn scalar_expands_against_matrix() {
        let result = mutually_expandable(&Shape::scalar(), &shape(&[2, 2]));
        assert_eq!(result, Some(shape(&[2, 2])));
    }

    #[test]
    fn vector_expands_against_square() {
        let result = mutually_expandable(&shape(&[3]), &shape(&[3, 3]));
        assert_eq!(result, Some(shape(&[3, 3])));
    }

    #[test]
    fn singleton_axes_take_the_partner_length() {
        let result = mutually_expandable(&shape(&[1, 3, 1, 5]), &shape(&[2, 3, 4, 5]));
        assert_eq!(result, Some(shape(&[2, 3, 4, 5])));
    }

    #[test]
    fn interior_singleton_expands() {
        let result = mutually_expandable(&shape(&[2, 1, 4]), &shape(&[2, 3, 4]));
        assert_eq!(result, Some(shape(&[2, 3, 4])));
    }

    #[test]
    fn conflicting_non_singleton_axes_are_rejected() {
        assert_eq!(mutually_expandable(&shape(&[2, 3]), &shape(&[4, 2])), None);
    }

    #[test]
    fn innermost_conflict_short_circuits() {
        // 3 vs 4 on the innermost axis; the outer axes would have merged.
        assert_eq!(
            mutually_expandable(&shape(&[2, 1, 3]), &shape(&[1, 3, 4])),
            None
        );
    }

    #[test]
    fn probe_is_symmetric() {
        let pairs: &[(&[usize], &[usize])] = &[
            (&[], &[2, 2]),
            (&[3], &[3, 3]),
            (&[1, 3, 1, 5], &[2, 3, 4, 5]),
            (&[2, 3], &[4, 2]),
            (&[2, 1, 3], &[1, 3, 4]),
        ];
        for (a, b) in pairs {
            assert_eq!(
                mutually_expandable(&shape(a), &shape(b)),
                mutually_expandable(&shape(b), &shape(a)),
                "asymmetry for {a:?} vs {b:?}"
            );
        }
    }

    #[test]
    fn result_obeys_the_rank_and_max_laws() {
        let a = shape(&[1, 3, 1, 5]);
        let b = shape(&[4, 5]);
        let result = mutually_expandable(&a, &b).unwrap();
        assert_eq!(result.rank(), a.rank().max(b.rank()));
        for step in 0..result.rank() {
            let expected = padded_dim(a.dims(), step).max(padded_dim(b.dims(), step));
            assert_eq!(padded_dim(result.dims(), step), expected);
        }
    }

    #[test]
    fn equal_shapes_merge_to_themselves() {
        let s = shape(&[2, 3, 4]);
        assert_eq!(mutually_expandable(&s, &s), Some(s));
    }

    #[test]
    fn zero_length_axes_participate_like_any_other_length() {
        // 0 is an ordinary axis length: it merges with 0 or with 1.
        assert_eq!(
            mutually_expandable(&shape(&[0]), &shape(&[1])),
            Some(shape(&[0]))
        );
        assert_eq!(mutually_expandable(&shape(&[0]), &shape(&[2])), None);
    }
}
