//! Host-backed array used for tests, examples, and interoperability.

use anyhow::{bail, Result};
use rand::Rng;

use bcast::{ArrayLike, Shape};

/// Simple host-backed f32 array with row-major contiguous storage.
#[derive(Debug, Clone, PartialEq)]
pub struct HostTensor {
    shape: Shape,
    data: Vec<f32>,
}

impl HostTensor {
    /// Constructs a tensor from raw values, validating the length against
    /// the shape.
    pub fn from_vec(shape: Shape, data: Vec<f32>) -> Result<Self> {
        if data.len() != shape.num_elements() {
            bail!(
                "tensor data length ({}) does not match shape {}",
                data.len(),
                shape
            );
        }
        Ok(HostTensor { shape, data })
    }

    /// Returns a zero-initialized tensor of the requested shape.
    pub fn zeros(shape: Shape) -> Self {
        let len = shape.num_elements();
        HostTensor {
            shape,
            data: vec![0.0; len],
        }
    }

    /// Returns a one-initialized tensor of the requested shape.
    pub fn ones(shape: Shape) -> Self {
        let len = shape.num_elements();
        HostTensor {
            shape,
            data: vec![1.0; len],
        }
    }

    /// Wraps a single value as a rank-0 tensor.
    pub fn scalar(value: f32) -> Self {
        HostTensor {
            shape: Shape::scalar(),
            data: vec![value],
        }
    }

    /// Samples from a normal distribution (`N(0, std^2)`) using the
    /// Box-Muller transform.
    pub fn randn(shape: Shape, std: f32, rng: &mut impl Rng) -> Self {
        let len = shape.num_elements();
        let mut values = Vec::with_capacity(len);
        while values.len() < len {
            let u1: f32 = rng.gen::<f32>().max(f32::MIN_POSITIVE);
            let u2: f32 = rng.gen::<f32>();
            let r = (-2.0 * u1.ln()).sqrt();
            let theta = 2.0 * std::f32::consts::PI * u2;
            values.push(r * theta.cos() * std);
            if values.len() < len {
                values.push(r * theta.sin() * std);
            }
        }
        HostTensor {
            shape,
            data: values,
        }
    }

    /// Provides access to the tensor shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the total number of elements stored in the tensor.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Reports whether the tensor contains zero elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrows the underlying data slice in row-major order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutably borrows the underlying data slice.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

impl ArrayLike for HostTensor {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn with_leading_singleton(&self) -> Self {
        let mut dims = Vec::with_capacity(self.shape.rank() + 1);
        dims.push(1);
        dims.extend_from_slice(self.shape.dims());
        HostTensor {
            shape: Shape::new(dims),
            data: self.data.clone(),
        }
    }

    fn concat(parts: &[Self], axis: usize) -> Self {
        let first = parts.first().expect("concat requires at least one part");
        let rank = first.shape.rank();
        assert!(axis < rank, "concat axis {axis} out of range for rank {rank}");

        let mut out_dims = first.shape.dims().to_vec();
        let mut axis_total = 0usize;
        for part in parts {
            let dims = part.shape.dims();
            assert_eq!(dims.len(), rank, "concat rank mismatch");
            for (idx, (&dim, &out_dim)) in dims.iter().zip(out_dims.iter()).enumerate() {
                assert!(
                    idx == axis || dim == out_dim,
                    "concat length mismatch on axis {idx}"
                );
            }
            axis_total += dims[axis];
        }
        out_dims[axis] = axis_total;

        // Row-major layout: each outer block is the concatenation of every
        // part's chunk for that block, in part order.
        let axis_inner: usize = out_dims.iter().skip(axis + 1).product();
        let outer: usize = out_dims.iter().take(axis).product();
        let stride_outer = axis_total * axis_inner;
        let mut data = vec![0.0f32; outer * stride_outer];
        for outer_idx in 0..outer {
            let mut dst_offset = outer_idx * stride_outer;
            for part in parts {
                let chunk = part.shape.dims()[axis] * axis_inner;
                let src_start = outer_idx * chunk;
                data[dst_offset..dst_offset + chunk]
                    .copy_from_slice(&part.data[src_start..src_start + chunk]);
                dst_offset += chunk;
            }
        }
        HostTensor {
            shape: Shape::new(out_dims),
            data,
        }
    }

    fn allocate_uninitialized(shape: &Shape) -> Self {
        // Contents are contractually unobservable; zero-fill rather than
        // hand out genuinely uninitialized f32s.
        let len = shape
            .checked_num_elements()
            .expect("shape element count overflows usize");
        HostTensor {
            shape: shape.clone(),
            data: vec![0.0; len],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tensor(dims: &[usize], values: &[f32]) -> HostTensor {
        HostTensor::from_vec(Shape::new(dims.to_vec()), values.to_vec())
            .unwrap_or_else(|err| panic!("unexpected error: {err}"))
    }

    #[test]
    fn from_vec_rejects_length_mismatch() {
        let err = HostTensor::from_vec(Shape::new(vec![2, 2]), vec![1.0, 2.0, 3.0])
            .expect_err("length mismatch should be rejected");
        assert!(err.to_string().contains("(2, 2)"));
    }

    #[test]
    fn with_leading_singleton_keeps_data_and_prepends_axis() {
        let t = tensor(&[2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let lifted = t.with_leading_singleton();
        assert_eq!(lifted.shape().dims(), &[1, 2, 3]);
        assert_eq!(lifted.data(), t.data());
    }

    #[test]
    fn concat_along_leading_axis_appends_blocks() {
        let a = tensor(&[1, 2], &[1.0, 2.0]);
        let b = tensor(&[1, 2], &[3.0, 4.0]);
        let out = HostTensor::concat(&[a, b], 0);
        assert_eq!(out.shape().dims(), &[2, 2]);
        assert_eq!(out.data(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn concat_along_inner_axis_interleaves_rows() {
        let a = tensor(&[2, 1], &[1.0, 2.0]);
        let b = tensor(&[2, 1], &[3.0, 4.0]);
        let out = HostTensor::concat(&[a, b], 1);
        assert_eq!(out.shape().dims(), &[2, 2]);
        assert_eq!(out.data(), &[1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn concat_accepts_unequal_axis_lengths() {
        let a = tensor(&[1, 2], &[1.0, 2.0]);
        let b = tensor(&[2, 2], &[3.0, 4.0, 5.0, 6.0]);
        let out = HostTensor::concat(&[a, b], 0);
        assert_eq!(out.shape().dims(), &[3, 2]);
        assert_eq!(out.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn allocate_uninitialized_carries_the_shape() {
        let shape = Shape::new(vec![2, 3]);
        let t = HostTensor::allocate_uninitialized(&shape);
        assert_eq!(t.shape(), &shape);
        assert_eq!(t.len(), 6);
    }
}
