//! Scalar-or-array inputs and the broadcast rules shared by every batch
//! operation.

use ndarray::{Array1, Array2, ArrayD, IxDyn};

use crate::error::{GeodArrayError, GeodArrayResult};

/// An input to a batch geodesic operation: either a single `f64` applied to
/// every element, or an n-dimensional array of values.
///
/// All geodesic quantities use a fixed `f64` element type. A `Scalar` is
/// promoted to a one-element array of shape `[1]` before dispatch, so it
/// participates in shape resolution like any other input.
#[derive(Debug, Clone)]
pub enum BroadcastableFloat {
    Scalar(f64),
    Array(ArrayD<f64>),
}

impl BroadcastableFloat {
    /// Element count after coercion to array form. Scalars count as 1.
    pub fn num_elements(&self) -> usize {
        match self {
            BroadcastableFloat::Scalar(_) => 1,
            BroadcastableFloat::Array(arr) => arr.len(),
        }
    }

    /// Promote to array form. Scalars become a shape-`[1]` array.
    pub fn into_array(self) -> ArrayD<f64> {
        match self {
            BroadcastableFloat::Scalar(value) => ArrayD::from_elem(IxDyn(&[1]), value),
            BroadcastableFloat::Array(arr) => arr,
        }
    }
}

impl From<f64> for BroadcastableFloat {
    fn from(value: f64) -> Self {
        BroadcastableFloat::Scalar(value)
    }
}

impl From<i32> for BroadcastableFloat {
    fn from(value: i32) -> Self {
        BroadcastableFloat::Scalar(value as f64)
    }
}

impl From<Vec<f64>> for BroadcastableFloat {
    fn from(value: Vec<f64>) -> Self {
        BroadcastableFloat::Array(Array1::from_vec(value).into_dyn())
    }
}

impl From<&[f64]> for BroadcastableFloat {
    fn from(value: &[f64]) -> Self {
        BroadcastableFloat::Array(Array1::from_vec(value.to_vec()).into_dyn())
    }
}

impl From<Array1<f64>> for BroadcastableFloat {
    fn from(value: Array1<f64>) -> Self {
        BroadcastableFloat::Array(value.into_dyn())
    }
}

impl From<Array2<f64>> for BroadcastableFloat {
    fn from(value: Array2<f64>) -> Self {
        BroadcastableFloat::Array(value.into_dyn())
    }
}

impl From<ArrayD<f64>> for BroadcastableFloat {
    fn from(value: ArrayD<f64>) -> Self {
        BroadcastableFloat::Array(value)
    }
}

/// Selects the output shape for one call: the shape of the input with the
/// strictly largest element count, first in argument order on ties.
pub(crate) fn broadcast_shape<'a>(inputs: &[&'a ArrayD<f64>]) -> &'a [usize] {
    let mut winner = inputs[0];
    for arr in &inputs[1..] {
        if arr.len() > winner.len() {
            winner = arr;
        }
    }
    winner.shape()
}

/// Iterator over one input's elements in logical order, repeating a
/// one-element input forever so it zips against the full output length.
pub(crate) enum BroadcastIter<'a> {
    Scalar(f64),
    Array(ndarray::iter::Iter<'a, f64, IxDyn>),
}

impl Iterator for BroadcastIter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            BroadcastIter::Scalar(value) => Some(*value),
            BroadcastIter::Array(iter) => iter.next().copied(),
        }
    }
}

/// Builds the element iterator for an input, given the resolved output
/// element count. Inputs of any other size are true shape mismatches.
pub(crate) fn broadcast_iter<'a>(
    arr: &'a ArrayD<f64>,
    out_shape: &[usize],
) -> GeodArrayResult<BroadcastIter<'a>> {
    let out_len: usize = out_shape.iter().product();
    match arr.len() {
        1 => Ok(BroadcastIter::Scalar(
            arr.first().copied().unwrap_or(f64::NAN),
        )),
        len if len == out_len => Ok(BroadcastIter::Array(arr.iter())),
        _ => Err(GeodArrayError::ShapeMismatch {
            expected: out_shape.to_vec(),
            actual: arr.shape().to_vec(),
        }),
    }
}
