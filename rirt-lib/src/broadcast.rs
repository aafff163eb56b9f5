//! NumPy-style broadcasting for the three calculator inputs.
//!
//! Shapes are aligned on their trailing dimensions; a dimension of size 1
//! (or a missing leading dimension) stretches to match the others. The
//! result of an elementwise map collapses to [`ActivityIndex::Scalar`] when
//! it holds exactly one element.

use ndarray::{Array, ArrayD, ArrayViewD, Dimension, IxDyn, Zip};

use crate::error::{Result, RirtError};

/// A scalar or n-dimensional array argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Input(ArrayD<f64>);

impl Input {
    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }

    pub fn view(&self) -> ArrayViewD<'_, f64> {
        self.0.view()
    }

    pub fn into_inner(self) -> ArrayD<f64> {
        self.0
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input(ArrayD::from_elem(IxDyn(&[]), value))
    }
}

impl From<Vec<f64>> for Input {
    fn from(values: Vec<f64>) -> Self {
        Input(Array::from(values).into_dyn())
    }
}

impl From<&[f64]> for Input {
    fn from(values: &[f64]) -> Self {
        Input::from(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Input {
    fn from(values: [f64; N]) -> Self {
        Input::from(values.to_vec())
    }
}

impl<D: Dimension> From<Array<f64, D>> for Input {
    fn from(values: Array<f64, D>) -> Self {
        Input(values.into_dyn())
    }
}

/// Result of an activity-index evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityIndex {
    /// The broadcast result had exactly one element.
    Scalar(f64),
    /// Any other broadcast result, including an empty one.
    Array(ArrayD<f64>),
}

impl ActivityIndex {
    pub(crate) fn from_values(values: ArrayD<f64>) -> Self {
        let single = if values.len() == 1 {
            values.iter().next().copied()
        } else {
            None
        };
        match single {
            Some(v) => ActivityIndex::Scalar(v),
            None => ActivityIndex::Array(values),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, ActivityIndex::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            ActivityIndex::Scalar(v) => Some(*v),
            ActivityIndex::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayD<f64>> {
        match self {
            ActivityIndex::Scalar(_) => None,
            ActivityIndex::Array(a) => Some(a),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ActivityIndex::Scalar(_) => 1,
            ActivityIndex::Array(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values in logical (row-major) order.
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            ActivityIndex::Scalar(v) => vec![*v],
            ActivityIndex::Array(a) => a.iter().copied().collect(),
        }
    }

    /// Converts to an array; a scalar becomes a 0-dimensional array.
    pub fn into_array(self) -> ArrayD<f64> {
        match self {
            ActivityIndex::Scalar(v) => ArrayD::from_elem(IxDyn(&[]), v),
            ActivityIndex::Array(a) => a,
        }
    }
}

/// Compute the shape that `shapes` broadcast to.
pub fn broadcast_shape(shapes: &[&[usize]]) -> Result<Vec<usize>> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = vec![1; ndim];
    for shape in shapes {
        let offset = ndim - shape.len();
        for (i, &d) in shape.iter().enumerate() {
            let slot = &mut out[offset + i];
            if *slot == 1 {
                *slot = d;
            } else if d != 1 && d != *slot {
                return Err(shape_mismatch(shapes));
            }
        }
    }
    Ok(out)
}

/// Apply `f` elementwise over the broadcast of three arrays.
pub fn map3<F>(
    a: &ArrayViewD<'_, f64>,
    b: &ArrayViewD<'_, f64>,
    c: &ArrayViewD<'_, f64>,
    f: F,
) -> Result<ArrayD<f64>>
where
    F: Fn(f64, f64, f64) -> f64,
{
    let shapes = [a.shape(), b.shape(), c.shape()];
    let dim = IxDyn(&broadcast_shape(&shapes)?);

    let (Some(a), Some(b), Some(c)) = (
        a.broadcast(dim.clone()),
        b.broadcast(dim.clone()),
        c.broadcast(dim),
    ) else {
        return Err(shape_mismatch(&shapes));
    };

    Ok(Zip::from(a)
        .and(b)
        .and(c)
        .map_collect(|&x, &y, &z| f(x, y, z)))
}

fn shape_mismatch(shapes: &[&[usize]]) -> RirtError {
    RirtError::ShapeMismatch {
        shapes: shapes.iter().map(|s| s.to_vec()).collect(),
    }
}
