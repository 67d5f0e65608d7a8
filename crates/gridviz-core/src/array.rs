//! Named attribute arrays.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The payload of an attribute array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrayValues {
    /// Scalar floating-point values.
    Float(Vec<f32>),
    /// Scalar integer values (labels, region ids, original ids).
    Int(Vec<i32>),
    /// Three-component vectors (velocities, normals).
    Vector(Vec<Vec3>),
}

impl ArrayValues {
    /// Returns the number of tuples in the array.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Float(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Vector(v) => v.len(),
        }
    }

    /// Returns true if the array holds no tuples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of components per tuple.
    #[must_use]
    pub fn num_components(&self) -> usize {
        match self {
            Self::Float(_) | Self::Int(_) => 1,
            Self::Vector(_) => 3,
        }
    }

    /// Returns the non-NaN (min, max) over all components.
    ///
    /// Returns `None` when the array is empty or holds only NaN values.
    #[must_use]
    pub fn range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut update = |value: f64| {
            if !value.is_nan() {
                min = min.min(value);
                max = max.max(value);
            }
        };
        match self {
            Self::Float(v) => v.iter().for_each(|&x| update(f64::from(x))),
            Self::Int(v) => v.iter().for_each(|&x| update(f64::from(x))),
            Self::Vector(v) => v.iter().for_each(|x| {
                update(f64::from(x.x));
                update(f64::from(x.y));
                update(f64::from(x.z));
            }),
        }
        (min <= max).then_some((min, max))
    }
}

impl From<Vec<f32>> for ArrayValues {
    fn from(values: Vec<f32>) -> Self {
        Self::Float(values)
    }
}

impl From<Vec<i32>> for ArrayValues {
    fn from(values: Vec<i32>) -> Self {
        Self::Int(values)
    }
}

impl From<Vec<Vec3>> for ArrayValues {
    fn from(values: Vec<Vec3>) -> Self {
        Self::Vector(values)
    }
}

/// A named attribute array stored in one of a dataset's collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeArray {
    name: String,
    values: ArrayValues,
}

impl AttributeArray {
    /// Creates a new named array.
    pub fn new(name: impl Into<String>, values: impl Into<ArrayValues>) -> Self {
        Self {
            name: name.into(),
            values: values.into(),
        }
    }

    /// Returns the array name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the array in place.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the array values.
    #[must_use]
    pub fn values(&self) -> &ArrayValues {
        &self.values
    }

    /// Returns the array values mutably.
    pub fn values_mut(&mut self) -> &mut ArrayValues {
        &mut self.values
    }

    /// Consumes the array and returns its values.
    #[must_use]
    pub fn into_values(self) -> ArrayValues {
        self.values
    }

    /// Returns the number of tuples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the array holds no tuples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
