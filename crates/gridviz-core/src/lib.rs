//! Core abstractions for gridviz.
//!
//! This crate provides the fundamental types used throughout gridviz:
//! - [`Association`] naming the point/cell/field array collections
//! - [`AttributeArray`] and [`Attributes`], the named-array containers
//! - [`AttributeRegistry`], the per-dataset active-array bookkeeping
//! - [`DataSet`], the trait concrete dataset types implement
//! - closed-form point transformation helpers

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod array;
pub mod association;
pub mod attributes;
pub mod dataset;
pub mod error;
pub mod registry;
pub mod transform;

pub use array::{ArrayValues, AttributeArray};
pub use association::Association;
pub use attributes::Attributes;
pub use dataset::{DataSet, DEFAULT_VECTOR_KEY};
pub use error::{GridvizError, Result};
pub use registry::{ActiveInfo, AttributeRegistry, EXCLUDED_NAMES};
pub use transform::{
    apply_transformation_to_points, axis_angle_rotation, axis_rotation, reflection, Axis,
};

// Re-export glam types for convenience
pub use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};
