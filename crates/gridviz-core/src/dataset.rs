//! The dataset trait.
//!
//! A [`DataSet`] is a spatially referenced object: points, cells, and an
//! [`AttributeRegistry`] of named arrays. Concrete dataset types implement
//! the required accessors; everything else is provided on top of them.

use glam::{Mat4, Vec3};

use crate::array::{ArrayValues, AttributeArray};
use crate::association::Association;
use crate::error::{GridvizError, Result};
use crate::registry::{ActiveInfo, AttributeRegistry};
use crate::transform::{apply_transformation_to_points, axis_rotation, Axis};

/// Reserved point-array name used by [`DataSet::set_vectors`].
pub const DEFAULT_VECTOR_KEY: &str = "_vectors";

/// A spatially referenced object carrying named attribute arrays.
pub trait DataSet {
    /// Returns the dataset type name (e.g. `"PolyData"`).
    fn type_name(&self) -> &'static str;

    /// Returns the point coordinates.
    fn points(&self) -> &[Vec3];

    /// Returns the point coordinates mutably.
    fn points_mut(&mut self) -> &mut [Vec3];

    /// Returns the number of cells.
    fn n_cells(&self) -> usize;

    /// Returns the attribute registry.
    fn attributes(&self) -> &AttributeRegistry;

    /// Returns the attribute registry mutably.
    fn attributes_mut(&mut self) -> &mut AttributeRegistry;

    /// Returns the number of points.
    fn n_points(&self) -> usize {
        self.points().len()
    }

    /// Total number of arrays across all collections.
    fn n_arrays(&self) -> usize {
        self.attributes().n_arrays()
    }

    /// Returns the axis-aligned bounding box, or `None` with no points.
    fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let points = self.points();
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Some((min, max))
    }

    /// Returns the center of the bounding box.
    fn center(&self) -> Vec3 {
        self.bounding_box()
            .map_or(Vec3::ZERO, |(min, max)| (min + max) * 0.5)
    }

    /// Returns the length of the bounding box diagonal.
    fn length(&self) -> f32 {
        self.bounding_box()
            .map_or(0.0, |(min, max)| (max - min).length())
    }

    /// Translates all points by the given offset.
    fn translate(&mut self, offset: Vec3) {
        for p in self.points_mut() {
            *p += offset;
        }
    }

    /// Rotates the dataset about the x-axis by an angle in degrees.
    fn rotate_x(&mut self, angle_deg: f32) {
        axis_rotation(self.points_mut(), angle_deg, Axis::X);
    }

    /// Rotates the dataset about the y-axis by an angle in degrees.
    fn rotate_y(&mut self, angle_deg: f32) {
        axis_rotation(self.points_mut(), angle_deg, Axis::Y);
    }

    /// Rotates the dataset about the z-axis by an angle in degrees.
    fn rotate_z(&mut self, angle_deg: f32) {
        axis_rotation(self.points_mut(), angle_deg, Axis::Z);
    }

    /// Applies a 4x4 transformation to the points in place.
    fn transform(&mut self, matrix: Mat4) {
        apply_transformation_to_points(matrix, self.points_mut());
    }

    /// Adds a named array, placing it by length.
    ///
    /// An array whose length matches the point count goes to the point
    /// collection (point wins over cell on ties, so datasets made of vertex
    /// cells keep their data on the nodes); a cell-count match goes to the
    /// cell collection. Anything else is an error: field data must be added
    /// explicitly via [`Self::set_field_array`].
    fn set_array(&mut self, name: &str, values: impl Into<ArrayValues>) -> Result<()> {
        let values = values.into();
        let (points, cells) = (self.n_points(), self.n_cells());
        let collection = if values.len() == points {
            self.attributes_mut().point_arrays_mut()
        } else if values.len() == cells {
            self.attributes_mut().cell_arrays_mut()
        } else {
            return Err(GridvizError::ShapeMismatch {
                actual: values.len(),
                points,
                cells,
            });
        };
        collection.insert(AttributeArray::new(name, values));
        Ok(())
    }

    /// Adds a field array; the length is unconstrained.
    fn set_field_array(&mut self, name: &str, values: impl Into<ArrayValues>) {
        self.attributes_mut()
            .field_arrays_mut()
            .insert(AttributeArray::new(name, values.into()));
    }

    /// Searches point, cell and field data for an array.
    fn get_array(&self, name: &str, preference: Association) -> Option<&AttributeArray> {
        self.attributes().get_array(name, preference)
    }

    /// Returns the non-NaN (min, max) of a named array.
    ///
    /// With `name` unset the active scalars array is used. Returns `None`
    /// when no such array exists or it has no finite values.
    fn get_data_range(&mut self, name: Option<&str>, preference: Association) -> Option<(f64, f64)> {
        let name = match name {
            Some(name) => name.to_string(),
            None => self.attributes_mut().active_scalars_name()?,
        };
        self.get_array(&name, preference)
            .and_then(|array| array.values().range())
    }

    /// Lists all array names, the active scalars name first.
    fn array_names(&mut self) -> Vec<String> {
        self.attributes_mut().array_names()
    }

    /// Returns the active-scalars designation, resolving lazily.
    fn active_scalars_info(&mut self) -> ActiveInfo {
        self.attributes_mut().active_scalars_info()
    }

    /// Returns the active scalars array, if any.
    fn active_scalars(&mut self) -> Option<&AttributeArray> {
        let info = self.attributes_mut().active_scalars_info();
        let name = info.name?;
        match info.association {
            Association::Point => self.attributes().point_arrays().get(&name),
            Association::Cell => self.attributes().cell_arrays().get(&name),
            Association::Field => None,
        }
    }

    /// Finds scalars by name and sets them active; `None` deactivates.
    fn set_active_scalars(&mut self, name: Option<&str>, preference: Association) -> Result<()> {
        self.attributes_mut().set_active_scalars(name, preference)
    }

    /// Returns the active-vectors designation.
    fn active_vectors_info(&mut self) -> ActiveInfo {
        self.attributes_mut().active_vectors_info()
    }

    /// Returns the active vectors array, if any.
    fn active_vectors(&mut self) -> Option<&AttributeArray> {
        let info = self.attributes_mut().active_vectors_info();
        let name = info.name?;
        match info.association {
            Association::Point => self.attributes().point_arrays().get(&name),
            Association::Cell => self.attributes().cell_arrays().get(&name),
            Association::Field => None,
        }
    }

    /// Finds vectors by name and sets them active; `None` deactivates.
    fn set_active_vectors(&mut self, name: Option<&str>, preference: Association) -> Result<()> {
        self.attributes_mut().set_active_vectors(name, preference)
    }

    /// Stores per-point vectors under the reserved key and activates them.
    fn set_vectors(&mut self, vectors: Vec<Vec3>) -> Result<()> {
        if vectors.len() != self.n_points() {
            return Err(GridvizError::SizeMismatch {
                expected: self.n_points(),
                actual: vectors.len(),
            });
        }
        self.attributes_mut()
            .point_arrays_mut()
            .insert(AttributeArray::new(DEFAULT_VECTOR_KEY, vectors));
        self.set_active_vectors(Some(DEFAULT_VECTOR_KEY), Association::Point)
    }

    /// Renames an array, keeping the active-scalars designation in step.
    fn rename_array(&mut self, old_name: &str, new_name: &str, preference: Association) -> Result<()> {
        self.attributes_mut()
            .rename_array(old_name, new_name, preference)
    }

    /// Removes an array from the named collection.
    fn remove_array(&mut self, association: Association, name: &str) -> Result<()> {
        self.attributes_mut().remove_array(association, name)
    }

    /// Removes every array from all collections.
    fn clear_arrays(&mut self) {
        self.attributes_mut().clear_arrays();
    }

    /// Returns a console-friendly header describing this dataset.
    fn head(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let _ = writeln!(out, "{}", self.type_name());
        let _ = writeln!(out, "  N Cells:\t{}", self.n_cells());
        let _ = writeln!(out, "  N Points:\t{}", self.n_points());
        let (min, max) = self.bounding_box().unwrap_or((Vec3::ZERO, Vec3::ZERO));
        let _ = writeln!(out, "  X Bounds:\t{:.3e}, {:.3e}", min.x, max.x);
        let _ = writeln!(out, "  Y Bounds:\t{:.3e}, {:.3e}", min.y, max.y);
        let _ = writeln!(out, "  Z Bounds:\t{:.3e}, {:.3e}", min.z, max.z);
        let _ = writeln!(out, "  N Arrays:\t{}", self.n_arrays());
        out
    }
}
