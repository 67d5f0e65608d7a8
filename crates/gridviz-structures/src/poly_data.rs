//! Polygonal surface datasets.

use std::fmt;

use glam::Vec3;

use gridviz_core::error::{GridvizError, Result};
use gridviz_core::registry::AttributeRegistry;
use gridviz_core::DataSet;

use crate::unstructured_grid::{CellKind, UnstructuredGrid};

/// A surface dataset made of polygonal faces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyData {
    points: Vec<Vec3>,
    faces: Vec<Vec<u32>>,
    attributes: AttributeRegistry,
}

impl PolyData {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a surface from points and polygonal faces.
    ///
    /// Every face index must refer to an existing point.
    pub fn from_polygons(points: Vec<Vec3>, faces: Vec<Vec<u32>>) -> Result<Self> {
        let n_points = points.len();
        for face in &faces {
            if let Some(&bad) = face.iter().find(|&&i| i as usize >= n_points) {
                return Err(GridvizError::SizeMismatch {
                    expected: n_points,
                    actual: bad as usize,
                });
            }
        }
        Ok(Self {
            points,
            faces,
            attributes: AttributeRegistry::new(),
        })
    }

    /// Returns the polygonal faces.
    #[must_use]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Overwrites this surface in place with another's geometry and data.
    pub fn overwrite(&mut self, other: Self) {
        *self = other;
    }

    /// Returns a new representation of this surface as an unstructured grid.
    ///
    /// Attribute arrays and active designations are carried over.
    #[must_use]
    pub fn cast_to_unstructured_grid(&self) -> UnstructuredGrid {
        let kinds = self
            .faces
            .iter()
            .map(|face| match face.len() {
                1 => CellKind::Vertex,
                2 => CellKind::Line,
                3 => CellKind::Triangle,
                4 => CellKind::Quad,
                _ => CellKind::Polygon,
            })
            .collect();
        UnstructuredGrid::from_parts(
            self.points.clone(),
            self.faces.clone(),
            kinds,
            self.attributes.clone(),
        )
    }
}

impl DataSet for PolyData {
    fn type_name(&self) -> &'static str {
        "PolyData"
    }

    fn points(&self) -> &[Vec3] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut [Vec3] {
        &mut self.points
    }

    fn n_cells(&self) -> usize {
        self.faces.len()
    }

    fn attributes(&self) -> &AttributeRegistry {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeRegistry {
        &mut self.attributes
    }
}

impl fmt::Display for PolyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.head())
    }
}
