//! Unstructured grid datasets.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use gridviz_core::error::{GridvizError, Result};
use gridviz_core::registry::AttributeRegistry;
use gridviz_core::DataSet;

/// The shape of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Vertex,
    Line,
    Triangle,
    Quad,
    /// A planar polygon with any number of vertices.
    Polygon,
    Tetra,
    Pyramid,
    Wedge,
    Hexahedron,
}

impl CellKind {
    /// Returns the fixed vertex count of the cell shape, if it has one.
    #[must_use]
    pub fn num_vertices(self) -> Option<usize> {
        match self {
            Self::Vertex => Some(1),
            Self::Line => Some(2),
            Self::Triangle => Some(3),
            Self::Quad | Self::Tetra => Some(4),
            Self::Pyramid => Some(5),
            Self::Wedge => Some(6),
            Self::Hexahedron => Some(8),
            Self::Polygon => None,
        }
    }
}

/// A dataset made of arbitrarily shaped cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnstructuredGrid {
    points: Vec<Vec3>,
    cells: Vec<Vec<u32>>,
    cell_kinds: Vec<CellKind>,
    attributes: AttributeRegistry,
}

impl UnstructuredGrid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid from points, per-cell connectivity and cell kinds.
    ///
    /// The kind list must be as long as the cell list, fixed-arity kinds
    /// must match their connectivity length, and every index must refer to
    /// an existing point.
    pub fn from_cells(
        points: Vec<Vec3>,
        cells: Vec<Vec<u32>>,
        cell_kinds: Vec<CellKind>,
    ) -> Result<Self> {
        if cells.len() != cell_kinds.len() {
            return Err(GridvizError::SizeMismatch {
                expected: cells.len(),
                actual: cell_kinds.len(),
            });
        }
        let n_points = points.len();
        for (cell, kind) in cells.iter().zip(&cell_kinds) {
            if let Some(expected) = kind.num_vertices() {
                if cell.len() != expected {
                    return Err(GridvizError::SizeMismatch {
                        expected,
                        actual: cell.len(),
                    });
                }
            }
            if let Some(&bad) = cell.iter().find(|&&i| i as usize >= n_points) {
                return Err(GridvizError::SizeMismatch {
                    expected: n_points,
                    actual: bad as usize,
                });
            }
        }
        Ok(Self {
            points,
            cells,
            cell_kinds,
            attributes: AttributeRegistry::new(),
        })
    }

    pub(crate) fn from_parts(
        points: Vec<Vec3>,
        cells: Vec<Vec<u32>>,
        cell_kinds: Vec<CellKind>,
        attributes: AttributeRegistry,
    ) -> Self {
        Self {
            points,
            cells,
            cell_kinds,
            attributes,
        }
    }

    /// Returns the per-cell connectivity.
    #[must_use]
    pub fn cells(&self) -> &[Vec<u32>] {
        &self.cells
    }

    /// Returns the per-cell shapes.
    #[must_use]
    pub fn cell_kinds(&self) -> &[CellKind] {
        &self.cell_kinds
    }

    /// Overwrites this grid in place with another's geometry and data.
    pub fn overwrite(&mut self, other: Self) {
        *self = other;
    }
}

impl DataSet for UnstructuredGrid {
    fn type_name(&self) -> &'static str {
        "UnstructuredGrid"
    }

    fn points(&self) -> &[Vec3] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut [Vec3] {
        &mut self.points
    }

    fn n_cells(&self) -> usize {
        self.cells.len()
    }

    fn attributes(&self) -> &AttributeRegistry {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeRegistry {
        &mut self.attributes
    }
}

impl fmt::Display for UnstructuredGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.head())
    }
}
