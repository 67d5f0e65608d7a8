//! gridviz: dataset attribute bookkeeping and VTK-format geometry handling.
//!
//! A dataset carries named data arrays in three collections (point, cell and
//! field association) together with an *active* scalar and vector selection
//! that downstream consumers read without naming an array each time. The
//! registry keeps those selections consistent across insertion, activation,
//! renaming and removal, and resolves a sensible default lazily when nothing
//! was chosen explicitly.
//!
//! # Quick Start
//!
//! ```
//! use gridviz::*;
//!
//! fn main() -> Result<()> {
//!     let points = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
//!     let mut surface = PolyData::from_polygons(points, vec![vec![0, 1, 2]])?;
//!
//!     // Arrays are placed by length: three values match the point count.
//!     surface.set_array("elevation", vec![0.0f32, 0.5, 1.0])?;
//!
//!     // The first usable array becomes the active scalars on demand.
//!     let info = surface.active_scalars_info();
//!     assert_eq!(info.name.as_deref(), Some("elevation"));
//!
//!     surface.rename_array("elevation", "height", Association::Point)?;
//!     assert_eq!(surface.active_scalars_info().name.as_deref(), Some("height"));
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! - `gridviz-core` holds the attribute model, the active-array registry,
//!   the [`DataSet`] trait and closed-form point transformations.
//! - `gridviz-structures` holds [`PolyData`] and [`UnstructuredGrid`] plus
//!   extension-keyed VTK file I/O.
//! - This crate re-exports both and adds scene [`Light`]s.

pub mod light;

pub use gridviz_core::{
    array::{ArrayValues, AttributeArray},
    association::Association,
    attributes::Attributes,
    dataset::{DataSet, DEFAULT_VECTOR_KEY},
    error::{GridvizError, Result},
    registry::{is_excluded, ActiveInfo, AttributeRegistry, EXCLUDED_NAMES},
    transform::{
        apply_transformation_to_points, axis_angle_rotation, axis_rotation, reflection, Axis,
    },
    Mat3, Mat4, Vec2, Vec3, Vec4,
};

pub use gridviz_structures::{
    io::{POLY_DATA_EXTENSIONS, UNSTRUCTURED_GRID_EXTENSIONS},
    CellKind, PolyData, UnstructuredGrid,
};

pub use light::{Light, LightType};
