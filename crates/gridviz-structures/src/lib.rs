//! Concrete dataset types built on the `gridviz-core` attribute model.
//!
//! [`PolyData`] holds polygonal surfaces and [`UnstructuredGrid`] holds
//! mixed-cell volumes; both carry an attribute registry and implement the
//! [`gridviz_core::DataSet`] trait. The `io` module adds VTK-format
//! reading and writing keyed on the file extension.

pub mod io;
pub mod poly_data;
pub mod unstructured_grid;

pub use poly_data::PolyData;
pub use unstructured_grid::{CellKind, UnstructuredGrid};
