//! VTK-format file I/O.
//!
//! Datasets read and write the VTK file family, with the reader/writer
//! picked from the file extension: legacy `.vtk` for both dataset types,
//! XML `.vtp` for [`PolyData`] and `.vtu` for [`UnstructuredGrid`].

use std::path::Path;

use glam::Vec3;
use log::warn;

use gridviz_core::array::{ArrayValues, AttributeArray};
use gridviz_core::association::Association;
use gridviz_core::error::{GridvizError, Result};
use gridviz_core::registry::AttributeRegistry;
use gridviz_core::DataSet;

use vtkio::model::{
    Attribute, ByteOrder, CellType, Cells, DataSet as VtkData, ElementType, FieldArray, IOBuffer,
    PolyDataPiece, UnstructuredGridPiece, Version, VertexNumbers, Vtk,
};

use crate::poly_data::PolyData;
use crate::unstructured_grid::{CellKind, UnstructuredGrid};

/// Extensions with a reader/writer for polygonal surfaces.
pub const POLY_DATA_EXTENSIONS: &[&str] = &["vtk", "vtp"];

/// Extensions with a reader/writer for unstructured grids.
pub const UNSTRUCTURED_GRID_EXTENSIONS: &[&str] = &["vtk", "vtu"];

/// Name of the synthetic field-data attribute used when writing.
const FIELD_DATA_NAME: &str = "FieldData";

impl PolyData {
    /// Loads a polygonal surface from a `.vtk` or `.vtp` file.
    ///
    /// Non-polygonal cells (vertices, lines, strips) in the file are
    /// ignored with a warning.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        file_extension(path, POLY_DATA_EXTENSIONS)?;
        let vtk = import(path)?;
        let source = vtk.file_path.clone();
        match vtk.data {
            VtkData::PolyData { pieces, .. } => {
                let piece = first_piece(pieces.len())?;
                let PolyDataPiece {
                    points,
                    polys,
                    verts,
                    lines,
                    strips,
                    data,
                } = pieces
                    .into_iter()
                    .nth(piece)
                    .ok_or_else(|| GridvizError::FileFormat("file holds no pieces".into()))?
                    .load_piece_data(source.as_deref())
                    .map_err(piece_error)?;
                if verts.is_some() || lines.is_some() || strips.is_some() {
                    warn!("ignoring non-polygonal cells in '{}'", path.display());
                }
                let faces = match polys {
                    Some(topology) => legacy_to_cells(topology)?,
                    None => Vec::new(),
                };
                let mut surface = Self::from_polygons(buffer_to_points(points)?, faces)?;
                vtk_attributes_into_registry(data, surface.attributes_mut());
                Ok(surface)
            }
            _ => Err(GridvizError::FileFormat(
                "file does not contain polygonal data".into(),
            )),
        }
    }

    /// Saves this surface to a `.vtk` or `.vtp` file.
    ///
    /// For legacy `.vtk` files the `binary` flag selects binary over ASCII
    /// encoding; XML files are always written in their default encoding.
    pub fn save(&self, path: impl AsRef<Path>, binary: bool) -> Result<()> {
        let path = path.as_ref();
        let extension = file_extension(path, POLY_DATA_EXTENSIONS)?;
        let vtk = Vtk {
            version: Version::new((4, 2)),
            title: String::from("gridviz polygonal surface"),
            byte_order: ByteOrder::BigEndian,
            file_path: None,
            data: VtkData::inline(PolyDataPiece {
                points: points_to_buffer(self.points()),
                polys: Some(cells_to_legacy(self.faces())?),
                data: registry_to_vtk_attributes(self.attributes()),
                ..Default::default()
            }),
        };
        export(vtk, path, &extension, binary)
    }
}

impl UnstructuredGrid {
    /// Loads a grid from a `.vtk` or `.vtu` file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        file_extension(path, UNSTRUCTURED_GRID_EXTENSIONS)?;
        let vtk = import(path)?;
        let source = vtk.file_path.clone();
        match vtk.data {
            VtkData::UnstructuredGrid { pieces, .. } => {
                let piece = first_piece(pieces.len())?;
                let UnstructuredGridPiece {
                    points,
                    cells,
                    data,
                } = pieces
                    .into_iter()
                    .nth(piece)
                    .ok_or_else(|| GridvizError::FileFormat("file holds no pieces".into()))?
                    .load_piece_data(source.as_deref())
                    .map_err(piece_error)?;
                let kinds = cells
                    .types
                    .into_iter()
                    .map(kind_from_vtk)
                    .collect::<Result<Vec<_>>>()?;
                let mut grid = Self::from_cells(
                    buffer_to_points(points)?,
                    legacy_to_cells(cells.cell_verts)?,
                    kinds,
                )?;
                vtk_attributes_into_registry(data, grid.attributes_mut());
                Ok(grid)
            }
            _ => Err(GridvizError::FileFormat(
                "file does not contain an unstructured grid".into(),
            )),
        }
    }

    /// Saves this grid to a `.vtk` or `.vtu` file.
    pub fn save(&self, path: impl AsRef<Path>, binary: bool) -> Result<()> {
        let path = path.as_ref();
        let extension = file_extension(path, UNSTRUCTURED_GRID_EXTENSIONS)?;
        let vtk = Vtk {
            version: Version::new((4, 2)),
            title: String::from("gridviz unstructured grid"),
            byte_order: ByteOrder::BigEndian,
            file_path: None,
            data: VtkData::inline(UnstructuredGridPiece {
                points: points_to_buffer(self.points()),
                cells: Cells {
                    cell_verts: cells_to_legacy(self.cells())?,
                    types: self.cell_kinds().iter().copied().map(kind_to_vtk).collect(),
                },
                data: registry_to_vtk_attributes(self.attributes()),
            }),
        };
        export(vtk, path, &extension, binary)
    }
}

fn import(path: &Path) -> Result<Vtk> {
    if !path.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("file {} does not exist", path.display()),
        )
        .into());
    }
    Vtk::import(path).map_err(vtk_error)
}

fn export(vtk: Vtk, path: &Path, extension: &str, binary: bool) -> Result<()> {
    let result = match (extension, binary) {
        ("vtk", false) => vtk.export_ascii(path),
        ("vtk", true) => vtk.export_be(path),
        _ => vtk.export(path),
    };
    result.map_err(vtk_error)
}

fn vtk_error(err: vtkio::Error) -> GridvizError {
    GridvizError::FileFormat(format!("{err:?}"))
}

// Piece loading fails with the model-level error type, not the top-level one.
fn piece_error(err: vtkio::model::Error) -> GridvizError {
    GridvizError::FileFormat(format!("{err:?}"))
}

fn first_piece(count: usize) -> Result<usize> {
    if count == 0 {
        return Err(GridvizError::FileFormat("file holds no pieces".into()));
    }
    if count > 1 {
        warn!("file holds {count} pieces; reading only the first");
    }
    Ok(0)
}

fn file_extension(path: &Path, valid: &'static [&'static str]) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if valid.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(GridvizError::UnsupportedExtension { extension, valid })
    }
}

fn flatten_vec3(values: &[Vec3]) -> Vec<f32> {
    values.iter().flat_map(|v| [v.x, v.y, v.z]).collect()
}

fn points_to_buffer(points: &[Vec3]) -> IOBuffer {
    IOBuffer::from(flatten_vec3(points))
}

fn buffer_to_points(buffer: IOBuffer) -> Result<Vec<Vec3>> {
    let coords: Vec<f32> = buffer
        .cast_into()
        .ok_or_else(|| GridvizError::FileFormat("point coordinates are not numeric".into()))?;
    Ok(coords
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect())
}

fn cells_to_legacy(cells: &[Vec<u32>]) -> Result<VertexNumbers> {
    let mut vertices = Vec::new();
    for cell in cells {
        let arity = u32::try_from(cell.len()).map_err(|_| {
            GridvizError::FileFormat("cell vertex count exceeds the legacy encoding range".into())
        })?;
        vertices.push(arity);
        vertices.extend_from_slice(cell);
    }
    let num_cells = u32::try_from(cells.len()).map_err(|_| {
        GridvizError::FileFormat("cell count exceeds the legacy encoding range".into())
    })?;
    Ok(VertexNumbers::Legacy { num_cells, vertices })
}

fn legacy_to_cells(topology: VertexNumbers) -> Result<Vec<Vec<u32>>> {
    let (num_cells, vertices) = topology.into_legacy();
    let mut cells = Vec::with_capacity(num_cells as usize);
    let mut index = 0;
    while index < vertices.len() {
        let arity = vertices[index] as usize;
        index += 1;
        let end = index + arity;
        if end > vertices.len() {
            return Err(GridvizError::FileFormat(
                "truncated cell connectivity".into(),
            ));
        }
        cells.push(vertices[index..end].to_vec());
        index = end;
    }
    Ok(cells)
}

fn kind_to_vtk(kind: CellKind) -> CellType {
    match kind {
        CellKind::Vertex => CellType::Vertex,
        CellKind::Line => CellType::Line,
        CellKind::Triangle => CellType::Triangle,
        CellKind::Quad => CellType::Quad,
        CellKind::Polygon => CellType::Polygon,
        CellKind::Tetra => CellType::Tetra,
        CellKind::Pyramid => CellType::Pyramid,
        CellKind::Wedge => CellType::Wedge,
        CellKind::Hexahedron => CellType::Hexahedron,
    }
}

fn kind_from_vtk(cell_type: CellType) -> Result<CellKind> {
    match cell_type {
        CellType::Vertex => Ok(CellKind::Vertex),
        CellType::Line => Ok(CellKind::Line),
        CellType::Triangle => Ok(CellKind::Triangle),
        CellType::Quad => Ok(CellKind::Quad),
        CellType::Polygon => Ok(CellKind::Polygon),
        CellType::Tetra => Ok(CellKind::Tetra),
        CellType::Pyramid => Ok(CellKind::Pyramid),
        CellType::Wedge => Ok(CellKind::Wedge),
        CellType::Hexahedron => Ok(CellKind::Hexahedron),
        other => Err(GridvizError::FileFormat(format!(
            "unsupported cell type {other:?}"
        ))),
    }
}

fn registry_to_vtk_attributes(registry: &AttributeRegistry) -> vtkio::model::Attributes {
    let point = registry.point_arrays().iter().map(array_to_vtk).collect();
    let mut cell: Vec<Attribute> = registry.cell_arrays().iter().map(array_to_vtk).collect();
    if !registry.field_arrays().is_empty() {
        cell.push(Attribute::Field {
            name: FIELD_DATA_NAME.to_string(),
            data_array: registry
                .field_arrays()
                .iter()
                .map(field_array_to_vtk)
                .collect(),
        });
    }
    vtkio::model::Attributes { point, cell }
}

fn array_to_vtk(array: &AttributeArray) -> Attribute {
    match array.values() {
        ArrayValues::Float(v) => Attribute::scalars(array.name(), 1).with_data(v.clone()),
        ArrayValues::Int(v) => Attribute::scalars(array.name(), 1).with_data(v.clone()),
        ArrayValues::Vector(v) => Attribute::vectors(array.name()).with_data(flatten_vec3(v)),
    }
}

fn field_array_to_vtk(array: &AttributeArray) -> FieldArray {
    match array.values() {
        ArrayValues::Float(v) => FieldArray::new(array.name(), 1).with_data(v.clone()),
        ArrayValues::Int(v) => FieldArray::new(array.name(), 1).with_data(v.clone()),
        ArrayValues::Vector(v) => FieldArray::new(array.name(), 3).with_data(flatten_vec3(v)),
    }
}

fn vtk_attributes_into_registry(data: vtkio::model::Attributes, registry: &mut AttributeRegistry) {
    for attribute in data.point {
        insert_vtk_attribute(attribute, registry, Association::Point);
    }
    for attribute in data.cell {
        insert_vtk_attribute(attribute, registry, Association::Cell);
    }
}

fn insert_vtk_attribute(
    attribute: Attribute,
    registry: &mut AttributeRegistry,
    association: Association,
) {
    match attribute {
        Attribute::DataArray(array) => {
            let name = array.name;
            let converted = match array.elem {
                ElementType::Vectors | ElementType::Normals => buffer_to_vector_values(array.data),
                ElementType::Scalars { num_comp: 1, .. } | ElementType::Generic(1) => {
                    buffer_to_scalar_values(array.data)
                }
                ElementType::Scalars { num_comp: 3, .. } | ElementType::Generic(3) => {
                    buffer_to_vector_values(array.data)
                }
                other => {
                    warn!("skipping array '{name}' with unsupported element type {other:?}");
                    return;
                }
            };
            match converted {
                Some(values) => registry
                    .arrays_mut(association)
                    .insert(AttributeArray::new(name, values)),
                None => warn!("skipping array '{name}'; values do not cast to a supported type"),
            }
        }
        Attribute::Field { data_array, .. } => {
            for field in data_array {
                let FieldArray { name, elem, data } = field;
                let converted = match elem {
                    1 => buffer_to_scalar_values(data),
                    3 => buffer_to_vector_values(data),
                    _ => {
                        warn!("skipping field array '{name}' with {elem} components");
                        continue;
                    }
                };
                match converted {
                    Some(values) => registry
                        .field_arrays_mut()
                        .insert(AttributeArray::new(name, values)),
                    None => warn!(
                        "skipping field array '{name}'; values do not cast to a supported type"
                    ),
                }
            }
        }
    }
}

fn buffer_to_scalar_values(buffer: IOBuffer) -> Option<ArrayValues> {
    if matches!(buffer, IOBuffer::F32(_) | IOBuffer::F64(_)) {
        buffer.cast_into().map(ArrayValues::Float)
    } else {
        buffer.cast_into().map(ArrayValues::Int)
    }
}

fn buffer_to_vector_values(buffer: IOBuffer) -> Option<ArrayValues> {
    let coords: Vec<f32> = buffer.cast_into()?;
    Some(ArrayValues::Vector(
        coords
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect(),
    ))
}
