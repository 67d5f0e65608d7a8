//! Error types for gridviz.

use thiserror::Error;

use crate::association::Association;

/// The main error type for gridviz operations.
#[derive(Error, Debug)]
pub enum GridvizError {
    /// A data array with the given name was not found in any searched collection.
    #[error("data array '{0}' not present in this dataset")]
    ArrayNotFound(String),

    /// The given string does not name a supported array association.
    #[error("data association ({0}) not supported")]
    InvalidAssociation(String),

    /// The array's association does not support the requested operation.
    #[error("{0} arrays are not usable for this operation")]
    AssociationNotUsable(Association),

    /// An array's length matches neither the point count nor the cell count.
    #[error(
        "array of length {actual} matches neither the number of points ({points}) \
         nor the number of cells ({cells}); add field data explicitly"
    )]
    ShapeMismatch {
        actual: usize,
        points: usize,
        cells: usize,
    },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Rotation about a zero-length axis is undefined.
    #[error("cannot rotate around a zero-length axis")]
    ZeroAxis,

    /// Reflection across a zero-length plane normal is undefined.
    #[error("reflection plane normal cannot be zero")]
    ZeroNormal,

    /// The given string does not name a light type.
    #[error("invalid light type '{0}'")]
    InvalidLightType(String),

    /// A file extension the dataset type has no reader or writer for.
    #[error("invalid file extension '.{extension}' for this data type; must be one of: {valid:?}")]
    UnsupportedExtension {
        extension: String,
        valid: &'static [&'static str],
    },

    /// A mesh file could not be parsed or written.
    #[error("VTK file error: {0}")]
    FileFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for gridviz operations.
pub type Result<T> = std::result::Result<T, GridvizError>;
