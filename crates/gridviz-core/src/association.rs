//! Array associations.
//!
//! Every attribute array in a dataset belongs to exactly one of three
//! collections: per-point, per-cell, or whole-dataset field data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GridvizError, Result};

/// Which collection an attribute array belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Association {
    /// One value per point.
    Point,
    /// One value per cell.
    Cell,
    /// Whole-dataset data, not tied to the geometry.
    Field,
}

impl Association {
    /// Parses a user-facing association choice.
    ///
    /// Accepts `"point"`, `"cell"` and `"field"` along with their single-letter
    /// and plural spellings, ignoring case and surrounding whitespace.
    pub fn parse(field: &str) -> Result<Self> {
        match field.trim().to_ascii_lowercase().as_str() {
            "point" | "p" | "points" => Ok(Self::Point),
            "cell" | "c" | "cells" => Ok(Self::Cell),
            "field" | "f" | "fields" => Ok(Self::Field),
            _ => Err(GridvizError::InvalidAssociation(field.to_string())),
        }
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "point",
            Self::Cell => "cell",
            Self::Field => "field",
        };
        f.write_str(name)
    }
}
