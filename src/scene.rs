//! Scene files
//!
//! A scene is a declarative shape list loaded from TOML or JSON:
//!
//! ```toml
//! [[shapes]]
//! kind = "square"
//! length = 1.0
//!
//! [[shapes]]
//! kind = "circle"
//! radius = 2.0
//! ```
//!
//! Loading only deserialises; dimension validation happens when the specs
//! are turned into shapes, so a scene with a NaN dimension parses but fails
//! at [`Scene::into_shapes`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::shapes::{Area, Circle, Cube, Square};
use crate::error::{PlanimeterError, PlanimeterResult};

/// One shape entry in a scene file, tagged by `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    /// Square with a side length
    Square { length: f64 },
    /// Circle with a radius
    Circle { radius: f64 },
    /// Cube with a face area
    Cube { face: f64 },
}

impl ShapeSpec {
    /// Validate the spec and build the corresponding shape.
    pub fn into_shape(self) -> PlanimeterResult<Box<dyn Area>> {
        Ok(match self {
            ShapeSpec::Square { length } => Box::new(Square::new(length)?),
            ShapeSpec::Circle { radius } => Box::new(Circle::new(radius)?),
            ShapeSpec::Cube { face } => Box::new(Cube::new(face)?),
        })
    }
}

/// A parsed scene file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Shapes in file order
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

impl Scene {
    /// Parse a scene from TOML text.
    pub fn from_toml_str(content: &str) -> PlanimeterResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a scene from JSON text.
    pub fn from_json_str(content: &str) -> PlanimeterResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a scene from disk, picking the parser by file extension.
    pub fn load(path: &Path) -> PlanimeterResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(PlanimeterError::UnsupportedSceneFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Validate every spec and build the shape list, preserving file order.
    pub fn into_shapes(self) -> PlanimeterResult<Vec<Box<dyn Area>>> {
        self.shapes
            .into_iter()
            .map(ShapeSpec::into_shape)
            .collect()
    }
}
