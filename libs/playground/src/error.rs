//! # Playground Errors
//!
//! Error types for parameter parsing, memoized generation and export.

use shape_mesh::MeshError;
use shape_outline::OutlineError;
use thiserror::Error;

/// Errors surfaced to the UI layer.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// Key not recognised by the parameter source
    #[error("Unknown parameter: {key}")]
    UnknownParameter { key: String },

    /// Value of the wrong type for its key
    #[error("Type mismatch for {key}: expected {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    /// Value of the right type but outside what the key can represent
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// Malformed `key=value` assignment
    #[error("Malformed assignment '{0}': expected key=value")]
    MalformedAssignment(String),

    /// Outline generation failed
    #[error("Outline error: {0}")]
    Outline(#[from] OutlineError),

    /// Extrusion failed
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// Payload serialization failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PlaygroundError {
    /// Creates an invalid value error.
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// True for out-of-domain values, whichever layer rejected them.
    pub fn is_invalid_parameter(&self) -> bool {
        match self {
            Self::InvalidValue { .. } => true,
            Self::Outline(err) => err.is_invalid_parameter(),
            Self::Mesh(err) => err.is_invalid_parameter(),
            _ => false,
        }
    }

    /// True if the outline could not be extruded.
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::Mesh(err) if err.is_invalid_geometry())
    }

    /// True if the captured randomness was too small for the shape.
    pub fn is_insufficient_entropy(&self) -> bool {
        match self {
            Self::Outline(err) => err.is_insufficient_entropy(),
            Self::Mesh(err) => err.is_insufficient_entropy(),
            _ => false,
        }
    }
}
