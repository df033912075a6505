//! # Mesh Errors
//!
//! Error types for solid building.

use shape_outline::OutlineError;
use thiserror::Error;

/// Errors that can occur while building a solid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Outline generation failed upstream
    #[error("Outline error: {0}")]
    Outline(#[from] OutlineError),

    /// Out-of-domain extrusion parameter
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Outline cannot be extruded (too few points, coincident points, no area)
    #[error("Invalid geometry: {message}")]
    InvalidGeometry { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }

    /// Returns true for [`MeshError::InvalidParameter`] and for upstream
    /// [`OutlineError::InvalidParameter`].
    pub fn is_invalid_parameter(&self) -> bool {
        match self {
            Self::InvalidParameter { .. } => true,
            Self::Outline(err) => err.is_invalid_parameter(),
            _ => false,
        }
    }

    /// Returns true for [`MeshError::InvalidGeometry`].
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry { .. })
    }

    /// Returns true for upstream [`OutlineError::InsufficientEntropy`].
    pub fn is_insufficient_entropy(&self) -> bool {
        matches!(self, Self::Outline(err) if err.is_insufficient_entropy())
    }
}
