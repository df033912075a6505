//! # Shape Mesh
//!
//! Solid builder for the shape playground. Extrudes the closed outlines
//! produced by `shape-outline` into triangle meshes for a renderer.
//!
//! ## Architecture
//!
//! ```text
//! shape-outline (Outline) → shape-mesh (Solid { outline, params, mesh }) → renderer
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust with no native dependencies:
//! - **Extrusion**: layered prism with a quarter-circle bevel profile
//! - **Bevel offsets**: per-vertex miter vectors, capped at sharp tips
//! - **Triangulation**: Ear clipping for concave caps
//!
//! ## Usage
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use shape_mesh::{generate_solid, ExtrusionParams};
//! use shape_outline::{ShapeEntropy, ShapeKind};
//!
//! let entropy = ShapeEntropy::generate(&mut StdRng::seed_from_u64(1));
//! let solid = generate_solid(&ShapeKind::default(), &entropy, &ExtrusionParams::default())?;
//! assert!(solid.mesh().is_closed());
//! # Ok::<(), shape_mesh::MeshError>(())
//! ```

pub mod error;
pub mod extrude;
pub mod mesh;
pub mod triangulate;

pub use error::MeshError;
pub use extrude::{extrude, prepare_outline, ExtrusionParams, Layer, Solid};
pub use mesh::Mesh;

use shape_outline::{generate_outline, ShapeEntropy, ShapeKind};

/// Generates the outline for `kind` and extrudes it.
///
/// This is the main entry point for the geometry pipeline.
///
/// # Errors
///
/// Outline failures are wrapped in [`MeshError::Outline`]; extrusion
/// failures are returned as-is.
pub fn generate_solid(
    kind: &ShapeKind,
    entropy: &ShapeEntropy,
    params: &ExtrusionParams,
) -> Result<Solid, MeshError> {
    let outline = generate_outline(kind, entropy)?;
    extrude(&outline, params)
}
