//! # Extrusion
//!
//! Sweeps a closed outline along +Z into a prism, optionally with bevelled
//! top and bottom edges.
//!
//! ## Layout
//!
//! - Body from `z = 0` to `z = thickness`
//! - With the bevel enabled the caps sit `bevel_thickness` beyond the body
//!   and the body is pushed outward by `bevel_size`
//! - Outlines are normalised to counter-clockwise winding, so triangles face
//!   outward: top cap +Z, bottom cap -Z, side walls away from the interior

mod bevel;


pub use bevel::Layer;

use config::constants::{
    DEFAULT_BEVEL_SEGMENTS, DEFAULT_BEVEL_SIZE, DEFAULT_BEVEL_THICKNESS, DEFAULT_THICKNESS, EPSILON,
    MAX_BEVEL_SEGMENTS, MAX_VERTICES, VERTEX_MERGE_EPSILON,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use shape_outline::Outline;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::triangulate::triangulate;

/// Parameters for extrusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtrusionParams {
    /// Extrusion depth along +Z
    pub thickness: f64,
    /// Chamfer the top and bottom edges
    pub bevel_enabled: bool,
    /// Subdivision steps of each bevel
    pub bevel_segments: u32,
    /// Lateral (outward) bevel offset
    pub bevel_size: f64,
    /// Bevel depth beyond each cap
    pub bevel_thickness: f64,
}

impl Default for ExtrusionParams {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            bevel_enabled: false,
            bevel_segments: DEFAULT_BEVEL_SEGMENTS,
            bevel_size: DEFAULT_BEVEL_SIZE,
            bevel_thickness: DEFAULT_BEVEL_THICKNESS,
        }
    }
}

impl ExtrusionParams {
    /// Checks that every parameter is inside its domain.
    ///
    /// Bevel values are checked even when the bevel is disabled;
    /// `bevel_segments` may not exceed `MAX_BEVEL_SEGMENTS`.
    pub fn validate(&self) -> Result<(), MeshError> {
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "thickness must be positive, got {}",
                self.thickness
            )));
        }
        for (name, value) in [
            ("bevelSize", self.bevel_size),
            ("bevelThickness", self.bevel_thickness),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MeshError::invalid_parameter(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        if self.bevel_segments > MAX_BEVEL_SEGMENTS {
            return Err(MeshError::invalid_parameter(format!(
                "bevelSegments must be at most {MAX_BEVEL_SEGMENTS}, got {}",
                self.bevel_segments
            )));
        }
        Ok(())
    }
}

/// An extruded outline ready for a renderer.
///
/// Geometry is immutable once built; placement (rotation, translation) is
/// owned by whoever renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    outline: Outline,
    params: ExtrusionParams,
    layers: Vec<Layer>,
    mesh: Mesh,
}

impl Solid {
    /// The extruded outline, counter-clockwise.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// The parameters the solid was built with.
    pub fn params(&self) -> &ExtrusionParams {
        &self.params
    }

    /// The layers from bottom to top.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of outline copies stacked along Z.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The triangle mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Consumes the solid and returns its mesh.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// Axis-aligned bounding box of the mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        self.mesh.bounding_box()
    }
}

/// Checks the closed-outline invariant and returns the outline wound
/// counter-clockwise.
///
/// # Errors
///
/// [`MeshError::InvalidGeometry`] if the outline has fewer than 3 points,
/// a non-finite coordinate, two coincident consecutive points (including
/// the implicit closing edge) or no enclosed area.
pub fn prepare_outline(outline: &Outline) -> Result<Outline, MeshError> {
    if outline.len() < 3 {
        return Err(MeshError::invalid_geometry(format!(
            "outline must have at least 3 points, got {}",
            outline.len()
        )));
    }

    if let Some(p) = outline.iter().find(|p| !p.is_finite()) {
        return Err(MeshError::invalid_geometry(format!(
            "outline point {p} is not finite"
        )));
    }

    if let Some(i) = outline
        .edges()
        .position(|(a, b)| a.distance(b) < VERTEX_MERGE_EPSILON)
    {
        return Err(MeshError::invalid_geometry(format!(
            "outline points {i} and {} coincide",
            (i + 1) % outline.len()
        )));
    }

    let area = outline.signed_area();
    if area.abs() < EPSILON {
        return Err(MeshError::invalid_geometry("outline encloses no area"));
    }

    Ok(if area < 0.0 {
        outline.reversed()
    } else {
        outline.clone()
    })
}

/// Extrudes a closed outline into a solid.
///
/// # Arguments
///
/// * `outline` - Closed outline; either winding is accepted
/// * `params` - Extrusion parameters
///
/// # Errors
///
/// - [`MeshError::InvalidParameter`] if `params` fails validation
/// - [`MeshError::InvalidGeometry`] if the outline fails [`prepare_outline`]
/// - [`MeshError::TooManyVertices`] if the solid would exceed `MAX_VERTICES`
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use shape_mesh::{extrude, ExtrusionParams};
/// use shape_outline::Outline;
///
/// let square = Outline::new(vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ]);
/// let solid = extrude(&square, &ExtrusionParams { thickness: 2.0, ..Default::default() })?;
///
/// // 4 bottom + 4 top vertices, 8 side + 2 bottom + 2 top triangles
/// assert_eq!(solid.mesh().vertex_count(), 8);
/// assert_eq!(solid.mesh().triangle_count(), 12);
/// # Ok::<(), shape_mesh::MeshError>(())
/// ```
pub fn extrude(outline: &Outline, params: &ExtrusionParams) -> Result<Solid, MeshError> {
    params.validate()?;
    let outline = prepare_outline(outline)?;

    let points = outline.points();
    let n = points.len();

    // Bound the mesh size before allocating any layer
    let vertex_count = n.saturating_mul(bevel::layer_count(params));
    if vertex_count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: vertex_count,
            max: MAX_VERTICES,
        });
    }
    let layers = bevel::layer_schedule(params);

    let cap = triangulate(points);
    let movements = if layers.iter().any(|layer| layer.offset != 0.0) {
        bevel::bevel_vectors(points)
    } else {
        vec![DVec2::ZERO; n]
    };

    let mut mesh = Mesh::with_capacity(vertex_count, 2 * n * (layers.len() - 1) + 2 * cap.len());

    for layer in &layers {
        log::trace!("layer z={:.4} offset={:.4}", layer.z, layer.offset);
        for (p, m) in points.iter().zip(&movements) {
            let moved = *p + *m * layer.offset;
            mesh.add_vertex(DVec3::new(moved.x, moved.y, layer.z));
        }
    }

    // Side walls: two triangles per edge between consecutive layers
    for level in 0..layers.len() - 1 {
        let base = (level * n) as u32;
        let next_base = ((level + 1) * n) as u32;

        for i in 0..n as u32 {
            let i_next = (i + 1) % n as u32;
            mesh.add_triangle(base + i, base + i_next, next_base + i_next);
            mesh.add_triangle(base + i, next_base + i_next, next_base + i);
        }
    }

    // Bottom cap faces -Z, top cap faces +Z
    let top_base = ((layers.len() - 1) * n) as u32;
    for &[a, b, c] in &cap {
        mesh.add_triangle(a as u32, c as u32, b as u32);
    }
    for &[a, b, c] in &cap {
        mesh.add_triangle(top_base + a as u32, top_base + b as u32, top_base + c as u32);
    }

    mesh.compute_normals();

    log::debug!(
        "extruded {n}-point outline into {} layers ({} vertices, {} triangles)",
        layers.len(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(Solid {
        outline,
        params: params.clone(),
        layers,
        mesh,
    })
}
