//! # Render Payload
//!
//! Flat, renderer-agnostic buffers for a [`Solid`], serializable to JSON.

use serde::{Deserialize, Serialize};
use shape_mesh::{ExtrusionParams, Solid};

use crate::animation::Transform;
use crate::error::PlaygroundError;

/// Bevel settings carried to the renderer when the bevel is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BevelPayload {
    /// Subdivision steps of each bevel
    pub segments: u32,
    /// Lateral offset
    pub size: f32,
    /// Depth beyond each cap
    pub thickness: f32,
}

impl BevelPayload {
    fn from_params(params: &ExtrusionParams) -> Option<Self> {
        params.bevel_enabled.then(|| Self {
            segments: params.bevel_segments,
            size: params.bevel_size as f32,
            thickness: params.bevel_thickness as f32,
        })
    }
}

/// Buffers handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPayload {
    /// Shape kind name
    pub kind: String,
    /// Counter-clockwise outline in the XY plane
    pub outline: Vec<[f32; 2]>,
    /// Extrusion thickness
    pub depth: f32,
    /// Bevel settings, `None` when the bevel is disabled
    pub bevel: Option<BevelPayload>,
    /// Flat xyz positions
    pub vertices: Vec<f32>,
    /// Triangle vertex indices, three per triangle
    pub indices: Vec<u32>,
    /// Flat xyz per-vertex normals, empty when not computed
    pub normals: Vec<f32>,
    /// Column-major model matrix
    pub transform: [f32; 16],
}

/// Counts and extents, printed instead of the full buffers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadSummary {
    /// Shape kind name
    pub kind: String,
    pub outline_points: usize,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub depth: f32,
    pub bevelled: bool,
    /// Bounding box corners of the untransformed vertices
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl RenderPayload {
    /// Flattens `solid` and `transform` into renderer buffers.
    pub fn from_solid(kind: &str, solid: &Solid, transform: &Transform) -> Self {
        let mesh = solid.mesh();
        Self {
            kind: kind.to_string(),
            outline: solid
                .outline()
                .iter()
                .map(|p| [p.x as f32, p.y as f32])
                .collect(),
            depth: solid.params().thickness as f32,
            bevel: BevelPayload::from_params(solid.params()),
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32().unwrap_or_default(),
            transform: transform.matrix().as_mat4().to_cols_array(),
        }
    }

    /// Number of xyz positions.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of index triples.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Counts and bounding box of the vertex buffer.
    pub fn summary(&self) -> PayloadSummary {
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        for vertex in self.vertices.chunks_exact(3) {
            for axis in 0..3 {
                min[axis] = min[axis].min(vertex[axis]);
                max[axis] = max[axis].max(vertex[axis]);
            }
        }
        if self.vertices.is_empty() {
            min = [0.0; 3];
            max = [0.0; 3];
        }

        PayloadSummary {
            kind: self.kind.clone(),
            outline_points: self.outline.len(),
            vertex_count: self.vertex_count(),
            triangle_count: self.triangle_count(),
            depth: self.depth,
            bevelled: self.bevel.is_some(),
            min,
            max,
        }
    }

    /// Serializes the full payload as compact JSON.
    pub fn to_json(&self) -> Result<String, PlaygroundError> {
        Ok(serde_json::to_string(self)?)
    }
}
