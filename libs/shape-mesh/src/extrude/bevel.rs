//! # Extrusion Layers
//!
//! An extruded solid is a stack of copies of the outline ("layers"), each at
//! a height `z` and pushed outward by `offset`. Side walls connect
//! consecutive layers; the caps close the first and last layer.
//!
//! With the bevel enabled the layers follow a quarter circle profile:
//!
//! ```text
//! z = -bevel_thickness * cos(t * pi/2)     offset = bevel_size * sin(t * pi/2)
//! z = 0, z = thickness                     offset = bevel_size
//! z = thickness + bevel_thickness * cos(t * pi/2) (mirrored)
//! ```
//!
//! for `t = b / bevel_segments`, `b` in `0..bevel_segments`.

use std::f64::consts::FRAC_PI_2;

use config::constants::{approx_zero, EPSILON, MAX_MITER_SCALE};
use glam::DVec2;

use super::ExtrusionParams;

/// A copy of the outline at height `z`, offset outward by `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Height of the layer
    pub z: f64,
    /// Outward offset of every outline edge
    pub offset: f64,
}

/// True if the parameters produce bevel layers beyond the plain prism.
fn has_bevel(params: &ExtrusionParams) -> bool {
    let flat_bevel = approx_zero(params.bevel_size) && approx_zero(params.bevel_thickness);
    params.bevel_enabled && !flat_bevel
}

/// Number of layers [`layer_schedule`] returns, computed without allocating.
///
/// Saturates instead of overflowing so callers can bound it first.
pub fn layer_count(params: &ExtrusionParams) -> usize {
    if has_bevel(params) {
        (params.bevel_segments as usize)
            .saturating_mul(2)
            .saturating_add(2)
    } else {
        2
    }
}

/// Returns the layers from bottom to top.
///
/// Callers must bound [`layer_count`] before calling this.
pub fn layer_schedule(params: &ExtrusionParams) -> Vec<Layer> {
    if !has_bevel(params) {
        return vec![
            Layer { z: 0.0, offset: 0.0 },
            Layer {
                z: params.thickness,
                offset: 0.0,
            },
        ];
    }

    let segments = params.bevel_segments as usize;
    let profile: Vec<(f64, f64)> = (0..segments)
        .map(|b| {
            let t = b as f64 / segments as f64;
            let angle = t * FRAC_PI_2;
            (
                params.bevel_thickness * angle.cos(),
                params.bevel_size * angle.sin(),
            )
        })
        .collect();

    let mut layers = Vec::with_capacity(layer_count(params));
    layers.extend(profile.iter().map(|&(dz, offset)| Layer { z: -dz, offset }));
    layers.push(Layer {
        z: 0.0,
        offset: params.bevel_size,
    });
    layers.push(Layer {
        z: params.thickness,
        offset: params.bevel_size,
    });
    layers.extend(profile.iter().rev().map(|&(dz, offset)| Layer {
        z: params.thickness + dz,
        offset,
    }));
    layers
}

/// Per-vertex miter vectors of a counter-clockwise outline.
///
/// Moving vertex `i` by `vectors[i] * d` moves both adjacent edges outward by
/// `d`. The miter length is capped at `MAX_MITER_SCALE` so very sharp tips
/// stay close to the outline.
pub fn bevel_vectors(points: &[DVec2]) -> Vec<DVec2> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];

            // For CCW outlines the outward normal of edge (dx, dy) is (dy, -dx)
            let normal1 = outward_normal(curr - prev);
            let normal2 = outward_normal(next - curr);

            let denom = 1.0 + normal1.dot(normal2);
            if denom < EPSILON {
                // Edge doubles back on itself
                return normal1;
            }

            let miter = (normal1 + normal2) / denom;
            miter.clamp_length_max(MAX_MITER_SCALE)
        })
        .collect()
}

#[inline]
fn outward_normal(edge: DVec2) -> DVec2 {
    DVec2::new(edge.y, -edge.x).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bevelled(segments: u32) -> ExtrusionParams {
        ExtrusionParams {
            thickness: 1.0,
            bevel_enabled: true,
            bevel_segments: segments,
            bevel_size: 0.1,
            bevel_thickness: 0.2,
        }
    }

    #[test]
    fn test_plain_schedule() {
        let params = ExtrusionParams {
            thickness: 0.4,
            ..ExtrusionParams::default()
        };
        let layers = layer_schedule(&params);
        assert_eq!(
            layers,
            vec![Layer { z: 0.0, offset: 0.0 }, Layer { z: 0.4, offset: 0.0 }]
        );
    }

    #[test]
    fn test_bevel_schedule_shape() {
        let layers = layer_schedule(&bevelled(3));
        assert_eq!(layers.len(), 8);

        // Outermost layers are the unmodified outline
        assert_relative_eq!(layers[0].z, -0.2);
        assert_relative_eq!(layers[0].offset, 0.0);
        assert_relative_eq!(layers[7].z, 1.2);
        assert_relative_eq!(layers[7].offset, 0.0);

        // Body is pushed out by the bevel size
        assert_eq!(layers[3], Layer { z: 0.0, offset: 0.1 });
        assert_eq!(layers[4], Layer { z: 1.0, offset: 0.1 });

        // Strictly increasing height
        assert!(layers.windows(2).all(|w| w[0].z < w[1].z));
    }

    #[test]
    fn test_bevel_schedule_is_symmetric() {
        let layers = layer_schedule(&bevelled(4));
        let n = layers.len();
        for i in 0..n / 2 {
            let (low, high) = (layers[i], layers[n - 1 - i]);
            assert_relative_eq!(low.offset, high.offset);
            assert_relative_eq!(-low.z, high.z - 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_bevel_segments() {
        let layers = layer_schedule(&bevelled(0));
        assert_eq!(
            layers,
            vec![Layer { z: 0.0, offset: 0.1 }, Layer { z: 1.0, offset: 0.1 }]
        );
    }

    #[test]
    fn test_layer_count_matches_schedule() {
        for segments in [0, 1, 3, 12] {
            let params = bevelled(segments);
            assert_eq!(layer_count(&params), layer_schedule(&params).len());
        }
        let plain = ExtrusionParams::default();
        assert_eq!(layer_count(&plain), layer_schedule(&plain).len());
    }

    #[test]
    fn test_layer_count_does_not_allocate_or_overflow() {
        assert!(layer_count(&bevelled(u32::MAX)) >= u32::MAX as usize);

        let disabled = ExtrusionParams {
            bevel_enabled: false,
            ..bevelled(u32::MAX)
        };
        assert_eq!(layer_count(&disabled), 2);
    }

    #[test]
    fn test_flat_bevel_falls_back_to_plain() {
        let params = ExtrusionParams {
            bevel_size: 0.0,
            bevel_thickness: 0.0,
            ..bevelled(3)
        };
        assert_eq!(layer_schedule(&params).len(), 2);
    }

    #[test]
    fn test_square_bevel_vectors() {
        let square = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ];
        let vectors = bevel_vectors(&square);
        assert_relative_eq!(vectors[0].x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(vectors[0].y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(vectors[2].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(vectors[2].y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sharp_tip_is_capped() {
        let sliver = [
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.1),
            DVec2::new(0.0, 0.2),
        ];
        let vectors = bevel_vectors(&sliver);
        assert!(vectors[1].length() <= MAX_MITER_SCALE + 1e-12);
        assert!(vectors[1].x > 0.0);
    }
}
