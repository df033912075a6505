//! # Star Outline
//!
//! `2 * branches` vertices at evenly spaced angles. Even vertices are tips at
//! `outer_radius`, perturbed by `wonkiness`; odd vertices are notches at
//! exactly `inner_radius`. `offset` stretches the y extent by `1 + offset`.

use std::f64::consts::TAU;

use config::constants::{
    DEFAULT_BRANCHES, DEFAULT_INNER_RADIUS, DEFAULT_OFFSET, DEFAULT_OUTER_RADIUS, DEFAULT_WONKINESS,
    EPSILON,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{require_finite, require_positive, OutlineError};
use crate::outline::Outline;

/// Parameters of a star outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StarParams {
    /// Number of tips; the outline has `2 * branches` vertices
    pub branches: u32,
    /// Tip radius
    pub outer_radius: f64,
    /// Notch radius
    pub inner_radius: f64,
    /// Tip perturbation magnitude, relative to `inner_radius`
    pub wonkiness: f64,
    /// Vertical stretch; y is scaled by `1 + offset`. Values below `-1`
    /// mirror the star (clockwise outline); `-1` itself is rejected.
    pub offset: f64,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            branches: DEFAULT_BRANCHES,
            outer_radius: DEFAULT_OUTER_RADIUS,
            inner_radius: DEFAULT_INNER_RADIUS,
            wonkiness: DEFAULT_WONKINESS,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl StarParams {
    /// Number of outline vertices (`2 * branches`).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        2 * self.branches as usize
    }

    /// Checks that every parameter is inside its domain.
    pub fn validate(&self) -> Result<(), OutlineError> {
        if self.branches < 1 {
            return Err(OutlineError::invalid_parameter(
                "branches must be at least 1",
            ));
        }
        require_positive("outerRadius", self.outer_radius)?;
        require_positive("innerRadius", self.inner_radius)?;
        require_finite("wonkiness", self.wonkiness)?;
        if self.wonkiness < 0.0 {
            return Err(OutlineError::invalid_parameter(format!(
                "wonkiness must not be negative, got {}",
                self.wonkiness
            )));
        }
        require_finite("offset", self.offset)?;
        // y is scaled by 1 + offset; below -1 the star is only mirrored
        if (1.0 + self.offset).abs() < EPSILON {
            return Err(OutlineError::invalid_parameter(format!(
                "offset {} collapses the star onto the x axis",
                self.offset
            )));
        }
        Ok(())
    }
}

/// Generates a star outline.
///
/// `samples[i]` perturbs tip `i`; only the first `2 * branches` samples are
/// read and odd entries are ignored.
///
/// # Errors
///
/// - [`OutlineError::InvalidParameter`] if `params` fails validation
/// - [`OutlineError::InsufficientEntropy`] if `samples.len() < 2 * branches`
///
/// # Example
///
/// ```rust
/// use shape_outline::{star_outline, StarParams};
///
/// let params = StarParams { branches: 4, outer_radius: 2.0, inner_radius: 1.0, wonkiness: 0.0, offset: 0.0 };
/// let outline = star_outline(&params, &[0.0; 8])?;
/// assert_eq!(outline.len(), 8);
/// # Ok::<(), shape_outline::OutlineError>(())
/// ```
pub fn star_outline(params: &StarParams, samples: &[f64]) -> Result<Outline, OutlineError> {
    params.validate()?;

    let n = params.vertex_count();
    if samples.len() < n {
        return Err(OutlineError::insufficient_entropy(n, samples.len()));
    }

    let y_scale = 1.0 + params.offset;
    let points = (0..n)
        .map(|i| {
            let angle = (i as f64 / n as f64) * TAU;
            let radius = if i % 2 == 0 {
                params.outer_radius + params.wonkiness * (samples[i] - 0.5) * params.inner_radius
            } else {
                params.inner_radius
            };
            DVec2::new(angle.cos() * radius, angle.sin() * radius * y_scale)
        })
        .collect();

    Ok(Outline::new(points))
}
