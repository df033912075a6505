//! # Cloud Outline
//!
//! A stylized blob built from a ring of `k` control points placed evenly on
//! an ellipse of half-width `width / 2` and half-height `height / 1.5`.
//! Each anchor is shifted by its captured `(xr, yr)` jitter. Consecutive
//! anchors (wrapping around) are joined by a cubic Bezier whose handles
//! point radially outward from each anchor with length equal to that
//! anchor's influence, which gives the puffy lobes.
//!
//! The outline may self-intersect slightly; it is a stylized shape.

use std::f64::consts::TAU;

use config::constants::{
    CLOUD_HEIGHT_DIVISOR, DEFAULT_CLOUD_HEIGHT, DEFAULT_CLOUD_STEPS, DEFAULT_CLOUD_WIDTH,
    MIN_CLOUD_CONTROL_POINTS,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::bezier::CubicBezier2;
use crate::entropy::ControlRing;
use crate::error::{require_positive, OutlineError};
use crate::outline::Outline;

/// Parameters of a cloud outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudParams {
    /// Full width of the control ellipse
    pub width: f64,
    /// Height of the control ellipse before the `1.5` divisor
    pub height: f64,
    /// Samples taken from each Bezier segment
    pub steps: u32,
}

impl Default for CloudParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_CLOUD_WIDTH,
            height: DEFAULT_CLOUD_HEIGHT,
            steps: DEFAULT_CLOUD_STEPS,
        }
    }
}

impl CloudParams {
    /// Checks that every parameter is inside its domain.
    pub fn validate(&self) -> Result<(), OutlineError> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        Ok(())
    }
}

/// A jittered control point with its handle direction and length.
#[derive(Debug, Clone, Copy)]
struct Anchor {
    position: DVec2,
    direction: DVec2,
    influence: f64,
}

impl Anchor {
    #[inline]
    fn handle(&self) -> DVec2 {
        self.position + self.direction * self.influence
    }
}

fn place_anchors(params: &CloudParams, ring: &ControlRing) -> Vec<Anchor> {
    let k = ring.len();
    let half_width = params.width * 0.5;
    let half_height = params.height / CLOUD_HEIGHT_DIVISOR;

    ring.anchors()
        .iter()
        .enumerate()
        .map(|(n, jitter)| {
            let angle = n as f64 * (TAU / k as f64);
            let (sin, cos) = angle.sin_cos();
            Anchor {
                position: DVec2::new(cos * half_width + jitter.xr, sin * half_height + jitter.yr),
                direction: DVec2::new(cos, sin),
                influence: jitter.influence,
            }
        })
        .collect()
}

/// Returns the `k` Bezier segments of the cloud, segment `n` running from
/// anchor `n - 1` (wrapping) to anchor `n`.
pub(crate) fn cloud_segments(
    params: &CloudParams,
    ring: &ControlRing,
) -> Result<Vec<CubicBezier2>, OutlineError> {
    params.validate()?;
    if ring.len() < MIN_CLOUD_CONTROL_POINTS {
        return Err(OutlineError::insufficient_entropy(
            MIN_CLOUD_CONTROL_POINTS,
            ring.len(),
        ));
    }

    let anchors = place_anchors(params, ring);
    let k = anchors.len();
    let segments = (0..k)
        .map(|n| {
            let prev = &anchors[(n + k - 1) % k];
            let curr = &anchors[n];
            CubicBezier2::new(prev.position, prev.handle(), curr.handle(), curr.position)
        })
        .collect();

    Ok(segments)
}

/// Generates a cloud outline with `params.steps * ring.len()` points.
///
/// `steps = 0` yields an empty outline; it is not an error here, but the
/// solid builder rejects it.
///
/// # Errors
///
/// - [`OutlineError::InvalidParameter`] if `params` fails validation
/// - [`OutlineError::InsufficientEntropy`] if `ring` has fewer than 6 anchors
pub fn cloud_outline(params: &CloudParams, ring: &ControlRing) -> Result<Outline, OutlineError> {
    let segments = cloud_segments(params, ring)?;

    let mut points = Vec::with_capacity(segments.len() * params.steps as usize);
    for segment in &segments {
        points.extend(segment.sample(params.steps));
    }

    Ok(Outline::new(points))
}
