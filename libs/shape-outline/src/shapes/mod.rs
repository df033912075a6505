//! # Shape Outlines
//!
//! Outline generators for the supported shape kinds:
//! - **star**: alternating tip/notch vertices sampled on a circle
//! - **cloud**: jittered control ring joined by cubic Bezier segments

mod cloud;
mod star;

#[cfg(test)]
mod tests;

pub use cloud::{cloud_outline, CloudParams};
pub use star::{star_outline, StarParams};

use serde::{Deserialize, Serialize};

use crate::entropy::ShapeEntropy;
use crate::error::OutlineError;
use crate::outline::Outline;

/// Shape kind together with its parameters.
///
/// Equality is used by callers to memoize generated outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeKind {
    /// Star polygon
    Star(StarParams),
    /// Cloud blob
    Cloud(CloudParams),
}

impl ShapeKind {
    /// Short lowercase name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Star(_) => "star",
            Self::Cloud(_) => "cloud",
        }
    }
}

impl Default for ShapeKind {
    fn default() -> Self {
        Self::Star(StarParams::default())
    }
}

/// Generates the outline for `kind` from previously captured randomness.
///
/// Deterministic given `entropy`: stars read `entropy.samples`, clouds read
/// `entropy.ring`.
///
/// # Errors
///
/// - [`OutlineError::InvalidParameter`] for out-of-domain parameters
/// - [`OutlineError::InsufficientEntropy`] if the sample pool is shorter than
///   `2 * branches` or the control ring has fewer than 6 anchors
pub fn generate_outline(kind: &ShapeKind, entropy: &ShapeEntropy) -> Result<Outline, OutlineError> {
    let outline = match kind {
        ShapeKind::Star(params) => star_outline(params, entropy.samples.as_slice())?,
        ShapeKind::Cloud(params) => cloud_outline(params, &entropy.ring)?,
    };
    log::trace!("generated {} outline with {} points", kind.name(), outline.len());
    Ok(outline)
}
