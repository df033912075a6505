//! # Captured Randomness
//!
//! Random values drawn once per session and reused by every generation call,
//! so a star keeps its wonky tips and a cloud keeps its puffs while unrelated
//! parameters are edited.
//!
//! Any [`rand::Rng`] can be used as the source. Tests and reproducible
//! callers pass a seeded generator such as `StdRng::seed_from_u64`.

use config::constants::{
    CLOUD_INFLUENCE_MAX, CLOUD_INFLUENCE_MIN, CLOUD_JITTER_MAX, MAX_CLOUD_CONTROL_POINTS,
    MIN_CLOUD_CONTROL_POINTS, RANDOM_SAMPLE_POOL_SIZE,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::OutlineError;

/// Fixed pool of uniform `[0, 1)` samples used to perturb star tips.
///
/// # Example
///
/// ```rust
/// use shape_outline::RandomSamples;
///
/// let samples = RandomSamples::from_values(vec![0.25, 0.5, 0.75])?;
/// assert_eq!(samples.len(), 3);
/// assert!(RandomSamples::from_values(vec![1.0]).is_err());
/// # Ok::<(), shape_outline::OutlineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RandomSamples(Vec<f64>);

impl RandomSamples {
    /// Draws a full pool of `RANDOM_SAMPLE_POOL_SIZE` samples.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self((0..RANDOM_SAMPLE_POOL_SIZE).map(|_| rng.gen::<f64>()).collect())
    }

    /// Wraps previously captured samples, each of which must lie in `[0, 1)`.
    pub fn from_values(values: Vec<f64>) -> Result<Self, OutlineError> {
        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(OutlineError::invalid_parameter(format!(
                "random samples must lie in [0, 1), got {bad}"
            )));
        }
        Ok(Self(values))
    }

    /// A pool of `len` zeros; with zero wonkiness the values are irrelevant.
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the pool is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the samples as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Per-anchor randomness of a cloud control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorJitter {
    /// Offset added to the anchor's x coordinate, in `[0, 0.25)`
    pub xr: f64,
    /// Offset added to the anchor's y coordinate, in `[0, 0.25)`
    pub yr: f64,
    /// Handle length of the Bezier segments touching this anchor, in `[0.5, 1.5)`
    pub influence: f64,
}

impl AnchorJitter {
    /// Checks that the jitter and influence lie in their sampling ranges.
    pub fn validate(&self) -> Result<(), OutlineError> {
        for (name, value) in [("xr", self.xr), ("yr", self.yr)] {
            if !(0.0..CLOUD_JITTER_MAX).contains(&value) {
                return Err(OutlineError::invalid_parameter(format!(
                    "anchor {name} must lie in [0, {CLOUD_JITTER_MAX}), got {value}"
                )));
            }
        }
        if !(CLOUD_INFLUENCE_MIN..CLOUD_INFLUENCE_MAX).contains(&self.influence) {
            return Err(OutlineError::invalid_parameter(format!(
                "anchor influence must lie in [{CLOUD_INFLUENCE_MIN}, {CLOUD_INFLUENCE_MAX}), got {}",
                self.influence
            )));
        }
        Ok(())
    }

    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            xr: rng.gen_range(0.0..CLOUD_JITTER_MAX),
            yr: rng.gen_range(0.0..CLOUD_JITTER_MAX),
            influence: rng.gen_range(CLOUD_INFLUENCE_MIN..CLOUD_INFLUENCE_MAX),
        }
    }
}

/// Captured randomness of a cloud: the control point count and the jitter of
/// each control point.
///
/// Anchor positions are not stored; they are recomputed from the cloud's
/// width and height so those stay tunable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlRing {
    anchors: Vec<AnchorJitter>,
}

impl ControlRing {
    /// Draws a ring of 6 to 9 control points (inclusive).
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let count = rng.gen_range(MIN_CLOUD_CONTROL_POINTS..=MAX_CLOUD_CONTROL_POINTS);
        Self {
            anchors: (0..count).map(|_| AnchorJitter::generate(rng)).collect(),
        }
    }

    /// Wraps previously captured anchors, each of which must pass
    /// [`AnchorJitter::validate`].
    ///
    /// The anchor count is not checked here; generating a cloud from fewer
    /// than 6 anchors fails with [`OutlineError::InsufficientEntropy`].
    pub fn from_anchors(anchors: Vec<AnchorJitter>) -> Result<Self, OutlineError> {
        for anchor in &anchors {
            anchor.validate()?;
        }
        Ok(Self { anchors })
    }

    /// Returns the number of control points.
    #[inline]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Returns true if the ring has no control points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Returns the anchors in ring order.
    #[inline]
    pub fn anchors(&self) -> &[AnchorJitter] {
        &self.anchors
    }
}

/// All randomness a shape session needs, captured once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntropy {
    /// Star tip perturbation pool
    pub samples: RandomSamples,
    /// Cloud control ring
    pub ring: ControlRing,
}

impl ShapeEntropy {
    /// Bundles previously captured samples and ring.
    pub fn new(samples: RandomSamples, ring: ControlRing) -> Self {
        Self { samples, ring }
    }

    /// Draws a fresh sample pool and control ring from `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let samples = RandomSamples::generate(rng);
        let ring = ControlRing::generate(rng);
        log::debug!(
            "captured {} random samples and a {}-point control ring",
            samples.len(),
            ring.len()
        );
        Self { samples, ring }
    }
}
