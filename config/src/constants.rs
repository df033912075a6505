//! # Configuration Constants
//!
//! Centralized constants for the shape playground. Precision values, shape
//! defaults, control-panel ranges and animation rates are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Star**: Default star parameters and the random sample pool
//! - **Cloud**: Control ring and Bezier sampling parameters
//! - **Extrusion**: Depth and bevel defaults
//! - **Controls**: Live control-panel ranges
//! - **Animation**: Per-frame rotation rates

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Distance under which two outline points are treated as coincident.
///
/// Also used as the minimum triangle area accepted by mesh validation.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// fn points_coincide(a: [f64; 2], b: [f64; 2]) -> bool {
///     let dx = a[0] - b[0];
///     let dy = a[1] - b[1];
///     (dx * dx + dy * dy).sqrt() < VERTEX_MERGE_EPSILON
/// }
///
/// assert!(points_coincide([1.0, 1.0], [1.0, 1.0 + 1e-9]));
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// STAR CONSTANTS
// =============================================================================

/// Number of random perturbation samples captured once per session.
///
/// A star with `branches` points consumes `2 * branches` samples, so the pool
/// supports at most `RANDOM_SAMPLE_POOL_SIZE / 2` branches.
///
/// # Example
///
/// ```rust
/// use config::constants::{max_branches_for_pool, RANDOM_SAMPLE_POOL_SIZE};
///
/// assert_eq!(RANDOM_SAMPLE_POOL_SIZE, 32);
/// assert_eq!(max_branches_for_pool(RANDOM_SAMPLE_POOL_SIZE), 16);
/// ```
pub const RANDOM_SAMPLE_POOL_SIZE: usize = 32;

/// Default number of star branches (16 outline vertices).
pub const DEFAULT_BRANCHES: u32 = 8;

/// Default outer (tip) radius of the star.
pub const DEFAULT_OUTER_RADIUS: f64 = 2.0;

/// Default inner (notch) radius of the star.
pub const DEFAULT_INNER_RADIUS: f64 = 1.0;

/// Default perturbation magnitude applied to the star tips.
pub const DEFAULT_WONKINESS: f64 = 0.6;

/// Default vertical asymmetry factor; `0.0` keeps the star round.
pub const DEFAULT_OFFSET: f64 = 0.0;

// =============================================================================
// CLOUD CONSTANTS
// =============================================================================

/// Default cloud width; control points sit at half of it horizontally.
pub const DEFAULT_CLOUD_WIDTH: f64 = 2.0;

/// Default cloud height; control points sit at `height / 1.5` vertically.
pub const DEFAULT_CLOUD_HEIGHT: f64 = 3.0;

/// Divisor applied to the cloud height to place the control ring.
pub const CLOUD_HEIGHT_DIVISOR: f64 = 1.5;

/// Default number of samples taken from each cloud Bezier segment.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_CLOUD_STEPS, MAX_CLOUD_CONTROL_POINTS};
///
/// // Largest default cloud outline
/// let points = DEFAULT_CLOUD_STEPS as usize * MAX_CLOUD_CONTROL_POINTS;
/// assert_eq!(points, 288);
/// ```
pub const DEFAULT_CLOUD_STEPS: u32 = 32;

/// Smallest number of cloud control points drawn per ring.
pub const MIN_CLOUD_CONTROL_POINTS: usize = 6;

/// Largest number of cloud control points drawn per ring (inclusive).
pub const MAX_CLOUD_CONTROL_POINTS: usize = 9;

/// Exclusive upper bound of the per-anchor x/y jitter; the lower bound is 0.
pub const CLOUD_JITTER_MAX: f64 = 0.25;

/// Inclusive lower bound of the per-anchor handle influence.
pub const CLOUD_INFLUENCE_MIN: f64 = 0.5;

/// Exclusive upper bound of the per-anchor handle influence.
pub const CLOUD_INFLUENCE_MAX: f64 = 1.5;

// =============================================================================
// EXTRUSION CONSTANTS
// =============================================================================

/// Default extrusion depth.
pub const DEFAULT_THICKNESS: f64 = 0.4;

/// Default number of bevel subdivision steps.
pub const DEFAULT_BEVEL_SEGMENTS: u32 = 3;

/// Largest accepted number of bevel subdivision steps.
///
/// Each step adds two copies of the outline to the solid.
pub const MAX_BEVEL_SEGMENTS: u32 = 64;

/// Default lateral bevel offset.
pub const DEFAULT_BEVEL_SIZE: f64 = 0.1;

/// Default bevel depth offset.
pub const DEFAULT_BEVEL_THICKNESS: f64 = 0.2;

/// Largest miter scale applied to a bevel offset at a sharp corner.
///
/// Star tips are very sharp; an unbounded miter would shoot the offset
/// vertex far away from the outline.
pub const MAX_MITER_SCALE: f64 = 4.0;

/// Maximum number of vertices in a single mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// CONTROL PANEL CONSTANTS
// =============================================================================

/// `(min, max, step)` for the `branches` slider.
pub const BRANCHES_RANGE: (f64, f64, f64) = (7.0, 16.0, 1.0);

/// `(min, max, step)` for the `outerRadius` slider.
pub const OUTER_RADIUS_RANGE: (f64, f64, f64) = (0.5, 3.0, 0.01);

/// `(min, max, step)` for the `innerRadius` slider.
pub const INNER_RADIUS_RANGE: (f64, f64, f64) = (0.2, 2.0, 0.01);

/// `(min, max, step)` for the `thickness` slider.
pub const THICKNESS_RANGE: (f64, f64, f64) = (0.1, 2.0, 0.01);

/// `(min, max, step)` for the `wonkiness` slider.
pub const WONKINESS_RANGE: (f64, f64, f64) = (0.0, 1.0, 0.01);

/// `(min, max, step)` for the `offset` slider.
pub const OFFSET_RANGE: (f64, f64, f64) = (-0.5, 0.5, 0.01);

/// `(min, max, step)` for the `bevelSegments` slider.
pub const BEVEL_SEGMENTS_RANGE: (f64, f64, f64) = (0.0, 12.0, 1.0);

// =============================================================================
// ANIMATION CONSTANTS
// =============================================================================

/// Rotation rate around the X axis in radians per second.
pub const ROTATION_RATE_X: f64 = 0.2;

/// Rotation rate around the Y axis in radians per second.
pub const ROTATION_RATE_Y: f64 = 0.1;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the largest branch count a sample pool of `pool_size` supports.
///
/// # Example
///
/// ```rust
/// use config::constants::max_branches_for_pool;
///
/// assert_eq!(max_branches_for_pool(8), 4);
/// assert_eq!(max_branches_for_pool(3), 1);
/// ```
#[inline]
pub fn max_branches_for_pool(pool_size: usize) -> u32 {
    (pool_size / 2) as u32
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
