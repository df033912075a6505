//! # Shape Outline
//!
//! Procedural 2D outline generation for the shape playground.
//! Turns a small set of numeric parameters into a closed polygon outline
//! that the solid builder in `shape-mesh` extrudes into a 3D mesh.
//!
//! ## Architecture
//!
//! ```text
//! ShapeKind + ShapeEntropy → generate_outline → Outline → shape-mesh (Solid)
//! ```
//!
//! ## Shapes
//!
//! - **Star**: alternating outer/inner vertices, outer tips perturbed by a
//!   captured pool of random samples
//! - **Cloud**: a ring of 6 to 9 jittered control points joined by cubic
//!   Bezier segments, each sampled at a fixed number of steps
//!
//! ## Randomness
//!
//! Generation is deterministic given a [`ShapeEntropy`]. The entropy is drawn
//! once from any [`rand::Rng`] and reused, so unrelated parameter edits do
//! not reshuffle the shape.
//!
//! ## Usage
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use shape_outline::{generate_outline, ShapeEntropy, ShapeKind, StarParams};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let entropy = ShapeEntropy::generate(&mut rng);
//!
//! let outline = generate_outline(&ShapeKind::Star(StarParams::default()), &entropy)?;
//! assert_eq!(outline.len(), 16);
//! # Ok::<(), shape_outline::OutlineError>(())
//! ```

pub mod bezier;
pub mod entropy;
pub mod error;
pub mod outline;
pub mod shapes;

pub use bezier::CubicBezier2;
pub use entropy::{AnchorJitter, ControlRing, RandomSamples, ShapeEntropy};
pub use error::OutlineError;
pub use outline::Outline;
pub use shapes::{cloud_outline, generate_outline, star_outline, CloudParams, ShapeKind, StarParams};
