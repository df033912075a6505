//! # Shape Playground
//!
//! Headless host around the geometry core: it turns control-panel values into
//! shape parameters, keeps the randomness of a mounted shape stable, memoizes
//! generated geometry and packs solids into flat buffers for a renderer.
//!
//! ## Architecture
//!
//! ```text
//! ParameterSet → StarParams / ExtrusionParams
//!              → ShapeSession (ShapeEntropy, memo) → Solid
//!              → RenderPayload (+ Transform from RotationStepper)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shape_outline::ShapeKind;
//! use shape_playground::{ParameterSet, RenderPayload, ShapeSession, Transform};
//!
//! let params = ParameterSet::new().with("branches", 10u32).with("bevelEnabled", true);
//! let kind = ShapeKind::Star(params.star_params()?);
//!
//! let mut session = ShapeSession::from_seed(42);
//! let solid = session.solid(&kind, &params.extrusion_params()?)?;
//! let payload = RenderPayload::from_solid(kind.name(), &solid, &Transform::default());
//! assert_eq!(payload.outline.len(), 20);
//! # Ok::<(), shape_playground::PlaygroundError>(())
//! ```

pub mod animation;
pub mod controls;
pub mod error;
pub mod export;
pub mod logging;
pub mod params;
pub mod random;
pub mod session;

pub use animation::{RotationStepper, Transform};
pub use controls::{clamp_parameters, control, controls, ControlRange};
pub use error::PlaygroundError;
pub use export::{BevelPayload, PayloadSummary, RenderPayload};
pub use logging::{init_logging, LoggingConfig};
pub use params::{ParamValue, ParameterSet, EXTRUSION_KEYS, STAR_KEYS};
pub use random::random_star_params;
pub use session::{CacheStats, ShapeSession};
