//! # Config Crate
//!
//! Centralized configuration constants for the shape playground.
//! All magic numbers and tunable parameters are defined here so the outline
//! generator, the solid builder and the playground host agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_BRANCHES, RANDOM_SAMPLE_POOL_SIZE};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // The default star fits in the random sample pool
//! assert!(2 * DEFAULT_BRANCHES as usize <= RANDOM_SAMPLE_POOL_SIZE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Control Panel Compatible**: Defaults and ranges match the live panel
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
