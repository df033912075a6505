//! # Shape Session
//!
//! Owns the randomness captured when a shape is first shown and memoizes the
//! last outline and solid, so moving an unrelated slider never reshuffles
//! the shape or rebuilds unchanged geometry.
//!
//! ## Example
//!
//! ```rust
//! use shape_mesh::ExtrusionParams;
//! use shape_outline::ShapeKind;
//! use shape_playground::ShapeSession;
//!
//! let mut session = ShapeSession::from_seed(7);
//! let kind = ShapeKind::default();
//! let first = session.solid(&kind, &ExtrusionParams::default())?;
//! let second = session.solid(&kind, &ExtrusionParams::default())?;
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! # Ok::<(), shape_playground::PlaygroundError>(())
//! ```

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shape_mesh::{extrude, ExtrusionParams, Solid};
use shape_outline::{generate_outline, Outline, ShapeEntropy, ShapeKind};

use crate::error::PlaygroundError;

/// Hit/miss counters across both memo slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from a memo
    pub hits: u64,
    /// Lookups that regenerated geometry
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups served from the memo, 0 when nothing was asked.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug)]
struct OutlineEntry {
    kind: ShapeKind,
    outline: Arc<Outline>,
}

#[derive(Debug)]
struct SolidEntry {
    kind: ShapeKind,
    params: ExtrusionParams,
    solid: Arc<Solid>,
}

/// One mounted shape: fixed randomness plus single-slot memos.
#[derive(Debug)]
pub struct ShapeSession {
    entropy: ShapeEntropy,
    outline: Option<OutlineEntry>,
    solid: Option<SolidEntry>,
    stats: CacheStats,
}

impl ShapeSession {
    /// Captures fresh randomness from `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_entropy(ShapeEntropy::generate(rng))
    }

    /// Captures randomness from a seeded generator.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(&mut StdRng::seed_from_u64(seed))
    }

    /// Uses previously captured randomness.
    pub fn with_entropy(entropy: ShapeEntropy) -> Self {
        Self {
            entropy,
            outline: None,
            solid: None,
            stats: CacheStats::default(),
        }
    }

    /// The randomness captured for this session.
    pub fn entropy(&self) -> &ShapeEntropy {
        &self.entropy
    }

    /// Memo hit/miss counters since construction.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Replaces the captured randomness and drops both memos.
    ///
    /// This is the only way the shape of a session changes for unchanged
    /// parameters.
    pub fn remount<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.entropy = ShapeEntropy::generate(rng);
        self.outline = None;
        self.solid = None;
        log::debug!("session remounted with fresh randomness");
    }

    /// Returns the outline for `kind`, regenerating only when `kind` differs
    /// from the memoized one.
    ///
    /// # Errors
    ///
    /// Outline errors are returned and the previous memo is kept.
    pub fn outline(&mut self, kind: &ShapeKind) -> Result<Arc<Outline>, PlaygroundError> {
        if let Some(entry) = &self.outline {
            if entry.kind == *kind {
                self.stats.hits += 1;
                log::debug!("outline memo hit ({})", kind.name());
                return Ok(Arc::clone(&entry.outline));
            }
        }

        self.stats.misses += 1;
        log::debug!("outline memo miss ({})", kind.name());
        let outline = Arc::new(generate_outline(kind, &self.entropy)?);
        self.outline = Some(OutlineEntry {
            kind: kind.clone(),
            outline: Arc::clone(&outline),
        });
        Ok(outline)
    }

    /// Returns the solid for `kind` and `params`, rebuilding only when either
    /// differs from the memoized pair.
    ///
    /// # Errors
    ///
    /// Outline or extrusion errors are returned and the previous memo is
    /// kept, so [`ShapeSession::last_solid`] still yields the last good
    /// solid.
    pub fn solid(
        &mut self,
        kind: &ShapeKind,
        params: &ExtrusionParams,
    ) -> Result<Arc<Solid>, PlaygroundError> {
        if let Some(entry) = &self.solid {
            if entry.kind == *kind && entry.params == *params {
                self.stats.hits += 1;
                log::debug!("solid memo hit ({})", kind.name());
                return Ok(Arc::clone(&entry.solid));
            }
        }

        self.stats.misses += 1;
        log::debug!("solid memo miss ({})", kind.name());
        let outline = self.outline(kind)?;
        let solid = Arc::new(extrude(&outline, params)?);
        self.solid = Some(SolidEntry {
            kind: kind.clone(),
            params: params.clone(),
            solid: Arc::clone(&solid),
        });
        Ok(solid)
    }

    /// The last successfully built solid, if any.
    pub fn last_solid(&self) -> Option<Arc<Solid>> {
        self.solid.as_ref().map(|entry| Arc::clone(&entry.solid))
    }
}
