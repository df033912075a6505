//! Randomized star preset for the "randomize" button.

use rand::Rng;
use shape_mesh::ExtrusionParams;
use shape_outline::StarParams;

/// Picks a random, always-valid star and extrusion thickness.
///
/// Ranges: branches `8..=14`, outer radius `[0.8, 1.2)`, inner radius
/// `[0.3, 0.7)`, thickness `[0.2, 1.0)`, wonkiness `[0, 0.4)`, offset
/// `[-0.5, 0.5)`. Bevel settings keep their defaults.
pub fn random_star_params<R: Rng + ?Sized>(rng: &mut R) -> (StarParams, ExtrusionParams) {
    let star = StarParams {
        branches: rng.gen_range(8..=14),
        outer_radius: rng.gen_range(0.8..1.2),
        inner_radius: rng.gen_range(0.3..0.7),
        wonkiness: rng.gen_range(0.0..0.4),
        offset: rng.gen_range(-0.5..0.5),
    };
    let extrusion = ExtrusionParams {
        thickness: rng.gen_range(0.2..1.0),
        ..ExtrusionParams::default()
    };
    log::debug!("random preset: {star:?}, thickness {:.3}", extrusion.thickness);
    (star, extrusion)
}
