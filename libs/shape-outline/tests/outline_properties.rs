//! Public API tests for outline generation.

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shape_outline::{
    generate_outline, CloudParams, ControlRing, OutlineError, RandomSamples, ShapeEntropy,
    ShapeKind, StarParams,
};
use std::f64::consts::PI;

#[test]
fn star_example_alternates_radii() {
    let entropy = ShapeEntropy::new(
        RandomSamples::zeros(8),
        ControlRing::generate(&mut StdRng::seed_from_u64(0)),
    );
    let kind = ShapeKind::Star(StarParams {
        branches: 4,
        outer_radius: 2.0,
        inner_radius: 1.0,
        wonkiness: 0.0,
        offset: 0.0,
    });

    let outline = generate_outline(&kind, &entropy).unwrap();
    assert_eq!(outline.len(), 8);
    for (i, p) in outline.iter().enumerate() {
        let radius = if i % 2 == 0 { 2.0 } else { 1.0 };
        assert_abs_diff_eq!(p.length(), radius, epsilon = 1e-12);
        assert_abs_diff_eq!(p.x, (i as f64 * PI / 4.0).cos() * radius, epsilon = 1e-12);
    }
}

#[test]
fn default_star_needs_sixteen_samples() {
    let entropy = ShapeEntropy::new(
        RandomSamples::zeros(15),
        ControlRing::generate(&mut StdRng::seed_from_u64(0)),
    );
    let err = generate_outline(&ShapeKind::default(), &entropy).unwrap_err();
    assert_eq!(err, OutlineError::insufficient_entropy(16, 15));
}

#[test]
fn cloud_uses_captured_ring() {
    let entropy = ShapeEntropy::generate(&mut StdRng::seed_from_u64(1234));
    let kind = ShapeKind::Cloud(CloudParams::default());
    let outline = generate_outline(&kind, &entropy).unwrap();
    assert_eq!(outline.len(), 32 * entropy.ring.len());

    // Same entropy, different steps: same anchors, denser sampling
    let coarse = generate_outline(
        &ShapeKind::Cloud(CloudParams {
            steps: 4,
            ..CloudParams::default()
        }),
        &entropy,
    )
    .unwrap();
    assert_eq!(coarse.points()[0], outline.points()[0]);
    assert_eq!(coarse.points()[4], outline.points()[32]);
}

#[test]
fn entropy_changes_star_tips_only() {
    let params = StarParams {
        wonkiness: 1.0,
        ..StarParams::default()
    };
    let a = generate_outline(
        &ShapeKind::Star(params.clone()),
        &ShapeEntropy::generate(&mut StdRng::seed_from_u64(1)),
    )
    .unwrap();
    let b = generate_outline(
        &ShapeKind::Star(params),
        &ShapeEntropy::generate(&mut StdRng::seed_from_u64(2)),
    )
    .unwrap();

    for i in (1..a.len()).step_by(2) {
        assert_eq!(a.points()[i], b.points()[i]);
    }
    assert_ne!(a, b);
}
