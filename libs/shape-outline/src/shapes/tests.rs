//! # Shape Outline Tests
//!
//! Tests for star and cloud outline generation.

use super::*;
use crate::entropy::{AnchorJitter, ControlRing, RandomSamples};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

fn star(branches: u32, outer: f64, inner: f64, wonkiness: f64, offset: f64) -> StarParams {
    StarParams {
        branches,
        outer_radius: outer,
        inner_radius: inner,
        wonkiness,
        offset,
    }
}

/// Distance from the origin with the `1 + offset` y stretch undone.
fn unstretched_radius(p: DVec2, offset: f64) -> f64 {
    DVec2::new(p.x, p.y / (1.0 + offset)).length()
}

fn uniform_ring(count: usize) -> ControlRing {
    ControlRing::from_anchors(vec![
        AnchorJitter {
            xr: 0.0,
            yr: 0.0,
            influence: 1.0,
        };
        count
    ])
    .unwrap()
}

// =============================================================================
// STAR
// =============================================================================

#[test]
fn test_star_four_branches_example() {
    let outline = star_outline(&star(4, 2.0, 1.0, 0.0, 0.0), &[0.0; 8]).unwrap();
    assert_eq!(outline.len(), 8);

    for (i, p) in outline.iter().enumerate() {
        let expected_radius = if i % 2 == 0 { 2.0 } else { 1.0 };
        let angle = i as f64 * PI / 4.0;
        assert_abs_diff_eq!(p.x, angle.cos() * expected_radius, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, angle.sin() * expected_radius, epsilon = 1e-12);
    }
}

#[test]
fn test_star_vertex_count_for_all_pool_sizes() {
    let samples = RandomSamples::zeros(32);
    for branches in 1..=16 {
        let outline = star_outline(&star(branches, 2.0, 1.0, 0.5, 0.0), samples.as_slice()).unwrap();
        assert_eq!(outline.len(), 2 * branches as usize);
    }
}

#[test]
fn test_star_radius_bounds_with_wonkiness() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let params = star(
            rng.gen_range(1..=16),
            rng.gen_range(0.5..3.0),
            rng.gen_range(0.2..2.0),
            rng.gen_range(0.0..1.0),
            rng.gen_range(-0.5..0.5),
        );
        let samples = RandomSamples::generate(&mut rng);
        let outline = star_outline(&params, samples.as_slice()).unwrap();

        let spread = params.wonkiness * params.inner_radius * 0.5;
        for (i, p) in outline.iter().enumerate() {
            let r = unstretched_radius(*p, params.offset);
            if i % 2 == 0 {
                assert!(r >= params.outer_radius - spread - 1e-9);
                assert!(r <= params.outer_radius + spread + 1e-9);
            } else {
                assert_relative_eq!(r, params.inner_radius, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_star_without_wonkiness_is_regular() {
    let params = star(7, 2.5, 1.2, 0.0, 0.3);
    let samples: Vec<f64> = (0..14).map(|i| i as f64 / 14.0).collect();
    let outline = star_outline(&params, &samples).unwrap();

    let step = PI / 7.0;
    for (i, p) in outline.iter().enumerate() {
        let r = unstretched_radius(*p, params.offset);
        let expected = if i % 2 == 0 { 2.5 } else { 1.2 };
        assert_relative_eq!(r, expected, epsilon = 1e-9);

        let unstretched = DVec2::new(p.x, p.y / 1.3);
        let angle = unstretched.y.atan2(unstretched.x).rem_euclid(2.0 * PI);
        assert_abs_diff_eq!(angle, i as f64 * step, epsilon = 1e-9);
    }
}

#[test]
fn test_star_offset_stretches_y() {
    let round = star_outline(&star(4, 2.0, 1.0, 0.0, 0.0), &[0.0; 8]).unwrap();
    let tall = star_outline(&star(4, 2.0, 1.0, 0.0, 0.5), &[0.0; 8]).unwrap();
    // Vertex 2 sits at 90 degrees
    assert_relative_eq!(round.points()[2].y, 2.0, epsilon = 1e-12);
    assert_relative_eq!(tall.points()[2].y, 3.0, epsilon = 1e-12);
    assert_relative_eq!(tall.points()[0].x, round.points()[0].x);
}

#[test]
fn test_star_only_reads_even_samples() {
    let params = star(3, 2.0, 1.0, 1.0, 0.0);
    let a = star_outline(&params, &[0.1, 0.0, 0.2, 0.0, 0.3, 0.0]).unwrap();
    let b = star_outline(&params, &[0.1, 0.9, 0.2, 0.9, 0.3, 0.9]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_star_single_branch_is_two_points() {
    let outline = star_outline(&star(1, 1.0, 1.0, 0.0, 0.0), &[0.0; 2]).unwrap();
    assert_eq!(outline.len(), 2);
}

#[test]
fn test_star_zero_branches_invalid() {
    let err = star_outline(&star(0, 1.0, 1.0, 0.0, 0.0), &[0.0; 32]).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_star_invalid_radii() {
    assert!(star_outline(&star(4, 0.0, 1.0, 0.0, 0.0), &[0.0; 8])
        .unwrap_err()
        .is_invalid_parameter());
    assert!(star_outline(&star(4, 2.0, -1.0, 0.0, 0.0), &[0.0; 8])
        .unwrap_err()
        .is_invalid_parameter());
    assert!(star_outline(&star(4, f64::INFINITY, 1.0, 0.0, 0.0), &[0.0; 8])
        .unwrap_err()
        .is_invalid_parameter());
}

#[test]
fn test_star_negative_wonkiness_invalid() {
    let err = star_outline(&star(4, 2.0, 1.0, -0.1, 0.0), &[0.0; 8]).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_star_collapsing_offset_invalid() {
    let err = star_outline(&star(4, 2.0, 1.0, 0.0, -1.0), &[0.0; 8]).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_star_offset_below_minus_one_mirrors() {
    let upright = star_outline(&star(4, 2.0, 1.0, 0.0, 0.5), &[0.0; 8]).unwrap();
    let mirrored = star_outline(&star(4, 2.0, 1.0, 0.0, -2.5), &[0.0; 8]).unwrap();

    assert!(upright.is_ccw());
    assert!(!mirrored.is_ccw());
    for (a, b) in upright.iter().zip(mirrored.iter()) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
        assert_abs_diff_eq!(a.y, -b.y, epsilon = 1e-12);
    }
}

#[test]
fn test_star_insufficient_entropy() {
    let err = star_outline(&star(17, 2.0, 1.0, 0.5, 0.0), &[0.5; 32]).unwrap_err();
    assert_eq!(err, crate::OutlineError::insufficient_entropy(34, 32));
}

#[test]
fn test_star_parameter_errors_take_precedence() {
    let err = star_outline(&star(0, 2.0, 1.0, 0.0, 0.0), &[]).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_star_is_counter_clockwise() {
    let outline = star_outline(&StarParams::default(), &[0.5; 32]).unwrap();
    assert!(outline.is_ccw());
}

// =============================================================================
// CLOUD
// =============================================================================

#[test]
fn test_cloud_point_count() {
    let mut rng = StdRng::seed_from_u64(5);
    for steps in [1, 2, 7, 32] {
        let ring = ControlRing::generate(&mut rng);
        let params = CloudParams {
            steps,
            ..CloudParams::default()
        };
        let outline = cloud_outline(&params, &ring).unwrap();
        assert_eq!(outline.len(), steps as usize * ring.len());
    }
}

#[test]
fn test_cloud_zero_steps_is_empty() {
    let ring = ControlRing::generate(&mut StdRng::seed_from_u64(2));
    let params = CloudParams {
        steps: 0,
        ..CloudParams::default()
    };
    let outline = cloud_outline(&params, &ring).unwrap();
    assert!(outline.is_empty());
}

#[test]
fn test_cloud_segments_start_at_jittered_anchors() {
    let ring = ControlRing::from_anchors(vec![
        AnchorJitter { xr: 0.1, yr: 0.2, influence: 0.5 },
        AnchorJitter { xr: 0.0, yr: 0.1, influence: 1.0 },
        AnchorJitter { xr: 0.2, yr: 0.0, influence: 1.4 },
        AnchorJitter { xr: 0.05, yr: 0.05, influence: 0.7 },
        AnchorJitter { xr: 0.0, yr: 0.0, influence: 1.2 },
        AnchorJitter { xr: 0.15, yr: 0.1, influence: 0.9 },
    ])
    .unwrap();
    let params = CloudParams::default();
    let segments = cloud::cloud_segments(&params, &ring).unwrap();
    assert_eq!(segments.len(), 6);

    // Segment 0 runs from anchor 5 to anchor 0
    let anchor0 = DVec2::new(1.0 + 0.1, 0.2);
    assert_abs_diff_eq!(segments[0].d.x, anchor0.x, epsilon = 1e-12);
    assert_abs_diff_eq!(segments[0].d.y, anchor0.y, epsilon = 1e-12);
    // Handle projects radially (angle 0) by the anchor's influence
    assert_abs_diff_eq!(segments[0].c.x, anchor0.x + 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(segments[0].c.y, anchor0.y, epsilon = 1e-12);

    // Anchor 1 sits at 60 degrees on the ellipse (half-width 1, half-height 2)
    let angle = PI / 3.0;
    let anchor1 = DVec2::new(angle.cos() + 0.0, angle.sin() * 2.0 + 0.1);
    assert_abs_diff_eq!(segments[1].a.x, anchor0.x, epsilon = 1e-12);
    assert_abs_diff_eq!(segments[1].d.x, anchor1.x, epsilon = 1e-12);
    assert_abs_diff_eq!(segments[1].d.y, anchor1.y, epsilon = 1e-12);

    // Consecutive segments share anchors
    for n in 0..6 {
        assert_eq!(segments[n].d, segments[(n + 1) % 6].a);
    }
}

#[test]
fn test_cloud_samples_begin_at_segment_anchor() {
    let ring = ControlRing::generate(&mut StdRng::seed_from_u64(8));
    let params = CloudParams::default();
    let segments = cloud::cloud_segments(&params, &ring).unwrap();
    let outline = cloud_outline(&params, &ring).unwrap();

    let steps = params.steps as usize;
    for (n, segment) in segments.iter().enumerate() {
        assert_eq!(outline.points()[n * steps], segment.a);
        // Last sample of a segment approaches its end anchor
        let last = outline.points()[n * steps + steps - 1];
        assert!(last.distance(segment.d) < last.distance(segment.a));
    }
}

#[test]
fn test_cloud_default_shape_is_counter_clockwise() {
    for seed in 0..20 {
        let ring = ControlRing::generate(&mut StdRng::seed_from_u64(seed));
        let outline = cloud_outline(&CloudParams::default(), &ring).unwrap();
        assert!(outline.is_ccw(), "seed {seed} produced a clockwise cloud");
    }
}

#[test]
fn test_cloud_width_and_height_scale_bounds() {
    let ring = uniform_ring(8);
    let small = cloud_outline(&CloudParams::default(), &ring).unwrap();
    let wide = cloud_outline(
        &CloudParams {
            width: 8.0,
            ..CloudParams::default()
        },
        &ring,
    )
    .unwrap();

    let (small_min, small_max) = small.bounds();
    let (wide_min, wide_max) = wide.bounds();
    assert!(wide_max.x - wide_min.x > small_max.x - small_min.x);
    assert_relative_eq!(wide_max.y - wide_min.y, small_max.y - small_min.y, epsilon = 1e-9);
}

#[test]
fn test_cloud_empty_ring_insufficient_entropy() {
    let err = cloud_outline(&CloudParams::default(), &uniform_ring(0)).unwrap_err();
    assert!(err.is_insufficient_entropy());
}

#[test]
fn test_cloud_short_ring_insufficient_entropy() {
    for count in 1..6 {
        let err = cloud_outline(&CloudParams::default(), &uniform_ring(count)).unwrap_err();
        assert_eq!(err, crate::OutlineError::insufficient_entropy(6, count));
    }
    assert!(cloud_outline(&CloudParams::default(), &uniform_ring(6)).is_ok());
}

#[test]
fn test_cloud_invalid_dimensions() {
    let ring = uniform_ring(6);
    let params = CloudParams {
        height: 0.0,
        ..CloudParams::default()
    };
    assert!(cloud_outline(&params, &ring).unwrap_err().is_invalid_parameter());
}

// =============================================================================
// DISPATCH
// =============================================================================

#[test]
fn test_generate_outline_is_deterministic_given_entropy() {
    let entropy = crate::ShapeEntropy::generate(&mut StdRng::seed_from_u64(21));
    for kind in [ShapeKind::default(), ShapeKind::Cloud(CloudParams::default())] {
        let first = generate_outline(&kind, &entropy).unwrap();
        let second = generate_outline(&kind, &entropy).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_generate_outline_dispatches_by_kind() {
    let entropy = crate::ShapeEntropy::new(RandomSamples::zeros(32), uniform_ring(7));
    let star = generate_outline(&ShapeKind::default(), &entropy).unwrap();
    let cloud = generate_outline(&ShapeKind::Cloud(CloudParams::default()), &entropy).unwrap();
    assert_eq!(star.len(), 16);
    assert_eq!(cloud.len(), 7 * 32);
}

#[test]
fn test_shape_kind_name() {
    let kind = ShapeKind::Star(star(5, 2.0, 1.0, 0.0, 0.0));
    assert_eq!(kind.name(), "star");
    assert_eq!(ShapeKind::Cloud(CloudParams::default()).name(), "cloud");
}
