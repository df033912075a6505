//! # Cap Triangulation
//!
//! Ear clipping for the top and bottom caps of an extruded outline.
//! Star and cloud outlines are concave, so a triangle fan is not enough.
//!
//! - Time: O(n³) worst case for n outline points
//! - Space: O(n)

use config::constants::EPSILON;
use glam::DVec2;

/// Triangulates a counter-clockwise simple polygon.
///
/// Returns `n - 2` triangles as index triples into `points`, each wound
/// counter-clockwise. Fewer than 3 points yield no triangles.
///
/// If the polygon self-intersects slightly (a stylized cloud can), no true
/// ear may exist; the most convex remaining vertex is clipped instead so the
/// cap is still complete.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use shape_mesh::triangulate::triangulate;
///
/// // L-shaped polygon (concave)
/// let l_shape = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(2.0, 0.0),
///     DVec2::new(2.0, 1.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(1.0, 2.0),
///     DVec2::new(0.0, 2.0),
/// ];
/// assert_eq!(triangulate(&l_shape).len(), 4);
/// ```
pub fn triangulate(points: &[DVec2]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let m = remaining.len();
        let ear = (0..m)
            .find(|&i| is_ear(points, &remaining, i))
            .unwrap_or_else(|| {
                log::warn!("no ear among {m} remaining vertices; clipping most convex vertex");
                most_convex(points, &remaining)
            });

        let prev = remaining[(ear + m - 1) % m];
        let next = remaining[(ear + 1) % m];
        triangles.push([prev, remaining[ear], next]);
        remaining.remove(ear);
    }

    triangles.push([remaining[0], remaining[1], remaining[2]]);
    triangles
}

/// Cross product of vectors (b-a) and (c-a).
#[inline]
fn cross(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

fn corner(points: &[DVec2], remaining: &[usize], i: usize) -> (DVec2, DVec2, DVec2) {
    let m = remaining.len();
    (
        points[remaining[(i + m - 1) % m]],
        points[remaining[i]],
        points[remaining[(i + 1) % m]],
    )
}

/// Checks if the vertex at `remaining[i]` forms an ear with its neighbours.
fn is_ear(points: &[DVec2], remaining: &[usize], i: usize) -> bool {
    let (a, b, c) = corner(points, remaining, i);

    // Reflex and collinear corners cannot be clipped
    if cross(a, b, c) <= EPSILON {
        return false;
    }

    let m = remaining.len();
    let neighbours = [(i + m - 1) % m, i, (i + 1) % m];
    remaining.iter().enumerate().all(|(j, &index)| {
        if neighbours.contains(&j) {
            return true;
        }
        let p = points[index];
        p == a || p == b || p == c || !point_in_triangle(p, a, b, c)
    })
}

/// Index into `remaining` of the corner with the largest left turn.
fn most_convex(points: &[DVec2], remaining: &[usize]) -> usize {
    (0..remaining.len())
        .map(|i| {
            let (a, b, c) = corner(points, remaining, i);
            (i, cross(a, b, c))
        })
        .fold((0, f64::NEG_INFINITY), |best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        })
        .0
}

/// Checks if point p is inside or on the boundary of triangle abc.
fn point_in_triangle(p: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}
