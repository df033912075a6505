//! # Outline
//!
//! Ordered sequence of 2D points describing a closed polygon boundary.
//!
//! The last point implicitly connects back to the first; there is no
//! explicit closing vertex. Validity for extrusion (at least 3 points, no
//! coincident neighbours) is checked by the solid builder, not here.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A closed 2D polygon outline.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use shape_outline::Outline;
///
/// let triangle = Outline::new(vec![DVec2::ZERO, DVec2::X, DVec2::Y]);
/// assert_eq!(triangle.len(), 3);
/// assert!(triangle.is_ccw());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    points: Vec<DVec2>,
}

impl Outline {
    /// Creates an outline from points in traversal order.
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the outline has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in traversal order.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Iterates over the points in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, DVec2> {
        self.points.iter()
    }

    /// Iterates over the closed edges `(p[i], p[i + 1])`, including the
    /// implicit closing edge from the last point to the first.
    pub fn edges(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Signed area (shoelace formula). Positive for counter-clockwise outlines.
    pub fn signed_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let twice: f64 = self.edges().map(|(a, b)| a.perp_dot(b)).sum();
        twice * 0.5
    }

    /// Returns true if the outline winds counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Returns the same outline traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    /// Computes the axis-aligned bounding box as `(min, max)`.
    ///
    /// Returns `(ZERO, ZERO)` for an empty outline.
    pub fn bounds(&self) -> (DVec2, DVec2) {
        let Some(first) = self.points.first() else {
            return (DVec2::ZERO, DVec2::ZERO);
        };

        self.points[1..]
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    /// Consumes the outline and returns its points.
    pub fn into_points(self) -> Vec<DVec2> {
        self.points
    }
}

impl From<Vec<DVec2>> for Outline {
    fn from(points: Vec<DVec2>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a DVec2;
    type IntoIter = std::slice::Iter<'a, DVec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
