//! # Cubic Bezier Segments
//!
//! Cubic Bezier evaluation and uniform sampling for cloud outlines.

use glam::DVec2;

/// A cubic Bezier segment.
///
/// The curve starts at `a`, is pulled towards `b` and `c`, and ends at `d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier2 {
    /// Start anchor
    pub a: DVec2,
    /// First control handle
    pub b: DVec2,
    /// Second control handle
    pub c: DVec2,
    /// End anchor
    pub d: DVec2,
}

impl CubicBezier2 {
    /// Creates a new cubic Bezier segment.
    #[inline]
    pub fn new(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> Self {
        Self { a, b, c, d }
    }

    /// Evaluates the curve at parameter `t`, clamped to `[0, 1]`.
    ///
    /// Uses the Bernstein blend
    /// `(1-t)^3 a + 3(1-t)^2 t b + 3(1-t) t^2 c + t^3 d`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use shape_outline::CubicBezier2;
    ///
    /// let curve = CubicBezier2::new(DVec2::ZERO, DVec2::Y, DVec2::ONE, DVec2::X);
    /// assert_eq!(curve.eval(0.0), DVec2::ZERO);
    /// assert_eq!(curve.eval(1.0), DVec2::X);
    /// ```
    #[inline]
    pub fn eval(&self, t: f64) -> DVec2 {
        let t = t.clamp(0.0, 1.0);
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let t2 = t * t;

        self.a * (mt2 * mt) + self.b * (3.0 * mt2 * t) + self.c * (3.0 * mt * t2) + self.d * (t2 * t)
    }

    /// Samples the curve at `steps` evenly spaced parameters `t = i / steps`
    /// for `i` in `0..steps`.
    ///
    /// The end anchor `d` is not included; it is the first sample of the
    /// following segment in a closed ring. `steps = 0` yields no samples.
    pub fn sample(&self, steps: u32) -> Vec<DVec2> {
        let denom = steps as f64;
        (0..steps).map(|i| self.eval(i as f64 / denom)).collect()
    }
}
