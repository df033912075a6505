//! # Control Ranges
//!
//! Slider bounds of the control panel. Geometry never depends on these; they
//! only shape what a UI lets a user pick.

use config::constants::{
    BEVEL_SEGMENTS_RANGE, BRANCHES_RANGE, INNER_RADIUS_RANGE, OFFSET_RANGE, OUTER_RADIUS_RANGE,
    THICKNESS_RANGE, WONKINESS_RANGE,
};

use crate::params::{ParamValue, ParameterSet};

/// Bounds and step of one numeric control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    /// Smallest selectable value
    pub min: f64,
    /// Largest selectable value
    pub max: f64,
    /// Slider increment; `0` disables snapping
    pub step: f64,
}

impl ControlRange {
    /// Creates a range from its bounds and step.
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    const fn from_tuple((min, max, step): (f64, f64, f64)) -> Self {
        Self::new(min, max, step)
    }

    /// Snaps `value` to the nearest step from `min`, then clamps into range.
    pub fn clamp(&self, value: f64) -> f64 {
        let snapped = if self.step > 0.0 {
            self.min + ((value - self.min) / self.step).round() * self.step
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }

    /// True if `min <= value <= max`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// The numeric controls shown by the panel, by parameter key.
pub fn controls() -> [(&'static str, ControlRange); 7] {
    [
        ("branches", ControlRange::from_tuple(BRANCHES_RANGE)),
        ("outerRadius", ControlRange::from_tuple(OUTER_RADIUS_RANGE)),
        ("innerRadius", ControlRange::from_tuple(INNER_RADIUS_RANGE)),
        ("thickness", ControlRange::from_tuple(THICKNESS_RANGE)),
        ("wonkiness", ControlRange::from_tuple(WONKINESS_RANGE)),
        ("offset", ControlRange::from_tuple(OFFSET_RANGE)),
        ("bevelSegments", ControlRange::from_tuple(BEVEL_SEGMENTS_RANGE)),
    ]
}

/// Looks up the control for `key`.
pub fn control(key: &str) -> Option<ControlRange> {
    controls()
        .into_iter()
        .find(|(name, _)| *name == key)
        .map(|(_, range)| range)
}

/// Returns a copy of `set` with every numeric control value snapped and
/// clamped into its range. Keys without a control are copied unchanged.
pub fn clamp_parameters(set: &ParameterSet) -> ParameterSet {
    let mut clamped = ParameterSet::new();
    for (key, value) in set.iter() {
        let value = match (value, control(key)) {
            (ParamValue::Number(number), Some(range)) => {
                let adjusted = range.clamp(number);
                if adjusted != number {
                    log::warn!("{key}={number} outside control range, using {adjusted}");
                }
                ParamValue::Number(adjusted)
            }
            _ => value,
        };
        clamped.set(key, value);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_snaps_then_bounds() {
        let branches = control("branches").unwrap();
        assert_eq!(branches.clamp(9.4), 9.0);
        assert_eq!(branches.clamp(9.6), 10.0);
        assert_eq!(branches.clamp(3.0), 7.0);
        assert_eq!(branches.clamp(40.0), 16.0);

        let offset = control("offset").unwrap();
        assert_relative_eq!(offset.clamp(0.123), 0.12, epsilon = 1e-12);
        assert_eq!(offset.clamp(-2.0), -0.5);
    }

    #[test]
    fn test_zero_step_only_bounds() {
        let range = ControlRange::new(0.0, 1.0, 0.0);
        assert_eq!(range.clamp(0.37), 0.37);
        assert_eq!(range.clamp(1.5), 1.0);
    }

    #[test]
    fn test_defaults_inside_controls() {
        let star = shape_outline::StarParams::default();
        let extrusion = shape_mesh::ExtrusionParams::default();
        assert!(control("branches").unwrap().contains(f64::from(star.branches)));
        assert!(control("outerRadius").unwrap().contains(star.outer_radius));
        assert!(control("innerRadius").unwrap().contains(star.inner_radius));
        assert!(control("wonkiness").unwrap().contains(star.wonkiness));
        assert!(control("offset").unwrap().contains(star.offset));
        assert!(control("thickness").unwrap().contains(extrusion.thickness));
        assert!(control("bevelSegments")
            .unwrap()
            .contains(f64::from(extrusion.bevel_segments)));
    }

    #[test]
    fn test_clamp_parameters() {
        let set = ParameterSet::new()
            .with("branches", 30.0)
            .with("bevelEnabled", true)
            .with("bevelSize", 5.0)
            .with("bevelSegments", 4_000_000_000.0);
        let clamped = clamp_parameters(&set);
        assert_eq!(clamped.get("branches"), Some(ParamValue::Number(16.0)));
        assert_eq!(clamped.get("bevelEnabled"), Some(ParamValue::Bool(true)));
        assert_eq!(clamped.get("bevelSize"), Some(ParamValue::Number(5.0)));
        assert_eq!(clamped.get("bevelSegments"), Some(ParamValue::Number(12.0)));
    }

    #[test]
    fn test_unknown_control() {
        assert!(control("bevelSize").is_none());
    }
}
