//! # Parameter Source
//!
//! Flat name → value map as produced by a control panel, and its
//! conversion into [`StarParams`] and [`ExtrusionParams`].
//!
//! Keys use the panel's camelCase names. Missing keys fall back to the
//! defaults; unknown keys and wrongly typed values are rejected here, while
//! out-of-domain numbers are left for the geometry core to reject.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shape_mesh::ExtrusionParams;
use shape_outline::StarParams;

use crate::error::PlaygroundError;

/// Keys read by [`ParameterSet::star_params`].
pub const STAR_KEYS: [&str; 5] = ["branches", "outerRadius", "innerRadius", "wonkiness", "offset"];

/// Keys read by [`ParameterSet::extrusion_params`].
pub const EXTRUSION_KEYS: [&str; 5] = [
    "thickness",
    "bevelEnabled",
    "bevelSegments",
    "bevelSize",
    "bevelThickness",
];

/// A single control value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Checkbox value
    Bool(bool),
    /// Slider or number field value
    Number(f64),
}

impl ParamValue {
    /// Parses `true`/`false` as a flag and anything else as a number.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "true" => Some(Self::Bool(true)),
            "false" => Some(Self::Bool(false)),
            other => other.parse().ok().map(Self::Number),
        }
    }

    /// The number, or `None` for a flag.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Self::Number(value) => Some(value),
            Self::Bool(_) => None,
        }
    }

    /// The flag, or `None` for a number.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(flag) => Some(flag),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

/// Control panel state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    /// Creates an empty set; every key reads as its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`ParameterSet::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the value set for `key`, if any.
    pub fn get(&self, key: &str) -> Option<ParamValue> {
        self.values.get(key).copied()
    }

    /// Number of keys set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no key is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the set keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ParamValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), *value))
    }

    /// Applies a `key=value` assignment such as `branches=12`.
    ///
    /// # Errors
    ///
    /// - [`PlaygroundError::MalformedAssignment`] without `=` or with an
    ///   unparsable value
    /// - [`PlaygroundError::UnknownParameter`] for unrecognised keys
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), PlaygroundError> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| PlaygroundError::MalformedAssignment(assignment.to_string()))?;
        let key = key.trim();
        if !is_known_key(key) {
            return Err(PlaygroundError::UnknownParameter { key: key.to_string() });
        }
        let value = ParamValue::parse(value)
            .ok_or_else(|| PlaygroundError::MalformedAssignment(assignment.to_string()))?;
        self.set(key, value);
        Ok(())
    }

    /// Rejects keys outside [`STAR_KEYS`] and [`EXTRUSION_KEYS`].
    pub fn check_keys(&self) -> Result<(), PlaygroundError> {
        match self.values.keys().find(|key| !is_known_key(key)) {
            Some(key) => Err(PlaygroundError::UnknownParameter { key: key.clone() }),
            None => Ok(()),
        }
    }

    /// Reads the star parameters.
    pub fn star_params(&self) -> Result<StarParams, PlaygroundError> {
        self.check_keys()?;
        let defaults = StarParams::default();
        Ok(StarParams {
            branches: self.count("branches", defaults.branches)?,
            outer_radius: self.number("outerRadius", defaults.outer_radius)?,
            inner_radius: self.number("innerRadius", defaults.inner_radius)?,
            wonkiness: self.number("wonkiness", defaults.wonkiness)?,
            offset: self.number("offset", defaults.offset)?,
        })
    }

    /// Reads the extrusion parameters.
    pub fn extrusion_params(&self) -> Result<ExtrusionParams, PlaygroundError> {
        self.check_keys()?;
        let defaults = ExtrusionParams::default();
        Ok(ExtrusionParams {
            thickness: self.number("thickness", defaults.thickness)?,
            bevel_enabled: self.flag("bevelEnabled", defaults.bevel_enabled)?,
            bevel_segments: self.count("bevelSegments", defaults.bevel_segments)?,
            bevel_size: self.number("bevelSize", defaults.bevel_size)?,
            bevel_thickness: self.number("bevelThickness", defaults.bevel_thickness)?,
        })
    }

    fn number(&self, key: &str, default: f64) -> Result<f64, PlaygroundError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value.as_number().ok_or_else(|| PlaygroundError::TypeMismatch {
                key: key.to_string(),
                expected: "number",
            }),
        }
    }

    fn flag(&self, key: &str, default: bool) -> Result<bool, PlaygroundError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value.as_bool().ok_or_else(|| PlaygroundError::TypeMismatch {
                key: key.to_string(),
                expected: "boolean",
            }),
        }
    }

    /// Reads a count; it must be a non-negative integer.
    fn count(&self, key: &str, default: u32) -> Result<u32, PlaygroundError> {
        let value = self.number(key, f64::from(default))?;
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
            return Err(PlaygroundError::invalid_value(
                key,
                format!("expected a non-negative integer, got {value}"),
            ));
        }
        Ok(value as u32)
    }
}

fn is_known_key(key: &str) -> bool {
    STAR_KEYS.contains(&key) || EXTRUSION_KEYS.contains(&key)
}
