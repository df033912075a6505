//! # Animation
//!
//! Per-frame placement of the rendered solid. The solid's geometry is never
//! modified; only the [`Transform`] owned by the caller changes.

use config::constants::{ROTATION_RATE_X, ROTATION_RATE_Y};
use glam::{DMat4, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Position and XYZ Euler rotation (radians) of a rendered solid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation applied after the rotation
    pub position: DVec3,
    /// Euler angles about X, Y and Z
    pub rotation: DVec3,
}

impl Transform {
    /// An unrotated transform at `position`.
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            rotation: DVec3::ZERO,
        }
    }

    /// Model matrix: rotate about X, then Y, then Z, then translate.
    pub fn matrix(&self) -> DMat4 {
        let rotation = DQuat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        DMat4::from_rotation_translation(rotation, self.position)
    }
}

/// Advances a transform's rotation at a fixed angular rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationStepper {
    /// Radians per second about each axis
    pub rate: DVec3,
}

impl Default for RotationStepper {
    fn default() -> Self {
        Self::new(DVec3::new(ROTATION_RATE_X, ROTATION_RATE_Y, 0.0))
    }
}

impl RotationStepper {
    /// Creates a stepper with the given per-axis rates.
    pub fn new(rate: DVec3) -> Self {
        Self { rate }
    }

    /// Advances `transform` by `delta` seconds.
    pub fn step(&self, transform: &mut Transform, delta: f64) {
        transform.rotation += self.rate * delta;
    }
}
