use crate::{CurveVector, DMat4, DQuat, DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Planar placement: scale, then rotate about the origin, then translate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2 {
    pub location: DVec2,
    /// Rotation in radians, counter-clockwise.
    pub rotation: f64,
    pub scale: DVec2,
}

impl Transform2 {
    pub fn identity() -> Self {
        Self {
            location: DVec2::ZERO,
            rotation: 0.0,
            scale: DVec2::ONE,
        }
    }

    pub fn new(location: DVec2, rotation: f64, scale: DVec2) -> Self {
        Self {
            location,
            rotation,
            scale,
        }
    }

    pub fn from_translation(location: DVec2) -> Self {
        Self {
            location,
            ..Self::identity()
        }
    }

    pub fn apply_point(&self, p: DVec2) -> DVec2 {
        self.apply_vector(p) + self.location
    }

    /// Scale and rotate, without translation.
    pub fn apply_vector(&self, v: DVec2) -> DVec2 {
        let (sin, cos) = self.rotation.sin_cos();
        (v * self.scale).rotate_z_cs(cos, sin)
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Spatial placement: scale, then rotate by a quaternion, then translate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3 {
    pub location: DVec3,
    pub rotation: DQuat,
    pub scale: DVec3,
}

impl Transform3 {
    pub fn identity() -> Self {
        Self {
            location: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
        }
    }

    pub fn new(location: DVec3, rotation: DQuat, scale: DVec3) -> Self {
        Self {
            location,
            rotation,
            scale,
        }
    }

    pub fn from_translation(location: DVec3) -> Self {
        Self {
            location,
            ..Self::identity()
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale, self.rotation, self.location)
    }

    pub fn apply_point(&self, p: DVec3) -> DVec3 {
        self.apply_vector(p) + self.location
    }

    /// Scale and rotate, without translation.
    pub fn apply_vector(&self, v: DVec3) -> DVec3 {
        self.rotation * (v * self.scale)
    }
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::identity()
    }
}
