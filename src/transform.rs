//! Frame-to-frame model transform state.
//!
//! Provides a [`Transform`] struct holding the cumulative Euler rotation,
//! the per-frame spin, and the model translation, with a fluent API where
//! mutating methods return `&mut Self` for chaining.

use crate::math::vec3::Vec3;

/// Cumulative model transform advanced once per completed frame.
///
/// Every vertex is rotated by the cumulative `rotation` and then offset by
/// `translation`; directions such as normals are rotated but never
/// translated. [`advance`](Self::advance) is the only state transition, so
/// callers never observe a half-advanced frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    rotation: Vec3, // Euler angles in radians: x=pitch, y=yaw, z=roll
    spin: Vec3,
    translation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            spin: Vec3::ZERO,
            translation: Vec3::ZERO,
        }
    }
}

impl Transform {
    /// Create a new transform with no rotation, spin, or translation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cumulative rotation (Euler angles in radians).
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Get the per-frame rotation increment.
    pub fn spin(&self) -> Vec3 {
        self.spin
    }

    /// Get the translation.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Set the cumulative rotation (Euler angles in radians).
    pub fn set_rotation(&mut self, rotation: Vec3) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Set the per-frame rotation increment from x, y, z components (radians).
    pub fn set_spin_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.spin = Vec3::new(x, y, z);
        self
    }

    /// Set the translation.
    pub fn set_translation(&mut self, translation: Vec3) -> &mut Self {
        self.translation = translation;
        self
    }

    /// Rotate `point` by the cumulative angles, then translate it.
    pub fn apply(&self, point: Vec3) -> Vec3 {
        point.rotated(self.rotation) + self.translation
    }

    /// Rotate `direction` by the cumulative angles without translating.
    /// Normals transform this way.
    pub fn apply_direction(&self, direction: Vec3) -> Vec3 {
        direction.rotated(self.rotation)
    }

    /// Advance the cumulative rotation by one frame's spin.
    pub fn advance(&mut self) {
        self.rotation += self.spin;
    }
}
