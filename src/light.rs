//! Lighting types for the renderer.

use crate::math::vec3::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Directional lights are ideal for simulating distant light sources like the
/// sun, where all rays are effectively parallel. Shading is flat: one diffuse
/// value per triangle, quantized onto the glyph gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// The normalized direction the light rays travel (not where they come from).
    pub direction: Vec3,
    /// Scale from diffuse intensity to gradient levels. Higher values reach
    /// the brightest glyphs at shallower angles.
    pub intensity: u32,
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    /// The direction is normalized automatically.
    pub fn new(direction: Vec3, intensity: u32) -> Self {
        Self {
            direction: direction.normalized(),
            intensity,
        }
    }

    /// Diffuse intensity for a surface normal, in `[-1, 1]`.
    ///
    /// Positive values mean the surface faces the light. The normal is
    /// expected to be unit length already; it is not re-normalized here.
    pub fn diffuse(&self, normal: Vec3) -> f32 {
        normal.dot(self.direction)
    }

    /// Gradient index for a surface normal, or `None` when the surface faces
    /// away from the light and should not be drawn at all.
    ///
    /// The diffuse value is scaled by the intensity, truncated, and clamped
    /// to the last gradient level, so grazing surfaces map to the dimmest
    /// glyph and anything at or past full exposure maps to the brightest.
    pub fn shade_level(&self, normal: Vec3, levels: usize) -> Option<usize> {
        debug_assert!(levels > 0, "gradient must have at least one glyph");
        let diffuse = self.diffuse(normal);
        if diffuse <= 0.0 {
            return None;
        }
        Some(((diffuse * self.intensity as f32) as usize).min(levels - 1))
    }
}

impl Default for DirectionalLight {
    /// Light shining toward the viewer's side of the scene.
    fn default() -> Self {
        Self::new(Vec3::BACK, 10)
    }
}
