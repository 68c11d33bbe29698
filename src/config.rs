//! Renderer construction parameters.

use std::time::Duration;

use crate::error::RenderError;

/// Default glyph ramp, ordered dimmest to brightest.
pub const DEFAULT_GRADIENT: &str = ".,-~:;=!*#$@";

/// Parameters fixed for the lifetime of a renderer.
///
/// The struct is plain data; [`Renderer::new`](crate::Renderer::new) runs
/// [`validate`](Self::validate) before accepting it.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Screen width in character cells.
    pub width: u32,
    /// Screen height in character cells.
    pub height: u32,
    /// Projection scale along x, in cells per unit of projected space.
    pub horizontal_scale: f32,
    /// Projection scale along y. Terminal cells are taller than wide, so this
    /// is usually about half the horizontal scale.
    pub vertical_scale: f32,
    /// Glyph used for empty cells.
    pub background: char,
    /// Shading ramp ordered dimmest to brightest.
    pub gradient: String,
    /// Blocking delay appended to every frame. Zero disables pacing.
    pub frame_delay: Duration,
    /// Model-space sampling step of the rasterizer scan, in both axes.
    pub scan_step: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            horizontal_scale: 80.0,
            vertical_scale: 40.0,
            background: ' ',
            gradient: DEFAULT_GRADIENT.to_string(),
            frame_delay: Duration::from_millis(30),
            scan_step: 0.02,
        }
    }
}

impl RenderConfig {
    /// Checks that the configuration can drive a renderer: non-zero screen
    /// dimensions, at least one gradient glyph, and a positive scan step.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 {
            return Err(RenderError::invalid(
                "screen width",
                "a value greater than zero",
                "0",
            ));
        }
        if self.height == 0 {
            return Err(RenderError::invalid(
                "screen height",
                "a value greater than zero",
                "0",
            ));
        }
        if self.gradient.is_empty() {
            return Err(RenderError::invalid(
                "gradient",
                "at least one glyph",
                "an empty string",
            ));
        }
        // The comparison is inverted so NaN is rejected too
        if !(self.scan_step > 0.0) {
            return Err(RenderError::invalid(
                "scan step",
                "a step greater than zero",
                self.scan_step.to_string(),
            ));
        }
        Ok(())
    }
}
