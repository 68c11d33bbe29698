//! A CPU-based 3D renderer that draws triangle meshes as live ASCII art in
//! the terminal.
//!
//! Each frame the pipeline rotates and translates the mesh, rasterizes every
//! triangle against an inverse-depth buffer by sampling its supporting
//! plane, shades samples with a single directional light quantized onto a
//! character gradient, and streams the glyph grid to any [`std::io::Write`]
//! sink behind an in-place cursor reposition.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::io;
//! use termesh::prelude::*;
//!
//! fn main() -> Result<(), RenderError> {
//!     let mut renderer = Renderer::new(RenderConfig::default())?;
//!     renderer.set_mesh(Mesh::cube(1.2))?;
//!     renderer.set_rotation_rate(0.03, 0.02, 0.01);
//!
//!     let mut stdout = io::stdout();
//!     loop {
//!         renderer.render(&mut stdout)?;
//!     }
//! }
//! ```

// Public API - exposed to library consumers
pub mod config;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod render;
pub mod terminal;
pub mod transform;
pub mod triangle;
pub mod typewriter;

// Re-export commonly needed types at crate root for convenience
pub use config::RenderConfig;
pub use error::RenderError;
pub use mesh::{LoadError, Mesh};
pub use render::{FrameBuffer, Renderer};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use termesh::prelude::*;
/// ```
pub mod prelude {
    // Configuration & errors
    pub use crate::config::RenderConfig;
    pub use crate::error::RenderError;
    pub use crate::mesh::LoadError;

    // Scene data
    pub use crate::light::DirectionalLight;
    pub use crate::mesh::Mesh;
    pub use crate::transform::Transform;
    pub use crate::triangle::Triangle;

    // Math
    pub use crate::math::vec3::Vec3;

    // Rendering
    pub use crate::render::{FrameBuffer, Renderer};
}
