//! Vector math for the rendering pipeline.

pub mod vec3;

pub use vec3::Vec3;
