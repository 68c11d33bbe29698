//! Frame buffers and the rendering pipeline driver.

pub mod framebuffer;
pub mod renderer;

pub use framebuffer::FrameBuffer;
pub use renderer::Renderer;
