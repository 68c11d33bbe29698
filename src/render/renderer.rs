//! The rendering pipeline driver.
//!
//! The [`Renderer`] struct is the main entry point. It owns the mesh data,
//! the transform and light state, and the frame buffers, and produces one
//! frame per [`render`](Renderer::render) call: transform, rasterize with
//! depth testing, shade, flush to the output sink, then advance the
//! animation state.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::QueueableCommand;

use super::framebuffer::FrameBuffer;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::light::DirectionalLight;
use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::transform::Transform;
use crate::triangle::Triangle;

const DEFAULT_CAMERA_DISTANCE: f32 = 5.0;

/// Where the current triangle normals came from.
///
/// Derived normals are recomputed whenever vertices or triangles change;
/// normals supplied by the caller are kept until replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NormalSource {
    Derived,
    Supplied,
}

pub struct Renderer {
    frame: FrameBuffer,
    scratch: String,

    horizontal_scale: f32,
    vertical_scale: f32,
    gradient: Vec<char>,
    frame_delay: Duration,
    scan_step: f32,

    vertices: Vec<Vec3>,
    indices: Vec<usize>,
    normals: Vec<Vec3>,
    normal_source: Option<NormalSource>,
    needs_init: bool,

    camera_distance: f32,
    light: DirectionalLight,
    transform: Transform,
}

impl Renderer {
    /// Create a renderer from a configuration, validating it first.
    ///
    /// All buffers are allocated here and reused across frames; the render
    /// loop itself does not allocate.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let scratch_capacity = ((config.width + 2) * config.height) as usize;
        Ok(Self {
            frame: FrameBuffer::new(config.width, config.height, config.background),
            scratch: String::with_capacity(scratch_capacity),
            horizontal_scale: config.horizontal_scale,
            vertical_scale: config.vertical_scale,
            gradient: config.gradient.chars().collect(),
            frame_delay: config.frame_delay,
            scan_step: config.scan_step,
            vertices: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
            normal_source: None,
            needs_init: true,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            light: DirectionalLight::default(),
            transform: Transform::new(),
        })
    }

    /// Replace the vertex list.
    ///
    /// Previously derived normals are invalidated and recomputed on the next
    /// frame; normals supplied through [`set_normals`](Self::set_normals)
    /// are kept.
    pub fn set_vertices(&mut self, vertices: Vec<Vec3>) -> Result<(), RenderError> {
        if vertices.is_empty() {
            return Err(RenderError::invalid(
                "vertices",
                "a non-empty vertex list",
                "0 vertices",
            ));
        }
        self.vertices = vertices;
        self.invalidate_geometry();
        Ok(())
    }

    /// Replace the triangle list with flat vertex indices, three per triangle.
    pub fn set_triangles(&mut self, indices: Vec<usize>) -> Result<(), RenderError> {
        if indices.is_empty() || indices.len() % 3 != 0 {
            return Err(RenderError::invalid(
                "triangles",
                "a positive multiple of 3 indices",
                format!("{} indices", indices.len()),
            ));
        }
        self.indices = indices;
        self.invalidate_geometry();
        Ok(())
    }

    /// Supply one normal per triangle, overriding derivation from winding
    /// order. The triangle list must already be set.
    pub fn set_normals(&mut self, normals: Vec<Vec3>) -> Result<(), RenderError> {
        let triangles = self.indices.len() / 3;
        if normals.is_empty() || normals.len() != triangles {
            return Err(RenderError::invalid(
                "normals",
                "exactly one normal per triangle",
                format!("{} normals for {} triangles", normals.len(), triangles),
            ));
        }
        self.normals = normals;
        self.normal_source = Some(NormalSource::Supplied);
        self.needs_init = true;
        Ok(())
    }

    /// Load a whole [`Mesh`] in one call: vertices, triangles, and normals
    /// when the mesh carries them.
    pub fn set_mesh(&mut self, mesh: Mesh) -> Result<(), RenderError> {
        self.set_vertices(mesh.vertices)?;
        self.set_triangles(mesh.indices)?;
        if let Some(normals) = mesh.normals {
            self.set_normals(normals)?;
        }
        Ok(())
    }

    /// Position the camera and the single directional light.
    ///
    /// `camera_distance` is the offset added to model-space z before the
    /// perspective divide, pushing the model in front of the camera.
    pub fn set_light(&mut self, camera_distance: f32, direction: Vec3, intensity: u32) {
        self.camera_distance = camera_distance;
        self.light = DirectionalLight::new(direction, intensity);
    }

    /// Set the per-frame rotation increment (Euler angles in radians).
    pub fn set_rotation_rate(&mut self, x: f32, y: f32, z: f32) {
        self.transform.set_spin_xyz(x, y, z);
    }

    /// Set the model translation applied after rotation.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.transform.set_translation(translation);
    }

    /// Current animation state.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Render one frame into `out`.
    ///
    /// Runs the whole pipeline: first-frame initialization if the geometry
    /// changed, buffer clear, per-triangle transform and rasterization with
    /// depth testing, flush to `out`, rotation advance, and finally the
    /// configured frame delay. A failed call leaves the renderer usable, so
    /// the caller can fix its input or sink and retry.
    pub fn render<W: Write>(&mut self, out: &mut W) -> Result<(), RenderError> {
        if self.needs_init {
            self.init_geometry()?;
        }

        self.frame.clear();

        for tri_index in 0..self.indices.len() / 3 {
            let v0 = self.transform.apply(self.vertices[self.indices[3 * tri_index]]);
            let v1 = self.transform.apply(self.vertices[self.indices[3 * tri_index + 1]]);
            let v2 = self.transform.apply(self.vertices[self.indices[3 * tri_index + 2]]);
            let normal = self.transform.apply_direction(self.normals[tri_index]);

            self.rasterize(&Triangle::new(v0, v1, v2), normal);
        }

        self.flush(out)?;
        self.transform.advance();

        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
        Ok(())
    }

    /// Checks deferred to the first frame after a geometry change: setter
    /// sequencing, index bounds, and the normals-per-triangle contract.
    /// Derives face normals from winding order when none were supplied.
    fn init_geometry(&mut self) -> Result<(), RenderError> {
        if self.vertices.is_empty() {
            return Err(RenderError::NotInitialized {
                resource: "vertex list",
                setter: "set_vertices",
            });
        }
        if self.indices.is_empty() {
            return Err(RenderError::NotInitialized {
                resource: "triangle list",
                setter: "set_triangles",
            });
        }
        if let Some(&bad) = self.indices.iter().find(|&&i| i >= self.vertices.len()) {
            return Err(RenderError::invalid(
                "triangles",
                "indices within the vertex list",
                format!("index {} with {} vertices", bad, self.vertices.len()),
            ));
        }

        match self.normal_source {
            None => {
                self.derive_normals();
                log::debug!("derived {} face normals", self.normals.len());
            }
            Some(_) if self.normals.len() != self.indices.len() / 3 => {
                return Err(RenderError::invalid(
                    "normals",
                    "exactly one normal per triangle",
                    format!(
                        "{} normals for {} triangles",
                        self.normals.len(),
                        self.indices.len() / 3
                    ),
                ));
            }
            Some(_) => {}
        }

        self.needs_init = false;
        Ok(())
    }

    /// One unit face normal per triangle from the winding order, computed
    /// over the untransformed vertex positions.
    fn derive_normals(&mut self) {
        self.normals.clear();
        self.normals.reserve(self.indices.len() / 3);
        for corner in self.indices.chunks_exact(3) {
            let v0 = self.vertices[corner[0]];
            let v1 = self.vertices[corner[1]];
            let v2 = self.vertices[corner[2]];
            self.normals.push((v1 - v0).cross(v2 - v1).normalized());
        }
        self.normal_source = Some(NormalSource::Derived);
    }

    fn invalidate_geometry(&mut self) {
        self.needs_init = true;
        if self.normal_source == Some(NormalSource::Derived) {
            self.normals.clear();
            self.normal_source = None;
        }
    }

    /// Scan the triangle's XY bounding box at the configured step, sampling
    /// the supporting plane's depth at each point inside the triangle.
    fn rasterize(&mut self, triangle: &Triangle, normal: Vec3) {
        // Shading is flat, so the glyph is fixed per triangle. Unlit
        // triangles contribute nothing, not even depth.
        let glyph = match self.light.shade_level(normal, self.gradient.len()) {
            Some(level) => self.gradient[level],
            None => return,
        };

        let min_x = triangle.a.x.min(triangle.b.x).min(triangle.c.x);
        let max_x = triangle.a.x.max(triangle.b.x).max(triangle.c.x);
        let min_y = triangle.a.y.min(triangle.b.y).min(triangle.c.y);
        let max_y = triangle.a.y.max(triangle.b.y).max(triangle.c.y);

        let mut x = min_x;
        while x < max_x {
            let mut y = min_y;
            while y < max_y {
                let sample = Vec3::new(x, y, triangle.z_at(x, y));
                if triangle.contains(sample) {
                    self.project(sample, glyph);
                }
                y += self.scan_step;
            }
            x += self.scan_step;
        }
    }

    /// Perspective-project one model-space sample onto the cell grid and
    /// submit it to the depth test.
    fn project(&mut self, sample: Vec3, glyph: char) {
        let depth = sample.z + self.camera_distance;
        if depth == 0.0 {
            // Sample sits on the camera plane; no perspective divide exists
            return;
        }
        let inv_depth = 1.0 / depth;

        let x = ((self.frame.width() / 2) as f32
            + self.horizontal_scale * sample.x * inv_depth) as i32;
        let y = ((self.frame.height() / 2) as f32
            - self.vertical_scale * sample.y * inv_depth) as i32;

        self.frame.set_glyph_with_depth(x, y, inv_depth, glyph);
    }

    /// Write the glyph grid to `out` in place: the cursor is repositioned to
    /// the top-left and the grid overwrites the previous frame, which keeps
    /// the animation flicker-free without clearing.
    ///
    /// Rows end in `\r\n` so the grid lines up whether or not the terminal
    /// is in raw mode.
    fn flush<W: Write>(&mut self, out: &mut W) -> Result<(), RenderError> {
        self.scratch.clear();
        for row in self.frame.rows() {
            self.scratch.extend(row.iter());
            self.scratch.push_str("\r\n");
        }

        out.queue(MoveTo(0, 0))?;
        out.write_all(self.scratch.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
