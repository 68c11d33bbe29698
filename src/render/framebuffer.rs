//! Glyph and depth buffers for one terminal frame.
//!
//! Provides bounds-checked 2D access over flat row-major buffers. Both
//! buffers are allocated once and reused for every frame.
//!
//! # Depth Buffer
//!
//! The depth buffer stores inverse depth, `1 / (z + camera distance)`, for
//! each cell. Larger values are closer to the camera, so clearing to 0.0
//! means "infinitely far" and a strictly-greater comparison decides
//! visibility. On a tie the first write wins.

/// Owning glyph and depth buffers with width/height metadata.
pub struct FrameBuffer {
    glyphs: Vec<char>,
    depth: Vec<f32>,
    width: u32,
    height: u32,
    background: char,
}

impl FrameBuffer {
    /// Create buffers for a `width` x `height` cell grid, filled with the
    /// background glyph and cleared to the far depth.
    pub fn new(width: u32, height: u32, background: char) -> Self {
        let size = (width * height) as usize;
        Self {
            glyphs: vec![background; size],
            depth: vec![0.0; size], // 0.0 = infinitely far
            width,
            height,
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every cell to the background glyph and every depth to far.
    pub fn clear(&mut self) {
        self.glyphs.fill(self.background);
        self.depth.fill(0.0);
    }

    /// Write `glyph` at (x, y) with depth testing.
    ///
    /// The cell is only written if `inv_depth` is strictly greater than the
    /// stored value (closer to the camera, since inverse depth is stored).
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_glyph_with_depth(&mut self, x: i32, y: i32, inv_depth: f32, glyph: char) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = (y as u32 * self.width + x as u32) as usize;
            // Depth test: larger inverse depth means closer to camera
            if inv_depth > self.depth[idx] {
                self.depth[idx] = inv_depth;
                self.glyphs[idx] = glyph;
            }
        }
    }

    /// Get the glyph at (x, y), or None if out of bounds.
    #[inline]
    pub fn glyph_at(&self, x: i32, y: i32) -> Option<char> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.glyphs[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Get the stored inverse depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn depth_at(&self, x: i32, y: i32) -> Option<f32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.depth[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Rows of the glyph grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.glyphs.chunks_exact(self.width as usize)
    }
}
