//! Plane-backed triangle used during rasterization.
//!
//! A [`Triangle`] is rebuilt each frame from three already-transformed
//! vertices. Alongside the vertices it caches the edge vectors and the
//! supporting plane, so the rasterizer can sample depth at any (x, y) and
//! run 2D containment tests without recomputing them per sample.

use crate::math::vec3::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub ab: Vec3,
    pub ac: Vec3,
    pub bc: Vec3,
    /// Plane normal `AB x BC`, deliberately left unnormalized.
    pub normal: Vec3,
    /// Plane offset `d` such that `normal . p + d == 0` for points on the plane.
    pub d: f32,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let ab = b - a;
        let ac = c - a;
        let bc = c - b;
        let normal = ab.cross(bc);
        let d = -normal.dot(a);
        Self {
            a,
            b,
            c,
            ab,
            ac,
            bc,
            normal,
            d,
        }
    }

    /// Depth of the supporting plane at (x, y).
    ///
    /// When the plane is parallel to the view axis (`normal.z == 0`) no single
    /// depth exists; the maximum z among the vertices is returned instead.
    /// That fallback decides which surface wins the depth test at grazing
    /// angles, so it is part of the contract rather than an error.
    #[inline]
    pub fn z_at(&self, x: f32, y: f32) -> f32 {
        if self.normal.z == 0.0 {
            self.a.z.max(self.b.z).max(self.c.z)
        } else {
            (-self.d - self.normal.x * x - self.normal.y * y) / self.normal.z
        }
    }

    /// X coordinate of the supporting plane at (y, z), with the same
    /// degenerate-plane fallback as [`z_at`](Self::z_at).
    pub fn x_at(&self, y: f32, z: f32) -> f32 {
        if self.normal.x == 0.0 {
            self.a.x.max(self.b.x).max(self.c.x)
        } else {
            (-self.d - self.normal.y * y - self.normal.z * z) / self.normal.x
        }
    }

    /// Y coordinate of the supporting plane at (x, z), with the same
    /// degenerate-plane fallback as [`z_at`](Self::z_at).
    pub fn y_at(&self, x: f32, z: f32) -> f32 {
        if self.normal.y == 0.0 {
            self.a.y.max(self.b.y).max(self.c.y)
        } else {
            (-self.d - self.normal.x * x - self.normal.z * z) / self.normal.y
        }
    }

    /// Tests whether `point` falls inside the triangle in the XY plane.
    /// The z component of `point` is ignored.
    ///
    /// A point is inside when the three edge signs are not a mix of strictly
    /// positive and strictly negative values, so points exactly on an edge
    /// count as inside.
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        let d0 = Self::edge_sign(point, self.a, self.b);
        let d1 = Self::edge_sign(point, self.b, self.c);
        let d2 = Self::edge_sign(point, self.c, self.a);

        let has_negative = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
        let has_positive = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;

        !(has_negative && has_positive)
    }

    /// Signed area test placing `p` relative to the directed edge `q -> r`,
    /// projected onto the XY plane.
    #[inline]
    fn edge_sign(p: Vec3, q: Vec3, r: Vec3) -> f32 {
        (p.x - r.x) * (q.y - r.y) - (q.x - r.x) * (p.y - r.y)
    }
}
