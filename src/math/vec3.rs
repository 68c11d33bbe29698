use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::error::RenderError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };
    pub const RIGHT: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const LEFT: Self = Self {
        x: -1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const UP: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const DOWN: Self = Self {
        x: 0.0,
        y: -1.0,
        z: 0.0,
    };
    pub const FORWARD: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };
    pub const BACK: Self = Self {
        x: 0.0,
        y: 0.0,
        z: -1.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors.
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Scales the vector to unit length in place.
    ///
    /// Zero-length vectors are left untouched rather than poisoned with NaN,
    /// and vectors already at unit length skip the division.
    pub fn normalize(&mut self) {
        let magnitude = self.magnitude();
        if magnitude != 0.0 && magnitude != 1.0 {
            self.x /= magnitude;
            self.y /= magnitude;
            self.z /= magnitude;
        }
    }

    /// Returns a unit-length copy of the vector, leaving `self` untouched.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Distance between two points.
    pub fn distance(&self, other: Self) -> f32 {
        (other - *self).magnitude()
    }

    /// Angle between two vectors in radians.
    ///
    /// Returns 0.0 when either vector has zero length. The cosine is clamped
    /// to `[-1, 1]` so rounding error near parallel vectors cannot feed `acos`
    /// a value outside its domain.
    pub fn angle_between(&self, other: Self) -> f32 {
        let magnitude_product = self.magnitude() * other.magnitude();
        if magnitude_product == 0.0 {
            return 0.0;
        }
        (self.dot(other) / magnitude_product).clamp(-1.0, 1.0).acos()
    }

    /// Divides every component by a scalar, failing on division by zero.
    pub fn checked_div(self, scalar: f32) -> Result<Self, RenderError> {
        if scalar == 0.0 {
            return Err(RenderError::DivideByZero { vector: self });
        }
        Ok(Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        })
    }

    /// In-place variant of [`checked_div`](Self::checked_div).
    /// `self` is left unchanged on failure.
    pub fn checked_div_assign(&mut self, scalar: f32) -> Result<(), RenderError> {
        *self = self.checked_div(scalar)?;
        Ok(())
    }

    /// Rotates the vector in place by Euler angles in radians, applying the
    /// x-axis rotation first, then y, then z.
    pub fn rotate(&mut self, angles: Self) {
        let (sin_x, cos_x) = angles.x.sin_cos();
        let (sin_y, cos_y) = angles.y.sin_cos();
        let (sin_z, cos_z) = angles.z.sin_cos();

        // Combined rotation matrix Rz * Ry * Rx applied in one pass.
        let x = (cos_y * cos_z) * self.x
            + (cos_z * sin_y * sin_x - sin_z * cos_x) * self.y
            + (cos_z * sin_y * cos_x + sin_z * sin_x) * self.z;
        let y = (cos_y * sin_z) * self.x
            + (sin_z * sin_y * sin_x + cos_z * cos_x) * self.y
            + (sin_z * sin_y * cos_x - cos_z * sin_x) * self.z;
        let z = (-sin_y) * self.x + (cos_y * sin_x) * self.y + (cos_y * cos_x) * self.z;

        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Returns a rotated copy of the vector, leaving `self` untouched.
    pub fn rotated(mut self, angles: Self) -> Self {
        self.rotate(angles);
        self
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl SubAssign<Vec3> for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

/// Scalar multiplication of a vector.
impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

/// Scalar multiplication with the scalar on the left.
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

/// Negation of a vector.
impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_normalize_produces_unit_length() {
        let mut v = Vec3::new(3.0, 4.0, 12.0);
        v.normalize();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_leaves_zero_vector_untouched() {
        let mut v = Vec3::ZERO;
        v.normalize();
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn test_normalize_skips_unit_vectors() {
        let mut v = Vec3::UP;
        v.normalize();
        assert_eq!(v, Vec3::UP);
    }

    #[test]
    fn test_normalized_leaves_original_untouched() {
        let v = Vec3::new(2.0, -4.0, 4.0);
        let n = v.normalized();
        assert_eq!(v, Vec3::new(2.0, -4.0, 4.0));
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_dot_is_commutative() {
        let a = Vec3::new(1.5, -2.0, 0.5);
        let b = Vec3::new(-3.0, 4.0, 2.5);
        assert_relative_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn test_cross_is_anticommutative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 4.0);
        assert_eq!(a.cross(b), -(b.cross(a)));
    }

    #[test]
    fn test_cross_is_perpendicular_to_operands() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -1.0, 2.0);
        let c = a.cross(b);
        assert_relative_eq!(a.dot(c), 0.0, epsilon = 1e-5);
        assert_relative_eq!(b.dot(c), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_cross_follows_right_hand_rule() {
        assert_eq!(Vec3::RIGHT.cross(Vec3::UP), Vec3::FORWARD);
    }

    #[test]
    fn test_checked_div_divides_componentwise() {
        let v = Vec3::new(2.0, -4.0, 6.0).checked_div(2.0).unwrap();
        assert_eq!(v, Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_checked_div_rejects_zero_scalar() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(matches!(
            v.checked_div(0.0),
            Err(RenderError::DivideByZero { vector }) if vector == v
        ));
    }

    #[test]
    fn test_checked_div_assign_keeps_value_on_failure() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert!(v.checked_div_assign(0.0).is_err());
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_angle_between_perpendicular_vectors() {
        assert_relative_eq!(Vec3::RIGHT.angle_between(Vec3::UP), FRAC_PI_2);
    }

    #[test]
    fn test_angle_between_opposite_vectors() {
        assert_relative_eq!(Vec3::UP.angle_between(Vec3::DOWN), PI);
    }

    #[test]
    fn test_angle_between_zero_vector_is_zero() {
        assert_eq!(Vec3::ZERO.angle_between(Vec3::UP), 0.0);
        assert_eq!(Vec3::UP.angle_between(Vec3::ZERO), 0.0);
    }

    #[test]
    fn test_distance_between_points() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert_relative_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_rotate_quarter_turn_around_z() {
        // RIGHT rotated 90 degrees around z should land on UP
        let v = Vec3::RIGHT.rotated(Vec3::new(0.0, 0.0, FRAC_PI_2));
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_quarter_turn_around_y() {
        // RIGHT rotated 90 degrees around y should land on BACK
        let v = Vec3::RIGHT.rotated(Vec3::new(0.0, FRAC_PI_2, 0.0));
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_applies_x_axis_first() {
        // UP rotated 90 degrees around x lands on FORWARD; the subsequent
        // 90 degree y rotation then carries it to RIGHT.
        let v = Vec3::UP.rotated(Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0));
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_full_turn_is_identity() {
        let start = Vec3::new(0.3, -1.2, 2.5);
        let v = start.rotated(Vec3::new(TAU, TAU, TAU));
        assert_relative_eq!(v.x, start.x, epsilon = 1e-5);
        assert_relative_eq!(v.y, start.y, epsilon = 1e-5);
        assert_relative_eq!(v.z, start.z, epsilon = 1e-5);
    }

    #[test]
    fn test_rotate_preserves_magnitude() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let v = start.rotated(Vec3::new(0.4, 1.1, -0.7));
        assert_relative_eq!(v.magnitude(), start.magnitude(), epsilon = 1e-5);
    }

    #[test]
    fn test_scalar_multiplication_commutes() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(v * 2.5, 2.5 * v);
        assert_eq!(v * 2.0, Vec3::new(2.0, -4.0, 6.0));
    }

    #[test]
    fn test_add_and_sub_are_inverses() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-0.5, 4.0, 1.5);
        assert_eq!(a + b - b, a);

        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_display_formats_components() {
        assert_eq!(Vec3::new(1.0, -2.5, 0.0).to_string(), "(1, -2.5, 0)");
    }
}
