use std::ops::{Add, Deref, Mul, Sub};

use nannou::glam::DVec2;

/// 2次元ベクトル / A 2D point or direction.
///
/// Thin wrapper over glam's `DVec2` that names the two perpendicular
/// rotations the ribbon geometry uses. Coordinates are reachable as `v.x` and
/// `v.y` through `Deref`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D(DVec2);

impl Vector2D {
    pub const ZERO: Self = Self(DVec2::ZERO);

    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn subtract(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }

    pub fn scale(self, k: f64) -> Self {
        Self(self.0 * k)
    }

    pub fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// 90° rotation: `(x, y) -> (-y, x)`.
    pub fn perpendicular_x(self) -> Self {
        Self(self.0.perp())
    }

    /// 90° rotation the other way: `(x, y) -> (y, -x)`.
    pub fn perpendicular_y(self) -> Self {
        Self(-self.0.perp())
    }
}

impl Deref for Vector2D {
    type Target = DVec2;

    fn deref(&self) -> &DVec2 {
        &self.0
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self(self.0 * k)
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn componentwise_ops() {
        let a = Vector2D::new(3.0, -2.0);
        let b = Vector2D::new(1.0, 4.0);
        assert_eq!(a - b, Vector2D::new(2.0, -6.0));
        assert_eq!(a + b, Vector2D::new(4.0, 2.0));
        assert_eq!(a * 2.0, Vector2D::new(6.0, -4.0));
        assert_eq!(a.subtract(b), a - b);
        assert_eq!(Vector2D::add(a, b), a + b);
        assert_eq!(a.scale(2.0), a * 2.0);
    }

    #[test]
    fn perpendiculars_are_opposite_rotations() {
        let v = Vector2D::new(2.0, 5.0);
        let px = v.perpendicular_x();
        let py = v.perpendicular_y();
        assert_eq!(px, Vector2D::new(-5.0, 2.0));
        assert_eq!(py, Vector2D::new(5.0, -2.0));
        assert_ne!(px, py);
        assert_eq!(px + py, Vector2D::ZERO);
        // both are orthogonal to the input
        assert_eq!(px.dot(*v), 0.0);
        assert_eq!(py.dot(*v), 0.0);
    }

    #[test]
    fn coordinates_and_conversions() {
        let v = Vector2D::from((1.5, -2.5));
        assert_eq!((v.x, v.y), (1.5, -2.5));
        assert_eq!(Vector2D::from(DVec2::new(1.5, -2.5)), v);
    }

    #[test]
    fn operations_leave_operands_untouched() {
        let a = Vector2D::new(1.0, 1.0);
        let _ = a * 4.0;
        let _ = a + a;
        assert_eq!(a, Vector2D::new(1.0, 1.0));
    }
}
