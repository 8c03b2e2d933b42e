//! Two-component vectors.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use rpg_core::math;

use crate::Vector3;

/// A point or direction on the tabletop plane.
///
/// All operations return new values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Adds `s` to both components.
    #[must_use]
    pub fn add_scalar(self, s: f64) -> Self {
        Self::new(self.x + s, self.y + s)
    }

    /// Subtracts `s` from both components.
    #[must_use]
    pub fn sub_scalar(self, s: f64) -> Self {
        Self::new(self.x - s, self.y - s)
    }

    /// Component-wise product.
    #[must_use]
    pub fn mul_vector(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise quotient.
    #[must_use]
    pub fn div_vector(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of the two vectors.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Unit vector in the same direction. The zero vector is returned as is.
    #[must_use]
    pub fn normalize(self) -> Self {
        let m = self.magnitude();
        if m > 0.0 { self / m } else { self }
    }

    /// Angle between the two vectors, in radians.
    pub fn angle(self, other: Self) -> f64 {
        let cos = self.normalize().dot(other.normalize());
        math::clamp(cos, -1.0, 1.0).acos()
    }

    /// Shortens the vector to `max` if it is longer.
    #[must_use]
    pub fn clamp_magnitude(self, max: f64) -> Self {
        if self.magnitude() > max {
            self.normalize() * max
        } else {
            self
        }
    }

    /// Linear interpolation; `t` is not clamped.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Clamps each component into the box spanned by `lo` and `hi`.
    #[must_use]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        Self::new(
            math::clamp(self.x, lo.x, hi.x),
            math::clamp(self.y, lo.y, hi.y),
        )
    }

    /// Lifts onto the plane `z = 0`.
    pub fn to_vector3(self) -> Vector3 {
        Vector3::from_xy(self, 0.0)
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}
