//! Three-component vectors built on [`Vector2`].

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use rpg_core::math;

use crate::Vector2;

/// A position with height or layer information.
///
/// The X/Y pair is a [`Vector2`], so planar math can run on [`Vector3::xy`]
/// directly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub xy: Vector2,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            xy: Vector2::new(x, y),
            z,
        }
    }

    pub const fn from_xy(xy: Vector2, z: f64) -> Self {
        Self { xy, z }
    }

    pub const fn x(&self) -> f64 {
        self.xy.x
    }

    pub const fn y(&self) -> f64 {
        self.xy.y
    }

    /// Adds `s` to every component.
    #[must_use]
    pub fn add_scalar(self, s: f64) -> Self {
        Self::from_xy(self.xy.add_scalar(s), self.z + s)
    }

    /// Subtracts `s` from every component.
    #[must_use]
    pub fn sub_scalar(self, s: f64) -> Self {
        Self::from_xy(self.xy.sub_scalar(s), self.z - s)
    }

    #[must_use]
    pub fn mul_vector(self, other: Self) -> Self {
        Self::from_xy(self.xy.mul_vector(other.xy), self.z * other.z)
    }

    #[must_use]
    pub fn div_vector(self, other: Self) -> Self {
        Self::from_xy(self.xy.div_vector(other.xy), self.z / other.z)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.xy.dot(other.xy) + self.z * other.z
    }

    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

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

    #[must_use]
    pub fn clamp_magnitude(self, max: f64) -> Self {
        if self.magnitude() > max {
            self.normalize() * max
        } else {
            self
        }
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::from_xy(self.xy.max(other.xy), self.z.max(other.z))
    }

    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::from_xy(self.xy.min(other.xy), self.z.min(other.z))
    }

    /// Drops the Z component.
    pub const fn to_vector2(self) -> Vector2 {
        self.xy
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_xy(self.xy + rhs.xy, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_xy(self.xy - rhs.xy, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::from_xy(self.xy * rhs, self.z * rhs)
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::from_xy(self.xy / rhs, self.z / rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_xy(-self.xy, -self.z)
    }
}

impl From<Vector2> for Vector3 {
    fn from(xy: Vector2) -> Self {
        xy.to_vector3()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x(), self.y(), self.z)
    }
}
