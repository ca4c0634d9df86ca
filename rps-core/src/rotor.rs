//! Four-component rotors on and around the 3-sphere.
//!
//! A rotor here is just a point of R⁴ stored as `(x, y, z, w)`; the `w`
//! component is the one stereographic projection divides by. There is no
//! Hamilton product: the phase construction never composes rotors.

use serde::{Deserialize, Serialize};
use std::ops::{Mul, Sub};

use crate::UNIT_NORM_TOLERANCE;

/// A point (x, y, z, w) in R⁴
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rotor4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Rotor4 {
    /// Create a new rotor
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// The projection pole (0, 0, 0, 1)
    pub fn pole() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Convert to array [x, y, z, w]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Squared norm (x² + y² + z² + w²)
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Norm (magnitude)
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Check if the rotor lies on S³
    pub fn is_unit(&self) -> bool {
        (self.norm() - 1.0).abs() < UNIT_NORM_TOLERANCE
    }

    /// Check that every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Euclidean distance in R⁴
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }

    /// Check approximate equality
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
            && (self.w - other.w).abs() < epsilon
    }
}

impl Sub for Rotor4 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl Mul<f64> for Rotor4 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }
}

impl std::fmt::Display for Rotor4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4}, {:.4})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm() {
        let r = Rotor4::new(1.0, 1.0, 1.0, 1.0);
        assert_abs_diff_eq!(r.norm(), 2.0, epsilon = 1e-12);
        assert!(!r.is_unit());
    }

    #[test]
    fn test_pole_is_unit() {
        assert!(Rotor4::pole().is_unit());
        assert_eq!(Rotor4::pole().to_array(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_distance_and_ops() {
        let a = Rotor4::new(1.0, 0.0, 0.0, 0.0);
        let b = Rotor4::new(0.0, 1.0, 0.0, 0.0);
        assert_abs_diff_eq!(a.distance(&b), 2f64.sqrt(), epsilon = 1e-12);
        assert_eq!(a - b, Rotor4::new(1.0, -1.0, 0.0, 0.0));
        assert_eq!(b * 2.0, Rotor4::new(0.0, 2.0, 0.0, 0.0));
        assert_abs_diff_eq!(a.dot(&b), 0.0);
    }
}
