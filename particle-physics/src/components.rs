// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Value types shared by particles, detectors, and resolvers
//!
//! [`Vec3`] is the single vector type used for position, velocity,
//! acceleration, force, and contact normals. [`Mass`] wraps a scalar mass
//! and makes the infinite-mass case explicit instead of letting a zero or
//! negative value reach a division.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// 3D vector with double-precision components
///
/// The y axis is vertical; the ground plane is `y = 0`.
///
/// # Examples
///
/// ```
/// use particle_physics::components::Vec3;
///
/// let v = Vec3::new(3.0, 4.0, 0.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v.dot(Vec3::new(1.0, 0.0, 0.0)), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3 {
    /// The zero vector
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new vector with the given components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    /// Create the zero vector
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Get the x component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get the y (vertical) component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Get the z component
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Set the x component
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Set the y (vertical) component
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Set the z component
    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    /// Dot product
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared length, avoids the square root for comparisons
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Check if all components are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Get the vector as an array
    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Create a vector from an array
    pub fn from_array(arr: [f64; 3]) -> Self {
        Vec3::new(arr[0], arr[1], arr[2])
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(arr: [f64; 3]) -> Self {
        Vec3::from_array(arr)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.as_array()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Mass of a particle in kilograms
///
/// A `Mass` is either strictly positive and finite, or the explicit
/// immovable sentinel created by [`Mass::immovable`]. The immovable mass
/// reports an inverse of 0.0, so impulses and forces never move it.
///
/// # Examples
///
/// ```
/// use particle_physics::components::Mass;
///
/// let mass = Mass::new(2.0);
/// assert_eq!(mass.inverse(), 0.5);
/// assert!(!mass.is_immovable());
///
/// let wall = Mass::immovable();
/// assert!(wall.is_immovable());
/// assert_eq!(wall.inverse(), 0.0);
///
/// assert!(Mass::try_new(0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    value: f64,
}

impl Mass {
    /// Create a new mass with the given value in kilograms
    ///
    /// # Panics
    ///
    /// Panics if the mass is zero, negative, NaN, or infinite. For fallible
    /// construction, use `try_new`.
    pub fn new(value: f64) -> Self {
        assert!(value > 0.0 && value.is_finite(), "Mass must be positive and finite");
        Mass { value }
    }

    /// Try to create a new mass with the given value in kilograms
    ///
    /// Returns `None` if the value is zero, negative, NaN, or infinite.
    pub fn try_new(value: f64) -> Option<Self> {
        if value > 0.0 && value.is_finite() {
            Some(Mass { value })
        } else {
            None
        }
    }

    /// Create an immovable mass (treated as infinite mass)
    pub fn immovable() -> Self {
        Mass { value: 0.0 }
    }

    /// Get the mass value
    ///
    /// Returns 0.0 for the immovable sentinel.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Check if this is the immovable sentinel
    pub fn is_immovable(&self) -> bool {
        self.value <= 0.0
    }

    /// Get the inverse mass (1/m)
    ///
    /// Returns 0.0 for immovable bodies.
    pub fn inverse(&self) -> f64 {
        if self.is_immovable() {
            0.0
        } else {
            1.0 / self.value
        }
    }
}

impl Default for Mass {
    fn default() -> Self {
        Mass::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_assign_operators() {
        let mut v = Vec3::new(1.0, 1.0, 1.0);
        v += Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v -= Vec3::new(2.0, 2.0, 2.0);
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
        v *= 3.0;
        assert_eq!(v, Vec3::new(0.0, 3.0, 6.0));
    }

    #[test]
    fn test_vec3_validation() {
        assert!(Vec3::new(1.0, 2.0, 3.0).is_valid());
        assert!(!Vec3::new(f64::NAN, 2.0, 3.0).is_valid());
        assert!(!Vec3::new(1.0, f64::INFINITY, 3.0).is_valid());
    }

    #[test]
    fn test_vec3_array_conversion() {
        let v = Vec3::from([4.0, 5.0, 6.0]);
        assert_eq!(v.x(), 4.0);
        assert_eq!(v.y(), 5.0);
        assert_eq!(v.z(), 6.0);
        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_vec3_magnitude() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).magnitude(), 5.0); // 3-4-5 triangle
        assert_eq!(Vec3::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_mass_try_new() {
        assert_eq!(Mass::try_new(10.5).map(|m| m.value()), Some(10.5));
        assert!(Mass::try_new(0.0).is_none());
        assert!(Mass::try_new(-1.0).is_none());
        assert!(Mass::try_new(f64::NAN).is_none());
        assert!(Mass::try_new(f64::INFINITY).is_none());
    }

    #[test]
    #[should_panic(expected = "Mass must be positive and finite")]
    fn test_mass_zero_panics() {
        Mass::new(0.0);
    }

    #[test]
    #[should_panic(expected = "Mass must be positive and finite")]
    fn test_mass_negative_panics() {
        Mass::new(-1.0);
    }

    #[test]
    fn test_mass_inverse() {
        assert_eq!(Mass::new(2.0).inverse(), 0.5);
        assert_eq!(Mass::new(100.0).inverse(), 0.01);
        assert_eq!(Mass::immovable().inverse(), 0.0); // Should not divide by zero
    }

    #[test]
    fn test_mass_default() {
        assert_eq!(Mass::default().value(), 1.0);
    }
}
