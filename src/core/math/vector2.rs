//=========================================================================
// Vector2
//=========================================================================
//
// 2D vector value type backing object transforms.
//
// All operations are pure math over `f32` components. The type is `Copy`
// and carries no identity; it is freely passed and returned by value.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::ops::{Add, Mul, Sub};

use thiserror::Error;

//=== Errors ==============================================================

/// Attempted to normalize a vector with zero magnitude.
///
/// Returned by [`Vector2::try_normalize`]. The infallible
/// [`Vector2::normalize`] defines the degenerate case as a no-op instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot normalize a zero-magnitude vector")]
pub struct DegenerateVectorError;

//=== Vector2 =============================================================

/// 2D vector with `f32` components.
///
/// Used for object positions and as the general 2D math primitive of the
/// core. Componentwise addition and subtraction are available through the
/// `+` and `-` operators; scalar multiplication through `*`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    //--- Construction -----------------------------------------------------

    /// Creates a vector from its components.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    //--- Magnitude and Direction ------------------------------------------

    /// Returns the Euclidean length of the vector.
    pub fn magnitude(&self) -> f32 {
        ((self.x * self.x) + (self.y * self.y)).sqrt()
    }

    /// Multiplies both components by the given scalar, in place.
    pub fn scale(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }

    /// Scales the vector to unit length, in place.
    ///
    /// A zero-magnitude vector has no direction to preserve and is left
    /// unchanged at `(0, 0)`. Use [`Vector2::try_normalize`] to surface
    /// the degenerate case as an error instead.
    pub fn normalize(&mut self) {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            self.scale(1.0 / magnitude);
        }
    }

    /// Scales the vector to unit length, failing on a zero vector.
    pub fn try_normalize(&mut self) -> Result<(), DegenerateVectorError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(DegenerateVectorError);
        }
        self.scale(1.0 / magnitude);
        Ok(())
    }

    /// Returns the direction of the vector in radians as `atan(y / x)`.
    ///
    /// This is the historical single-argument form: it cannot distinguish
    /// opposite quadrants, so `(1, 1)` and `(-1, -1)` report the same
    /// angle. With `x == 0` the IEEE-754 division yields `±π/2` for
    /// nonzero `y` and NaN for the zero vector. Callers that need a
    /// four-quadrant angle should use [`Vector2::angle_full`].
    pub fn angle(&self) -> f32 {
        (self.y / self.x).atan()
    }

    /// Returns the four-quadrant direction of the vector in radians.
    ///
    /// `atan2`-based alternative to [`Vector2::angle`]; covers the full
    /// `(-π, π]` range and handles `x == 0` without division.
    pub fn angle_full(&self) -> f32 {
        self.y.atan2(self.x)
    }

    //--- Products ---------------------------------------------------------

    /// Returns the dot product of two vectors.
    pub fn dot(self, other: Self) -> f32 {
        (self.x * other.x) + (self.y * other.y)
    }

    /// Returns the z component of the 3D cross product of two vectors
    /// lying in the z = 0 plane.
    pub fn cross(self, other: Self) -> f32 {
        (self.x * other.y) - (other.x * self.y)
    }
}

//=== Operators ===========================================================

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    //--- Magnitude and Scaling --------------------------------------------

    #[test]
    fn magnitude_of_axis_aligned_vector() {
        assert_relative_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
        assert_relative_eq!(Vector2::new(0.0, -2.0).magnitude(), 2.0);
    }

    #[test]
    fn magnitude_of_zero_vector_is_zero() {
        assert_eq!(Vector2::zero().magnitude(), 0.0);
    }

    #[test]
    fn scale_multiplies_both_components() {
        let mut v = Vector2::new(1.5, -2.0);
        v.scale(2.0);
        assert_relative_eq!(v.x, 3.0);
        assert_relative_eq!(v.y, -4.0);
    }

    //--- Normalization ----------------------------------------------------

    #[test]
    fn normalize_yields_unit_length_same_direction() {
        let original = Vector2::new(3.0, 4.0);
        let mut v = original;
        v.normalize();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
        assert!(v.dot(original) > 0.0, "direction must be preserved");
    }

    #[test]
    fn normalize_leaves_zero_vector_unchanged() {
        let mut v = Vector2::zero();
        v.normalize();
        assert_eq!(v, Vector2::zero());
    }

    #[test]
    fn try_normalize_fails_on_zero_vector() {
        let mut v = Vector2::zero();
        assert_eq!(v.try_normalize(), Err(DegenerateVectorError));
        assert_eq!(v, Vector2::zero());
    }

    #[test]
    fn try_normalize_succeeds_on_nonzero_vector() {
        let mut v = Vector2::new(0.0, -7.0);
        assert!(v.try_normalize().is_ok());
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
    }

    //--- Angle ------------------------------------------------------------

    #[test]
    fn angle_is_quadrant_blind() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(-1.0, -1.0);
        assert_relative_eq!(a.angle(), b.angle());
    }

    #[test]
    fn angle_of_vertical_vector_is_half_pi() {
        assert_relative_eq!(Vector2::new(0.0, 1.0).angle(), FRAC_PI_2);
        assert_relative_eq!(Vector2::new(0.0, -1.0).angle(), -FRAC_PI_2);
    }

    #[test]
    fn angle_full_distinguishes_opposite_quadrants() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(-1.0, -1.0);
        assert!(
            (a.angle_full() - b.angle_full()).abs() > 1.0,
            "atan2 must separate opposite quadrants"
        );
    }

    //--- Operators --------------------------------------------------------

    #[test]
    fn add_then_subtract_round_trips() {
        let a = Vector2::new(1.25, -3.5);
        let b = Vector2::new(-0.75, 10.0);
        let round_trip = (a + b) - b;
        assert_relative_eq!(round_trip.x, a.x);
        assert_relative_eq!(round_trip.y, a.y);
    }

    #[test]
    fn mul_scalar_matches_in_place_scale() {
        let v = Vector2::new(2.0, -5.0);
        let mut scaled = v;
        scaled.scale(1.5);
        assert_eq!(v * 1.5, scaled);
    }

    //--- Products ---------------------------------------------------------

    #[test]
    fn dot_is_symmetric() {
        let a = Vector2::new(2.0, 3.0);
        let b = Vector2::new(-4.0, 0.5);
        assert_relative_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn cross_is_antisymmetric() {
        let a = Vector2::new(2.0, 3.0);
        let b = Vector2::new(-4.0, 0.5);
        assert_relative_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn cross_of_parallel_vectors_is_zero() {
        let a = Vector2::new(2.0, 3.0);
        assert_relative_eq!(a.cross(a * 4.0), 0.0);
    }
}
