//! Planar vector algebra

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};

/// A 2D vector used for positions, directions and forces.
///
/// Equality is exact and component-wise; use the `approx` crate (or
/// [`Vector2D::abs_diff_eq`]) when comparing computed values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    /// Unit vector along global X
    pub const HORIZONTAL: Vector2D = Vector2D { x: 1.0, y: 0.0 };
    /// Unit vector along global Y
    pub const VERTICAL: Vector2D = Vector2D { x: 0.0, y: 1.0 };
    /// The zero vector
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product
    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of two planar vectors
    pub fn cross(&self, other: &Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector with the same direction
    pub fn normalize(&self) -> SolverResult<Vector2D> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            return Err(SolverError::DegenerateVector);
        }
        Ok(*self / length)
    }

    /// Unit vector rotated 90° counter-clockwise
    pub fn orthogonal(&self) -> SolverResult<Vector2D> {
        self.rotated_90().normalize()
    }

    /// Rotates by the angle whose tangent is `slope`.
    ///
    /// Infinite slopes are quarter turns, so vertical directions stay exact:
    /// `+inf` rotates 90° counter-clockwise and `-inf` 90° clockwise, both
    /// preserving the magnitude. The inverse rotation of `slope` is `-slope`.
    pub fn rotate_by_slope(&self, slope: f64) -> Vector2D {
        if slope == 0.0 {
            *self
        } else if slope.is_finite() {
            (super::slope_rotation(slope) * Vector2::from(*self)).into()
        } else if slope == f64::INFINITY {
            self.rotated_90()
        } else {
            -self.rotated_90()
        }
    }

    /// Slope (rise over run) of the vector's direction.
    ///
    /// Vertical vectors map to `+inf` when pointing up (or zero) and `-inf`
    /// when pointing down.
    pub fn inclination(&self) -> f64 {
        if self.x != 0.0 {
            self.y / self.x
        } else if self.y >= 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    }

    pub fn midpoint(&self, other: &Vector2D) -> Vector2D {
        (*self + *other) / 2.0
    }

    /// Component-wise comparison within an absolute tolerance
    pub fn abs_diff_eq(&self, other: &Vector2D, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    fn rotated_90(&self) -> Vector2D {
        Vector2D::new(-self.y, self.x)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl std::iter::Sum for Vector2D {
    fn sum<I: Iterator<Item = Vector2D>>(iter: I) -> Vector2D {
        iter.fold(Vector2D::ZERO, |acc, v| acc + v)
    }
}

impl From<Vector2<f64>> for Vector2D {
    fn from(v: Vector2<f64>) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

impl From<Vector2D> for Vector2<f64> {
    fn from(v: Vector2D) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V({:?}, {:?})", self.x, self.y)
    }
}

impl FromStr for Vector2D {
    type Err = SolverError;

    /// Parses the direction keywords `"horizontal"` and `"vertical"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Vector2D::HORIZONTAL),
            "vertical" => Ok(Vector2D::VERTICAL),
            other => Err(SolverError::InvalidInput(format!(
                "Invalid direction '{other}', expected 'horizontal' or 'vertical'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: Vector2D = Vector2D::new(3.0, 4.0);
    const SAMPLE_B: Vector2D = Vector2D::new(1.0, 2.0);
    const SAMPLE_C: Vector2D = Vector2D::new(2.0, 0.0);

    #[test]
    fn test_length_and_normalize() {
        assert_relative_eq!(SAMPLE.length(), 5.0);
        let unit = SAMPLE.normalize().unwrap();
        assert_relative_eq!(unit.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(unit.y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero_fails() {
        assert!(matches!(
            Vector2D::ZERO.normalize(),
            Err(SolverError::DegenerateVector)
        ));
        assert!(Vector2D::ZERO.orthogonal().is_err());
    }

    #[test]
    fn test_dot_and_cross() {
        assert_eq!(SAMPLE.dot(&SAMPLE_B), 11.0);
        assert_eq!(SAMPLE.cross(&SAMPLE_B), 2.0);
        assert_eq!(SAMPLE_B.cross(&SAMPLE), -2.0);
    }

    #[test]
    fn test_equality() {
        assert_eq!(SAMPLE, Vector2D::new(3.0, 4.0));
        assert_ne!(SAMPLE, SAMPLE_C);
    }

    #[test]
    fn test_orthogonal() {
        assert_eq!(SAMPLE_C.orthogonal().unwrap(), Vector2D::VERTICAL);
    }

    #[test]
    fn test_rotate_by_slope() {
        assert_eq!(SAMPLE_C.rotate_by_slope(0.0), SAMPLE_C);
        assert_eq!(
            SAMPLE_C.rotate_by_slope(f64::INFINITY),
            SAMPLE_C.orthogonal().unwrap() * 2.0
        );
        assert_eq!(
            SAMPLE_C.rotate_by_slope(f64::NEG_INFINITY),
            -SAMPLE_C.orthogonal().unwrap() * 2.0
        );

        let rotated = SAMPLE_C.rotate_by_slope(3.0);
        let expected = Vector2D::new(1.0, 3.0).normalize().unwrap() * 2.0;
        assert!(rotated.abs_diff_eq(&expected, 1e-12));

        let rotated = SAMPLE_C.rotate_by_slope(5.0 / 7.0);
        let expected = Vector2D::new(7.0, 5.0).normalize().unwrap() * 2.0;
        assert!(rotated.abs_diff_eq(&expected, 1e-12));
    }

    #[test]
    fn test_rotation_round_trip() {
        for slope in [0.3, -2.5, 17.0, f64::INFINITY, f64::NEG_INFINITY] {
            let back = SAMPLE.rotate_by_slope(slope).rotate_by_slope(-slope);
            assert!(back.abs_diff_eq(&SAMPLE, 1e-12), "slope {slope}: {back}");
        }
    }

    #[test]
    fn test_inclination() {
        assert_relative_eq!(SAMPLE.inclination(), 4.0 / 3.0);
        assert_eq!(SAMPLE_B.inclination(), 2.0);
        assert_eq!(SAMPLE_C.inclination(), 0.0);
        assert_eq!(Vector2D::VERTICAL.inclination(), f64::INFINITY);
        assert_eq!((-Vector2D::VERTICAL).inclination(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_rotating_by_own_inclination_makes_horizontal() {
        let v = Vector2D::new(2.0, 5.0);
        let flat = v.rotate_by_slope(-v.inclination());
        assert_relative_eq!(flat.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(flat.x, v.length(), epsilon = 1e-12);
    }

    #[test]
    fn test_direction_keywords() {
        assert_eq!("vertical".parse::<Vector2D>().unwrap(), Vector2D::VERTICAL);
        assert_eq!("Horizontal".parse::<Vector2D>().unwrap(), Vector2D::HORIZONTAL);
        assert!("diagonal".parse::<Vector2D>().is_err());
    }
}
