//! Quadratic polynomials used as piecewise internal-force expressions

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

use super::Vector2D;

/// `f(x) = a·x² + b·x + c`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Polynomial {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Polynomial {
    pub const ZERO: Polynomial = Polynomial { a: 0.0, b: 0.0, c: 0.0 };

    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// A constant function
    pub const fn constant(c: f64) -> Self {
        Self::new(0.0, 0.0, c)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Δ = b² - 4ac
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Real roots `((-b + √Δ)/2a, (-b - √Δ)/2a)`.
    ///
    /// `None` when the polynomial is not quadratic (`a == 0`) or the roots
    /// are complex (`Δ < 0`).
    pub fn roots(&self) -> Option<(f64, f64)> {
        let delta = self.discriminant();
        if self.a == 0.0 || delta < 0.0 {
            return None;
        }
        let sqrt_delta = delta.sqrt();
        Some((
            (-self.b + sqrt_delta) / (2.0 * self.a),
            (-self.b - sqrt_delta) / (2.0 * self.a),
        ))
    }

    /// Vertex of the parabola, `None` when `a == 0`
    pub fn vertex(&self) -> Option<Vector2D> {
        if self.a == 0.0 {
            return None;
        }
        Some(Vector2D::new(
            -self.b / (2.0 * self.a),
            self.discriminant() / (-4.0 * self.a),
        ))
    }

    pub fn is_zero(&self) -> bool {
        self.a == 0.0 && self.b == 0.0 && self.c == 0.0
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        Polynomial::new(self.a + rhs.a, self.b + rhs.b, self.c + rhs.c)
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Polynomial) {
        *self = *self + rhs;
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        Polynomial::new(self.a - rhs.a, self.b - rhs.b, self.c - rhs.c)
    }
}

impl std::iter::Sum for Polynomial {
    fn sum<I: Iterator<Item = Polynomial>>(iter: I) -> Polynomial {
        iter.fold(Polynomial::ZERO, |acc, p| acc + p)
    }
}

/// Label form used on diagrams: every non-zero term carries its sign and
/// zero terms are left out, so `0x² + 0x + 0` renders as an empty string.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (coefficient, suffix) in [(self.a, "x²"), (self.b, "x"), (self.c, "")] {
            if coefficient == 0.0 {
                continue;
            }
            if coefficient > 0.0 {
                f.write_str("+")?;
            }
            write!(f, "{coefficient:?}{suffix}")?;
        }
        Ok(())
    }
}
