//! Per-load polynomial contributions to normal force, shear and bending moment
//!
//! Every contribution is expressed in the beam's local frame, as a function
//! of the local abscissa `x` measured from the same origin as the load's
//! position `a`.

use serde::{Deserialize, Serialize};

use crate::math::{Polynomial, Vector2D};

/// Kind of internal-force diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternalForce {
    Normal,
    Shear,
    Moment,
}

struct Contributions {
    point_load: fn(f64, Vector2D) -> Polynomial,
    distributed_load: fn(f64, Vector2D) -> Polynomial,
    moment_load: fn(f64) -> Polynomial,
}

static NORMAL: Contributions = Contributions {
    point_load: |_, f| Polynomial::constant(f.x),
    distributed_load: |a, f| Polynomial::new(0.0, f.x, -f.x * a),
    moment_load: |_| Polynomial::ZERO,
};

static SHEAR: Contributions = Contributions {
    point_load: |_, f| Polynomial::constant(f.y),
    distributed_load: |a, f| Polynomial::new(0.0, f.y, -f.y * a),
    moment_load: |_| Polynomial::ZERO,
};

static MOMENT: Contributions = Contributions {
    point_load: |a, f| Polynomial::new(0.0, f.y, -f.y * a),
    distributed_load: |a, f| Polynomial::new(f.y / 2.0, -f.y * a, f.y * a * a / 2.0),
    // a counter-clockwise couple lowers the moment to its right
    moment_load: |m| Polynomial::constant(-m),
};

impl InternalForce {
    pub const ALL: [InternalForce; 3] = [
        InternalForce::Normal,
        InternalForce::Shear,
        InternalForce::Moment,
    ];

    fn contributions(self) -> &'static Contributions {
        match self {
            InternalForce::Normal => &NORMAL,
            InternalForce::Shear => &SHEAR,
            InternalForce::Moment => &MOMENT,
        }
    }

    /// Contribution of a force `f` applied at `a`, for `x >= a`
    pub fn point_load(self, a: f64, f: Vector2D) -> Polynomial {
        (self.contributions().point_load)(a, f)
    }

    /// Contribution of a distributed load `f` per unit length starting at `a`
    /// and still acting at `x`
    pub fn distributed_load(self, a: f64, f: Vector2D) -> Polynomial {
        (self.contributions().distributed_load)(a, f)
    }

    /// Contribution of a distributed load over `[a, end]` once `x >= end`.
    ///
    /// Equivalent to the load continuing forever plus an opposite load
    /// starting at `end`.
    pub fn distributed_load_passed(self, a: f64, end: f64, f: Vector2D) -> Polynomial {
        self.distributed_load(a, f) + self.distributed_load(end, -f)
    }

    /// Contribution of an applied couple `m` (counter-clockwise positive)
    pub fn moment_load(self, m: f64) -> Polynomial {
        (self.contributions().moment_load)(m)
    }

    /// Short name used in chart titles
    pub fn label(self) -> &'static str {
        match self {
            InternalForce::Normal => "Normal",
            InternalForce::Shear => "Shear",
            InternalForce::Moment => "Moment",
        }
    }
}

impl std::fmt::Display for InternalForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_load() {
        let f = Vector2D::new(2.0, -10.0);
        assert_eq!(InternalForce::Normal.point_load(1.0, f), Polynomial::constant(2.0));
        assert_eq!(InternalForce::Shear.point_load(1.0, f), Polynomial::constant(-10.0));
        assert_eq!(
            InternalForce::Moment.point_load(1.0, f),
            Polynomial::new(0.0, -10.0, 10.0)
        );
    }

    #[test]
    fn test_distributed_load() {
        let f = Vector2D::new(1.0, -5.0);
        assert_eq!(
            InternalForce::Shear.distributed_load(0.0, f),
            Polynomial::new(0.0, -5.0, 0.0)
        );
        assert_eq!(
            InternalForce::Normal.distributed_load(2.0, f),
            Polynomial::new(0.0, 1.0, -2.0)
        );
        assert_eq!(
            InternalForce::Moment.distributed_load(2.0, f),
            Polynomial::new(-2.5, 10.0, -10.0)
        );
    }

    #[test]
    fn test_passed_distributed_load_acts_like_its_resultant() {
        // 3 per unit over [1, 3] is 6 at x = 2 once passed
        let f = Vector2D::new(0.0, 3.0);
        for kind in InternalForce::ALL {
            let passed = kind.distributed_load_passed(1.0, 3.0, f);
            let resultant = kind.point_load(2.0, f * 2.0);
            for x in [3.0, 4.5, 10.0] {
                assert_relative_eq!(passed.evaluate(x), resultant.evaluate(x), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_moment_load() {
        assert!(InternalForce::Normal.moment_load(5.0).is_zero());
        assert!(InternalForce::Shear.moment_load(5.0).is_zero());
        assert_eq!(InternalForce::Moment.moment_load(5.0), Polynomial::constant(-5.0));
    }

    #[test]
    fn test_label() {
        assert_eq!(InternalForce::Moment.to_string(), "Moment");
        assert_eq!(InternalForce::Normal.label(), "Normal");
    }
}
