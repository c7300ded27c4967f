//! Result types for stabilization and diagrams

use serde::{Deserialize, Serialize};

use crate::analysis::InternalForce;
use crate::math::{Polynomial, Vector2D};

/// Reaction force and couple at a supported node
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction force in X direction
    pub fx: f64,
    /// Reaction force in Y direction
    pub fy: f64,
    /// Reaction couple (counter-clockwise positive)
    pub mz: f64,
}

impl Reactions {
    pub fn force(&self) -> Vector2D {
        Vector2D::new(self.fx, self.fy)
    }

    /// Get total force magnitude
    pub fn force_magnitude(&self) -> f64 {
        self.force().length()
    }
}

/// Resultants of a structure and how its supports classify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquilibriumSummary {
    /// Sum of all equivalent loads
    pub resultant_force: Vector2D,
    /// Resultant moment about the origin
    pub resultant_moment: f64,
    /// Total reaction components provided by the supports
    pub reaction_count: usize,
    /// Number of supports
    pub num_supports: usize,
    pub is_isostatic: bool,
    pub is_stable: bool,
}

/// A beam section in the beam's local (horizontal) frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Node where the section starts
    pub node: String,
    /// Local x of the section start
    pub start: f64,
}

/// Sampled internal-force diagram of one beam.
///
/// `x`/`y` are plot points in the global frame. `local_x`/`values` are the
/// same samples in the beam's local frame, where `polynomials[i]` holds the
/// expression of `sections[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    pub kind: InternalForce,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub local_x: Vec<f64>,
    pub values: Vec<f64>,
    pub sections: Vec<Section>,
    pub polynomials: Vec<Polynomial>,
}

impl Diagram {
    /// The `(x, y)` axis pair
    pub fn axes(&self) -> (&[f64], &[f64]) {
        (&self.x, &self.y)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Largest absolute sampled value
    pub fn max_abs(&self) -> f64 {
        self.values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Label strings of the section polynomials
    pub fn labels(&self) -> Vec<String> {
        self.polynomials.iter().map(Polynomial::to_string).collect()
    }
}
