//! Stabilization and internal-force analysis

mod diagrams;
mod internal_force;
mod stabilization;

use serde::{Deserialize, Serialize};

pub use diagrams::{diagram, rotate_plot, section_polynomial, sections, x_axis, y_axis};
pub use internal_force::InternalForce;
pub use stabilization::{
    equilibrium_summary, is_isostatic, is_stable, pin_roller_reactions, reactions,
    resultant_force, resultant_moment, stabilize, stabilize_with, statics_tolerance,
};

/// Options for stabilization and diagram sampling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Tolerance for degenerate geometry, and for equilibrium checks once
    /// scaled by the load magnitude
    pub tolerance: f64,
    /// Verify the equilibrium of the stabilized structure
    pub check_statics: bool,
    /// Default distance between diagram samples
    pub step: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            check_statics: true,
            step: 0.01,
        }
    }
}

impl SolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the equilibrium tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the default diagram resolution
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Skip the post-stabilization equilibrium check
    pub fn without_statics_check(mut self) -> Self {
        self.check_statics = false;
        self
    }
}
