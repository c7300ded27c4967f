//! Error types for the stability solver

use thiserror::Error;

use crate::math::Vector2D;

/// Main error type for solver operations
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Node '{0}' not found in structure")]
    NodeNotFound(String),

    #[error("Beam '{0}' not found in structure")]
    BeamNotFound(String),

    #[error("Duplicate name '{0}' already exists")]
    DuplicateName(String),

    #[error("Node '{0}' already has a support")]
    DuplicateSupport(String),

    #[error("Structure is not isostatic: {0}")]
    IndeterminateStructure(String),

    #[error("Cannot normalize a zero-length vector")]
    DegenerateVector,

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Equilibrium not reached: resultant force {force}, resultant moment {moment}")]
    EquilibriumNotReached { force: Vector2D, moment: f64 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for solver operations
pub type SolverResult<T> = Result<T, SolverError>;
