//! Support conditions

use serde::{Deserialize, Serialize};

use crate::error::SolverResult;
use crate::math::Vector2D;

/// Number of reaction components a support provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Roller: one reaction force along the support direction
    First,
    /// Pin: a reaction force in any direction
    Second,
    /// Fixed: a reaction force and a reaction couple
    Third,
}

impl Gender {
    /// Reaction components provided by this kind of support
    pub fn reactions(&self) -> usize {
        match self {
            Gender::First => 1,
            Gender::Second => 2,
            Gender::Third => 3,
        }
    }
}

/// A support attached to a node.
///
/// For a roller the direction is the line of action of its only reaction.
/// Pins and fixed supports keep it for drawing purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Name of the supported node
    pub node: String,
    pub gender: Gender,
    /// Unit vector
    pub direction: Vector2D,
}

impl Support {
    /// Create a new support, normalizing its direction
    pub fn new(node: &str, gender: Gender, direction: Vector2D) -> SolverResult<Self> {
        Ok(Self {
            node: node.to_string(),
            gender,
            direction: direction.normalize()?,
        })
    }

    /// Create a roller support restraining movement along `direction`
    pub fn roller(node: &str, direction: Vector2D) -> SolverResult<Self> {
        Self::new(node, Gender::First, direction)
    }

    /// Create a pinned support
    pub fn pinned(node: &str, direction: Vector2D) -> SolverResult<Self> {
        Self::new(node, Gender::Second, direction)
    }

    /// Create a fixed support
    pub fn fixed(node: &str, direction: Vector2D) -> SolverResult<Self> {
        Self::new(node, Gender::Third, direction)
    }

    /// Count number of restrained components
    pub fn num_restrained(&self) -> usize {
        self.gender.reactions()
    }
}
