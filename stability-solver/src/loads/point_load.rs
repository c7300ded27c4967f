//! Point loads applied at nodes

use serde::{Deserialize, Serialize};

use crate::math::Vector2D;

/// A concentrated force applied at a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Name of the loaded node
    pub node: String,
    /// Force vector
    pub vector: Vector2D,
    /// Set by the solver for reactions it injects
    #[serde(default)]
    pub is_reaction: bool,
}

impl PointLoad {
    /// Create a new applied point load
    pub fn new(node: &str, vector: Vector2D) -> Self {
        Self {
            node: node.to_string(),
            vector,
            is_reaction: false,
        }
    }

    /// Create a reaction load
    pub fn reaction(node: &str, vector: Vector2D) -> Self {
        Self {
            is_reaction: true,
            ..Self::new(node, vector)
        }
    }

    /// Create a force in global Y (negative is downward)
    pub fn fy(node: &str, value: f64) -> Self {
        Self::new(node, Vector2D::new(0.0, value))
    }

    /// Create a force in global X
    pub fn fx(node: &str, value: f64) -> Self {
        Self::new(node, Vector2D::new(value, 0.0))
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            vector: self.vector * factor,
            ..self.clone()
        }
    }
}

/// A force resolved at an absolute position.
///
/// Point loads resolve at their node; distributed loads at their midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalentLoad {
    pub position: Vector2D,
    pub vector: Vector2D,
}

impl EquivalentLoad {
    pub fn new(position: Vector2D, vector: Vector2D) -> Self {
        Self { position, vector }
    }

    /// Moment of the force about `axis` (counter-clockwise positive)
    pub fn moment_about(&self, axis: Vector2D) -> f64 {
        (self.position - axis).cross(&self.vector)
    }
}
