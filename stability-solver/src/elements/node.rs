//! Node element - a named joint in the plane

use serde::{Deserialize, Serialize};

use crate::math::Vector2D;

/// A joint of the structure.
///
/// Nodes are owned by a [`Structure`](crate::model::Structure) and referred
/// to by name everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Position in the global frame
    pub position: Vector2D,
    /// Applied couple (counter-clockwise positive)
    #[serde(default)]
    pub bending_moment_load: f64,
    /// Reaction couple injected by the solver at a fixed support
    #[serde(default)]
    pub reaction_moment: f64,
}

impl Node {
    /// Create a new node at the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self::at(Vector2D::new(x, y))
    }

    pub fn at(position: Vector2D) -> Self {
        Self {
            position,
            bending_moment_load: 0.0,
            reaction_moment: 0.0,
        }
    }

    /// Set an applied couple
    pub fn with_moment(mut self, moment: f64) -> Self {
        self.bending_moment_load = moment;
        self
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        (other.position - self.position).length()
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(1.0, 2.0).with_moment(-3.0);
        assert_eq!(node.position, Vector2D::new(1.0, 2.0));
        assert_eq!(node.bending_moment_load, -3.0);
        assert_eq!(node.reaction_moment, 0.0);
    }

    #[test]
    fn test_node_distance() {
        let n1 = Node::new(0.0, 0.0);
        let n2 = Node::new(3.0, 4.0);
        assert!((n1.distance_to(&n2) - 5.0).abs() < 1e-10);
    }
}
