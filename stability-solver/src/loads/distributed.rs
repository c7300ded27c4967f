//! Distributed loads along a segment between two nodes

use serde::{Deserialize, Serialize};

use super::EquivalentLoad;
use crate::math::Vector2D;

/// A uniform force per unit length applied from `node1` to `node2`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Name of the start node
    pub node1: String,
    /// Name of the end node
    pub node2: String,
    /// Force per unit length, the same at every point of the segment
    pub vector: Vector2D,
}

impl DistributedLoad {
    /// Create a new distributed load
    pub fn new(node1: &str, node2: &str, vector: Vector2D) -> Self {
        Self {
            node1: node1.to_string(),
            node2: node2.to_string(),
            vector,
        }
    }

    /// Create a uniform load in global Y (negative is downward)
    pub fn uniform_y(node1: &str, node2: &str, w: f64) -> Self {
        Self::new(node1, node2, Vector2D::new(0.0, w))
    }

    pub fn touches(&self, node: &str) -> bool {
        self.node1 == node || self.node2 == node
    }

    /// Statically equivalent point load given the resolved end positions:
    /// the total force concentrated at the midpoint.
    ///
    /// Only valid for global equilibrium; internal-force diagrams use the
    /// distributed extent instead.
    pub fn equivalent_load(&self, start: Vector2D, end: Vector2D) -> EquivalentLoad {
        EquivalentLoad::new(start.midpoint(&end), self.total_force(start, end))
    }

    /// Get the total force from this load
    pub fn total_force(&self, start: Vector2D, end: Vector2D) -> Vector2D {
        self.vector * (end - start).length()
    }
}
