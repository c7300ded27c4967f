//! Beam element - a straight connector between two nodes

use serde::{Deserialize, Serialize};

use crate::math::Vector2D;

/// A straight beam from `node1` to `node2`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Beam {
    /// Name of the start node
    pub node1: String,
    /// Name of the end node
    pub node2: String,
}

impl Beam {
    pub fn new(node1: &str, node2: &str) -> Self {
        Self {
            node1: node1.to_string(),
            node2: node2.to_string(),
        }
    }

    /// Whether both beams join the same pair of nodes, in any order
    pub fn connects_same_nodes(&self, other: &Beam) -> bool {
        (self.node1 == other.node1 && self.node2 == other.node2)
            || (self.node1 == other.node2 && self.node2 == other.node1)
    }

    pub fn touches(&self, node: &str) -> bool {
        self.node1 == node || self.node2 == node
    }

    /// Name used in diagnostics, e.g. `A-C`
    pub fn label(&self) -> String {
        format!("{}-{}", self.node1, self.node2)
    }
}

/// Whether `point` lies on the segment `start -> end` (|AC| + |CB| == |AB|)
pub fn is_aligned(start: Vector2D, end: Vector2D, point: Vector2D, tolerance: f64) -> bool {
    let through = (point - start).length() + (end - point).length();
    (through - (end - start).length()).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_nodes_in_any_order() {
        let ab = Beam::new("A", "B");
        assert!(ab.connects_same_nodes(&Beam::new("B", "A")));
        assert!(!ab.connects_same_nodes(&Beam::new("A", "C")));
        assert!(ab.touches("B"));
        assert_eq!(ab.label(), "A-B");
    }

    #[test]
    fn test_alignment() {
        let a = Vector2D::new(0.0, 0.0);
        let b = Vector2D::new(4.0, 2.0);
        assert!(is_aligned(a, b, Vector2D::new(2.0, 1.0), 1e-9));
        assert!(!is_aligned(a, b, Vector2D::new(2.0, 1.5), 1e-9));
        assert!(!is_aligned(a, b, Vector2D::new(6.0, 3.0), 1e-9));
    }
}
