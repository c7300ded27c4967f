//! Structure - main planar model container

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::{self, InternalForce, SolverOptions};
use crate::elements::{Beam, Node, Support};
use crate::error::{SolverError, SolverResult};
use crate::loads::{DistributedLoad, EquivalentLoad, PointLoad};
use crate::math::Vector2D;
use crate::results::{Diagram, EquilibriumSummary, Reactions};

/// A planar structure.
///
/// The structure exclusively owns its nodes, supports, beams and loads.
/// Everything except the node map refers to nodes by name, and every copy
/// (including [`Structure::rotated_copy`]) is deep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    /// Display name
    pub name: String,
    /// Nodes by unique name
    pub nodes: HashMap<String, Node>,
    /// Supports by node name (at most one per node)
    pub supports: HashMap<String, Support>,
    /// Beams, never duplicated
    pub beams: Vec<Beam>,
    /// Point loads
    pub point_loads: Vec<PointLoad>,
    /// Distributed loads
    pub distributed_loads: Vec<DistributedLoad>,
}

impl Structure {
    /// Create a new empty structure
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: HashMap::new(),
            supports: HashMap::new(),
            beams: Vec::new(),
            point_loads: Vec::new(),
            distributed_loads: Vec::new(),
        }
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a node to the structure
    pub fn add_node(&mut self, name: &str, node: Node) -> SolverResult<()> {
        if self.nodes.contains_key(name) {
            return Err(SolverError::DuplicateName(name.to_string()));
        }
        self.nodes.insert(name.to_string(), node);
        Ok(())
    }

    /// Add a support to the node it names
    pub fn add_support(&mut self, support: Support) -> SolverResult<()> {
        self.node(&support.node)?;
        if self.supports.contains_key(&support.node) {
            return Err(SolverError::DuplicateSupport(support.node.clone()));
        }
        self.supports.insert(support.node.clone(), support);
        Ok(())
    }

    /// Add a beam between two existing, distinct nodes
    pub fn add_beam(&mut self, beam: Beam) -> SolverResult<()> {
        self.check_segment(&beam.node1, &beam.node2, "Beam")?;
        if self.beams.iter().any(|b| b.connects_same_nodes(&beam)) {
            return Err(SolverError::DuplicateName(beam.label()));
        }
        self.beams.push(beam);
        Ok(())
    }

    /// Add a point load
    pub fn add_point_load(&mut self, load: PointLoad) -> SolverResult<()> {
        self.node(&load.node)?;
        self.point_loads.push(load);
        Ok(())
    }

    /// Add a distributed load
    pub fn add_distributed_load(&mut self, load: DistributedLoad) -> SolverResult<()> {
        self.check_segment(&load.node1, &load.node2, "Distributed load")?;
        self.distributed_loads.push(load);
        Ok(())
    }

    /// Add an applied couple to a node (counter-clockwise positive)
    pub fn add_moment_load(&mut self, node_name: &str, moment: f64) -> SolverResult<()> {
        self.node_mut(node_name)?.bending_moment_load += moment;
        Ok(())
    }

    fn check_segment(&self, node1: &str, node2: &str, what: &str) -> SolverResult<()> {
        let start = self.position(node1)?;
        let end = self.position(node2)?;
        if node1 == node2 || (end - start).length() < 1e-12 {
            return Err(SolverError::InvalidGeometry(format!(
                "{what} has zero length: {node1}={start}, {node2}={end}"
            )));
        }
        Ok(())
    }

    /// Re-check every cross reference, e.g. after deserialization
    pub fn validate(&self) -> SolverResult<()> {
        for (name, support) in &self.supports {
            self.node(name)?;
            if &support.node != name {
                return Err(SolverError::InvalidInput(format!(
                    "Support stored under '{name}' refers to node '{}'",
                    support.node
                )));
            }
            support.direction.normalize()?;
        }
        for (i, beam) in self.beams.iter().enumerate() {
            self.check_segment(&beam.node1, &beam.node2, "Beam")?;
            if self.beams[..i].iter().any(|b| b.connects_same_nodes(beam)) {
                return Err(SolverError::DuplicateName(beam.label()));
            }
        }
        for load in &self.point_loads {
            self.node(&load.node)?;
        }
        for load in &self.distributed_loads {
            self.check_segment(&load.node1, &load.node2, "Distributed load")?;
        }
        Ok(())
    }

    // ========================
    // Lookups
    // ========================

    /// Get a node by name
    pub fn node(&self, name: &str) -> SolverResult<&Node> {
        self.nodes
            .get(name)
            .ok_or_else(|| SolverError::NodeNotFound(name.to_string()))
    }

    pub(crate) fn node_mut(&mut self, name: &str) -> SolverResult<&mut Node> {
        self.nodes
            .get_mut(name)
            .ok_or_else(|| SolverError::NodeNotFound(name.to_string()))
    }

    /// Position of a node by name
    pub fn position(&self, name: &str) -> SolverResult<Vector2D> {
        Ok(self.node(name)?.position)
    }

    /// Node names sorted alphabetically
    pub fn node_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn support_at(&self, node_name: &str) -> Option<&Support> {
        self.supports.get(node_name)
    }

    pub fn beams_at(&self, node_name: &str) -> Vec<&Beam> {
        self.beams.iter().filter(|b| b.touches(node_name)).collect()
    }

    pub fn point_loads_at(&self, node_name: &str) -> Vec<&PointLoad> {
        self.point_loads.iter().filter(|l| l.node == node_name).collect()
    }

    pub fn distributed_loads_at(&self, node_name: &str) -> Vec<&DistributedLoad> {
        self.distributed_loads
            .iter()
            .filter(|l| l.touches(node_name))
            .collect()
    }

    /// Find the beam joining two nodes, in either order
    pub fn find_beam(&self, node1: &str, node2: &str) -> SolverResult<&Beam> {
        let wanted = Beam::new(node1, node2);
        self.beams
            .iter()
            .find(|b| b.connects_same_nodes(&wanted))
            .ok_or_else(|| SolverError::BeamNotFound(wanted.label()))
    }

    /// Vector from a beam's first node to its second
    pub fn beam_vector(&self, beam: &Beam) -> SolverResult<Vector2D> {
        Ok(self.position(&beam.node2)? - self.position(&beam.node1)?)
    }

    // ========================
    // Aggregation Queries
    // ========================

    /// All supports, ordered by node name
    pub fn get_supports(&self) -> Vec<&Support> {
        let mut supports: Vec<&Support> = self.supports.values().collect();
        supports.sort_by(|a, b| a.node.cmp(&b.node));
        supports
    }

    pub fn get_beams(&self) -> &[Beam] {
        &self.beams
    }

    pub fn get_point_loads(&self) -> &[PointLoad] {
        &self.point_loads
    }

    pub fn get_distributed_loads(&self) -> &[DistributedLoad] {
        &self.distributed_loads
    }

    /// Point loads at their nodes plus distributed loads resolved at their
    /// midpoints
    pub fn equivalent_loads(&self) -> SolverResult<Vec<EquivalentLoad>> {
        let mut loads = Vec::with_capacity(self.point_loads.len() + self.distributed_loads.len());
        for load in &self.point_loads {
            loads.push(EquivalentLoad::new(self.position(&load.node)?, load.vector));
        }
        for load in &self.distributed_loads {
            let start = self.position(&load.node1)?;
            let end = self.position(&load.node2)?;
            loads.push(load.equivalent_load(start, end));
        }
        Ok(loads)
    }

    /// Sum of applied couples over all nodes, in node name order
    pub fn total_applied_moment(&self) -> f64 {
        self.node_names()
            .into_iter()
            .filter_map(|name| self.nodes.get(name))
            .map(|n| n.bending_moment_load)
            .sum()
    }

    /// Total reaction components provided by the supports
    pub fn reaction_count(&self) -> usize {
        self.supports.values().map(Support::num_restrained).sum()
    }

    /// Centroid of the node positions
    pub fn middle_point(&self) -> Option<Vector2D> {
        if self.nodes.is_empty() {
            return None;
        }
        let sum: Vector2D = self.nodes.values().map(|n| n.position).sum();
        Some(sum / self.nodes.len() as f64)
    }

    /// Deep copy with every position, support direction and load vector
    /// rotated by `slope` (see [`Vector2D::rotate_by_slope`]).
    ///
    /// Names and topology are preserved.
    pub fn rotated_copy(&self, slope: f64) -> Structure {
        let mut rotated = self.clone();
        for node in rotated.nodes.values_mut() {
            node.position = node.position.rotate_by_slope(slope);
        }
        for support in rotated.supports.values_mut() {
            support.direction = support.direction.rotate_by_slope(slope);
        }
        for load in &mut rotated.point_loads {
            load.vector = load.vector.rotate_by_slope(slope);
        }
        for load in &mut rotated.distributed_loads {
            load.vector = load.vector.rotate_by_slope(slope);
        }
        rotated
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Balanced copy of this structure, see [`analysis::stabilize`]
    pub fn stabilize(&self) -> SolverResult<Structure> {
        analysis::stabilize(self)
    }

    /// Balanced copy of this structure using custom options
    pub fn stabilize_with(&self, options: &SolverOptions) -> SolverResult<Structure> {
        analysis::stabilize_with(self, options)
    }

    /// Internal-force diagram along the beam joining two nodes
    pub fn diagram(
        &self,
        node1: &str,
        node2: &str,
        kind: InternalForce,
        step: f64,
    ) -> SolverResult<Diagram> {
        let beam = self.find_beam(node1, node2)?;
        analysis::diagram(self, beam, kind, step)
    }

    /// Reactions injected by the solver at a node
    pub fn reactions(&self, node_name: &str) -> SolverResult<Reactions> {
        analysis::reactions(self, node_name)
    }

    /// Resultants and support classification
    pub fn equilibrium_summary(&self) -> SolverResult<EquilibriumSummary> {
        analysis::equilibrium_summary(self, SolverOptions::default().tolerance)
    }

    // ========================
    // Serialization
    // ========================

    pub fn to_json(&self) -> SolverResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a structure
    pub fn from_json(json: &str) -> SolverResult<Structure> {
        let structure: Structure = serde_json::from_str(json)?;
        structure.validate()?;
        Ok(structure)
    }
}

impl std::fmt::Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"{}\"({} nodes, {} beams)",
            self.name,
            self.nodes.len(),
            self.beams.len()
        )
    }
}
