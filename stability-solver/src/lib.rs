//! Stability Solver - planar statics for isostatic beam structures
//!
//! This library balances 2D structures and builds their internal-force
//! diagrams:
//! - Reactions for a single fixed support, or a pin plus a roller
//! - Normal force, shear and bending moment by Macaulay's method
//! - Inclined beams, handled in the beam's own frame
//! - A drawing interface for rendering structures and charts
//!
//! ## Example
//! ```rust
//! use stability_solver::prelude::*;
//!
//! let mut structure = Structure::new("Simply supported");
//!
//! // Add nodes
//! structure.add_node("A", Node::new(0.0, 0.0)).unwrap();
//! structure.add_node("B", Node::new(1.0, 0.0)).unwrap();
//! structure.add_node("C", Node::new(2.0, 0.0)).unwrap();
//!
//! // Add beam and supports
//! structure.add_beam(Beam::new("A", "C")).unwrap();
//! structure.add_support(Support::pinned("A", Vector2D::VERTICAL).unwrap()).unwrap();
//! structure.add_support(Support::roller("C", Vector2D::VERTICAL).unwrap()).unwrap();
//!
//! // Add loads
//! structure.add_point_load(PointLoad::fy("B", -10.0)).unwrap();
//!
//! // Balance
//! let stable = structure.stabilize().unwrap();
//! assert_eq!(stable.reactions("A").unwrap().fy, 5.0);
//!
//! // Get diagrams
//! let shear = stable.diagram("A", "C", InternalForce::Shear, 0.05).unwrap();
//! assert_eq!(shear.labels()[..2], ["+5.0", "-5.0"]);
//! ```

pub mod analysis;
pub mod drawing;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{InternalForce, SolverOptions};
    pub use crate::drawing::{ChartOptions, ChartingRoutines, StructureDrawer};
    pub use crate::elements::{Beam, Gender, Node, Support};
    pub use crate::error::{SolverError, SolverResult};
    pub use crate::loads::{DistributedLoad, EquivalentLoad, PointLoad};
    pub use crate::math::{Polynomial, Vector2D};
    pub use crate::model::Structure;
    pub use crate::results::{Diagram, EquilibriumSummary, Reactions, Section};
}
