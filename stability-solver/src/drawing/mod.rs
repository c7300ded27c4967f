//! Drawing collaborator interface and charting routines
//!
//! The crate does no rendering itself. A backend implements
//! [`StructureDrawer`], and [`ChartingRoutines`] walks a stabilized structure
//! and its diagrams, handing it primitives in the global frame.

mod charting;

use serde::{Deserialize, Serialize};

use crate::elements::{Beam, Support};
use crate::loads::{DistributedLoad, PointLoad};
use crate::math::Vector2D;

pub use charting::ChartingRoutines;

/// Rendering backend for structures and their diagrams.
///
/// Elements refer to nodes by name, so every call also receives the
/// resolved positions. Colors, scales and glyph sizes are up to the
/// implementor.
pub trait StructureDrawer {
    /// A straight line from `start` to `end`
    fn draw_beam(&mut self, beam: &Beam, start: Vector2D, end: Vector2D);

    /// A support glyph at `position`, chosen from the support's gender and
    /// oriented by its direction
    fn draw_support(&mut self, support: &Support, position: Vector2D);

    /// An arrow whose tip touches `position`
    fn draw_arrow(&mut self, load: &PointLoad, position: Vector2D);

    /// A row of arrows between `start` and `end`
    fn draw_distributed_load(&mut self, load: &DistributedLoad, start: Vector2D, end: Vector2D);

    fn draw_bending_moment_load(&mut self, position: Vector2D, clockwise: bool);

    /// A pinned connection between beams
    fn draw_hinge(&mut self, position: Vector2D);

    /// A polyline through `(x[i], y[i])`
    fn plot_chart(&mut self, x: &[f64], y: &[f64]);

    fn write_label(&mut self, position: Vector2D, text: &str);
}

/// Options for [`ChartingRoutines`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Appended to force labels
    pub force_unit: String,
    /// Appended to length labels
    pub length_unit: String,
    /// Label offset as a fraction of the structure's major axis length
    pub label_distance_percentage: f64,
    /// Diagram sample spacing
    pub step: f64,
    /// Factor applied to diagram values before plotting
    pub diagram_scale: f64,
    /// Write load and polynomial labels
    pub labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            force_unit: "N".to_string(),
            length_unit: "m".to_string(),
            label_distance_percentage: 0.05,
            step: 0.05,
            diagram_scale: 1.0,
            labels: true,
        }
    }
}

impl ChartOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(mut self, force_unit: &str, length_unit: &str) -> Self {
        self.force_unit = force_unit.to_string();
        self.length_unit = length_unit.to_string();
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_diagram_scale(mut self, factor: f64) -> Self {
        self.diagram_scale = factor;
        self
    }

    pub fn with_label_distance(mut self, percentage: f64) -> Self {
        self.label_distance_percentage = percentage;
        self
    }

    /// Draw glyphs and charts only
    pub fn without_labels(mut self) -> Self {
        self.labels = false;
        self
    }
}
