//! Charting routines driving a [`StructureDrawer`]

use log::debug;

use super::{ChartOptions, StructureDrawer};
use crate::analysis::{self, InternalForce};
use crate::elements::is_aligned;
use crate::error::SolverResult;
use crate::math::{self, Vector2D};
use crate::model::Structure;

/// Draws a structure and its internal-force diagrams.
///
/// The structure is stabilized on construction, so reactions are drawn as
/// point loads and every diagram closes.
pub struct ChartingRoutines<'a, D: StructureDrawer> {
    structure: Structure,
    drawer: &'a mut D,
    options: ChartOptions,
    major_axis_length: f64,
}

impl<'a, D: StructureDrawer> ChartingRoutines<'a, D> {
    pub fn new(structure: &Structure, drawer: &'a mut D, options: ChartOptions) -> SolverResult<Self> {
        let structure = structure.stabilize()?;
        let major_axis_length = major_axis_length(&structure);
        debug!("charting {structure}, major axis {major_axis_length}");

        Ok(Self {
            structure,
            drawer,
            options,
            major_axis_length,
        })
    }

    /// The stabilized structure being drawn
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Largest extent of the node positions along x or y
    pub fn major_axis_length(&self) -> f64 {
        self.major_axis_length
    }

    /// Nodes, couples, beams, supports and loads, with their labels
    pub fn draw_structure(&mut self) -> SolverResult<()> {
        let offset = self.label_offset();
        let labels = self.options.labels;
        let force_unit = &self.options.force_unit;
        let length_unit = &self.options.length_unit;

        for name in self.structure.node_names() {
            let node = self.structure.node(name)?;
            let label_position = offset_label(node.position, offset);
            self.drawer.write_label(label_position, name);

            let moment = node.bending_moment_load;
            if moment != 0.0 {
                if labels {
                    self.drawer.write_label(
                        label_position - Vector2D::VERTICAL * offset,
                        &format!("{moment:?}{force_unit}{length_unit}"),
                    );
                }
                self.drawer.draw_bending_moment_load(node.position, moment < 0.0);
            }
        }

        for beam in &self.structure.beams {
            let start = self.structure.position(&beam.node1)?;
            let end = self.structure.position(&beam.node2)?;
            self.drawer.draw_beam(beam, start, end);
        }

        for support in self.structure.get_supports() {
            let position = self.structure.position(&support.node)?;
            self.drawer.draw_support(support, position);
        }

        for load in &self.structure.point_loads {
            let position = self.structure.position(&load.node)?;
            if labels {
                self.drawer.write_label(
                    offset_label(position, offset) + Vector2D::VERTICAL * offset,
                    &format!("{:?}{force_unit}", load.vector.length()),
                );
            }
            self.drawer.draw_arrow(load, position);
        }

        for load in &self.structure.distributed_loads {
            let start = self.structure.position(&load.node1)?;
            let end = self.structure.position(&load.node2)?;
            if labels {
                self.drawer.write_label(
                    offset_label(start.midpoint(&end), offset),
                    &format!("{}{force_unit}/{length_unit}", load.vector),
                );
            }
            self.drawer.draw_distributed_load(load, start, end);
        }

        Ok(())
    }

    pub fn draw_bending_moment(&mut self) -> SolverResult<()> {
        self.plot(InternalForce::Moment)
    }

    pub fn draw_shear_stress(&mut self) -> SolverResult<()> {
        self.plot(InternalForce::Shear)
    }

    pub fn draw_normal_stress(&mut self) -> SolverResult<()> {
        self.plot(InternalForce::Normal)
    }

    /// One chart per beam, scaled by `diagram_scale` and labelled with the
    /// polynomial of each section lying on the beam
    fn plot(&mut self, kind: InternalForce) -> SolverResult<()> {
        let offset = self.label_offset();
        let tolerance = 1e-9 * self.major_axis_length.max(1.0);

        for beam in &self.structure.beams {
            let diagram = analysis::diagram(&self.structure, beam, kind, self.options.step)?;
            let slope = self.structure.beam_vector(beam)?.inclination();
            let values = math::scale_axis(&diagram.values, self.options.diagram_scale);
            let (x, y) = analysis::rotate_plot(&diagram.local_x, &values, slope);
            self.drawer.plot_chart(&x, &y);

            if !self.options.labels {
                continue;
            }
            let beam_start = self.structure.position(&beam.node1)?;
            let beam_end = self.structure.position(&beam.node2)?;
            for (pair, polynomial) in diagram.sections.windows(2).zip(&diagram.polynomials) {
                let text = polynomial.to_string();
                let start = self.structure.position(&pair[0].node)?;
                let end = self.structure.position(&pair[1].node)?;
                let on_beam = is_aligned(beam_start, beam_end, start, tolerance)
                    && is_aligned(beam_start, beam_end, end, tolerance);
                if text.is_empty() || !on_beam {
                    continue;
                }
                self.drawer
                    .write_label(offset_label(start.midpoint(&end), offset), &text);
            }
        }
        Ok(())
    }

    fn label_offset(&self) -> f64 {
        self.major_axis_length * self.options.label_distance_percentage
    }
}

fn offset_label(target: Vector2D, offset: f64) -> Vector2D {
    target + Vector2D::new(offset, -offset)
}

fn major_axis_length(structure: &Structure) -> f64 {
    let (mut min, mut max) = (
        Vector2D::new(f64::INFINITY, f64::INFINITY),
        Vector2D::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
    );
    for node in structure.nodes.values() {
        min = Vector2D::new(min.x.min(node.position.x), min.y.min(node.position.y));
        max = Vector2D::new(max.x.max(node.position.x), max.y.max(node.position.y));
    }
    if structure.nodes.is_empty() {
        return 0.0;
    }
    (max.x - min.x).max(max.y - min.y)
}
