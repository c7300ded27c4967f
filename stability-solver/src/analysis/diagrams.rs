//! Internal-force diagrams by Macaulay superposition
//!
//! The structure is rotated so the diagrammed beam lies along the local x
//! axis. Every node then opens a section, and the polynomial of a section
//! sums the contributions of every load attached to the nodes at or before
//! it. Samples are rotated back to the global frame for plotting.

use std::collections::HashSet;

use log::debug;

use super::InternalForce;
use crate::elements::Beam;
use crate::error::{SolverError, SolverResult};
use crate::math::{self, Polynomial};
use crate::model::Structure;
use crate::results::{Diagram, Section};

/// Upper bound on regularly spaced samples per diagram
const MAX_SAMPLES: f64 = 1e6;

/// One section per node, ordered by local x (ties by node name)
pub fn sections(rotated: &Structure) -> Vec<Section> {
    let mut sections: Vec<Section> = rotated
        .nodes
        .iter()
        .map(|(name, node)| Section {
            node: name.clone(),
            start: node.position.x,
        })
        .collect();
    sections.sort_by(|a, b| a.start.total_cmp(&b.start).then_with(|| a.node.cmp(&b.node)));
    sections
}

/// Polynomial of `sections[index]`: the superposition of every load
/// attached to the nodes of `sections[..=index]`.
///
/// A distributed load counts once its near end is reached, and switches to
/// its closed form when its far end lies at or before the section start.
pub fn section_polynomial(
    rotated: &Structure,
    sections: &[Section],
    index: usize,
    kind: InternalForce,
) -> SolverResult<Polynomial> {
    let cut = sections
        .get(index)
        .ok_or_else(|| {
            SolverError::InvalidInput(format!(
                "section {index} out of range ({} sections)",
                sections.len()
            ))
        })?
        .start;
    let included: HashSet<&str> = sections[..=index].iter().map(|s| s.node.as_str()).collect();

    let mut polynomial = Polynomial::ZERO;

    for name in &included {
        polynomial += kind.moment_load(rotated.node(name)?.bending_moment_load);
    }

    for load in &rotated.point_loads {
        if included.contains(load.node.as_str()) {
            let a = rotated.position(&load.node)?.x;
            polynomial += kind.point_load(a, load.vector);
        }
    }

    for load in &rotated.distributed_loads {
        let x1 = rotated.position(&load.node1)?.x;
        let x2 = rotated.position(&load.node2)?.x;
        let (near, a, end) = if x1 <= x2 {
            (&load.node1, x1, x2)
        } else {
            (&load.node2, x2, x1)
        };
        if !included.contains(near.as_str()) {
            continue;
        }
        polynomial += if end <= cut {
            kind.distributed_load_passed(a, end, load.vector)
        } else {
            kind.distributed_load(a, load.vector)
        };
    }

    Ok(polynomial)
}

/// Sample abscissas over `[start, end]`: every `step` from `start` while
/// below `end`, with each section start in range sampled twice.
pub fn x_axis(start: f64, end: f64, sections: &[Section], step: f64) -> SolverResult<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(SolverError::InvalidInput(format!(
            "diagram step must be a positive number, got {step}"
        )));
    }
    let count = ((end - start) / step).ceil();
    if !count.is_finite() || count > MAX_SAMPLES {
        return Err(SolverError::InvalidInput(format!(
            "step {step} yields too many samples over [{start}, {end}]"
        )));
    }

    let mut xs: Vec<f64> = (0..count.max(0.0) as usize)
        .map(|k| start + k as f64 * step)
        .filter(|x| *x < end)
        .collect();
    for section in sections {
        if section.start >= start && section.start <= end {
            // two samples per boundary, counting a grid sample already there
            if !xs.contains(&section.start) {
                xs.push(section.start);
            }
            xs.push(section.start);
        }
    }
    xs.sort_by(f64::total_cmp);
    Ok(xs)
}

/// Evaluate the section in force at every sample.
///
/// At a section boundary the first occurrence of the value belongs to the
/// section before it and later occurrences to the section starting there.
/// Samples before the first section are 0.
pub fn y_axis(xs: &[f64], sections: &[Section], polynomials: &[Polynomial]) -> Vec<f64> {
    let mut previous: Option<f64> = None;
    xs.iter()
        .map(|&x| {
            let below = sections.partition_point(|s| s.start < x);
            let up_to = sections.partition_point(|s| s.start <= x);
            let first_at_boundary = below < up_to && previous != Some(x);
            previous = Some(x);

            let index = if first_at_boundary {
                below.checked_sub(1)
            } else {
                up_to.checked_sub(1)
            };
            index
                .and_then(|i| polynomials.get(i))
                .map_or(0.0, |p| p.evaluate(x))
        })
        .collect()
}

/// Rotates a plot's points by `slope`
pub fn rotate_plot(x: &[f64], y: &[f64], slope: f64) -> (Vec<f64>, Vec<f64>) {
    math::rotate_points(x, y, slope)
}

/// Internal-force diagram of `beam` sampled every `step`.
///
/// Expects a stabilized structure; unbalanced loads simply show up as a
/// diagram that does not close.
pub fn diagram(
    structure: &Structure,
    beam: &Beam,
    kind: InternalForce,
    step: f64,
) -> SolverResult<Diagram> {
    let slope = structure.beam_vector(beam)?.inclination();
    let rotated = structure.rotated_copy(-slope);

    let x1 = rotated.position(&beam.node1)?.x;
    let x2 = rotated.position(&beam.node2)?.x;
    let (start, end) = (x1.min(x2), x1.max(x2));

    let sections = sections(&rotated);
    let polynomials = (0..sections.len())
        .map(|i| section_polynomial(&rotated, &sections, i, kind))
        .collect::<SolverResult<Vec<_>>>()?;

    let local_x = x_axis(start, end, &sections, step)?;
    let values = y_axis(&local_x, &sections, &polynomials);
    let (x, y) = rotate_plot(&local_x, &values, slope);

    debug!(
        "{kind} diagram of {}: {} sections, {} samples",
        beam.label(),
        sections.len(),
        local_x.len()
    );

    Ok(Diagram {
        kind,
        x,
        y,
        local_x,
        values,
        sections,
        polynomials,
    })
}
