//! Reaction computation for isostatic planar structures

use log::{debug, info, warn};

use super::SolverOptions;
use crate::elements::{Gender, Support};
use crate::error::{SolverError, SolverResult};
use crate::loads::PointLoad;
use crate::math::Vector2D;
use crate::model::Structure;
use crate::results::{EquilibriumSummary, Reactions};

/// Sum of every equivalent load vector
pub fn resultant_force(structure: &Structure) -> SolverResult<Vector2D> {
    Ok(structure.equivalent_loads()?.iter().map(|l| l.vector).sum())
}

/// Applied couples plus the moment of every equivalent load about `axis`
/// (counter-clockwise positive)
pub fn resultant_moment(structure: &Structure, axis: Vector2D) -> SolverResult<f64> {
    let load_moment: f64 = structure
        .equivalent_loads()?
        .iter()
        .map(|l| l.moment_about(axis))
        .sum();
    Ok(structure.total_applied_moment() + load_moment)
}

/// Whether the supports provide exactly three reaction components.
///
/// Only counts reactions; geometrically degenerate layouts (e.g. three
/// parallel rollers) still pass.
pub fn is_isostatic(structure: &Structure) -> bool {
    structure.reaction_count() == 3
}

/// Whether resultant force and moment both vanish within `tolerance`.
///
/// The tolerance is relative to the structure's load scale (see
/// [`statics_tolerance`]), absolute below unit loads.
pub fn is_stable(structure: &Structure, tolerance: f64) -> SolverResult<bool> {
    let force = resultant_force(structure)?;
    let moment = resultant_moment(structure, Vector2D::ZERO)?;
    let tolerance = statics_tolerance(structure, tolerance)?;
    Ok(force.abs_diff_eq(&Vector2D::ZERO, tolerance) && moment.abs() <= tolerance)
}

/// `tolerance` scaled by the largest load magnitude or moment arm product,
/// never below `tolerance` itself
pub fn statics_tolerance(structure: &Structure, tolerance: f64) -> SolverResult<f64> {
    Ok(tolerance * 1.0_f64.max(force_scale(structure)?))
}

/// Reactions of a pin `A` and a roller `B` balancing a resultant force and
/// moment (moment taken about the origin).
///
/// Returns `(reaction at A, reaction at B)`. With `φ = rB × i` and
/// `ψ = rA × i` the system is singular when `ψ == φ`, i.e. when the pin lies
/// on the roller's line of action.
pub fn pin_roller_reactions(
    pin: Vector2D,
    roller: Vector2D,
    roller_direction: Vector2D,
    force: Vector2D,
    moment: f64,
    tolerance: f64,
) -> SolverResult<(Vector2D, Vector2D)> {
    let (ra, c, m, i) = (pin, force, moment, roller_direction);
    let phi = roller.cross(&i);
    let psi = ra.cross(&i);
    let det = psi - phi;

    if det.abs() <= tolerance {
        return Err(SolverError::IndeterminateStructure(format!(
            "pin at {ra} lies on the line of action of the roller at {roller}"
        )));
    }

    let ax = (c.x * ra.x * i.y - c.x * phi - c.y * ra.x * i.x + m * i.x) / det;
    let ay = (c.x * ra.y * i.y - c.y * ra.y * i.x - c.y * phi + m * i.y) / det;

    let fa = Vector2D::new(ax, ay);
    let fb = c - fa;
    Ok((-fa, -fb))
}

/// Balanced copy of `structure` with default options
pub fn stabilize(structure: &Structure) -> SolverResult<Structure> {
    stabilize_with(structure, &SolverOptions::default())
}

/// Returns a copy of `structure` with the reaction loads that balance it.
///
/// The input is never modified. Supported layouts are a single fixed
/// support, or one pin plus one roller; anything else fails with
/// [`SolverError::IndeterminateStructure`]. An already balanced structure is
/// returned unchanged, so stabilizing twice adds nothing.
pub fn stabilize_with(structure: &Structure, options: &SolverOptions) -> SolverResult<Structure> {
    let reaction_count = structure.reaction_count();
    if !is_isostatic(structure) {
        return Err(SolverError::IndeterminateStructure(format!(
            "supports of {structure} provide {reaction_count} reactions, expected 3"
        )));
    }

    let mut balanced = structure.clone();

    if is_stable(structure, options.tolerance)? {
        warn!("{structure} is already balanced, no reactions added");
        return Ok(balanced);
    }

    let force = resultant_force(structure)?;
    let moment = resultant_moment(structure, Vector2D::ZERO)?;
    debug!("{structure}: resultant force {force}, resultant moment {moment}");

    let supports = structure.get_supports();
    match supports.as_slice() {
        [fixed] if fixed.gender == Gender::Third => {
            let position = structure.position(&fixed.node)?;
            let moment_at_support = resultant_moment(structure, position)?;
            debug!("fixed support at '{}' absorbs everything", fixed.node);

            let node = balanced.node_mut(&fixed.node)?;
            node.bending_moment_load -= moment_at_support;
            node.reaction_moment -= moment_at_support;
            balanced.add_point_load(PointLoad::reaction(&fixed.node, -force))?;
            info!(
                "reaction at '{}': force {}, moment {}",
                fixed.node, -force, -moment_at_support
            );
        }
        [first, second] => {
            let (pin, roller) = pin_and_roller(first, second).ok_or_else(|| {
                SolverError::IndeterminateStructure(format!(
                    "unsupported support pair {:?} at '{}' and {:?} at '{}'",
                    first.gender, first.node, second.gender, second.node
                ))
            })?;
            debug!("pin at '{}', roller at '{}'", pin.node, roller.node);

            let (reaction_a, reaction_b) = pin_roller_reactions(
                structure.position(&pin.node)?,
                structure.position(&roller.node)?,
                roller.direction,
                force,
                moment,
                options.tolerance,
            )?;

            balanced.add_point_load(PointLoad::reaction(&pin.node, reaction_a))?;
            balanced.add_point_load(PointLoad::reaction(&roller.node, reaction_b))?;
            info!(
                "reactions: '{}' {}, '{}' {}",
                pin.node, reaction_a, roller.node, reaction_b
            );
        }
        _ => {
            let genders: Vec<Gender> = supports.iter().map(|s| s.gender).collect();
            return Err(SolverError::IndeterminateStructure(format!(
                "no reaction scheme for supports {genders:?}"
            )));
        }
    }

    // same test as the guard above, so a second pass adds nothing
    if options.check_statics && !is_stable(&balanced, options.tolerance)? {
        return Err(SolverError::EquilibriumNotReached {
            force: resultant_force(&balanced)?,
            moment: resultant_moment(&balanced, Vector2D::ZERO)?,
        });
    }

    Ok(balanced)
}

fn pin_and_roller<'a>(a: &'a Support, b: &'a Support) -> Option<(&'a Support, &'a Support)> {
    match (a.gender, b.gender) {
        (Gender::Second, Gender::First) => Some((a, b)),
        (Gender::First, Gender::Second) => Some((b, a)),
        _ => None,
    }
}

fn force_scale(structure: &Structure) -> SolverResult<f64> {
    let mut scale = structure.total_applied_moment().abs();
    for load in structure.equivalent_loads()? {
        let arm = load.position.length().max(1.0);
        scale = scale.max(load.vector.length() * arm);
    }
    Ok(scale)
}

/// Summed reaction loads and reaction couple at a node
pub fn reactions(structure: &Structure, node_name: &str) -> SolverResult<Reactions> {
    let node = structure.node(node_name)?;
    let force: Vector2D = structure
        .point_loads_at(node_name)
        .into_iter()
        .filter(|l| l.is_reaction)
        .map(|l| l.vector)
        .sum();
    Ok(Reactions {
        fx: force.x,
        fy: force.y,
        mz: node.reaction_moment,
    })
}

/// Resultants about the origin and support classification
pub fn equilibrium_summary(structure: &Structure, tolerance: f64) -> SolverResult<EquilibriumSummary> {
    Ok(EquilibriumSummary {
        resultant_force: resultant_force(structure)?,
        resultant_moment: resultant_moment(structure, Vector2D::ZERO)?,
        reaction_count: structure.reaction_count(),
        num_supports: structure.supports.len(),
        is_isostatic: is_isostatic(structure),
        is_stable: is_stable(structure, tolerance)?,
    })
}
