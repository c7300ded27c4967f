//! Stability Solver Example - Overhanging Beam

use anyhow::Context;
use stability_solver::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Stability Solver Example: Overhanging Beam ===\n");

    // Create a new structure
    //
    //        90 kN      54 kN        22.5 kN/m
    //          |          |         vvvvvvvvvv
    //     A ---B----------C---------D---------E
    //     ^                         o
    //    Pin                      Roller
    //
    let mut structure = Structure::new("Overhanging beam");

    // Add nodes (in meters)
    structure.add_node("A", Node::new(0.0, 0.0))?;
    structure.add_node("B", Node::new(1.8, 0.0))?;
    structure.add_node("C", Node::new(4.2, 0.0))?;
    structure.add_node("D", Node::new(7.2, 0.0))?;
    structure.add_node("E", Node::new(9.6, 0.0))?;

    structure.add_beam(Beam::new("A", "E"))?;

    // Add supports
    structure.add_support(Support::pinned("A", Vector2D::VERTICAL)?)?;
    structure.add_support(Support::roller("D", Vector2D::VERTICAL)?)?;

    // Add loads (kN, negative Y = downward)
    structure.add_point_load(PointLoad::fy("B", -90.0))?;
    structure.add_point_load(PointLoad::fy("C", -54.0))?;
    structure.add_distributed_load(DistributedLoad::uniform_y("D", "E", -22.5))?;

    let summary = structure.equilibrium_summary()?;
    println!("Applied loads:");
    println!("  Resultant force: {}", summary.resultant_force);
    println!("  Resultant moment: {:.2}kN·m", summary.resultant_moment);
    println!("  Reactions provided: {}\n", summary.reaction_count);

    // Balance
    let options = SolverOptions::default();
    let stable = structure
        .stabilize_with(&options)
        .context("Stabilization failed")?;

    // Reactions
    println!("Support Reactions:");
    for support in stable.get_supports() {
        let rxn = stable.reactions(&support.node)?;
        println!(
            "  {} ({:?}): FX={:.2}kN, FY={:.2}kN, MZ={:.2}kN·m",
            support.node, support.gender, rxn.fx, rxn.fy, rxn.mz
        );
    }

    // Diagrams
    for kind in [InternalForce::Shear, InternalForce::Moment] {
        let diagram = stable.diagram("A", "E", kind, options.step)?;
        println!("\n{} diagram ({} samples, max |value| = {:.2}):", kind, diagram.len(), diagram.max_abs());
        for (section, label) in diagram.sections.iter().zip(diagram.labels()) {
            let label = if label.is_empty() { "0".to_string() } else { label };
            println!("  from {} (x = {:.2}): {}", section.node, section.start, label);
        }
    }

    println!("\n=== Stabilized structure ===\n");
    println!("{}", stable.to_json()?);

    Ok(())
}
