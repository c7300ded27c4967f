//! Textbook beams checked against their hand-computed reactions and diagrams.
//!
//! Beams from Beer & Johnston, Vector Mechanics for Engineers: Statics,
//! resolved problems 7.4 and 7.6 (kN, m).

use approx::assert_relative_eq;
use stability_solver::prelude::*;

/// Pin at A, roller at D, 90 kN at B, 54 kN at C and 22.5 kN/m over the
/// D-E overhang
fn overhanging_beam() -> Structure {
    let mut s = Structure::new("Overhanging beam");
    s.add_node("A", Node::new(0.0, 0.0)).unwrap();
    s.add_node("B", Node::new(1.8, 0.0)).unwrap();
    s.add_node("C", Node::new(4.2, 0.0)).unwrap();
    s.add_node("D", Node::new(7.2, 0.0)).unwrap();
    s.add_node("E", Node::new(9.6, 0.0)).unwrap();

    s.add_beam(Beam::new("A", "E")).unwrap();
    s.add_support(Support::pinned("A", Vector2D::VERTICAL).unwrap()).unwrap();
    s.add_support(Support::roller("D", Vector2D::VERTICAL).unwrap()).unwrap();

    s.add_point_load(PointLoad::fy("B", -90.0)).unwrap();
    s.add_point_load(PointLoad::fy("C", -54.0)).unwrap();
    s.add_distributed_load(DistributedLoad::uniform_y("D", "E", -22.5)).unwrap();
    s
}

/// Pin at A, roller at C, 20 kN/m over A-B
fn partially_loaded_beam() -> Structure {
    let mut s = Structure::new("Partially loaded beam");
    s.add_node("A", Node::new(0.0, 0.0)).unwrap();
    s.add_node("B", Node::new(6.0, 0.0)).unwrap();
    s.add_node("C", Node::new(9.0, 0.0)).unwrap();

    s.add_beam(Beam::new("A", "C")).unwrap();
    s.add_support(Support::pinned("A", Vector2D::VERTICAL).unwrap()).unwrap();
    s.add_support(Support::roller("C", Vector2D::VERTICAL).unwrap()).unwrap();
    s.add_distributed_load(DistributedLoad::uniform_y("A", "B", -20.0)).unwrap();
    s
}

fn assert_balanced(s: &Structure) {
    let summary = s.equilibrium_summary().unwrap();
    assert_relative_eq!(summary.resultant_force.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(summary.resultant_force.y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(summary.resultant_moment, 0.0, epsilon = 1e-9);
    assert!(summary.is_stable);
}

#[test]
fn test_overhanging_beam_reactions() {
    let s = overhanging_beam().stabilize().unwrap();
    assert_balanced(&s);

    assert_relative_eq!(s.reactions("A").unwrap().fy, 81.0, epsilon = 1e-9);
    assert_relative_eq!(s.reactions("D").unwrap().fy, 117.0, epsilon = 1e-9);
    assert_relative_eq!(s.reactions("A").unwrap().fx, 0.0, epsilon = 1e-9);
}

#[test]
fn test_overhanging_beam_shear() {
    let s = overhanging_beam().stabilize().unwrap();
    let shear = s.diagram("A", "E", InternalForce::Shear, 0.01).unwrap();
    let p = &shear.polynomials;
    assert_eq!(p.len(), 5);

    assert_relative_eq!(p[0].evaluate(1.0), 81.0, epsilon = 1e-9);
    assert_relative_eq!(p[1].evaluate(3.0), -9.0, epsilon = 1e-9);
    assert_relative_eq!(p[2].evaluate(6.0), -63.0, epsilon = 1e-9);
    assert_relative_eq!(p[3].evaluate(7.2), 54.0, epsilon = 1e-9);
    assert_relative_eq!(p[3].evaluate(9.6), 0.0, epsilon = 1e-9);
    assert_relative_eq!(p[3].b, -22.5, epsilon = 1e-9);
}

#[test]
fn test_overhanging_beam_moment() {
    let s = overhanging_beam().stabilize().unwrap();
    let moment = s.diagram("A", "E", InternalForce::Moment, 0.01).unwrap();
    let p = &moment.polynomials;

    assert_relative_eq!(p[0].evaluate(1.8), 145.8, epsilon = 1e-9);
    assert_relative_eq!(p[1].evaluate(4.2), 124.2, epsilon = 1e-9);
    assert_relative_eq!(p[2].evaluate(7.2), -64.8, epsilon = 1e-9);
    assert_relative_eq!(p[3].evaluate(9.6), 0.0, epsilon = 1e-9);
    assert_relative_eq!(moment.max_abs(), 145.8, epsilon = 1e-9);

    // the diagram closes at the free end
    assert_relative_eq!(*moment.values.last().unwrap(), 0.0, epsilon = 1e-9);
}

#[test]
fn test_overhanging_beam_jumps() {
    let s = overhanging_beam().stabilize().unwrap();
    let shear = s.diagram("A", "E", InternalForce::Shear, 0.01).unwrap();

    for (x, jump) in [(1.8, -90.0), (4.2, -54.0), (7.2, 117.0)] {
        let at: Vec<usize> = (0..shear.len())
            .filter(|&i| shear.local_x[i] == x)
            .collect();
        assert!(at.len() >= 2, "boundary {x} must be sampled twice");
        let left = shear.values[at[0]];
        let right = shear.values[*at.last().unwrap()];
        assert_relative_eq!(right - left, jump, epsilon = 1e-9);
    }
}

#[test]
fn test_partially_loaded_beam() {
    let s = partially_loaded_beam().stabilize().unwrap();
    assert_balanced(&s);
    assert_relative_eq!(s.reactions("A").unwrap().fy, 80.0, epsilon = 1e-9);
    assert_relative_eq!(s.reactions("C").unwrap().fy, 40.0, epsilon = 1e-9);

    let shear = s.diagram("A", "C", InternalForce::Shear, 0.01).unwrap();
    assert_relative_eq!(shear.polynomials[0].b, -20.0, epsilon = 1e-9);
    assert_relative_eq!(shear.polynomials[0].c, 80.0, epsilon = 1e-9);
    assert_relative_eq!(shear.polynomials[1].evaluate(7.5), -40.0, epsilon = 1e-9);

    let moment = s.diagram("A", "C", InternalForce::Moment, 0.01).unwrap();
    let vertex = moment.polynomials[0].vertex().unwrap();
    assert_relative_eq!(vertex.x, 4.0, epsilon = 1e-9);
    assert_relative_eq!(vertex.y, 160.0, epsilon = 1e-9);
    assert_relative_eq!(moment.polynomials[0].evaluate(6.0), 120.0, epsilon = 1e-9);
    assert_relative_eq!(moment.polynomials[1].a, 0.0, epsilon = 1e-9);
    assert_relative_eq!(moment.polynomials[1].b, -40.0, epsilon = 1e-9);
    assert_relative_eq!(moment.polynomials[1].c, 360.0, epsilon = 1e-9);
}

#[test]
fn test_inclined_beam() {
    // a 3-4-5 incline keeps the beam length
    let flat = partially_loaded_beam();
    let inclined = flat.rotated_copy(0.75);
    let beam = inclined.find_beam("A", "C").unwrap().clone();
    assert_relative_eq!(inclined.beam_vector(&beam).unwrap().length(), 9.0, epsilon = 1e-9);

    let inclined = inclined.stabilize().unwrap();
    assert_balanced(&inclined);
    assert_relative_eq!(
        inclined.reactions("A").unwrap().force_magnitude(),
        80.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        inclined.reactions("C").unwrap().force_magnitude(),
        40.0,
        epsilon = 1e-9
    );

    let flat = flat.stabilize().unwrap();
    for kind in InternalForce::ALL {
        let expected = flat.diagram("A", "C", kind, 0.01).unwrap();
        let actual = inclined.diagram("A", "C", kind, 0.01).unwrap();
        assert_eq!(actual.polynomials.len(), expected.polynomials.len());
        for (a, e) in actual.polynomials.iter().zip(&expected.polynomials) {
            assert_relative_eq!(a.a, e.a, epsilon = 1e-6);
            assert_relative_eq!(a.b, e.b, epsilon = 1e-6);
            assert_relative_eq!(a.c, e.c, epsilon = 1e-6);
        }
    }

    let moment = inclined.diagram("A", "C", InternalForce::Moment, 0.01).unwrap();
    assert_relative_eq!(*moment.values.last().unwrap(), 0.0, epsilon = 1e-6);
    // plotted along the incline
    let (x, y) = moment.axes();
    assert_relative_eq!(x[0], 0.0, epsilon = 1e-9);
    assert_relative_eq!(y[0], 0.0, epsilon = 1e-9);
}

#[test]
fn test_json_exchange() {
    let s = overhanging_beam();
    let parsed = Structure::from_json(&s.to_json().unwrap()).unwrap();
    let stable = parsed.stabilize().unwrap();
    assert_relative_eq!(stable.reactions("D").unwrap().fy, 117.0, epsilon = 1e-9);
}

#[test]
fn test_strict_options() {
    let options = SolverOptions::new().with_tolerance(1e-6);
    let s = overhanging_beam().stabilize_with(&options).unwrap();
    assert!(s.equilibrium_summary().unwrap().is_stable);

    let unchecked = overhanging_beam()
        .stabilize_with(&SolverOptions::new().without_statics_check())
        .unwrap();
    assert_eq!(unchecked, s);
}
