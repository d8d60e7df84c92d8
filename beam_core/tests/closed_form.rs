//! Engine results against classical closed-form beam solutions.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use beam_core::equations::beam::*;
use beam_core::equations::section::{hollow_rectangular_moment_of_inertia, rectangular_area};
use beam_core::loads::{patient_load, Magnitude, PatientPlacement};
use beam_core::profile::Profile;
use beam_core::section::{compose, Layer};
use beam_core::{solve, BeamProblem, Load, LoadBuilder, SectionProfile, Supports};

const L: f64 = 1000.0;
const P: f64 = -500.0;

/// 400 x 30 mm hollow section, 2 mm walls, E = 120 GPa
fn ei() -> f64 {
    0.5 * 240_000.0 * hollow_rectangular_moment_of_inertia(400.0, 30.0, 26.0)
}

fn section() -> SectionProfile {
    SectionProfile::new(ei(), 28.0 * rectangular_area(400.0, 26.0), 15.0, -15.0)
}

fn supported() -> BeamProblem {
    BeamProblem::new(L, Supports::simple(0.0, L), section()).with_shear(false)
}

fn cantilever() -> BeamProblem {
    BeamProblem::new(L, Supports::Clamped, section()).with_shear(false)
}

#[test]
fn cantilever_tip_load() {
    let solution = solve(&cantilever().with_load(Load::point(P, L))).unwrap();
    let expected = cantilever_point_deflection(P, L, ei());
    assert_relative_eq!(solution.deflection_at(1000).unwrap(), expected, max_relative = 0.005);
    assert_abs_diff_eq!(solution.shear_at(1000).unwrap(), 0.0, epsilon = 1e-9 * P.abs());
    assert_eq!(solution.moment_at(1000), Some(0.0));
}

#[test]
fn cantilever_uniform_load() {
    let load = LoadBuilder::new().force(P).span(0.0, L).distributed().unwrap();
    let solution = solve(&cantilever().with_load(load)).unwrap();
    let expected = cantilever_uniform_deflection(P, L, ei());
    assert_relative_eq!(solution.deflection_at(1000).unwrap(), expected, max_relative = 0.005);
}

#[test]
fn simply_supported_central_point_load() {
    let solution = solve(&supported().with_load(Load::point(P, 500.0))).unwrap();
    let expected = point_load_max_deflection_midspan(P, L, ei());
    assert_relative_eq!(solution.deflection_at(500).unwrap(), expected, max_relative = 0.005);
    assert_relative_eq!(solution.reactions().first_force(), 250.0);
    assert_relative_eq!(solution.reactions().second_force().unwrap(), 250.0);
}

#[test]
fn simply_supported_point_load_along_span() {
    let solution = solve(&supported().with_load(Load::point(P, 300.0))).unwrap();
    for x in [150, 300, 600, 850] {
        let expected = point_load_deflection(P, 300.0, L, x as f64, ei());
        assert_relative_eq!(solution.deflection_at(x).unwrap(), expected, max_relative = 0.01);
    }
}

#[test]
fn simply_supported_uniform_load() {
    let solution = solve(&supported().with_load(Load::distributed(P, 0.0, L).unwrap())).unwrap();
    let expected = uniform_load_max_deflection(P, L, ei());
    assert_relative_eq!(solution.deflection_at(500).unwrap(), expected, max_relative = 0.005);
}

#[test]
fn simply_supported_triangular_load() {
    let solution = solve(&supported().with_load(Load::triangle(P, 0.0, L).unwrap())).unwrap();
    let x = triangular_load_max_deflection_position(L).round() as usize;
    let expected = triangular_load_max_deflection(P, L, ei());
    assert_relative_eq!(solution.deflection_at(x).unwrap(), expected, max_relative = 0.005);
    assert_abs_diff_eq!(solution.shear_at(1000).unwrap(), 0.0, epsilon = 1e-9 * P.abs());
}

#[test]
fn simply_supported_end_moment() {
    let m = -5.0e5;
    let solution = solve(&supported().with_load(Load::moment(m, L))).unwrap();
    // Positive applied moment deflects the span in -y
    let expected = -end_moment_max_deflection(m, L, ei());
    let y = solution.deflection_at(1000 - 422).unwrap();
    assert_relative_eq!(y, expected, max_relative = 0.005);
    // Moment loads carry no shear of their own; the reactions form a couple
    let (r1, r2) = applied_moment_reactions(-m, L);
    assert_relative_eq!(solution.reactions().first_force(), r1);
    assert_relative_eq!(solution.reactions().second_force().unwrap(), r2);
}

#[test]
fn simply_supported_three_point_loads() {
    let problem = supported().with_loads([250.0, 500.0, 750.0].map(|x| Load::point(P, x)));
    let solution = solve(&problem).unwrap();
    let expected = three_point_loads_max_deflection(P, L, ei());
    assert_relative_eq!(solution.deflection_at(500).unwrap(), expected, max_relative = 0.005);
}

#[test]
fn overhanging_supports_stay_at_zero() {
    let problem = BeamProblem::new(L, Supports::simple(900.0, 100.0), section())
        .with_load(Load::point(P, 300.0))
        .with_load(Load::distributed(P, 0.0, L).unwrap());
    let solution = solve(&problem).unwrap();
    assert_abs_diff_eq!(solution.deflection_at(100).unwrap(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(solution.deflection_at(900).unwrap(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(solution.shear_at(1000).unwrap(), 0.0, epsilon = 1e-9 * 1000.0);
}

#[test]
fn sandwich_panel_shear_deformation() {
    // 50 mm wide panel, 28 mm foam core, 1.3 mm skins, three-point bending
    let (length, width, core, skin) = (200.0, 50.0, 28.0, 1.3);
    let (e, g, p) = (22_185.0, 12.0, -150.0);
    let ei = e * hollow_rectangular_moment_of_inertia(width, core + 2.0 * skin, core);
    let ga = g * rectangular_area(width, core);
    let profile = SectionProfile::new(ei, ga, 15.3, -15.3);
    let problem = BeamProblem::new(length, Supports::simple(0.0, length), profile)
        .with_load(Load::point(p, 100.0));

    let bending = point_load_max_deflection_midspan(p, length, ei);
    let without = solve(&problem.clone().with_shear(false)).unwrap();
    assert_relative_eq!(without.deflection_at(100).unwrap(), bending, max_relative = 0.005);

    let total = bending + point_load_shear_deflection_midspan(p, length, ga);
    let with = solve(&problem.with_shear(true)).unwrap();
    assert_relative_eq!(with.deflection_at(100).unwrap(), total, max_relative = 0.02);
}

#[test]
fn mass_and_force_give_the_same_load() {
    let by_mass = LoadBuilder::new().kg(50.0).at(500.0).point().unwrap();
    let by_force = LoadBuilder::new().force(-9.81 * 50.0).at(500.0).point().unwrap();
    assert_eq!(by_mass.force(), -9.81 * 50.0);
    assert_eq!(by_mass, by_force);
    assert_eq!(
        solve(&supported().with_load(by_mass)).unwrap(),
        solve(&supported().with_load(by_force)).unwrap()
    );
}

#[test]
fn patient_on_a_table_is_in_equilibrium() {
    let loads = patient_load(Magnitude::Mass(135.0), PatientPlacement::Head(2000.0)).unwrap();
    let problem =
        BeamProblem::new(2200.0, Supports::simple(300.0, 1800.0), section()).with_loads(loads);
    let solution = solve(&problem).unwrap();

    let weight = -9.81 * 135.0;
    let reactions = solution.reactions();
    let total = reactions.first_force() + reactions.second_force().unwrap();
    assert_relative_eq!(total, -weight, max_relative = 1e-12);
    assert_abs_diff_eq!(solution.shear_at(2200).unwrap(), 0.0, epsilon = 1e-9 * weight.abs());
}

#[test]
fn composed_section_matches_hand_values() {
    let composite = compose(&[Layer::new(400.0, 30.0, 0.0, 120_000.0)], None).unwrap();
    let solid = 120_000.0 * 400.0 * 30.0f64.powi(3) / 12.0;
    assert_relative_eq!(composite.bending_stiffness, solid, max_relative = 0.01);

    let problem = BeamProblem::new(L, Supports::simple(0.0, L), composite.profile(1.0e6))
        .with_load(Load::point(P, 500.0))
        .with_shear(false);
    let solution = solve(&problem).unwrap();
    let expected = point_load_max_deflection_midspan(P, L, solid);
    assert_relative_eq!(solution.deflection_at(500).unwrap(), expected, max_relative = 0.005);
    // Symmetric section: equal and opposite fiber strains
    let (top, bottom) = (solution.strain_top()[499], solution.strain_bottom()[499]);
    assert_relative_eq!(top, -bottom, max_relative = 1e-12);
}

#[test]
fn stiffer_half_deflects_less() {
    let uniform = solve(&supported().with_load(Load::point(P, 500.0))).unwrap();

    let stations = [(0.0, ei()), (500.0, ei()), (501.0, 4.0 * ei()), (1000.0, 4.0 * ei())];
    let stiff = Profile::interpolated(&stations).unwrap();
    let mut problem = supported().with_load(Load::point(P, 500.0));
    problem.section.ei = stiff;
    let stiffened = solve(&problem).unwrap();

    let (a, b) = (uniform.deflection_at(500).unwrap(), stiffened.deflection_at(500).unwrap());
    assert!(b < 0.0 && b.abs() < a.abs());
    assert_abs_diff_eq!(stiffened.deflection_at(1000).unwrap(), 0.0, epsilon = 1e-12);
}
