//! Problem files on disk through to result columns.

use std::env::temp_dir;
use std::fs;
use std::path::{Path, PathBuf};

use beam_core::{load_problem, save_problem, save_results, solve, ProblemFile};

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("demos").join(name)
}

#[test]
fn demo_strip_solves() {
    let file = load_problem(&demo("strip.json")).unwrap();
    assert_eq!(file.meta.label, "Aluminium strip 30 x 3");
    assert_eq!(file.problem.loads.len(), 2);

    let solution = solve(&file.problem).unwrap();
    assert_eq!(solution.deflection_mm().len(), 801);
    assert_eq!(solution.deflection_at(6), Some(0.0));
    assert!(solution.deflection_at(400).unwrap() < 0.0);
}

#[test]
fn problem_survives_save_and_reload() {
    let original = load_problem(&demo("strip.json")).unwrap();
    let path = temp_dir().join(format!("beam_core_it_{}_strip.json", std::process::id()));

    let mut copy: ProblemFile = original.clone();
    copy.touch();
    save_problem(&copy, &path).unwrap();
    let reloaded = load_problem(&path).unwrap();
    assert_eq!(reloaded.problem, original.problem);
    assert_eq!(solve(&reloaded.problem).unwrap(), solve(&original.problem).unwrap());

    let _ = fs::remove_file(&path);
}

#[test]
fn result_columns_follow_solution() {
    let file = load_problem(&demo("strip.json")).unwrap();
    let solution = solve(&file.problem).unwrap();
    let path = temp_dir().join(format!("beam_core_it_{}_strip.txt", std::process::id()));
    save_results(&solution, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let rows: Vec<Vec<f64>> = text
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| line.split(' ').map(|v| v.parse().unwrap()).collect())
        .collect();
    assert_eq!(rows.len(), 801);
    for x in [0usize, 6, 400, 780, 800] {
        let row = &rows[x];
        assert_eq!(row[0], x as f64);
        // Six significant digits
        let close = |a: f64, b: f64| (a - b).abs() <= 1e-5 * b.abs().max(1e-12);
        assert!(close(row[1], solution.shear_n()[x]));
        assert!(close(row[2], solution.moment_nmm()[x]));
        assert!(close(row[3], solution.deflection_mm()[x]));
        assert!(close(row[6], solution.slope()[x]));
    }

    let _ = fs::remove_file(&path);
}
