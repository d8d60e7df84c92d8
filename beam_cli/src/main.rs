//! # Beammech CLI Application
//!
//! Terminal front end for the beam engine.
//!
//! ```text
//! beam_cli <problem.json> [results.txt]   solve a problem file
//! beam_cli                                interactive cantilever demo
//! ```
//!
//! Diagnostics go through `env_logger`; set `RUST_LOG=debug` to see the
//! engine's validation and reaction records.
//!
//! Exit status is 0 on success, 2 for usage or input errors and 1 for file
//! errors.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use beam_core::loads::LoadBuilder;
use beam_core::section::{compose, Layer};
use beam_core::{
    load_problem, save_results, solve, BeamError, BeamProblem, BeamResult, BeamSolution, Supports,
};
use log::{error, info};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let outcome = match args.as_slice() {
        [] => run_demo(),
        [problem] => run_file(Path::new(problem), None),
        [problem, results] => run_file(Path::new(problem), Some(Path::new(results))),
        _ => {
            eprintln!("usage: beam_cli [<problem.json> [results.txt]]");
            return ExitCode::from(2);
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            // 2 for bad input, 1 for I/O and file format failures
            if e.is_input_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Solve a problem file, optionally writing the result columns
fn run_file(problem_path: &Path, results_path: Option<&Path>) -> BeamResult<()> {
    let file = load_problem(problem_path)?;
    info!("loaded '{}' from {}", file.meta.label, problem_path.display());

    let solution = solve(&file.problem)?;
    print_report(&file.meta.label, &file.problem, &solution)?;

    if let Some(path) = results_path {
        save_results(&solution, path)?;
        info!("results written to {}", path.display());
    }
    Ok(())
}

/// Prompted cantilever with a mass hanging from its tip
fn run_demo() -> BeamResult<()> {
    println!("Beammech CLI - Beam Mechanics Calculator");
    println!("========================================");
    println!();
    println!("No problem file given. Running cantilever demo...");
    println!();

    let length = prompt_f64("Enter beam length (mm) [1000]: ", 1000.0);
    let mass = prompt_f64("Enter mass at the tip (kg) [50]: ", 50.0);
    let width = prompt_f64("Enter section width (mm) [40]: ", 40.0);
    let height = prompt_f64("Enter section height (mm) [60]: ", 60.0);
    let modulus = prompt_f64("Enter Young's modulus (MPa) [11000]: ", 11_000.0);

    // ν = 0.3
    let shear_modulus = modulus / 2.6;
    let section = compose(&[Layer::new(width, height, 0.0, modulus)], None)?;
    let tip = LoadBuilder::new().kg(mass).at(length).point()?;
    let profile = section.profile(shear_modulus * width * height);
    let problem = BeamProblem::new(length, Supports::Clamped, profile).with_load(tip);

    println!();
    let solution = solve(&problem)?;
    print_report("CLI-Demo", &problem, &solution)
}

fn print_report(label: &str, problem: &BeamProblem, solution: &BeamSolution) -> BeamResult<()> {
    let summary = solution.summary();

    println!("═══════════════════════════════════════");
    println!("  BEAM RESULTS: {}", label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Length:   {} mm", summary.length_mm);
    match problem.supports {
        Supports::Simple { first_mm, second_mm } => {
            println!("  Supports: simple @ {} and {} mm", first_mm, second_mm)
        }
        Supports::Clamped => println!("  Supports: clamped @ 0 mm"),
    }
    for load in &problem.loads {
        println!("  Load:     {}", load);
    }
    println!("  Shear deformation: {}", if problem.include_shear { "included" } else { "ignored" });
    println!();
    println!("Reactions:");
    println!("  {}", summary.reactions);
    println!();
    println!("Extremes:");
    println!("  V_max = {:.1} N @ {} mm", summary.max_shear_n, summary.max_shear_position_mm);
    println!(
        "  M_max = {:.0} N·mm @ {} mm",
        summary.max_moment_nmm, summary.max_moment_position_mm
    );
    println!(
        "  y_max = {:.3} mm @ {} mm",
        summary.max_deflection_mm, summary.max_deflection_position_mm
    );
    println!(
        "  ε_top = {:.3e} @ {} mm",
        summary.max_strain_top, summary.max_strain_top_position_mm
    );
    println!(
        "  ε_bot = {:.3e} @ {} mm",
        summary.max_strain_bottom, summary.max_strain_bottom_position_mm
    );
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    let json = serde_json::to_string_pretty(&summary)
        .map_err(|e| BeamError::serialization(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
