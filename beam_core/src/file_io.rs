//! # File I/O Module
//!
//! Handles problem and result files with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility of problem files
//!
//! ## File Formats
//!
//! - Problem files are JSON ([`ProblemFile`])
//! - Result files are plain text columns `x D M y et eb dy` (position,
//!   shear force, bending moment, deflection, top strain, bottom strain,
//!   slope), one row per mm, numbers in `%g` style, under a `#` header
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::calculations::solve;
//! use beam_core::file_io::{load_problem, save_results};
//! use std::path::Path;
//!
//! let file = load_problem(Path::new("table.json"))?;
//! let solution = solve(&file.problem)?;
//! save_results(&solution, Path::new("table.txt"))?;
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use log::debug;

use crate::calculations::BeamSolution;
use crate::errors::{BeamError, BeamResult};
use crate::problem::{ProblemFile, SCHEMA_VERSION};

/// Column legend of result files
pub const RESULT_COLUMNS: &str = "x D M y et eb dy";

/// Write `contents` to `path` with atomic write semantics.
///
/// The save process:
/// 1. Write to a temporary file next to the target (`<name>.tmp`)
/// 2. Sync to disk (fsync)
/// 3. Rename over the target (atomic on most filesystems)
fn write_atomic(path: &Path, contents: &[u8]) -> BeamResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        BeamError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents).map_err(|e| {
        BeamError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        BeamError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        BeamError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Temporary sibling of `path`: `results.txt` → `results.txt.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Save a problem file atomically as pretty-printed JSON.
///
/// # Example
///
/// ```rust,no_run
/// use beam_core::calculations::{BeamProblem, Supports};
/// use beam_core::file_io::save_problem;
/// use beam_core::loads::Load;
/// use beam_core::problem::ProblemFile;
/// use beam_core::profile::SectionProfile;
/// use std::path::Path;
///
/// let section = SectionProfile::new(1.0e10, 3.0e5, 15.0, -15.0);
/// let problem = BeamProblem::new(1000.0, Supports::Clamped, section)
///     .with_load(Load::point(-500.0, 1000.0));
/// save_problem(&ProblemFile::new("C-1", "Engineer", problem), Path::new("c1.json"))?;
/// # Ok::<(), beam_core::errors::BeamError>(())
/// ```
pub fn save_problem(file: &ProblemFile, path: &Path) -> BeamResult<()> {
    let json =
        serde_json::to_string_pretty(file).map_err(|e| BeamError::serialization(e.to_string()))?;
    write_atomic(path, json.as_bytes())
}

/// Load a problem file.
///
/// # Returns
///
/// * `Ok(ProblemFile)` - Successfully loaded problem
/// * `Err(BeamError::VersionMismatch)` - File version is incompatible
/// * `Err(BeamError::SerializationError)` - Invalid JSON
/// * `Err(BeamError::FileError)` - I/O error
pub fn load_problem(path: &Path) -> BeamResult<ProblemFile> {
    let mut file = File::open(path).map_err(|e| {
        BeamError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        BeamError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let problem: ProblemFile = serde_json::from_str(&contents).map_err(|e| {
        BeamError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    validate_version(&problem.meta.version)?;
    debug!("loaded problem '{}' from {}", problem.meta.label, path.display());

    Ok(problem)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> BeamResult<()> {
    let mismatch = || BeamError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> =
        SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor version may contain breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

/// Write a solution as columns of numbers.
///
/// ```text
/// # file: table.txt
/// # generated: 2024-05-01 14:03:12
/// # x D M y et eb dy
/// 0 250 250 0 -2.14e-06 2.14e-06 -0.000106
/// ...
/// ```
pub fn save_results(solution: &BeamSolution, path: &Path) -> BeamResult<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!("# file: {}\n", name));
    out.push_str(&format!("# generated: {}\n", Local::now().format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&format!("# {}\n", RESULT_COLUMNS));

    let columns = [
        solution.shear_n(),
        solution.moment_nmm(),
        solution.deflection_mm(),
        solution.strain_top(),
        solution.strain_bottom(),
        solution.slope(),
    ];
    for x in 0..=solution.length_mm() {
        out.push_str(&format_general(x as f64));
        for column in &columns {
            out.push(' ');
            out.push_str(&format_general(column[x]));
        }
        out.push('\n');
    }

    write_atomic(path, out.as_bytes())
}

/// Format a number like C's `%g`: six significant digits, scientific
/// notation for exponents below -4 or from 6 up, trailing zeros removed.
///
/// ```rust
/// use beam_core::file_io::format_general;
///
/// assert_eq!(format_general(1000.0), "1000");
/// assert_eq!(format_general(-0.5), "-0.5");
/// assert_eq!(format_general(1.0 / 3.0), "0.333333");
/// assert_eq!(format_general(2.5e-7), "2.5e-07");
/// assert_eq!(format_general(1.4e10), "1.4e+10");
/// ```
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to six significant digits decides the exponent
    let scientific = format!("{:.5e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !(-4..6).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let fixed = format!("{:.*}", (5 - exponent) as usize, value);
        trim_fraction(&fixed).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
