//! # Beam Solution
//!
//! Solves a straight beam on two simple supports, or clamped at x = 0, for
//! shear force, bending moment, slope, deflection and fiber strain at every
//! mm of its length.
//!
//! ## Assumptions
//!
//! - Linear elastic material, small deflections
//! - Bending per d²y/dx² = M/(E·I), optional shear deformation
//!   dy/dx = -1.5·V/(G·A)
//! - Loads act in the y-direction; 1 mm resolution
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::{solve, BeamProblem, Supports};
//! use beam_core::loads::Load;
//! use beam_core::profile::SectionProfile;
//!
//! // 30 x 3 mm aluminium strip on supports at 6 and 780 mm
//! let (e, g, b, h) = (69_500.0, 26_000.0, 30.0, 3.0);
//! let section = SectionProfile::new(e * b * h * h * h / 12.0, g * b * h, h / 2.0, -h / 2.0);
//!
//! let problem = BeamProblem::new(800.0, Supports::simple(6.0, 780.0), section)
//!     .with_load(Load::point(-20.0, 400.0))
//!     .with_shear(true);
//!
//! let solution = solve(&problem)?;
//! assert_eq!(solution.deflection_mm().len(), 801);
//! assert!(solution.deflection_at(6).unwrap().abs() < 1e-9);
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::integration;
use super::reactions::{solve_reactions, Reactions, SupportLayout};
use crate::errors::{BeamError, BeamResult};
use crate::loads::Load;
use crate::profile::{ResolvedSection, SectionProfile};
use crate::units::Millimeters;

/// How the beam is supported
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Supports {
    /// Two simple supports (mm), in either order. Vertical movement is zero
    /// at both, rotation is free.
    Simple { first_mm: f64, second_mm: f64 },
    /// Clamped at x = 0: zero deflection and zero slope there
    Clamped,
}

impl Supports {
    /// Two simple supports
    pub fn simple(first_mm: f64, second_mm: f64) -> Self {
        Supports::Simple { first_mm, second_mm }
    }

    /// Cantilever clamped at x = 0
    pub fn clamped() -> Self {
        Supports::Clamped
    }
}

fn default_include_shear() -> bool {
    true
}

/// Complete description of a beam problem.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_mm": 1000,
///   "supports": { "type": "Simple", "first_mm": 0, "second_mm": 1000 },
///   "loads": [
///     { "type": "Point", "force_n": -500.0, "position_mm": 500 },
///     { "type": "Distributed", "force_n": -200.0, "start_mm": 0, "end_mm": 1000 }
///   ],
///   "section": { "ei": 8.8e10, "ga": 2.9e5, "top": 15.0, "bottom": -15.0 },
///   "include_shear": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamProblem {
    /// Length of the beam (mm), rounded to a whole mm
    pub length_mm: f64,

    /// Simple supports or clamp
    pub supports: Supports,

    /// Applied loads. Reactions are never added here.
    pub loads: Vec<Load>,

    /// EI, GA, top and bottom along the beam
    pub section: SectionProfile,

    /// Include shear deformation in the slope
    #[serde(default = "default_include_shear")]
    pub include_shear: bool,
}

impl BeamProblem {
    /// Create a problem without loads. Shear deformation is included by default.
    pub fn new(length_mm: f64, supports: Supports, section: SectionProfile) -> Self {
        BeamProblem {
            length_mm,
            supports,
            loads: Vec::new(),
            section,
            include_shear: default_include_shear(),
        }
    }

    /// Add a load and return self (builder pattern)
    pub fn with_load(mut self, load: Load) -> Self {
        self.loads.push(load);
        self
    }

    /// Add several loads and return self (builder pattern)
    pub fn with_loads(mut self, loads: impl IntoIterator<Item = Load>) -> Self {
        self.loads.extend(loads);
        self
    }

    /// Switch shear deformation on or off and return self (builder pattern)
    pub fn with_shear(mut self, include_shear: bool) -> Self {
        self.include_shear = include_shear;
        self
    }

    /// Check the problem without solving it.
    pub fn validate(&self) -> BeamResult<()> {
        self.validated().map(|_| ())
    }

    /// Validate everything up front and return a private working copy.
    fn validated(&self) -> BeamResult<ValidatedProblem> {
        let length = validate_length(self.length_mm)?;
        let layout = validate_supports(&self.supports, length)?;
        validate_loads(&self.loads, length)?;
        let section = self.section.resolve(length + 1)?;
        validate_section(&section, self.include_shear)?;

        Ok(ValidatedProblem {
            length,
            layout,
            loads: self.loads.clone(),
            section,
            include_shear: self.include_shear,
        })
    }
}

/// A problem that passed validation, with its own copy of the loads
struct ValidatedProblem {
    length: usize,
    layout: SupportLayout,
    loads: Vec<Load>,
    section: ResolvedSection,
    include_shear: bool,
}

/// Longest beam the solver accepts (mm). Every field holds one f64 per mm.
pub const MAX_LENGTH_MM: usize = 10_000_000;

fn validate_length(length_mm: f64) -> BeamResult<usize> {
    let rounded = length_mm.round_ties_even();
    if !rounded.is_finite() || rounded < 1.0 {
        return Err(BeamError::invalid_input(
            "length_mm",
            length_mm.to_string(),
            "length must be ≥1 mm",
        ));
    }
    if rounded > MAX_LENGTH_MM as f64 {
        return Err(BeamError::invalid_input(
            "length_mm",
            length_mm.to_string(),
            format!("length must be at most {} mm", MAX_LENGTH_MM),
        ));
    }
    Ok(rounded as usize)
}

fn validate_supports(supports: &Supports, length: usize) -> BeamResult<SupportLayout> {
    let (first_mm, second_mm) = match *supports {
        Supports::Clamped => return Ok(SupportLayout::Clamped),
        Supports::Simple { first_mm, second_mm } => (first_mm, second_mm),
    };
    let value = format!("({}, {})", first_mm, second_mm);
    if !first_mm.is_finite() || !second_mm.is_finite() {
        return Err(BeamError::invalid_input(
            "supports",
            value,
            "support positions must be finite numbers",
        ));
    }

    let (a, b) = (Millimeters(first_mm).to_sample(), Millimeters(second_mm).to_sample());
    if a == b {
        return Err(BeamError::invalid_input("supports", value, "Two identical supports found"));
    }
    let (first, second) = (a.min(b), a.max(b));
    if first < 0 || second > length as i64 {
        return Err(BeamError::invalid_input("supports", value, "Support(s) outside of the beam"));
    }
    Ok(SupportLayout::Simple {
        first: first as usize,
        second: second as usize,
    })
}

fn validate_loads(loads: &[Load], length: usize) -> BeamResult<()> {
    if loads.is_empty() {
        return Err(BeamError::invalid_input("loads", "[]", "No loads specified"));
    }
    for (index, load) in loads.iter().enumerate() {
        let field = format!("loads[{}]", index);
        let (start, end) = load.extent();
        if start < 0 || end > length as i64 {
            return Err(BeamError::invalid_input(
                field,
                load.to_string(),
                "load lies outside of the beam",
            ));
        }
        if matches!(load, Load::Distributed { .. } | Load::Triangle { .. }) && start >= end {
            return Err(BeamError::invalid_input(field, load.to_string(), "zero-length load span"));
        }
        let magnitude = match load {
            Load::Moment { moment_nmm, .. } => *moment_nmm,
            other => other.force(),
        };
        if !magnitude.is_finite() {
            return Err(BeamError::invalid_input(
                field,
                load.to_string(),
                "magnitude must be a finite number",
            ));
        }
    }
    Ok(())
}

fn validate_section(section: &ResolvedSection, include_shear: bool) -> BeamResult<()> {
    let profiles = [
        ("EI", &section.ei, true),
        ("GA", &section.ga, include_shear),
        ("top", &section.top, false),
        ("bottom", &section.bottom, false),
    ];
    for (name, values, divides) in profiles {
        if let Some((x, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(BeamError::invalid_input(
                name,
                v.to_string(),
                format!("non-finite value at {} mm", x),
            ));
        }
        if divides {
            if let Some(x) = values.iter().position(|v| *v == 0.0) {
                return Err(BeamError::invalid_input(
                    name,
                    "0",
                    format!("stiffness is zero at {} mm", x),
                ));
            }
        }
    }
    Ok(())
}

/// Solve a beam problem.
///
/// All input is validated before any computation; the caller's load list is
/// left untouched.
///
/// # Returns
///
/// * `Ok(BeamSolution)` - Shear, moment, slope, deflection, rotation and strain
///   per mm, plus the support reactions
/// * `Err(BeamError::InvalidInput)` - Bad length, supports, loads or profiles
pub fn solve(problem: &BeamProblem) -> BeamResult<BeamSolution> {
    let ValidatedProblem {
        length,
        layout,
        mut loads,
        section,
        include_shear,
    } = problem.validated()?;
    debug!(
        "solving {} mm beam, {:?}, {} load(s), shear deformation {}",
        length,
        layout,
        loads.len(),
        if include_shear { "on" } else { "off" }
    );

    let reactions = solve_reactions(layout, &loads);
    debug!("reactions: {}", reactions);
    loads.extend(reactions.point_loads());

    let shear = integration::shear_force(length, &loads);
    let clamped = matches!(layout, SupportLayout::Clamped);
    let moment = integration::bending_moment(&shear, &loads, clamped);
    trace!("residual shear at free end: {}", shear[length]);

    let curvature = integration::curvature(&moment, &section.ei);
    let strain_top = integration::fiber_strain(&section.top, &curvature);
    let strain_bottom = integration::fiber_strain(&section.bottom, &curvature);

    let shear_term = include_shear.then_some((shear.as_slice(), section.ga.as_slice()));
    let mut slope = integration::slope(&curvature, shear_term);
    let mut deflection = integration::deflection(&slope);

    if let SupportLayout::Simple { first, second } = layout {
        let correction = integration::align_to_supports(&mut deflection, &mut slope, first, second);
        debug!("support alignment: slope correction {:e} about {} mm", correction, first);
    }
    let rotation = integration::rotation(&slope);

    Ok(BeamSolution {
        length_mm: length,
        shear_n: shear,
        moment_nmm: moment,
        slope,
        deflection_mm: deflection,
        rotation_rad: rotation,
        strain_top,
        strain_bottom,
        reactions,
    })
}

/// Results of [`solve`]. Every array has `length_mm + 1` entries, index = position in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSolution {
    length_mm: usize,
    shear_n: Vec<f64>,
    moment_nmm: Vec<f64>,
    slope: Vec<f64>,
    deflection_mm: Vec<f64>,
    rotation_rad: Vec<f64>,
    strain_top: Vec<f64>,
    strain_bottom: Vec<f64>,
    reactions: Reactions,
}

impl BeamSolution {
    /// Length of the beam (mm)
    pub fn length_mm(&self) -> usize {
        self.length_mm
    }

    /// Shear force in the cross-section (N)
    pub fn shear_n(&self) -> &[f64] {
        &self.shear_n
    }

    /// Bending moment in the cross-section (N·mm)
    pub fn moment_nmm(&self) -> &[f64] {
        &self.moment_nmm
    }

    /// Slope dy/dx of the beam
    pub fn slope(&self) -> &[f64] {
        &self.slope
    }

    /// Vertical displacement (mm)
    pub fn deflection_mm(&self) -> &[f64] {
        &self.deflection_mm
    }

    /// Angle between the tangent and the x-axis (radians)
    pub fn rotation_rad(&self) -> &[f64] {
        &self.rotation_rad
    }

    /// Strain at the top fiber
    pub fn strain_top(&self) -> &[f64] {
        &self.strain_top
    }

    /// Strain at the bottom fiber
    pub fn strain_bottom(&self) -> &[f64] {
        &self.strain_bottom
    }

    /// Support reactions
    pub fn reactions(&self) -> &Reactions {
        &self.reactions
    }

    /// Deflection at `x_mm`, `None` past the end of the beam
    pub fn deflection_at(&self, x_mm: usize) -> Option<f64> {
        self.deflection_mm.get(x_mm).copied()
    }

    /// Bending moment at `x_mm`, `None` past the end of the beam
    pub fn moment_at(&self, x_mm: usize) -> Option<f64> {
        self.moment_nmm.get(x_mm).copied()
    }

    /// Shear force at `x_mm`, `None` past the end of the beam
    pub fn shear_at(&self, x_mm: usize) -> Option<f64> {
        self.shear_n.get(x_mm).copied()
    }

    /// Extreme values and where they occur
    pub fn summary(&self) -> SolutionSummary {
        let (max_shear_n, max_shear_position_mm) = extreme(&self.shear_n);
        let (max_moment_nmm, max_moment_position_mm) = extreme(&self.moment_nmm);
        let (max_deflection_mm, max_deflection_position_mm) = extreme(&self.deflection_mm);
        let (max_strain_top, max_strain_top_position_mm) = extreme(&self.strain_top);
        let (max_strain_bottom, max_strain_bottom_position_mm) = extreme(&self.strain_bottom);

        SolutionSummary {
            length_mm: self.length_mm,
            reactions: self.reactions.clone(),
            max_shear_n,
            max_shear_position_mm,
            max_moment_nmm,
            max_moment_position_mm,
            max_deflection_mm,
            max_deflection_position_mm,
            max_strain_top,
            max_strain_top_position_mm,
            max_strain_bottom,
            max_strain_bottom_position_mm,
        }
    }
}

/// Value with the largest magnitude (sign kept) and its index
fn extreme(values: &[f64]) -> (f64, usize) {
    values
        .iter()
        .copied()
        .enumerate()
        .fold((0.0, 0), |(best, at), (x, v)| if v.abs() > best.abs() { (v, x) } else { (best, at) })
}

/// Condensed view of a [`BeamSolution`]: the extreme value of each field
/// (largest magnitude, sign kept) with its position.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_mm": 1000,
///   "reactions": { "type": "Simple", "first": {...}, "second": {...} },
///   "max_shear_n": 250.0,
///   "max_shear_position_mm": 0,
///   "max_moment_nmm": 125000.0,
///   "max_moment_position_mm": 499,
///   "max_deflection_mm": -0.0297,
///   "max_deflection_position_mm": 500,
///   ...
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionSummary {
    pub length_mm: usize,
    pub reactions: Reactions,
    pub max_shear_n: f64,
    pub max_shear_position_mm: usize,
    pub max_moment_nmm: f64,
    pub max_moment_position_mm: usize,
    pub max_deflection_mm: f64,
    pub max_deflection_position_mm: usize,
    pub max_strain_top: f64,
    pub max_strain_top_position_mm: usize,
    pub max_strain_bottom: f64,
    pub max_strain_bottom_position_mm: usize,
}
