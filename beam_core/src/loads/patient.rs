//! Patient load per IEC 60601.
//!
//! The standard patient is 1900 mm long and lies with the feet towards
//! x = 0. Its weight is split over six overlapping body segments, each
//! modelled as a uniformly distributed load.

use serde::{Deserialize, Serialize};

use super::{Load, Magnitude};
use crate::errors::{BeamError, BeamResult};
use crate::units::Millimeters;

/// Length of the standard patient (mm)
pub const PATIENT_LENGTH_MM: f64 = 1900.0;

/// (fraction of body weight, start, end) measured from the feet in mm
const BODY_SEGMENTS: [(f64, f64, f64); 6] = [
    (0.148, 0.0, 450.0),     // lower legs
    (0.222, 450.0, 1000.0),  // upper legs
    (0.074, 1000.0, 1180.0), // hands
    (0.408, 1000.0, 1700.0), // torso
    (0.074, 1200.0, 1700.0), // arms
    (0.074, 1220.0, 1900.0), // head
];

/// Where the patient lies on the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PatientPlacement {
    /// Position of the feet (mm)
    Feet(f64),
    /// Position of the top of the head (mm)
    Head(f64),
}

impl PatientPlacement {
    /// Sample index of the feet
    fn feet_sample(self) -> BeamResult<i64> {
        let raw = match self {
            PatientPlacement::Feet(x) | PatientPlacement::Head(x) => x,
        };
        if !raw.is_finite() {
            return Err(BeamError::invalid_input(
                "feet/head",
                raw.to_string(),
                "patient position must be a finite number",
            ));
        }
        Ok(match self {
            PatientPlacement::Feet(x) => Millimeters(x).to_sample(),
            PatientPlacement::Head(x) => Millimeters(x).to_sample() - PATIENT_LENGTH_MM as i64,
        })
    }
}

/// Distributed loads representing a lying patient.
///
/// # Example
/// ```rust
/// use beam_core::loads::{patient_load, Magnitude, PatientPlacement};
///
/// let loads = patient_load(Magnitude::Mass(250.0), PatientPlacement::Head(2287.0))?;
/// assert_eq!(loads.len(), 6);
///
/// let total: f64 = loads.iter().map(|l| l.force()).sum();
/// assert!((total - (-9.81 * 250.0)).abs() < 1e-9);
/// # Ok::<(), beam_core::errors::BeamError>(())
/// ```
pub fn patient_load(magnitude: Magnitude, placement: PatientPlacement) -> BeamResult<Vec<Load>> {
    let weight = magnitude.validated()?;
    let feet = placement.feet_sample()? as f64;
    BODY_SEGMENTS
        .iter()
        .map(|&(fraction, start, end)| {
            Load::distributed(fraction * weight, feet + start, feet + end)
        })
        .collect()
}
