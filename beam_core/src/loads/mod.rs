//! # Beam Loads
//!
//! The closed set of loads the engine understands. Every load acts in the
//! y-direction and is sampled on the 1 mm grid of the beam.
//!
//! - [`Load::Point`] - concentrated force at one position
//! - [`Load::Distributed`] - force spread evenly between two positions
//! - [`Load::Triangle`] - force rising linearly from zero at the start to its
//!   peak at the end; the given force is the net total
//! - [`Load::Moment`] - pure bending moment, no net force
//!
//! Loads are built either directly ([`Load::point`], [`Load::distributed`], ...)
//! or through the validated [`LoadBuilder`], which also accepts a mass in kg.
//!
//! ## Sign Convention
//!
//! - Forces: positive in +y, so gravity loads are negative
//! - Moments: N·mm; a moment load steps the bending moment by `-moment`
//!
//! ## Example
//!
//! ```rust
//! use beam_core::loads::{Load, LoadBuilder};
//!
//! let p = Load::point(-2000.0, 1000.0);
//! let q = LoadBuilder::new().kg(50.0).span(2000.0, 1500.0).distributed()?;
//! let t = Load::triangle(-200.0, 1500.0, 1200.0)?;
//!
//! assert_eq!(q.force(), -9.81 * 50.0);
//! assert_eq!(t.to_string(), "linearly ascending distributed load of -200 N @ 1200--1500 mm.");
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

pub mod builder;
pub mod patient;

pub use builder::{LoadBuilder, Magnitude};
pub use patient::{patient_load, PatientPlacement, PATIENT_LENGTH_MM};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::integration::{cumulative_sum, linspace};
use crate::errors::{BeamError, BeamResult};
use crate::units::Millimeters;

/// A single load applied to the beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Load {
    /// Point load (N) at a position (mm from x = 0)
    Point { force_n: f64, position_mm: i64 },

    /// Uniformly distributed load with net force (N) between start and end (mm)
    Distributed {
        force_n: f64,
        start_mm: i64,
        end_mm: i64,
    },

    /// Linearly rising load with net force (N); zero intensity at start,
    /// peak intensity at end
    Triangle {
        force_n: f64,
        start_mm: i64,
        end_mm: i64,
    },

    /// Applied bending moment (N·mm) at a position (mm from x = 0)
    Moment { moment_nmm: f64, position_mm: i64 },
}

impl Load {
    /// Create a point load. The position is rounded to the nearest mm.
    pub fn point(force_n: f64, position_mm: f64) -> Self {
        Load::Point {
            force_n,
            position_mm: Millimeters(position_mm).to_sample(),
        }
    }

    /// Create an applied moment. The position is rounded to the nearest mm.
    pub fn moment(moment_nmm: f64, position_mm: f64) -> Self {
        Load::Moment {
            moment_nmm,
            position_mm: Millimeters(position_mm).to_sample(),
        }
    }

    /// Create a uniformly distributed load.
    ///
    /// The bounds may be given in either order. A span that rounds to zero
    /// length is rejected.
    pub fn distributed(force_n: f64, start_mm: f64, end_mm: f64) -> BeamResult<Self> {
        let (start_mm, end_mm) = normalized_span(start_mm, end_mm)?;
        Ok(Load::Distributed {
            force_n,
            start_mm,
            end_mm,
        })
    }

    /// Create a linearly rising load. The intensity is zero at the lower
    /// bound and maximal at the upper bound, whatever order they are given in.
    pub fn triangle(force_n: f64, start_mm: f64, end_mm: f64) -> BeamResult<Self> {
        let (start_mm, end_mm) = normalized_span(start_mm, end_mm)?;
        Ok(Load::Triangle {
            force_n,
            start_mm,
            end_mm,
        })
    }

    /// Net force of the load (N). Zero for a pure moment.
    pub fn force(&self) -> f64 {
        match self {
            Load::Point { force_n, .. }
            | Load::Distributed { force_n, .. }
            | Load::Triangle { force_n, .. } => *force_n,
            Load::Moment { .. } => 0.0,
        }
    }

    /// First and last sample the load touches (mm)
    pub fn extent(&self) -> (i64, i64) {
        match self {
            Load::Point { position_mm, .. } | Load::Moment { position_mm, .. } => {
                (*position_mm, *position_mm)
            }
            Load::Distributed { start_mm, end_mm, .. }
            | Load::Triangle { start_mm, end_mm, .. } => (*start_mm, *end_mm),
        }
    }

    /// Bending moment this load alone exerts about `x_mm` on a free beam (N·mm).
    ///
    /// Spread loads use the closed-form resultant at their centroid. A pure
    /// moment is the same about every point.
    pub fn moment_at(&self, x_mm: f64) -> f64 {
        match self {
            Load::Point {
                force_n,
                position_mm,
            } => (*position_mm as f64 - x_mm) * force_n,
            Load::Distributed {
                force_n,
                start_mm,
                end_mm,
            } => {
                // Resultant at the middle of the span
                let centroid = (*start_mm + *end_mm) as f64 / 2.0;
                (centroid - x_mm) * force_n
            }
            Load::Triangle {
                force_n,
                start_mm,
                end_mm,
            } => {
                // Resultant two thirds of the way towards the peak
                let centroid = *start_mm as f64 + 2.0 * (*end_mm - *start_mm) as f64 / 3.0;
                (centroid - x_mm) * force_n
            }
            Load::Moment { moment_nmm, .. } => *moment_nmm,
        }
    }

    /// Contribution of this load to the shear force, one value per mm
    /// (`length + 1` entries).
    pub fn shear_contribution(&self, length: usize) -> Vec<f64> {
        let samples = 0..=length as i64;
        match self {
            Load::Point {
                force_n,
                position_mm,
            } => samples
                .map(|i| if i >= *position_mm { *force_n } else { 0.0 })
                .collect(),
            Load::Distributed {
                force_n,
                start_mm,
                end_mm,
            } => {
                let ramp = linspace(0.0, *force_n, span_samples(*start_mm, *end_mm));
                samples
                    .map(|i| {
                        if i < *start_mm {
                            0.0
                        } else if i < *end_mm {
                            ramp[(i - start_mm) as usize]
                        } else {
                            *force_n
                        }
                    })
                    .collect()
            }
            Load::Triangle {
                force_n,
                start_mm,
                end_mm,
            } => {
                let span = span_samples(*start_mm, *end_mm);
                if span == 0 {
                    return vec![0.0; length + 1];
                }
                // Peak intensity such that the density sums to the net force
                let peak = 2.0 * force_n / span as f64;
                let density = linspace(0.0, peak, span);
                let per_mm: Vec<f64> = samples
                    .map(|i| {
                        if i >= *start_mm && i < *end_mm {
                            density[(i - start_mm) as usize]
                        } else {
                            0.0
                        }
                    })
                    .collect();
                cumulative_sum(&per_mm)
            }
            Load::Moment { .. } => vec![0.0; length + 1],
        }
    }

    /// Direct contribution to the bending moment (`length + 1` entries).
    ///
    /// Only pure moments have one; force loads reach the moment through the
    /// integral of the shear and return `None`.
    pub fn moment_contribution(&self, length: usize) -> Option<Vec<f64>> {
        match self {
            Load::Moment {
                moment_nmm,
                position_mm,
            } => Some(
                (0..=length as i64)
                    .map(|i| if i >= *position_mm { -moment_nmm } else { 0.0 })
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Load::Point {
                force_n,
                position_mm,
            } => write!(f, "point load of {} N @ {} mm.", force_n, position_mm),
            Load::Distributed {
                force_n,
                start_mm,
                end_mm,
            } => write!(
                f,
                "constant distributed load of {} N @ {}--{} mm.",
                force_n, start_mm, end_mm
            ),
            Load::Triangle {
                force_n,
                start_mm,
                end_mm,
            } => write!(
                f,
                "linearly ascending distributed load of {} N @ {}--{} mm.",
                force_n, start_mm, end_mm
            ),
            Load::Moment {
                moment_nmm,
                position_mm,
            } => write!(f, "moment of {} N·mm @ {} mm.", moment_nmm, position_mm),
        }
    }
}

/// Round a span to the mm grid and put it in ascending order.
fn normalized_span(start_mm: f64, end_mm: f64) -> BeamResult<(i64, i64)> {
    for (field, value) in [("start", start_mm), ("end", end_mm)] {
        if !value.is_finite() {
            return Err(BeamError::invalid_input(
                field,
                value.to_string(),
                "position must be a finite number",
            ));
        }
    }
    let (a, b) = (Millimeters(start_mm).to_sample(), Millimeters(end_mm).to_sample());
    if a == b {
        return Err(BeamError::invalid_input(
            "start/end",
            format!("({}, {})", start_mm, end_mm),
            "a distributed load needs a span of at least 1 mm",
        ));
    }
    Ok((a.min(b), a.max(b)))
}

/// Number of samples a span covers before its end point
fn span_samples(start_mm: i64, end_mm: i64) -> usize {
    (end_mm - start_mm).max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_load_creation() {
        let load = Load::point(-20.0, 299.6);
        assert_eq!(
            load,
            Load::Point {
                force_n: -20.0,
                position_mm: 300
            }
        );
        assert_eq!(load.force(), -20.0);
        assert_eq!(load.to_string(), "point load of -20 N @ 300 mm.");
    }

    #[test]
    fn test_span_order_is_normalized() {
        let load = Load::distributed(-100.0, 2000.0, 1500.0).unwrap();
        assert_eq!(load.extent(), (1500, 2000));

        let load = Load::triangle(-100.0, 1500.0, 1200.0).unwrap();
        assert_eq!(load.extent(), (1200, 1500));
    }

    #[test]
    fn test_half_mm_positions_round_to_even() {
        assert_eq!(Load::point(-1.0, 2.5).extent(), (2, 2));
        assert_eq!(Load::point(-1.0, 3.5).extent(), (4, 4));
        assert_eq!(Load::moment(1.0, 2.5).extent(), (2, 2));
        assert_eq!(Load::distributed(-1.0, 0.5, 10.5).unwrap().extent(), (0, 10));
        assert_eq!(Load::triangle(-1.0, 0.5, 1.5).unwrap().extent(), (0, 2));
        assert!(Load::distributed(-1.0, 1.5, 2.5).is_err());
    }

    #[test]
    fn test_zero_span_rejected() {
        let err = Load::distributed(-100.0, 300.2, 299.8).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(Load::triangle(-100.0, 50.0, 50.0).is_err());
        assert!(Load::distributed(-100.0, f64::NAN, 50.0).is_err());
    }

    #[test]
    fn test_point_moment_at() {
        let load = Load::point(-500.0, 1000.0);
        assert_eq!(load.moment_at(0.0), -500_000.0);
        assert_eq!(load.moment_at(1000.0), 0.0);
    }

    #[test]
    fn test_distributed_moment_at_uses_centroid() {
        let load = Load::distributed(-600.0, 200.0, 800.0).unwrap();
        assert_relative_eq!(load.moment_at(0.0), -600.0 * 500.0);
        assert_relative_eq!(load.moment_at(500.0), 0.0);
    }

    #[test]
    fn test_triangle_moment_at_uses_centroid() {
        let load = Load::triangle(-300.0, 0.0, 900.0).unwrap();
        assert_relative_eq!(load.moment_at(0.0), -300.0 * 600.0);
    }

    #[test]
    fn test_moment_load_is_position_independent() {
        let load = Load::moment(1.0e5, 400.0);
        assert_eq!(load.moment_at(0.0), 1.0e5);
        assert_eq!(load.moment_at(750.0), 1.0e5);
        assert_eq!(load.force(), 0.0);
    }

    #[test]
    fn test_point_shear_is_step() {
        let shear = Load::point(-10.0, 3.0).shear_contribution(5);
        assert_eq!(shear, vec![0.0, 0.0, 0.0, -10.0, -10.0, -10.0]);
    }

    #[test]
    fn test_distributed_shear_ramps_then_holds() {
        let shear = Load::distributed(-6.0, 1.0, 4.0).unwrap().shear_contribution(6);
        assert_eq!(shear, vec![0.0, 0.0, -3.0, -6.0, -6.0, -6.0, -6.0]);
    }

    #[test]
    fn test_triangle_shear_reaches_net_force() {
        let load = Load::triangle(-500.0, 100.0, 600.0).unwrap();
        let shear = load.shear_contribution(1000);
        assert_eq!(shear.len(), 1001);
        assert_eq!(shear[100], 0.0);
        assert_relative_eq!(shear[599], -500.0, max_relative = 1e-12);
        assert_relative_eq!(shear[1000], -500.0, max_relative = 1e-12);
        // Rising intensity: the shear curve gets steeper towards the end
        assert!((shear[350] - shear[349]).abs() < (shear[550] - shear[549]).abs());
    }

    #[test]
    fn test_moment_load_shear_and_moment() {
        let load = Load::moment(250.0, 2.0);
        assert_eq!(load.shear_contribution(4), vec![0.0; 5]);
        assert_eq!(load.moment_contribution(4), Some(vec![0.0, 0.0, -250.0, -250.0, -250.0]));
        assert_eq!(Load::point(1.0, 2.0).moment_contribution(4), None);
    }

    #[test]
    fn test_load_serialization() {
        let load = Load::distributed(-50.0, 0.0, 1000.0).unwrap();
        let json = serde_json::to_string(&load).unwrap();
        assert!(json.contains("Distributed"));

        let roundtrip: Load = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, load);
    }
}
