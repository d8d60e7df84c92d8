//! # Section Profiles
//!
//! The solver needs four values at every mm of the beam: bending stiffness
//! EI, shear stiffness GA, and the distances from the neutral axis to the
//! top and bottom fibers. Each is a [`Profile`], either constant along the
//! beam or given sample by sample.
//!
//! Varying profiles are usually built from a handful of stations with
//! [`interpolate`].
//!
//! ## Example
//!
//! ```rust
//! use beam_core::profile::{Profile, SectionProfile};
//!
//! // 30 x 3 mm aluminium strip
//! let (e, g, b, h): (f64, f64, f64, f64) = (69_500.0, 26_000.0, 30.0, 3.0);
//! let section = SectionProfile::new(
//!     Profile::Constant(e * b * h.powi(3) / 12.0),
//!     Profile::Constant(g * b * h),
//!     Profile::Constant(h / 2.0),
//!     Profile::Constant(-h / 2.0),
//! );
//!
//! // Tapered strip: EI drops linearly over the second half of a 1000 mm beam
//! let ei = Profile::interpolated(&[(0.0, 4.7e6), (500.0, 4.7e6), (1000.0, 2.0e6)])?;
//! assert_eq!(ei.resolve("EI", 1001)?.len(), 1001);
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::integration::linspace;
use crate::errors::{BeamError, BeamResult};
use crate::units::Millimeters;

/// A per-mm quantity along the beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Profile {
    /// Same value at every sample
    Constant(f64),
    /// One value per sample, `length + 1` entries
    Values(Vec<f64>),
}

impl Profile {
    /// Build a per-sample profile by linear interpolation between stations.
    /// See [`interpolate`].
    pub fn interpolated(points: &[(f64, f64)]) -> BeamResult<Self> {
        interpolate(points).map(Profile::Values)
    }

    /// Expand to exactly `samples` values.
    ///
    /// Constants are broadcast. A value list of any other length is an
    /// error naming `name`.
    pub fn resolve(&self, name: &str, samples: usize) -> BeamResult<Vec<f64>> {
        match self {
            Profile::Constant(value) => Ok(vec![*value; samples]),
            Profile::Values(values) if values.len() == samples => Ok(values.clone()),
            Profile::Values(values) => Err(BeamError::invalid_input(
                name,
                format!("{} values", values.len()),
                format!("length doesn't match beam length ({}) + 1", samples.saturating_sub(1)),
            )),
        }
    }
}

impl From<f64> for Profile {
    fn from(value: f64) -> Self {
        Profile::Constant(value)
    }
}

impl From<Vec<f64>> for Profile {
    fn from(values: Vec<f64>) -> Self {
        Profile::Values(values)
    }
}

/// Stiffness and fiber geometry of the beam along its length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProfile {
    /// Bending stiffness E·I (N·mm²)
    pub ei: Profile,
    /// Shear stiffness G·A (N)
    pub ga: Profile,
    /// Neutral axis to top fiber (mm, ≥ 0 by convention)
    pub top: Profile,
    /// Neutral axis to bottom fiber (mm, ≤ 0 by convention)
    pub bottom: Profile,
}

impl SectionProfile {
    /// Create a section profile from its four components
    pub fn new(
        ei: impl Into<Profile>,
        ga: impl Into<Profile>,
        top: impl Into<Profile>,
        bottom: impl Into<Profile>,
    ) -> Self {
        SectionProfile {
            ei: ei.into(),
            ga: ga.into(),
            top: top.into(),
            bottom: bottom.into(),
        }
    }

    /// Expand all four profiles to `samples` values, in the order
    /// EI, GA, top, bottom.
    pub(crate) fn resolve(&self, samples: usize) -> BeamResult<ResolvedSection> {
        Ok(ResolvedSection {
            ei: self.ei.resolve("EI", samples)?,
            ga: self.ga.resolve("GA", samples)?,
            top: self.top.resolve("top", samples)?,
            bottom: self.bottom.resolve("bottom", samples)?,
        })
    }
}

/// Section profiles expanded to one value per sample
#[derive(Debug, Clone)]
pub(crate) struct ResolvedSection {
    pub ei: Vec<f64>,
    pub ga: Vec<f64>,
    pub top: Vec<f64>,
    pub bottom: Vec<f64>,
}

/// Linear interpolation between `(position, value)` stations.
///
/// Positions are rounded to whole mm. The result starts at the first
/// station and ends at the last one, so element `i` belongs to position
/// `first + i`. Pairs whose position does not increase are skipped.
///
/// # Example
/// ```rust
/// use beam_core::profile::interpolate;
///
/// assert_eq!(interpolate(&[(0.0, 0.0), (3.0, 3.0)])?, vec![0.0, 1.0, 2.0, 3.0]);
/// assert_eq!(
///     interpolate(&[(1.0, 1.0), (4.0, 4.0), (6.0, -3.0)])?,
///     vec![1.0, 2.0, 3.0, 4.0, 0.5, -3.0]
/// );
/// # Ok::<(), beam_core::errors::BeamError>(())
/// ```
pub fn interpolate(points: &[(f64, f64)]) -> BeamResult<Vec<f64>> {
    let Some(&(_, last_value)) = points.last() else {
        return Err(BeamError::invalid_input("points", "[]", "at least one station is required"));
    };
    if let Some(&(x, v)) = points.iter().find(|(x, v)| !x.is_finite() || !v.is_finite()) {
        return Err(BeamError::invalid_input(
            "points",
            format!("({}, {})", x, v),
            "stations must be finite numbers",
        ));
    }

    let mut values = Vec::new();
    for pair in points.windows(2) {
        let (x0, y0) = (Millimeters(pair[0].0).to_sample(), pair[0].1);
        let (x1, y1) = (Millimeters(pair[1].0).to_sample(), pair[1].1);
        if x1 > x0 {
            let ramp = linspace(y0, y1, (x1 - x0) as usize + 1);
            values.extend_from_slice(&ramp[..ramp.len() - 1]);
        }
    }
    values.push(last_value);
    Ok(values)
}
