//! Validated load construction.
//!
//! A load needs a magnitude (a force, or a mass that is converted to its
//! weight) and a location (a position, or a start/end span). The builder
//! collects whichever of these the caller has and fails with a
//! [`BeamError::MissingField`] naming the piece that is absent.

use serde::{Deserialize, Serialize};

use super::Load;
use crate::errors::{BeamError, BeamResult};
use crate::units::{Kilograms, Newtons};

/// How the size of a load was specified
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Magnitude {
    /// Force in Newtons (downward negative)
    Force(f64),
    /// Mass in kg, acting downward under standard gravity
    Mass(f64),
}

impl Magnitude {
    /// Resolve to a force in Newtons
    pub fn newtons(self) -> f64 {
        match self {
            Magnitude::Force(n) => n,
            Magnitude::Mass(kg) => Newtons::from(Kilograms(kg)).0,
        }
    }

    pub(crate) fn validated(self) -> BeamResult<f64> {
        let (field, raw) = match self {
            Magnitude::Force(n) => ("force", n),
            Magnitude::Mass(kg) => ("kg", kg),
        };
        if !raw.is_finite() {
            return Err(BeamError::invalid_input(
                field,
                raw.to_string(),
                "magnitude must be a finite number",
            ));
        }
        Ok(self.newtons())
    }
}

/// Builder for [`Load`] values.
///
/// Setting a magnitude or location twice keeps the last value.
///
/// # Example
/// ```rust
/// use beam_core::loads::LoadBuilder;
///
/// let load = LoadBuilder::new().kg(150.0).at(100.0).point()?;
/// assert_eq!(load.to_string(), "point load of -1471.5 N @ 100 mm.");
///
/// let missing = LoadBuilder::new().at(100.0).point();
/// assert!(missing.is_err());
/// # Ok::<(), beam_core::errors::BeamError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoadBuilder {
    magnitude: Option<Magnitude>,
    position_mm: Option<f64>,
    span_mm: Option<(f64, f64)>,
}

impl LoadBuilder {
    /// Start an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the load as a force in Newtons (downward negative)
    pub fn force(mut self, newtons: f64) -> Self {
        self.magnitude = Some(Magnitude::Force(newtons));
        self
    }

    /// Size the load as the weight of a mass in kg
    pub fn kg(mut self, kg: f64) -> Self {
        self.magnitude = Some(Magnitude::Mass(kg));
        self
    }

    /// Location of a point load or moment (mm)
    pub fn at(mut self, position_mm: f64) -> Self {
        self.position_mm = Some(position_mm);
        self
    }

    /// Borders of a spread load (mm), in either order
    pub fn span(mut self, start_mm: f64, end_mm: f64) -> Self {
        self.span_mm = Some((start_mm, end_mm));
        self
    }

    /// Build a point load
    pub fn point(self) -> BeamResult<Load> {
        let force = self.resolve_force()?;
        let position = self.resolve_position()?;
        Ok(Load::point(force, position))
    }

    /// Build a uniformly distributed load
    pub fn distributed(self) -> BeamResult<Load> {
        let force = self.resolve_force()?;
        let (start, end) = self.resolve_span()?;
        Load::distributed(force, start, end)
    }

    /// Build a linearly rising load
    pub fn triangle(self) -> BeamResult<Load> {
        let force = self.resolve_force()?;
        let (start, end) = self.resolve_span()?;
        Load::triangle(force, start, end)
    }

    /// Build an applied moment (N·mm) at the configured position.
    ///
    /// Any force or mass given to the builder is ignored.
    pub fn moment(self, moment_nmm: f64) -> BeamResult<Load> {
        if !moment_nmm.is_finite() {
            return Err(BeamError::invalid_input(
                "moment",
                moment_nmm.to_string(),
                "moment must be a finite number",
            ));
        }
        let position = self.resolve_position()?;
        Ok(Load::moment(moment_nmm, position))
    }

    fn resolve_force(&self) -> BeamResult<f64> {
        self.magnitude
            .ok_or_else(|| BeamError::missing_field("force or kg"))?
            .validated()
    }

    fn resolve_position(&self) -> BeamResult<f64> {
        let position = self
            .position_mm
            .ok_or_else(|| BeamError::missing_field("position"))?;
        if !position.is_finite() {
            return Err(BeamError::invalid_input(
                "position",
                position.to_string(),
                "position must be a finite number",
            ));
        }
        Ok(position)
    }

    fn resolve_span(&self) -> BeamResult<(f64, f64)> {
        self.span_mm.ok_or_else(|| BeamError::missing_field("start/end"))
    }
}
