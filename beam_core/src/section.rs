//! # Composite Cross-Sections
//!
//! Bending stiffness of a cross-section built from rectangular layers of
//! possibly different materials. Layers are homogenized to a reference
//! modulus by scaling their width, the neutral axis is the centroid of the
//! homogenized section, and EI is integrated layer by layer about it.
//!
//! ```text
//!   offset ─┬─ ┌───────────────┐ ← top of section
//!           │  │   layer 1 E1  │
//!           ▼  ├───────────────┤
//!              │               │
//!   ───────────┼── yn ─────────┼─── neutral axis
//!              │               │
//!              ├───────────────┤
//!              │   layer 2 E2  │
//!              └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::section::{compose, Layer};
//!
//! // 100 x 20 mm steel bar
//! let section = compose(&[Layer::new(100.0, 20.0, 0.0, 210_000.0)], None)?;
//! assert!((section.bending_stiffness - 1.4e10).abs() < 1.0);
//! assert!((section.top - 10.0).abs() < 1e-12);
//! assert!((section.bottom + 10.0).abs() < 1e-12);
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

use log::trace;
use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};
use crate::profile::SectionProfile;

/// One rectangular, non-overlapping part of a cross-section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Width (mm)
    pub width: f64,
    /// Height (mm)
    pub height: f64,
    /// Distance from the top of the whole section down to the top of this layer (mm)
    pub offset: f64,
    /// Young's modulus (MPa)
    pub modulus: f64,
}

impl Layer {
    pub fn new(width: f64, height: f64, offset: f64, modulus: f64) -> Self {
        Layer {
            width,
            height,
            offset,
            modulus,
        }
    }

    fn validate(&self, index: usize) -> BeamResult<()> {
        let field = format!("layers[{}]", index);
        let value = format!("{:?}", self);
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("modulus", self.modulus),
        ];
        for (name, v) in dimensions {
            if !v.is_finite() || v <= 0.0 {
                return Err(BeamError::invalid_input(
                    field,
                    value,
                    format!("{} must be a positive number", name),
                ));
            }
        }
        if !self.offset.is_finite() || self.offset < 0.0 {
            return Err(BeamError::invalid_input(field, value, "offset must be ≥ 0"));
        }
        Ok(())
    }
}

/// Bending properties of a composed section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeSection {
    /// E·I about the neutral axis (N·mm²)
    pub bending_stiffness: f64,
    /// Neutral axis to the highest fiber (mm, ≥ 0)
    pub top: f64,
    /// Neutral axis to the lowest fiber (mm, ≤ 0)
    pub bottom: f64,
    /// Depth of the neutral axis below the top of the section (mm)
    pub neutral_axis: f64,
}

impl CompositeSection {
    /// Constant section profile for a prismatic beam with this cross-section
    pub fn profile(&self, shear_stiffness: f64) -> SectionProfile {
        SectionProfile::new(self.bending_stiffness, shear_stiffness, self.top, self.bottom)
    }
}

/// Compose a cross-section from its layers.
///
/// `reference_modulus` is the modulus the section is homogenized to; it
/// defaults to the modulus of the first layer and does not change the
/// resulting EI.
///
/// # Errors
///
/// `InvalidInput` for an empty layer list, a layer with a non-positive
/// width, height or modulus, a negative offset, or a non-positive
/// reference modulus.
pub fn compose(layers: &[Layer], reference_modulus: Option<f64>) -> BeamResult<CompositeSection> {
    let first = layers
        .first()
        .ok_or_else(|| BeamError::invalid_input("layers", "[]", "at least one layer is required"))?;
    for (index, layer) in layers.iter().enumerate() {
        layer.validate(index)?;
    }
    let reference = reference_modulus.unwrap_or(first.modulus);
    if !reference.is_finite() || reference <= 0.0 {
        return Err(BeamError::invalid_input(
            "reference_modulus",
            reference.to_string(),
            "reference modulus must be a positive number",
        ));
    }

    // Centroid of the homogenized section, measured down from the top
    let (area, first_moment) = layers.iter().fold((0.0, 0.0), |(area, moment), layer| {
        let a = layer.width * layer.modulus / reference * layer.height;
        (area + a, moment + a * (layer.offset + layer.height / 2.0))
    });
    let neutral_axis = first_moment / area;

    // (layer, top, bottom) with fiber distances measured upward from the neutral axis
    let mut parts = Vec::with_capacity(layers.len() + 1);
    for layer in layers {
        let above = neutral_axis - layer.offset;
        if layer.offset < neutral_axis && neutral_axis < layer.offset + layer.height {
            parts.push((layer, above, 0.0));
            parts.push((layer, 0.0, above - layer.height));
        } else {
            parts.push((layer, above, above - layer.height));
        }
    }

    let bending_stiffness = parts
        .iter()
        .map(|(layer, top, bottom)| {
            layer.modulus * layer.width * (top.powi(3) - bottom.powi(3)) / 3.0
        })
        .sum();
    let top = parts.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let bottom = parts.iter().map(|p| p.2).fold(f64::INFINITY, f64::min);
    trace!(
        "composed {} layer(s): yn = {} mm, EI = {} N·mm²",
        layers.len(),
        neutral_axis,
        bending_stiffness
    );

    Ok(CompositeSection {
        bending_stiffness,
        top,
        bottom,
        neutral_axis,
    })
}
