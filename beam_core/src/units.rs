//! # Unit Types
//!
//! Type-safe wrappers for the SI units the engine works in. These are plain
//! f64 newtypes, so JSON serialization stays a bare number.
//!
//! ## Units
//!
//! The engine works in a consistent millimeter/Newton system:
//! - Length: millimeters (mm), one sample per mm
//! - Force: Newtons (N), downward negative
//! - Moment: Newton-millimeters (N·mm)
//! - Stiffness: EI in N·mm², GA in N
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{Kilograms, Millimeters, Newtons};
//!
//! // A 150 kg mass weighs -1471.5 N under standard gravity
//! let weight: Newtons = Kilograms(150.0).into();
//! assert_eq!(weight.0, -9.81 * 150.0);
//!
//! // Positions snap to the 1 mm sample grid
//! assert_eq!(Millimeters(499.6).to_sample(), 500);
//! ```

use serde::{Deserialize, Serialize};

/// Standard gravitational acceleration used to turn a mass into a weight (m/s²)
pub const GRAVITY: f64 = 9.81;

// ============================================================================
// Length Units
// ============================================================================

/// Length or position in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl Millimeters {
    /// Round to the nearest sample index (1 mm grid).
    ///
    /// Halfway cases round to the even neighbour, so 2.5 mm lands on
    /// sample 2 and 3.5 mm on sample 4.
    pub fn to_sample(self) -> i64 {
        self.0.round_ties_even() as i64
    }
}

// ============================================================================
// Force and Mass Units
// ============================================================================

/// Force in Newtons. Downward forces are negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// The weight of a mass: gravity acts in -y, so 1 kg becomes -9.81 N.
impl From<Kilograms> for Newtons {
    fn from(kg: Kilograms) -> Self {
        Newtons(-GRAVITY * kg.0)
    }
}
