//! Support reactions from static equilibrium.
//!
//! For two simple supports the moment balance about the first support gives
//! the reaction at the second one, after which the force balance gives the
//! first. A cantilever clamped at x = 0 carries both a reaction force and a
//! reaction moment at the clamp.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::loads::Load;

/// How the beam is held, after validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SupportLayout {
    /// Simple supports at two distinct samples, `first < second`
    Simple { first: usize, second: usize },
    /// Clamped at x = 0
    Clamped,
}

/// Reaction loads that keep the beam in equilibrium
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Reactions {
    /// Point loads at the two simple supports
    Simple { first: Load, second: Load },
    /// Point load and moment (N·mm) at the clamp
    Clamped { force: Load, moment_nmm: f64 },
}

impl Reactions {
    /// Reaction force at the first support or at the clamp (N)
    pub fn first_force(&self) -> f64 {
        match self {
            Reactions::Simple { first, .. } => first.force(),
            Reactions::Clamped { force, .. } => force.force(),
        }
    }

    /// Reaction force at the second support; `None` for a clamp
    pub fn second_force(&self) -> Option<f64> {
        match self {
            Reactions::Simple { second, .. } => Some(second.force()),
            Reactions::Clamped { .. } => None,
        }
    }

    /// Reaction moment at the clamp; `None` for simple supports
    pub fn clamp_moment(&self) -> Option<f64> {
        match self {
            Reactions::Simple { .. } => None,
            Reactions::Clamped { moment_nmm, .. } => Some(*moment_nmm),
        }
    }

    /// The reactions that act as point loads in the shear integration
    pub fn point_loads(&self) -> Vec<Load> {
        match self {
            Reactions::Simple { first, second } => vec![second.clone(), first.clone()],
            Reactions::Clamped { force, .. } => vec![force.clone()],
        }
    }
}

impl fmt::Display for Reactions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reactions::Simple { first, second } => write!(f, "R1: {} R2: {}", first, second),
            Reactions::Clamped { force, moment_nmm } => {
                write!(f, "R1: {} R2: moment of {} N·mm @ 0 mm.", force, moment_nmm)
            }
        }
    }
}

/// Solve the reactions for a validated, non-empty load set.
pub(crate) fn solve_reactions(layout: SupportLayout, loads: &[Load]) -> Reactions {
    let anchor = match layout {
        SupportLayout::Simple { first, .. } => first,
        SupportLayout::Clamped => 0,
    };
    let moment: f64 = loads.iter().map(|load| load.moment_at(anchor as f64)).sum();
    let applied: f64 = loads.iter().map(Load::force).sum();

    match layout {
        SupportLayout::Simple { first, second } => {
            let r2 = -moment / (second - first) as f64;
            let r1 = -(applied + r2);
            Reactions::Simple {
                first: Load::point(r1, first as f64),
                second: Load::point(r2, second as f64),
            }
        }
        SupportLayout::Clamped => Reactions::Clamped {
            force: Load::point(-applied, 0.0),
            moment_nmm: -moment,
        },
    }
}
