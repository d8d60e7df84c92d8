//! # Beam Calculations
//!
//! The numerical engine. A calculation follows the pattern:
//!
//! - [`BeamProblem`] - Input (JSON-serializable)
//! - [`BeamSolution`] - Results (JSON-serializable)
//! - [`solve`]`(problem) -> Result<BeamSolution, BeamError>` - Pure calculation function
//!
//! ## Submodules
//!
//! - [`reactions`] - Support reactions from static equilibrium
//! - [`integration`] - Discrete shear → moment → slope → deflection chain
//! - [`beam`] - Validation, orchestration and result packaging

pub mod beam;
pub mod integration;
pub mod reactions;

// Re-export commonly used types
pub use beam::{solve, BeamProblem, BeamSolution, SolutionSummary, Supports, MAX_LENGTH_MM};
pub use reactions::Reactions;
