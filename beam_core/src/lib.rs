//! # beam_core - Beam Mechanics Engine
//!
//! `beam_core` computes the static response of a straight beam (shear force,
//! bending moment, slope, deflection and fiber strain at every mm) under any
//! combination of point loads, distributed loads, triangular loads and
//! applied moments. The beam rests on two simple supports or is clamped at
//! x = 0. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: [`solve`] takes an immutable problem and returns an immutable solution
//! - **JSON-First**: All problem and result types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Validated Up Front**: Bad input fails before any array is computed
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{solve, BeamProblem, Load, SectionProfile, Supports};
//!
//! // 1000 mm cantilever, 500 N downward at the tip
//! let section = SectionProfile::new(1.0e10, 3.0e5, 15.0, -15.0);
//! let problem = BeamProblem::new(1000.0, Supports::Clamped, section)
//!     .with_load(Load::point(-500.0, 1000.0))
//!     .with_shear(false);
//!
//! let solution = solve(&problem)?;
//! let tip = solution.deflection_at(1000).unwrap();
//! assert!(tip < 0.0);
//! # Ok::<(), beam_core::BeamError>(())
//! ```
//!
//! ## Modules
//!
//! - [`loads`] - Load types, the load builder and the patient load
//! - [`calculations`] - Reactions, field integration and the solver
//! - [`profile`] - EI, GA, top and bottom along the beam
//! - [`section`] - Composite cross-sections from rectangular layers
//! - [`equations`] - Closed-form reference formulas
//! - [`problem`] - Problem file container and metadata
//! - [`file_io`] - Atomic problem saves and result column export
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod problem;
pub mod profile;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{solve, BeamProblem, BeamSolution, Reactions, SolutionSummary, Supports};
pub use errors::{BeamError, BeamResult};
pub use file_io::{load_problem, save_problem, save_results};
pub use loads::{Load, LoadBuilder};
pub use problem::{ProblemFile, ProblemMetadata};
pub use profile::{Profile, SectionProfile};
pub use section::{compose, CompositeSection, Layer};
