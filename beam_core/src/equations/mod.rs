//! # Reference Equations
//!
//! Closed-form structural mechanics results. The numerical engine does not
//! use them; they exist to build inputs by hand and to verify the engine
//! against textbook cases.
//!
//! ## Modules
//!
//! - [`beam`] - Deflection and reaction formulas (simply-supported, cantilever)
//! - [`section`] - Cross-section properties (A, I)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - Timoshenko, Strength of Materials, Part I

pub mod beam;
pub mod section;

// Re-export commonly used items
pub use beam::{
    applied_moment_reactions,
    cantilever_point_deflection,
    cantilever_uniform_deflection,
    end_moment_max_deflection,
    point_load_deflection,
    point_load_max_deflection_midspan,
    point_load_reactions,
    point_load_shear_deflection_midspan,
    three_point_loads_max_deflection,
    triangular_load_max_deflection,
    triangular_load_max_deflection_position,
    uniform_load_max_deflection,
};

pub use section::{
    hollow_rectangular_moment_of_inertia,
    rectangular_area,
    rectangular_moment_of_inertia,
    sandwich_skin_moment_of_inertia,
};
