//! # Cross-Section Property Formulas
//!
//! Geometric properties of simple cross-sections, used to build section
//! profiles by hand and to check the layer composer.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area (mm²)
//! - `I` = Second moment of area (mm⁴)
//! - `b` = Width of section (mm)
//! - `h` = Height of section (mm)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1

// =============================================================================
// SOLID RECTANGLE
// =============================================================================

/// Cross-sectional area of a rectangle
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × h
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Second moment of area of a rectangle about its centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_moment_of_inertia;
///
/// // 30 x 3 mm strip
/// let i = rectangular_moment_of_inertia(30.0, 3.0);
/// assert!((i - 67.5).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

// =============================================================================
// HOLLOW RECTANGLE / SANDWICH
// Two skins of equal thickness around a core that carries no bending
// =============================================================================

/// Second moment of area of a hollow rectangle (or the skins of a sandwich)
///
/// ```text
///     ┌─────────┐  ─┬─
///     ├─────────┤   │ ─┬─
///     │  core   │ H │  h
///     ├─────────┤   │ ─┴─
///     └─────────┘  ─┴─
///          b
/// ```
///
/// # Formula
/// I = b(H³ - h³)/12
#[inline]
pub fn hollow_rectangular_moment_of_inertia(b: f64, outer_h: f64, inner_h: f64) -> f64 {
    b * (outer_h.powi(3) - inner_h.powi(3)) / 12.0
}

/// Second moment of area of the skins of a sandwich panel, thin-skin
/// approximation
///
/// # Formula
/// I ≈ b·t·d²/2, d = core height + t (skin centroid distance)
#[inline]
pub fn sandwich_skin_moment_of_inertia(b: f64, core_h: f64, skin_t: f64) -> f64 {
    let d = core_h + skin_t;
    b * skin_t * d * d / 2.0
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangular_area() {
        assert_relative_eq!(rectangular_area(400.0, 26.0), 10_400.0);
    }

    #[test]
    fn test_rectangular_moment_of_inertia() {
        // 100 x 20: I = 100 * 8000 / 12
        assert_relative_eq!(rectangular_moment_of_inertia(100.0, 20.0), 66_666.666_666_666_67);
    }

    #[test]
    fn test_hollow_is_difference_of_rectangles() {
        let hollow = hollow_rectangular_moment_of_inertia(400.0, 30.0, 26.0);
        let difference =
            rectangular_moment_of_inertia(400.0, 30.0) - rectangular_moment_of_inertia(400.0, 26.0);
        assert_relative_eq!(hollow, difference, max_relative = 1e-12);
    }

    #[test]
    fn test_thin_skin_approximation() {
        // Thin skins: approximation within 1 % of the exact value
        let exact = hollow_rectangular_moment_of_inertia(50.0, 28.0 + 2.0 * 1.3, 28.0);
        let approx = sandwich_skin_moment_of_inertia(50.0, 28.0, 1.3);
        assert_relative_eq!(exact, approx, max_relative = 0.01);
    }
}
