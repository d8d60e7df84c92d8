//! # Closed-Form Beam Formulas
//!
//! Classical Euler-Bernoulli results for the load cases the numerical
//! engine is checked against. All loads are given as their net force, so a
//! uniform load is `W = w·L` rather than an intensity.
//!
//! ## Notation
//!
//! - `L` = Span length (mm)
//! - `x` = Position along beam from left support (mm)
//! - `a` = Load position from left support (mm)
//! - `P` = Point load or net force (N)
//! - `M0` = Applied moment (N·mm)
//! - `EI` = Bending stiffness (N·mm²)
//! - `GA` = Shear stiffness (N)
//!
//! ## Sign Conventions
//!
//! These formulas return magnitudes: a load `P` produces a deflection with
//! the same sign as `P`. The engine reports deflection in +y, so a downward
//! (negative) load gives a negative value in both.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Timoshenko, Strength of Materials, Part I

// =============================================================================
// SIMPLY-SUPPORTED: POINT LOADS
// =============================================================================

/// Calculate reactions for point load P at position a on span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←───────L────→ R2
/// ```
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    (p * (l - a) / l, p * a / l)
}

/// Deflection at position x for point load P at position a
///
/// # Formulas (Roark's Table 8.1, Case 1a)
///
/// For x ≤ a:
/// ```text
/// δ(x) = Pbx(L² - b² - x²) / (6EIL)
/// ```
///
/// For x > a:
/// ```text
/// δ(x) = Pa(L-x)(2Lx - x² - a²) / (6EIL)
/// ```
///
/// where b = L - a
#[inline]
pub fn point_load_deflection(p: f64, a: f64, l: f64, x: f64, ei: f64) -> f64 {
    let b = l - a;
    if x <= a {
        p * b * x * (l * l - b * b - x * x) / (6.0 * ei * l)
    } else {
        p * a * (l - x) * (2.0 * l * x - x * x - a * a) / (6.0 * ei * l)
    }
}

/// Midspan deflection for a point load at midspan
///
/// # Formula
/// δ_max = PL³ / (48EI)
///
/// # Example
/// ```rust
/// use beam_core::equations::beam::point_load_max_deflection_midspan;
///
/// let d = point_load_max_deflection_midspan(-500.0, 1000.0, 1.0e10);
/// assert!((d - (-500.0e9 / 48.0e10)).abs() < 1e-12);
/// ```
#[inline]
pub fn point_load_max_deflection_midspan(p: f64, l: f64, ei: f64) -> f64 {
    p * l.powi(3) / (48.0 * ei)
}

/// Midspan deflection for three equal point loads at L/4, L/2 and 3L/4
///
/// # Formula
/// δ_max = 19PL³ / (384EI), P = each load
#[inline]
pub fn three_point_loads_max_deflection(p: f64, l: f64, ei: f64) -> f64 {
    19.0 * p * l.powi(3) / (384.0 * ei)
}

// =============================================================================
// SIMPLY-SUPPORTED: SPREAD LOADS
// =============================================================================

/// Midspan deflection for a uniform load over the full span
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// δ_max = 5WL³ / (384EI), W = wL
#[inline]
pub fn uniform_load_max_deflection(w_total: f64, l: f64, ei: f64) -> f64 {
    5.0 * w_total * l.powi(3) / (384.0 * ei)
}

/// Maximum deflection for a load rising linearly from zero at x = 0 to its
/// peak at x = L
///
/// # Formula (Roark's Table 8.1, Case 2e)
/// δ_max = 0.01304·WL³ / (EI)  at x = 0.5193·L
#[inline]
pub fn triangular_load_max_deflection(w_total: f64, l: f64, ei: f64) -> f64 {
    0.01304 * w_total * l.powi(3) / ei
}

/// Position of the maximum deflection under [`triangular_load_max_deflection`]
#[inline]
pub fn triangular_load_max_deflection_position(l: f64) -> f64 {
    0.5193 * l
}

// =============================================================================
// SIMPLY-SUPPORTED: APPLIED MOMENT
// =============================================================================

/// Calculate reactions for applied moment M0 at position a
///
/// # Formulas
/// - R1 = -M0/L
/// - R2 = +M0/L
///
/// Note: Moment creates a couple, no net vertical force
#[inline]
pub fn applied_moment_reactions(m0: f64, l: f64) -> (f64, f64) {
    (-m0 / l, m0 / l)
}

/// Maximum deflection for a moment applied at one end
///
/// # Formula (Roark's Table 8.1, Case 3a with a = L)
/// δ_max = M0·L² / (9√3·EI) ≈ 0.0642·M0·L²/EI
///
/// at L/√3 ≈ 0.577·L from the unloaded end
#[inline]
pub fn end_moment_max_deflection(m0: f64, l: f64, ei: f64) -> f64 {
    m0 * l * l / (9.0 * 3.0f64.sqrt() * ei)
}

// =============================================================================
// CANTILEVER
// Clamped at x = 0, free at x = L
// =============================================================================

/// Tip deflection for a point load at the free end
///
/// # Formula
/// δ_tip = PL³ / (3EI)
#[inline]
pub fn cantilever_point_deflection(p: f64, l: f64, ei: f64) -> f64 {
    p * l.powi(3) / (3.0 * ei)
}

/// Tip deflection for a uniform load over the full length
///
/// # Formula
/// δ_tip = WL³ / (8EI), W = wL
#[inline]
pub fn cantilever_uniform_deflection(w_total: f64, l: f64, ei: f64) -> f64 {
    w_total * l.powi(3) / (8.0 * ei)
}

// =============================================================================
// SHEAR DEFORMATION
// =============================================================================

/// Additional midspan deflection from shear for a central point load on a
/// simply-supported span
///
/// # Formula
/// δ_s = k·(P/2)·(L/2) / (GA), k = 1.5
#[inline]
pub fn point_load_shear_deflection_midspan(p: f64, l: f64, ga: f64) -> f64 {
    1.5 * (p / 2.0) * (l / 2.0) / ga
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_load_reactions() {
        let (r1, r2) = point_load_reactions(1000.0, 300.0, 1000.0);
        assert_relative_eq!(r1, 700.0);
        assert_relative_eq!(r2, 300.0);
    }

    #[test]
    fn test_point_load_deflection_matches_midspan_formula() {
        let d = point_load_deflection(-500.0, 500.0, 1000.0, 500.0, 2.0e10);
        let expected = point_load_max_deflection_midspan(-500.0, 1000.0, 2.0e10);
        assert_relative_eq!(d, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_point_load_deflection_zero_at_supports() {
        assert_eq!(point_load_deflection(-500.0, 300.0, 1000.0, 0.0, 1.0e10), 0.0);
        assert_eq!(point_load_deflection(-500.0, 300.0, 1000.0, 1000.0, 1.0e10), 0.0);
    }

    #[test]
    fn test_point_load_deflection_symmetric() {
        let left = point_load_deflection(100.0, 300.0, 1000.0, 200.0, 1.0e9);
        let right = point_load_deflection(100.0, 700.0, 1000.0, 800.0, 1.0e9);
        assert_relative_eq!(left, right, max_relative = 1e-12);
    }

    #[test]
    fn test_end_moment_coefficient() {
        let d = end_moment_max_deflection(1.0, 1.0, 1.0);
        assert_relative_eq!(d, 0.0642, max_relative = 1e-3);
    }

    #[test]
    fn test_applied_moment_reactions_form_couple() {
        let (r1, r2) = applied_moment_reactions(5.0e5, 1000.0);
        assert_eq!(r1 + r2, 0.0);
        assert_relative_eq!(r2, 500.0);
    }

    #[test]
    fn test_cantilever_ratios() {
        // Point load at the tip deflects 8/3 times as much as the same load spread out
        let point = cantilever_point_deflection(-500.0, 1000.0, 1.0e10);
        let spread = cantilever_uniform_deflection(-500.0, 1000.0, 1.0e10);
        assert_relative_eq!(point / spread, 8.0 / 3.0, max_relative = 1e-12);
    }
}
