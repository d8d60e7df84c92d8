//! Discrete field integration at 1 mm resolution.
//!
//! Every field is an array with one entry per mm, indexed `0..=length`.
//! Integration is a plain running total of the same length (rectangle rule,
//! step 1 mm), which keeps results identical to the reference tables the
//! engine is checked against.
//!
//! The chain is
//!
//! ```text
//! loads ─Σ─► V ─cumsum─► M ─/EI─► κ ─cumsum─► dy/dx ─cumsum─► y
//!                                          ▲
//!                           -1.5·V/GA ─────┘ (optional shear term)
//! ```

use crate::loads::Load;

/// Shape factor of the shear deformation term, assuming a uniform shear
/// stress over the core.
pub const SHEAR_SHAPE_FACTOR: f64 = 1.5;

/// Running total of `values`, same length as the input.
///
/// ```rust
/// use beam_core::calculations::integration::cumulative_sum;
///
/// assert_eq!(cumulative_sum(&[1.0, 2.0, 3.0]), vec![1.0, 3.0, 6.0]);
/// ```
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |total, value| {
            *total += value;
            Some(*total)
        })
        .collect()
}

/// `num` evenly spaced values from `start` to `stop`, both included.
///
/// Values are computed as `start + i·step` and the final entry is pinned to
/// `stop`, so ramps end exactly on their target.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
            values[num - 1] = stop;
            values
        }
    }
}

/// Shear force V(x): the sum of every load's shear contribution.
///
/// `loads` must already contain the reaction loads.
pub fn shear_force(length: usize, loads: &[Load]) -> Vec<f64> {
    loads
        .iter()
        .fold(vec![0.0; length + 1], |mut shear, load| {
            for (total, part) in shear.iter_mut().zip(load.shear_contribution(length)) {
                *total += part;
            }
            shear
        })
}

/// Bending moment M(x) from the shear force.
///
/// The running total of V is corrected by the step of every pure moment
/// load. For a cantilever clamped at x = 0 the moment is shifted so that it
/// vanishes at the free end.
pub fn bending_moment(shear: &[f64], loads: &[Load], clamped: bool) -> Vec<f64> {
    let length = shear.len().saturating_sub(1);
    let mut moment = cumulative_sum(shear);
    for step in loads.iter().filter_map(|load| load.moment_contribution(length)) {
        for (m, s) in moment.iter_mut().zip(step) {
            *m += s;
        }
    }
    if clamped {
        if let Some(&free_end) = moment.last() {
            moment.iter_mut().for_each(|m| *m -= free_end);
        }
    }
    moment
}

/// Curvature κ = M/EI
pub fn curvature(moment: &[f64], ei: &[f64]) -> Vec<f64> {
    moment.iter().zip(ei).map(|(m, ei)| m / ei).collect()
}

/// Strain at a fiber `offset` from the neutral axis: ε = -offset·κ.
///
/// With top offsets ≥ 0 a positive moment compresses the top fiber.
pub fn fiber_strain(offset: &[f64], curvature: &[f64]) -> Vec<f64> {
    offset.iter().zip(curvature).map(|(z, k)| -z * k).collect()
}

/// Slope dy/dx: the integral of the curvature, plus `-1.5·V/GA` when a
/// shear term `(shear, ga)` is supplied.
pub fn slope(curvature: &[f64], shear_term: Option<(&[f64], &[f64])>) -> Vec<f64> {
    let mut slope = cumulative_sum(curvature);
    if let Some((shear, ga)) = shear_term {
        for ((dy, v), ga) in slope.iter_mut().zip(shear).zip(ga) {
            *dy += -SHEAR_SHAPE_FACTOR * v / ga;
        }
    }
    slope
}

/// Deflection y(x): the integral of the slope
pub fn deflection(slope: &[f64]) -> Vec<f64> {
    cumulative_sum(slope)
}

/// Bring the deflection to zero at both simple supports.
///
/// The whole line is first translated so that `y(first) = 0` and then
/// rotated about `first` so that `y(second) = 0`. The rotation is added to
/// the slope as well, keeping both arrays consistent. Returns the slope
/// correction that was applied.
pub fn align_to_supports(
    deflection: &mut [f64],
    slope: &mut [f64],
    first: usize,
    second: usize,
) -> f64 {
    let anchor = deflection[first];
    deflection.iter_mut().for_each(|y| *y -= anchor);

    let correction = -deflection[second] / (first as f64 - second as f64).abs();
    for (i, y) in deflection.iter_mut().enumerate() {
        *y += (i as f64 - first as f64) * correction;
    }
    slope.iter_mut().for_each(|dy| *dy += correction);
    correction
}

/// Angle between the beam's tangent and the x-axis (radians)
pub fn rotation(slope: &[f64]) -> Vec<f64> {
    slope.iter().map(|dy| dy.atan()).collect()
}
