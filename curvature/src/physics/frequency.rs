// SPDX-License-Identifier: AGPL-3.0-only

//! Relational frequency observables.
//!
//! δ_AB = ln(ν_A/ν_B) is the only quantity a pair of clocks can measure.
//! It is antisymmetric and additive, so around any closed loop A → B → C → A
//! the sum I_ABC = δ_AB + δ_BC + δ_CA vanishes for static clocks. A nonzero
//! residual signals time dependence, not static curvature.

use super::constants::PHI;
use super::relativity::{self, shift_breakdown};
use super::{require_positive, segmented, PhysicsResult};
use serde::Serialize;

/// δ_AB = ln(ν_A/ν_B).
pub fn delta(freq_a: f64, freq_b: f64) -> PhysicsResult {
    require_positive("freq_a", freq_a)?;
    require_positive("freq_b", freq_b)?;
    Ok((freq_a / freq_b).ln())
}

/// δ_AB + δ_BA.
pub fn antisymmetry_residual(freq_a: f64, freq_b: f64) -> PhysicsResult {
    Ok(delta(freq_a, freq_b)? + delta(freq_b, freq_a)?)
}

/// δ_AC − (δ_AB + δ_BC).
pub fn additivity_residual(freq_a: f64, freq_b: f64, freq_c: f64) -> PhysicsResult {
    Ok(delta(freq_a, freq_c)? - (delta(freq_a, freq_b)? + delta(freq_b, freq_c)?))
}

/// I_ABC = δ_AB + δ_BC + δ_CA.
pub fn loop_residual(freq_a: f64, freq_b: f64, freq_c: f64) -> PhysicsResult {
    Ok(delta(freq_a, freq_b)? + delta(freq_b, freq_c)? + delta(freq_c, freq_a)?)
}

fn loop_from_logs(ln_a: f64, ln_b: f64, ln_c: f64) -> f64 {
    (ln_a - ln_b) + (ln_b - ln_c) + (ln_c - ln_a)
}

/// Loop closure with ν ∝ D_GR(r) at three static radii.
pub fn loop_closure_gr(r_a: f64, r_b: f64, r_c: f64, mass: f64) -> PhysicsResult {
    Ok(loop_from_logs(
        relativity::ln_time_dilation(r_a, mass)?,
        relativity::ln_time_dilation(r_b, mass)?,
        relativity::ln_time_dilation(r_c, mass)?,
    ))
}

/// Loop closure with ν ∝ D_SSZ(r) at three static radii.
pub fn loop_closure_ssz(r_a: f64, r_b: f64, r_c: f64, mass: f64) -> PhysicsResult {
    Ok(loop_from_logs(
        segmented::ln_time_dilation(r_a, mass)?,
        segmented::ln_time_dilation(r_b, mass)?,
        segmented::ln_time_dilation(r_c, mass)?,
    ))
}

/// Loop sums of the kinematic and gravitational parts, taken separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoopBreakdown {
    /// I_SR = Σ kinematic parts.
    pub kinematic: f64,
    /// I_GR = Σ gravitational parts.
    pub gravitational: f64,
    /// I_SR + I_GR.
    pub total: f64,
}

/// Three clocks at (r, v) around one mass, closed loop split into NSR/NGR.
pub fn loop_closure_separated(
    (r_a, v_a): (f64, f64),
    (r_b, v_b): (f64, f64),
    (r_c, v_c): (f64, f64),
    mass: f64,
) -> PhysicsResult<LoopBreakdown> {
    let ab = shift_breakdown(r_a, v_a, r_b, v_b, mass)?;
    let bc = shift_breakdown(r_b, v_b, r_c, v_c, mass)?;
    let ca = shift_breakdown(r_c, v_c, r_a, v_a, mass)?;
    let kinematic = ab.kinematic + bc.kinematic + ca.kinematic;
    let gravitational = ab.gravitational + bc.gravitational + ca.gravitational;
    Ok(LoopBreakdown {
        kinematic,
        gravitational,
        total: kinematic + gravitational,
    })
}

/// Holonomy deficit A/R² of a loop of area A on a sphere of radius R.
pub fn holonomy_deficit(area: f64, radius: f64) -> PhysicsResult {
    require_positive("area", area)?;
    require_positive("radius", radius)?;
    Ok(area / (radius * radius))
}

/// φ² − (φ + 1); zero up to rounding.
#[must_use]
pub fn golden_ratio_residual() -> f64 {
    PHI * PHI - (PHI + 1.0)
}
