// SPDX-License-Identifier: AGPL-3.0-only

//! Model tolerances: leading-order approximations against exact forms,
//! finite differences, and SSZ against GR.

// ═══════════════════════════════════════════════════════════════════
// Weak-field limits (Earth, GPS, Sun)
// ═══════════════════════════════════════════════════════════════════

/// Exact Schwarzschild form against its leading-order expansion.
///
/// The next term is O(r_s/r); at Earth's surface r_s/r ≈ 1.4e-9, so the
/// relative gap is ~3.5e-10. 1e-8 also covers D_SSZ,weak against D_GR.
pub const WEAK_FIELD_REL: f64 = 1e-8;

/// Ξ(r)/N_GR(r) against its weak-field limit 2·Ξ_max·φ.
///
/// The correction is ≈ (φ/2 + 1/4)·r_s/r, about 4.5e-7 at 10 R☉ and
/// 1.5e-9 at Earth.
pub const WEAK_FIELD_RATIO_REL: f64 = 1e-6;

/// Leading-order estimate against the full expression (1 − D vs r_s/2r,
/// tidal acceleration against the rounded textbook 3.08e-6 s⁻²).
pub const LEADING_ORDER_REL: f64 = 0.01;

// ═══════════════════════════════════════════════════════════════════
// Numerical methods
// ═══════════════════════════════════════════════════════════════════

/// Forward difference of D(r) over a 1 km step against the analytic dD/dr.
///
/// Truncation error is h·|D''|/(2|D'|) ≈ h/r = 1.6e-4 at Earth's surface.
pub const FINITE_DIFFERENCE_REL: f64 = 0.01;

/// Uniform-field g·h/c² against the Schwarzschild weak shift over 100 m.
///
/// The uniform model uses the conventional g = 9.81 m/s², while GM/R² for
/// the mean radius gives 9.82 m/s²: a 0.1% gap.
pub const EQUIVALENCE_PCT: f64 = 0.2;

// ═══════════════════════════════════════════════════════════════════
// Classic solar-system tests
// ═══════════════════════════════════════════════════════════════════

/// Mercury perihelion (42.98″/cy) and solar deflection (1.75″).
///
/// The quoted values are rounded to 3–4 digits and use slightly different
/// solar parameters; 2% matches the historical agreement level.
pub const CLASSIC_TEST_REL: f64 = 0.02;

// ═══════════════════════════════════════════════════════════════════
// Segmented spacetime
// ═══════════════════════════════════════════════════════════════════

/// Ξ(r) far from the mass (r = 1e12 r_s) is ~1e-12; anything under 1e-3
/// counts as flat.
pub const XI_FAR_FIELD_ABS: f64 = 1e-3;

/// Strong-field saturation form 1 − e^(−φr/r_s) at r ≫ r_s against 1.
pub const STRONG_FIELD_SATURATION_ABS: f64 = 0.01;

/// D_SSZ against D_GR at r = 1000 r_s.
///
/// SSZ dilation differs at O(r_s/r) with coefficient ~1.6; the gap is
/// ~8e-4 at 1000 r_s.
pub const SSZ_GR_RECOVERY_REL: f64 = 0.01;

/// Neutron-star observables (1.4 M☉ at r = 2 r_s) against the rounded
/// published SSZ predictions (D_SSZ ≈ 0.697, z_SSZ ≈ 0.436).
///
/// The published figures use a slightly different Ξ profile near 2 r_s;
/// the exponential form lands within 0.008.
pub const NEUTRON_STAR_ABS: f64 = 0.01;

/// SSZ Shapiro correction (r_s/4d)² at d ≥ 5 R☉ is below 3e-13.
pub const SSZ_SHAPIRO_REL: f64 = 1e-10;
