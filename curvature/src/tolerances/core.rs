// SPDX-License-Identifier: AGPL-3.0-only

//! Machine-precision tolerances for identities that hold exactly in real
//! arithmetic and differ from zero only by f64 rounding.

// ═══════════════════════════════════════════════════════════════════
// Exact identities
// ═══════════════════════════════════════════════════════════════════

/// Zero that must come out as exactly zero (N_SR at v = 0).
///
/// The rationalised γ − 1 = β²/(s(1 + s)) returns 0.0 for β = 0 with no
/// rounding at all.
pub const EXACT_ZERO: f64 = 0.0;

/// Single logarithm of a frequency ratio.
///
/// ln(ν_A/ν_B) is one division and one `ln`, each correctly rounded to
/// ½ ulp. For δ ~ 0.02 that is ~3e-18; 1e-15 leaves room for libm variance.
pub const IDENTITY_ABS: f64 = 1e-15;

/// Sums of two or three logarithms that cancel (antisymmetry, additivity,
/// loop closure, radial GR loops).
///
/// Each term carries ½ ulp of its own magnitude; for GHz-band ratios the
/// terms are O(0.05), for neutron-star loops O(0.3). 1e-14 covers both.
pub const LOG_IDENTITY_ABS: f64 = 1e-14;

/// Loop closure over frequencies spread across a decade (1–10 GHz).
///
/// Larger ratios give |δ| up to ln 10 ≈ 2.3, so rounding grows to ~5e-16
/// per term.
pub const LOOP_IDENTITY_SPREAD_ABS: f64 = 1e-13;

/// Telescoping radial sums of δ over up to a few hundred hops.
///
/// Each hop is a difference of two ln D values ~1e-10 in size; the
/// accumulated rounding stays below 1e-20, far under this bound.
pub const PATH_SUM_ABS: f64 = 1e-14;

// ═══════════════════════════════════════════════════════════════════
// Closed forms against frozen literals
// ═══════════════════════════════════════════════════════════════════

/// Closed-form value against a literal frozen from the same formula.
///
/// Literals are stored with 16–17 significant digits; transcendental calls
/// (`exp_m1`, `ln_1p`, `tanh`) may differ by a few ulp across platforms.
pub const CLOSED_FORM_REL: f64 = 1e-12;

/// D_SSZ/D_GR at r*/r_s = 1.386562, checked for masses from Earth to 1e6 M☉.
///
/// The ratio depends on r_s/r only; the products R_STAR_RATIO·r_s round
/// differently per mass, moving the ratio by ~1e-16.
pub const UNIVERSAL_RATIO_ABS: f64 = 1e-10;

// ═══════════════════════════════════════════════════════════════════
// Work limits
// ═══════════════════════════════════════════════════════════════════

/// Largest hop count accepted by the radial path sum.
///
/// Every other formula is closed-form; this one loops once per hop, so the
/// count is capped to keep a single case at microseconds. The built-in
/// path-independence case uses 99 hops.
pub const PATH_STEPS_MAX: usize = 10_000;
