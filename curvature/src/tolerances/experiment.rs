// SPDX-License-Identifier: AGPL-3.0-only

//! Measurement tolerances. Each traces to a published uncertainty; the
//! records themselves live in [`crate::provenance`].

/// GPS daily clock offset against the ICD value 38.6 μs/day.
///
/// The ICD quotes ±0.1 μs/day; orbit radius and speed here are nominal
/// (20 200 km, 3874 m/s), which adds ~0.1 μs/day.
pub const GPS_ICD_ABS: f64 = 0.2;

/// GPS offset against the round textbook figure 38 μs/day (GR +45, SR −7).
pub const GPS_ESTIMATE_ABS: f64 = 3.0;

/// Gravity Probe A shift at the 10 000 km apogee against 4.5e-10.
///
/// 4.5e-10 is the approximate peak shift of the full flight profile,
/// including Doppler residuals; a static apogee comparison matches to ~6%.
pub const GPA_ESTIMATE_PCT: f64 = 10.0;

/// Pound-Rebka tower prediction against 2.46e-15 (±10% experiment).
pub const POUND_REBKA_REL: f64 = 0.15;

/// Pound-Rebka 1960, accepted at 2σ.
pub const POUND_REBKA_N_SIGMA: f64 = 2.0;

/// Pound-Snider 1965, accepted at 3σ of its 1% uncertainty.
pub const POUND_SNIDER_N_SIGMA: f64 = 3.0;

/// Chou et al. 2010 optical-clock height comparison, accepted at 2σ.
pub const OPTICAL_CLOCK_N_SIGMA: f64 = 2.0;

/// Cassini 2003: γ − 1 = (2.1 ± 2.3)e-5.
pub const CASSINI_GAMMA_ABS: f64 = 2.3e-5;

/// Viking 1979: γ = 1.000 ± 0.002.
pub const VIKING_GAMMA_ABS: f64 = 0.002;

/// Loop residual significance threshold: 3 × 1e-16 clock instability.
pub const CLOCK_LOOP_SIGMA: f64 = 3e-16;
