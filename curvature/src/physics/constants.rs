// SPDX-License-Identifier: AGPL-3.0-only

//! Physical constants (CODATA 2018, IAU 2015 nominal values)

pub const C: f64 = 299_792_458.0; // m/s, exact
pub const C2: f64 = C * C; // m²/s²
pub const G: f64 = 6.674_30e-11; // m³/(kg·s²)

pub const M_EARTH: f64 = 5.972e24; // kg
pub const R_EARTH: f64 = 6.371e6; // m, mean radius
pub const M_SUN: f64 = 1.988_47e30; // kg
pub const R_SUN: f64 = 6.957e8; // m, IAU nominal
pub const AU: f64 = 1.495_978_707e11; // m, exact (IAU 2012)
pub const PARSEC: f64 = 3.086e16; // m

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_JULIAN_CENTURY: f64 = 36_525.0 * SECONDS_PER_DAY;
pub const ARCSEC_PER_RAD: f64 = 180.0 * 3600.0 / std::f64::consts::PI;

/// Golden ratio φ = (1 + √5)/2, the natural scale of the SSZ segment density.
pub const PHI: f64 = 1.618_033_988_749_895;
/// SSZ saturation segment density (empirical).
pub const XI_MAX: f64 = 0.8;
/// Mass-independent radius r*/r_s where D_SSZ/D_GR takes a universal value.
pub const R_STAR_RATIO: f64 = 1.386_562;

/// Standard gravity at Earth's surface, m/s².
pub const G_SURFACE: f64 = 9.81;

// Orbit parameters shared by suites and trajectories.
pub const H_GPS: f64 = 20_200e3; // m altitude
pub const V_GPS: f64 = 3_874.0; // m/s
pub const T_GPS: f64 = 11.97 * 3600.0; // s
pub const H_ISS: f64 = 400e3; // m altitude
pub const V_ISS: f64 = 7_660.0; // m/s
pub const T_ISS: f64 = 92.0 * 60.0; // s
pub const H_GEO: f64 = 35_786e3; // m altitude
pub const V_GEO: f64 = 3_075.0; // m/s
pub const H_GRAVITY_PROBE_A: f64 = 10_000e3; // m apogee
