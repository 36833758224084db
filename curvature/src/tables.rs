// SPDX-License-Identifier: AGPL-3.0-only

//! Tabulated comparisons printed by `validate_all --tables`.
//!
//! Three tables: SSZ against GR dilation over r/r_s, loop-closure
//! configurations with their individual comparisons, and the experimental
//! summary of prediction against measurement. Rows serialize to JSON.

use crate::error::ValidationError;
use crate::physics::constants::{
    AU, G_SURFACE, H_GEO, H_GPS, H_GRAVITY_PROBE_A, H_ISS, M_EARTH, M_SUN, R_EARTH, R_SUN,
    SECONDS_PER_DAY, V_GEO, V_GPS, V_ISS,
};
use crate::physics::{relativity, schwarzschild_radius, segmented, shapiro, DomainError};
use crate::provenance::{self, ExperimentalMeasurement};
use serde::Serialize;
use std::fmt::Write;

fn domain(table: &str) -> impl Fn(DomainError) -> ValidationError + '_ {
    move |e| ValidationError::invalid_input(table, e.0)
}

// ═══════════════════════════════════════════════════════════════════
// SSZ vs GR
// ═══════════════════════════════════════════════════════════════════

/// Dilation and redshift at one radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SszGrRow {
    pub r_over_rs: f64,
    pub d_gr: f64,
    pub d_ssz: f64,
    pub ratio: f64,
    pub z_gr: f64,
    pub z_ssz: f64,
}

/// Radii (in units of r_s) of the SSZ vs GR table.
pub const SSZ_GR_RADII: [f64; 8] = [1.1, 1.386_562, 2.0, 3.0, 5.0, 10.0, 100.0, 1000.0];

/// SSZ vs GR for one solar mass. All columns depend on r/r_s only.
pub fn ssz_vs_gr() -> Result<Vec<SszGrRow>, ValidationError> {
    let name = "ssz-vs-gr";
    let rs = schwarzschild_radius(M_SUN).map_err(domain(name))?;
    SSZ_GR_RADII
        .iter()
        .map(|&k| {
            let r = k * rs;
            let d_gr = relativity::time_dilation(r, M_SUN).map_err(domain(name))?;
            let d_ssz = segmented::time_dilation(r, M_SUN).map_err(domain(name))?;
            Ok(SszGrRow {
                r_over_rs: k,
                d_gr,
                d_ssz,
                ratio: d_ssz / d_gr,
                z_gr: relativity::gravitational_redshift(r, M_SUN).map_err(domain(name))?,
                z_ssz: segmented::gravitational_redshift(r, M_SUN).map_err(domain(name))?,
            })
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════
// Loop closure
// ═══════════════════════════════════════════════════════════════════

/// One three-clock configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoopRow {
    pub name: &'static str,
    pub delta_ab: f64,
    pub delta_bc: f64,
    pub delta_ca: f64,
    pub residual: f64,
}

/// Ground, GPA, GPS, ISS and GEO clocks in static and moving loops.
pub fn loop_configurations() -> Result<Vec<LoopRow>, ValidationError> {
    let name = "loop-configurations";
    let ground = (R_EARTH, 0.0);
    let gpa = (R_EARTH + H_GRAVITY_PROBE_A, 0.0);
    let gps = (R_EARTH + H_GPS, V_GPS);
    let iss = (R_EARTH + H_ISS, V_ISS);
    let geo = (R_EARTH + H_GEO, V_GEO);
    let configs = [
        ("Ground-GPA-GPS (static radii)", (ground.0, 0.0), (gpa.0, 0.0), (gps.0, 0.0)),
        ("Ground-ISS-GPS", ground, iss, gps),
        ("Ground-GPS-GEO", ground, gps, geo),
        ("ISS-GPS-GEO", iss, gps, geo),
    ];
    configs
        .into_iter()
        .map(|(label, a, b, c)| {
            let ab = relativity::shift_breakdown(a.0, a.1, b.0, b.1, M_EARTH)
                .map_err(domain(name))?
                .total;
            let bc = relativity::shift_breakdown(b.0, b.1, c.0, c.1, M_EARTH)
                .map_err(domain(name))?
                .total;
            let ca = relativity::shift_breakdown(c.0, c.1, a.0, a.1, M_EARTH)
                .map_err(domain(name))?
                .total;
            Ok(LoopRow {
                name: label,
                delta_ab: ab,
                delta_bc: bc,
                delta_ca: ca,
                residual: ab + bc + ca,
            })
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════
// Experimental summary
// ═══════════════════════════════════════════════════════════════════

/// Surveyed height of the Jefferson tower source above the absorber, m.
const TOWER_HEIGHT_SIGMA: f64 = 0.01;
/// GP-A apogee altitude from tracking, m.
const GPA_APOGEE_SIGMA: f64 = 1e3;
/// Galileo 5/6 precise orbit determination, radial, m.
const GALILEO_ORBIT_SIGMA: f64 = 0.05;

/// Prediction against one published measurement.
///
/// `predicted_sigma` is the first-order propagation of clock-position
/// uncertainty; zero where the prediction depends only on exact constants.
/// `n_sigma` uses both uncertainties added in quadrature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentRow {
    pub experiment: &'static str,
    pub measured: f64,
    pub sigma: f64,
    pub predicted: f64,
    pub predicted_sigma: f64,
    pub n_sigma: f64,
    pub unit: &'static str,
}

impl ExperimentRow {
    fn new(m: &ExperimentalMeasurement, predicted: f64) -> Self {
        Self::with_uncertainty(m, (predicted, 0.0))
    }

    fn with_uncertainty(
        m: &ExperimentalMeasurement,
        (predicted, predicted_sigma): (f64, f64),
    ) -> Self {
        Self {
            experiment: m.label,
            measured: m.value,
            sigma: m.sigma,
            predicted,
            predicted_sigma,
            n_sigma: m.sigma_agreement(predicted, predicted_sigma),
            unit: m.unit,
        }
    }
}

/// Static-model predictions for each tabulated measurement.
///
/// GP-A and Galileo use static radii, so their n_sigma reflects the missing
/// Doppler and orbit modelling rather than a failed test of GR.
pub fn experimental_summary() -> Result<Vec<ExperimentRow>, ValidationError> {
    let name = "experimental-summary";
    let d = domain(name);
    let tower = relativity::frequency_shift_with_uncertainty(
        R_EARTH,
        R_EARTH + 22.5,
        M_EARTH,
        0.0,
        TOWER_HEIGHT_SIGMA,
    )
    .map_err(&d)?;
    let clocks = relativity::uniform_field_shift(G_SURFACE, 0.33).map_err(&d)?;
    let gpa = relativity::frequency_shift_with_uncertainty(
        R_EARTH,
        R_EARTH + H_GRAVITY_PROBE_A,
        M_EARTH,
        0.0,
        GPA_APOGEE_SIGMA,
    )
    .map_err(&d)?;
    let galileo = relativity::frequency_shift_with_uncertainty(
        R_EARTH + 17_519e3,
        R_EARTH + 25_900e3,
        M_EARTH,
        GALILEO_ORBIT_SIGMA,
        GALILEO_ORBIT_SIGMA,
    )
    .map_err(&d)?;
    let gps = relativity::gps_clock_correction(M_EARTH, R_EARTH, R_EARTH + H_GPS, V_GPS)
        .map_err(&d)?
        .total;
    let mercury =
        relativity::perihelion_precession(57.91e9, 0.205_6, 87.969 * SECONDS_PER_DAY, M_SUN)
            .map_err(&d)?;
    let deflection = relativity::light_deflection(R_SUN, M_SUN).map_err(&d)?;
    let (cassini_a, cassini_b, cassini_d) = (AU, 9.537 * AU, 1.6 * R_SUN);
    let (viking_a, viking_b, viking_d) = (AU, 1.524 * AU, 2.0 * R_SUN);
    let cassini_delay =
        shapiro::shapiro_delay(cassini_a, cassini_b, cassini_d, M_SUN, 1.0).map_err(&d)?;
    let viking_delay =
        shapiro::shapiro_delay(viking_a, viking_b, viking_d, M_SUN, 1.0).map_err(&d)?;
    let cassini =
        shapiro::ppn_gamma(cassini_a, cassini_b, cassini_d, M_SUN, cassini_delay).map_err(&d)?;
    let viking =
        shapiro::ppn_gamma(viking_a, viking_b, viking_d, M_SUN, viking_delay).map_err(&d)?;

    Ok(vec![
        ExperimentRow::with_uncertainty(&provenance::POUND_REBKA, tower),
        ExperimentRow::with_uncertainty(&provenance::POUND_SNIDER, tower),
        ExperimentRow::with_uncertainty(&provenance::GRAVITY_PROBE_A, gpa),
        ExperimentRow::with_uncertainty(&provenance::GALILEO_MODULATION, galileo),
        ExperimentRow::new(&provenance::GPS_DAILY_OFFSET, gps),
        ExperimentRow::new(&provenance::OPTICAL_CLOCK_33CM, clocks),
        ExperimentRow::new(&provenance::CASSINI_GAMMA, cassini),
        ExperimentRow::new(&provenance::VIKING_GAMMA, viking),
        ExperimentRow::new(&provenance::MERCURY_PERIHELION, mercury),
        ExperimentRow::new(&provenance::SOLAR_DEFLECTION, deflection),
    ])
}

/// All three tables rendered as fixed-width text.
pub fn format_tables() -> Result<String, ValidationError> {
    let mut s = String::new();
    let _ = writeln!(s, "── SSZ vs GR (M = 1 M☉)");
    let _ = writeln!(
        s,
        "  {:>9} {:>12} {:>12} {:>9} {:>12} {:>12}",
        "r/r_s", "D_GR", "D_SSZ", "ratio", "z_GR", "z_SSZ"
    );
    for row in ssz_vs_gr()? {
        let _ = writeln!(
            s,
            "  {:>9.4} {:>12.6} {:>12.6} {:>9.5} {:>12.4e} {:>12.4e}",
            row.r_over_rs, row.d_gr, row.d_ssz, row.ratio, row.z_gr, row.z_ssz
        );
    }

    let _ = writeln!(s, "── Loop closure");
    for row in loop_configurations()? {
        let _ = writeln!(
            s,
            "  {:<30} δ_AB={:+.4e} δ_BC={:+.4e} δ_CA={:+.4e} I={:.2e}",
            row.name, row.delta_ab, row.delta_bc, row.delta_ca, row.residual
        );
    }

    let _ = writeln!(s, "── Experimental summary");
    for row in experimental_summary()? {
        let _ = writeln!(
            s,
            "  {:<34} measured={:.4e} ± {:.1e} predicted={:.4e} ± {:.1e} ({:.1}σ) {}",
            row.experiment,
            row.measured,
            row.sigma,
            row.predicted,
            row.predicted_sigma,
            row.n_sigma,
            row.unit
        );
    }
    Ok(s)
}

/// The three tables as one JSON object.
pub fn tables_json() -> Result<serde_json::Value, ValidationError> {
    Ok(serde_json::json!({
        "ssz_vs_gr": ssz_vs_gr()?,
        "loop_configurations": loop_configurations()?,
        "experimental_summary": experimental_summary()?,
    }))
}
