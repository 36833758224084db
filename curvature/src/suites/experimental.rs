// SPDX-License-Identifier: AGPL-3.0-only

//! Predictions against published measurements.

use super::{check, range, CaseList};
use crate::case::{Category, Tolerance};
use crate::formula::{FormulaKind, Inputs};
use crate::physics::constants::{
    AU, G_SURFACE, H_GPS, H_GRAVITY_PROBE_A, M_EARTH, M_SUN, R_EARTH, R_SUN, V_GPS,
};
use crate::provenance::{
    CASSINI_GAMMA, GPS_DAILY_OFFSET, GRAVITY_PROBE_A, OPTICAL_CLOCK_33CM, POUND_REBKA,
    POUND_SNIDER,
};
use crate::tolerances;

const CATEGORY: Category = Category::Experimental;

/// Round-trip delay for the Cassini geometry evaluated at γ = 1.000021.
const CASSINI_DELAY: f64 = 2.648_651_017_616_996_3e-4;
/// Round-trip delay for the Viking geometry evaluated at γ = 1.
const VIKING_DELAY: f64 = 2.199_379_705_133_381_7e-4;

fn radar(r_b: f64, impact: f64, delay: f64) -> Inputs {
    Inputs::from([
        ("r_a", AU),
        ("r_b", r_b),
        ("impact", impact),
        ("mass", M_SUN),
        ("delay", delay),
    ])
}

pub(super) fn cases() -> CaseList {
    let tower = Inputs::from([("r_a", R_EARTH), ("r_b", R_EARTH + 22.5), ("mass", M_EARTH)]);
    Ok(vec![
        check(
            "ex-gps-icd",
            CATEGORY,
            FormulaKind::GpsClockCorrection,
            Inputs::from([
                ("mass", M_EARTH),
                ("r_ground", R_EARTH),
                ("r_orbit", R_EARTH + H_GPS),
                ("v", V_GPS),
            ]),
            GPS_DAILY_OFFSET.value,
            Tolerance::Absolute(tolerances::GPS_ICD_ABS),
        )?,
        check(
            "ex-gravity-probe-a",
            CATEGORY,
            FormulaKind::FrequencyShiftGr,
            Inputs::from([
                ("r_a", R_EARTH),
                ("r_b", R_EARTH + H_GRAVITY_PROBE_A),
                ("mass", M_EARTH),
            ]),
            GRAVITY_PROBE_A.value,
            Tolerance::Percent(tolerances::GPA_ESTIMATE_PCT),
        )?,
        check(
            "ex-pound-rebka",
            CATEGORY,
            FormulaKind::FrequencyShiftWeak,
            tower.clone(),
            POUND_REBKA.value,
            POUND_REBKA.tolerance(tolerances::POUND_REBKA_N_SIGMA),
        )?,
        check(
            "ex-pound-snider",
            CATEGORY,
            FormulaKind::FrequencyShiftWeak,
            tower,
            POUND_SNIDER.value,
            POUND_SNIDER.tolerance(tolerances::POUND_SNIDER_N_SIGMA),
        )?,
        range(
            "ex-galileo-modulation",
            CATEGORY,
            FormulaKind::FrequencyShiftGr,
            Inputs::from([
                ("r_a", R_EARTH + 17_519e3),
                ("r_b", R_EARTH + 25_900e3),
                ("mass", M_EARTH),
            ]),
            1e-11,
            1e-10,
        )?
        .with_description("Perigee 17 519 km, apogee 25 900 km"),
        check(
            "ex-cassini-gamma",
            CATEGORY,
            FormulaKind::PpnGamma,
            radar(9.537 * AU, 1.6 * R_SUN, CASSINI_DELAY),
            1.0,
            Tolerance::Absolute(tolerances::CASSINI_GAMMA_ABS),
        )?
        .with_description(format!(
            "γ recovered from the delay at the measured {}",
            CASSINI_GAMMA.value
        )),
        check(
            "ex-viking-gamma",
            CATEGORY,
            FormulaKind::PpnGamma,
            radar(1.524 * AU, 2.0 * R_SUN, VIKING_DELAY),
            1.0,
            Tolerance::Absolute(tolerances::VIKING_GAMMA_ABS),
        )?,
        check(
            "ex-optical-clock-33cm",
            CATEGORY,
            FormulaKind::UniformFieldShift,
            Inputs::from([("g", G_SURFACE), ("height", 0.33)]),
            OPTICAL_CLOCK_33CM.value,
            OPTICAL_CLOCK_33CM.tolerance(tolerances::OPTICAL_CLOCK_N_SIGMA),
        )?,
    ])
}
