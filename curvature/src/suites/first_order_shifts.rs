// SPDX-License-Identifier: AGPL-3.0-only

//! First-order gravitational redshift between two heights.

use super::{check, range, CaseList};
use crate::case::{Category, Tolerance};
use crate::formula::{FormulaKind, Inputs};
use crate::physics::constants::{G_SURFACE, H_GPS, H_GRAVITY_PROBE_A, M_EARTH, R_EARTH, V_GPS};
use crate::{provenance, tolerances};

const CATEGORY: Category = Category::FirstOrderShifts;

/// GM/c²·(1/R − 1/(R + 10 000 km)), weak-field GP-A apogee shift.
const GPA_WEAK: f64 = 4.252_078_789_722_457e-10;
/// GM/c²·(1/R − 1/(R + 100 m)).
const WEAK_100M: f64 = 1.092_602_248_696_823_6e-14;

pub(super) fn cases() -> CaseList {
    let shift =
        |r_a: f64, r_b: f64| Inputs::from([("r_a", r_a), ("r_b", r_b), ("mass", M_EARTH)]);
    Ok(vec![
        check(
            "fos-gravity-probe-a",
            CATEGORY,
            FormulaKind::FrequencyShiftWeak,
            shift(R_EARTH, R_EARTH + H_GRAVITY_PROBE_A),
            provenance::GRAVITY_PROBE_A.value,
            Tolerance::Percent(tolerances::GPA_ESTIMATE_PCT),
        )?
        .with_description("Static apogee shift against the GP-A peak"),
        check(
            "fos-exact-vs-weak",
            CATEGORY,
            FormulaKind::FrequencyShiftGr,
            shift(R_EARTH, R_EARTH + H_GRAVITY_PROBE_A),
            GPA_WEAK,
            Tolerance::Relative(tolerances::WEAK_FIELD_REL),
        )?,
        range(
            "fos-galileo-modulation",
            CATEGORY,
            FormulaKind::FrequencyShiftGr,
            shift(R_EARTH + 17_000e3, R_EARTH + 26_000e3),
            1e-11,
            1e-9,
        )?
        .with_description("Perigee to apogee of the eccentric Galileo orbit"),
        check(
            "fos-pound-rebka",
            CATEGORY,
            FormulaKind::FrequencyShiftWeak,
            shift(R_EARTH, R_EARTH + 22.5),
            provenance::POUND_SNIDER.value,
            Tolerance::Relative(tolerances::POUND_REBKA_REL),
        )?,
        check(
            "fos-uniform-vs-weak",
            CATEGORY,
            FormulaKind::UniformFieldShift,
            Inputs::from([("g", G_SURFACE), ("height", 100.0)]),
            WEAK_100M,
            Tolerance::Percent(tolerances::EQUIVALENCE_PCT),
        )?
        .with_description("Equivalence principle: g·h/c² over 100 m"),
        check(
            "fos-gps-estimate",
            CATEGORY,
            FormulaKind::GpsClockCorrection,
            Inputs::from([
                ("mass", M_EARTH),
                ("r_ground", R_EARTH),
                ("r_orbit", R_EARTH + H_GPS),
                ("v", V_GPS),
            ]),
            38.0,
            Tolerance::Absolute(tolerances::GPS_ESTIMATE_ABS),
        )?
        .with_description("+45 μs/day gravitational, −7 μs/day kinematic"),
    ])
}
