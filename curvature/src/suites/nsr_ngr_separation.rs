// SPDX-License-Identifier: AGPL-3.0-only

//! The kinematic part N_SR is removable; the gravitational part N_GR is not.

use super::{check, rs, CaseList};
use crate::case::{Category, Tolerance};
use crate::formula::{FormulaKind, Inputs};
use crate::physics::constants::{
    C, H_GEO, H_GPS, H_ISS, M_EARTH, M_SUN, R_EARTH, R_SUN, V_GEO, V_GPS, V_ISS,
};
use crate::tolerances;

const CATEGORY: Category = Category::NsrNgrSeparation;

/// 2·Ξ_max·φ, the weak-field limit of Ξ/N_GR.
const WEAK_FIELD_XI_RATIO: f64 = 2.588_854_381_999_832;

fn moving_loop(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Inputs {
    Inputs::from([
        ("r_a", a.0),
        ("v_a", a.1),
        ("r_b", b.0),
        ("v_b", b.1),
        ("r_c", c.0),
        ("v_c", c.1),
        ("mass", M_EARTH),
    ])
}

pub(super) fn cases() -> CaseList {
    let ground = (R_EARTH, 0.0);
    let clock_loop = Tolerance::Absolute(tolerances::CLOCK_LOOP_SIGMA);
    let mut cases = vec![
        check(
            "nsr-rest-frame",
            CATEGORY,
            FormulaKind::KinematicShift,
            Inputs::from([("v", 0.0)]),
            0.0,
            Tolerance::Absolute(tolerances::EXACT_ZERO),
        )?
        .with_description("N_SR vanishes in the clock's rest frame"),
        check(
            "nsr-lorentz-factor",
            CATEGORY,
            FormulaKind::LorentzFactor,
            Inputs::from([("v", 0.6 * C)]),
            1.25,
            Tolerance::Relative(tolerances::CLOSED_FORM_REL),
        )?,
        check(
            "nsr-kinematic-1000-km-s",
            CATEGORY,
            FormulaKind::KinematicShift,
            Inputs::from([("v", 1e6)]),
            5.563_296_705_329_071e-6,
            Tolerance::Relative(tolerances::CLOSED_FORM_REL),
        )?,
        check(
            "nsr-loop-static-clocks",
            CATEGORY,
            FormulaKind::LoopClosureSeparated,
            moving_loop(ground, (R_EARTH + 10_000e3, 0.0), (R_EARTH + H_GPS, 0.0)),
            0.0,
            clock_loop,
        )?,
        check(
            "nsr-loop-ballistic",
            CATEGORY,
            FormulaKind::LoopClosureSeparated,
            moving_loop(
                ground,
                (R_EARTH + 5_000e3, 5_000.0),
                (R_EARTH + 10_000e3, 3_000.0),
            ),
            0.0,
            clock_loop,
        )?,
        check(
            "nsr-loop-orbiting",
            CATEGORY,
            FormulaKind::LoopClosureSeparated,
            moving_loop(
                (R_EARTH + H_ISS, V_ISS),
                (R_EARTH + H_GPS, V_GPS),
                (R_EARTH + H_GEO, V_GEO),
            ),
            0.0,
            clock_loop,
        )?
        .with_description("Kinematic and gravitational parts close separately"),
    ];

    for (label, r, mass) in [
        ("earth", R_EARTH, M_EARTH),
        ("gps", R_EARTH + H_GPS, M_EARTH),
        ("10-rsun", 10.0 * R_SUN, M_SUN),
    ] {
        cases.push(check(
            &format!("nsr-xi-ratio-{label}"),
            CATEGORY,
            FormulaKind::SegmentCurvatureRatio,
            Inputs::from([("r", r), ("mass", mass)]),
            WEAK_FIELD_XI_RATIO,
            Tolerance::Relative(tolerances::WEAK_FIELD_RATIO_REL),
        )?);
    }

    let ns = 1.4 * M_SUN;
    cases.push(
        check(
            "nsr-xi-ratio-neutron-star",
            CATEGORY,
            FormulaKind::SegmentCurvatureRatio,
            Inputs::from([("r", 3.0 * rs(ns)), ("mass", ns)]),
            1.817_381_836_395_986_2,
            Tolerance::Relative(tolerances::CLOSED_FORM_REL),
        )?
        .with_description("Strong field departs from the weak-field ratio"),
    );
    Ok(cases)
}
