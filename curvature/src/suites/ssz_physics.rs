// SPDX-License-Identifier: AGPL-3.0-only

//! Segment density Ξ(r), the universal r* crossing, and neutron-star values.

use super::{check, range, rs, CaseList};
use crate::case::{Category, Tolerance};
use crate::formula::{FormulaKind, Inputs};
use crate::physics::constants::{M_EARTH, M_SUN, R_STAR_RATIO};
use crate::tolerances;
use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

const CATEGORY: Category = Category::SszPhysics;

/// D_SSZ/D_GR at r = r*, independent of mass.
const UNIVERSAL_RATIO: f64 = 1.221_134_671_927_425;
/// D_SSZ at r = r_s: 1/(1 + Ξ_max(1 − e^(−φ))).
const HORIZON_DILATION: f64 = 0.609_247_347_157_346_5;
/// Ξ_max·tanh(1/2).
const HYPERBOLIC_AT_2RS: f64 = 0.369_693_725_808_007_8;

pub(super) fn cases() -> CaseList {
    let at = |r: f64, mass: f64| Inputs::from([("r", r), ("mass", mass)]);
    let loop_at = |a: f64, b: f64, c: f64, mass: f64| {
        let r = rs(mass);
        Inputs::from([("r_a", a * r), ("r_b", b * r), ("r_c", c * r), ("mass", mass)])
    };
    let ns = 1.4 * M_SUN;

    let mut cases = vec![
        check(
            "sp-golden-ratio",
            CATEGORY,
            FormulaKind::GoldenRatioResidual,
            Inputs::new(),
            0.0,
            Tolerance::Absolute(tolerances::LOG_IDENTITY_ABS),
        )?,
        check(
            "sp-xi-far-field",
            CATEGORY,
            FormulaKind::SegmentDensity,
            at(1e12 * rs(M_SUN), M_SUN),
            0.0,
            Tolerance::Absolute(tolerances::XI_FAR_FIELD_ABS),
        )?,
        range(
            "sp-xi-near-horizon",
            CATEGORY,
            FormulaKind::SegmentDensity,
            at(1.01 * rs(M_SUN), M_SUN),
            0.56,
            0.8,
        )?,
    ];

    for (label, mass) in [
        ("earth", M_EARTH),
        ("sun", M_SUN),
        ("10-sun", 10.0 * M_SUN),
        ("1e6-sun", 1e6 * M_SUN),
    ] {
        cases.push(
            check(
                &format!("sp-universal-crossing-{label}"),
                CATEGORY,
                FormulaKind::SszGrDilationRatio,
                at(R_STAR_RATIO * rs(mass), mass),
                UNIVERSAL_RATIO,
                Tolerance::Absolute(tolerances::UNIVERSAL_RATIO_ABS),
            )?
            .with_description("D_SSZ/D_GR at r* is mass independent"),
        );
    }

    cases.extend([
        check(
            "sp-horizon-dilation",
            CATEGORY,
            FormulaKind::TimeDilationSsz,
            at(rs(M_SUN), M_SUN),
            HORIZON_DILATION,
            Tolerance::Relative(tolerances::CLOSED_FORM_REL),
        )?
        .with_description("Finite at r = r_s, where D_GR vanishes"),
        check(
            "sp-weak-field-recovery",
            CATEGORY,
            FormulaKind::TimeDilationSsz,
            at(1000.0 * rs(M_SUN), M_SUN),
            0.999_499_874_937_461,
            Tolerance::Relative(tolerances::SSZ_GR_RECOVERY_REL),
        )?,
        check(
            "sp-neutron-star-dilation-gr",
            CATEGORY,
            FormulaKind::TimeDilationGr,
            at(2.0 * rs(ns), ns),
            FRAC_1_SQRT_2,
            Tolerance::Absolute(tolerances::NEUTRON_STAR_ABS),
        )?,
        check(
            "sp-neutron-star-dilation-ssz",
            CATEGORY,
            FormulaKind::TimeDilationSsz,
            at(2.0 * rs(ns), ns),
            0.697,
            Tolerance::Absolute(tolerances::NEUTRON_STAR_ABS),
        )?,
        check(
            "sp-neutron-star-redshift-ssz",
            CATEGORY,
            FormulaKind::GravitationalRedshiftSsz,
            at(2.0 * rs(ns), ns),
            0.436,
            Tolerance::Absolute(tolerances::NEUTRON_STAR_ABS),
        )?,
        check(
            "sp-neutron-star-redshift-gr",
            CATEGORY,
            FormulaKind::GravitationalRedshiftGr,
            at(2.0 * rs(ns), ns),
            SQRT_2 - 1.0,
            Tolerance::Relative(tolerances::CLOSED_FORM_REL),
        )?,
        check(
            "sp-loop-closure-strong-field",
            CATEGORY,
            FormulaKind::LoopClosureSsz,
            loop_at(5.0, 10.0, 20.0, M_SUN),
            0.0,
            Tolerance::Absolute(tolerances::LOG_IDENTITY_ABS),
        )?,
        check(
            "sp-loop-closure-inside-rs",
            CATEGORY,
            FormulaKind::LoopClosureSsz,
            loop_at(0.5, 1.0, 2.0, M_SUN),
            0.0,
            Tolerance::Absolute(tolerances::LOG_IDENTITY_ABS),
        )?
        .with_description("SSZ dilation stays finite through r_s"),
        check(
            "sp-hyperbolic-density",
            CATEGORY,
            FormulaKind::SegmentDensityHyperbolic,
            Inputs::from([("r", 2.0 * rs(M_SUN)), ("mass", M_SUN), ("alpha", 1.0)]),
            HYPERBOLIC_AT_2RS,
            Tolerance::Relative(tolerances::CLOSED_FORM_REL),
        )?,
    ]);
    Ok(cases)
}
