// SPDX-License-Identifier: AGPL-3.0-only

//! Total structural information N = N_SR + N_GR and the weak-field SSZ limit.

use super::{check, range, CaseList};
use crate::case::{Category, Tolerance};
use crate::formula::{FormulaKind, Inputs};
use crate::physics::constants::{G_SURFACE, H_GPS, H_ISS, M_EARTH, R_EARTH, V_ISS};
use crate::tolerances;

const CATEGORY: Category = Category::SszIntegration;

pub(super) fn cases() -> CaseList {
    let at = |r: f64| Inputs::from([("r", r), ("mass", M_EARTH)]);
    Ok(vec![
        check(
            "si-total-shift-orbital-speed",
            CATEGORY,
            FormulaKind::TotalShift,
            Inputs::from([("r", R_EARTH), ("v", V_ISS), ("mass", M_EARTH)]),
            1.022_534_867_212_476_8e-9,
            Tolerance::Relative(tolerances::CLOSED_FORM_REL),
        )?,
        check(
            "si-curvature-shift-gps",
            CATEGORY,
            FormulaKind::CurvatureShift,
            at(R_EARTH + H_GPS),
            1.669_076_403_868_001_5e-10,
            Tolerance::Relative(tolerances::WEAK_FIELD_REL),
        )?
        .with_description("N_GR at GPS altitude against r_s/2r"),
        range(
            "si-optical-clock-1cm",
            CATEGORY,
            FormulaKind::UniformFieldShift,
            Inputs::from([("g", G_SURFACE), ("height", 0.01)]),
            1e-18,
            1e-17,
        )?,
        check(
            "si-ssz-weak-field-dilation",
            CATEGORY,
            FormulaKind::TimeDilationSszWeak,
            at(R_EARTH),
            0.999_999_999_303_892_2,
            Tolerance::Relative(tolerances::WEAK_FIELD_REL),
        )?
        .with_description("1/(1 + r_s/2r) against D_GR at Earth's surface"),
        check(
            "si-strong-form-saturation",
            CATEGORY,
            FormulaKind::SegmentDensityStrong,
            at(1e12),
            1.0,
            Tolerance::Absolute(tolerances::STRONG_FIELD_SATURATION_ABS),
        )?,
        range(
            "si-aces-station-shift",
            CATEGORY,
            FormulaKind::FrequencyShiftWeak,
            Inputs::from([("r_a", R_EARTH), ("r_b", R_EARTH + H_ISS), ("mass", M_EARTH)]),
            1e-16,
            1e-8,
        )?,
    ])
}
