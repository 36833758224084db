// SPDX-License-Identifier: AGPL-3.0-only

//! δ = ln(ν_A/ν_B) for fixed clock frequencies.

use super::{check, CaseList};
use crate::case::{Category, Tolerance};
use crate::formula::{FormulaKind, Inputs};
use crate::tolerances;

const CATEGORY: Category = Category::ConstantFrequency;

/// ln(5/4.9)
const DELTA_5_4_9: f64 = 0.020_202_707_317_519_47;

pub(super) fn cases() -> CaseList {
    let pair = |a: f64, b: f64| Inputs::from([("freq_a", a), ("freq_b", b)]);
    let triple =
        |a: f64, b: f64, c: f64| Inputs::from([("freq_a", a), ("freq_b", b), ("freq_c", c)]);
    Ok(vec![
        check(
            "cf-self-comparison",
            CATEGORY,
            FormulaKind::FrequencyRatio,
            pair(5e9, 5e9),
            0.0,
            Tolerance::Absolute(tolerances::IDENTITY_ABS),
        )?
        .with_description("A clock compared with itself gives δ = 0"),
        check(
            "cf-delta-value",
            CATEGORY,
            FormulaKind::FrequencyRatio,
            pair(5e9, 4.9e9),
            DELTA_5_4_9,
            Tolerance::Absolute(tolerances::IDENTITY_ABS),
        )?,
        check(
            "cf-unit-invariance",
            CATEGORY,
            FormulaKind::FrequencyRatio,
            pair(5.0, 4.9),
            DELTA_5_4_9,
            Tolerance::Absolute(tolerances::IDENTITY_ABS),
        )?
        .with_description("Same ratio in GHz and Hz"),
        check(
            "cf-antisymmetry",
            CATEGORY,
            FormulaKind::AntisymmetryResidual,
            pair(5e9, 4.9e9),
            0.0,
            Tolerance::Absolute(tolerances::LOG_IDENTITY_ABS),
        )?,
        check(
            "cf-additivity",
            CATEGORY,
            FormulaKind::AdditivityResidual,
            triple(5e9, 4.9e9, 4.8e9),
            0.0,
            Tolerance::Absolute(tolerances::LOG_IDENTITY_ABS),
        )?,
    ])
}
