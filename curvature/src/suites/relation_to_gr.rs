// SPDX-License-Identifier: AGPL-3.0-only

//! Frequency gradients and the classic GR tests.

use super::{check, range, CaseList};
use crate::case::{Category, Tolerance};
use crate::formula::{FormulaKind, Inputs};
use crate::physics::constants::{AU, M_EARTH, M_SUN, R_EARTH, R_SUN, SECONDS_PER_DAY};
use crate::{provenance, tolerances};

const CATEGORY: Category = Category::RelationToGr;

/// r_s/(2R²·D) at Earth's surface.
const GRADIENT_EARTH: f64 = 1.092_619_399_073_975_1e-16;
/// r_s/(2R) at Earth's surface.
const HALF_COMPACTNESS_EARTH: f64 = 6.961_078_186_654_634e-10;

pub(super) fn cases() -> CaseList {
    Ok(vec![
        check(
            "rgr-dilation-gradient",
            CATEGORY,
            FormulaKind::TimeDilationGradient,
            Inputs::from([("r", R_EARTH), ("mass", M_EARTH), ("step", 1_000.0)]),
            GRADIENT_EARTH,
            Tolerance::Relative(tolerances::FINITE_DIFFERENCE_REL),
        )?
        .with_description("1 km forward difference against analytic dD/dr"),
        check(
            "rgr-tidal-acceleration",
            CATEGORY,
            FormulaKind::TidalAcceleration,
            Inputs::from([("r", R_EARTH), ("mass", M_EARTH), ("separation", 1.0)]),
            3.08e-6,
            Tolerance::Relative(tolerances::LEADING_ORDER_REL),
        )?,
        check(
            "rgr-mercury-perihelion",
            CATEGORY,
            FormulaKind::PerihelionPrecession,
            Inputs::from([
                ("semi_major", 57.91e9),
                ("eccentricity", 0.2056),
                ("period", 87.969 * SECONDS_PER_DAY),
                ("mass", M_SUN),
            ]),
            provenance::MERCURY_PERIHELION.value,
            Tolerance::Relative(tolerances::CLASSIC_TEST_REL),
        )?,
        check(
            "rgr-solar-deflection",
            CATEGORY,
            FormulaKind::LightDeflection,
            Inputs::from([("impact", R_SUN), ("mass", M_SUN)]),
            1.75,
            Tolerance::Relative(tolerances::CLASSIC_TEST_REL),
        )?,
        range(
            "rgr-venus-shapiro",
            CATEGORY,
            FormulaKind::ShapiroDelay,
            Inputs::from([
                ("r_a", AU),
                ("r_b", 0.7 * AU),
                ("impact", 5.0 * R_SUN),
                ("mass", M_SUN),
                ("gamma", 1.0),
            ]),
            50e-6,
            500e-6,
        )?,
        check(
            "rgr-curvature-shift-leading-order",
            CATEGORY,
            FormulaKind::CurvatureShift,
            Inputs::from([("r", R_EARTH), ("mass", M_EARTH)]),
            HALF_COMPACTNESS_EARTH,
            Tolerance::Relative(tolerances::LEADING_ORDER_REL),
        )?,
    ])
}
