// SPDX-License-Identifier: AGPL-3.0-only

//! I_ABC = δ_AB + δ_BC + δ_CA for static three-clock loops.

use super::{check, range, CaseList};
use crate::case::{Category, Tolerance};
use crate::formula::{FormulaKind, Inputs};
use crate::physics::constants::{H_GEO, H_GPS, M_EARTH, M_SUN, R_EARTH};
use crate::tolerances;

const CATEGORY: Category = Category::LoopClosure;

pub(super) fn cases() -> CaseList {
    let freqs =
        |a: f64, b: f64, c: f64| Inputs::from([("freq_a", a), ("freq_b", b), ("freq_c", c)]);
    let radii = |r_a: f64, r_b: f64, r_c: f64, mass: f64| {
        Inputs::from([("r_a", r_a), ("r_b", r_b), ("r_c", r_c), ("mass", mass)])
    };
    let zero = Tolerance::Absolute(tolerances::LOG_IDENTITY_ABS);
    Ok(vec![
        check(
            "lc-flat",
            CATEGORY,
            FormulaKind::LoopClosure,
            freqs(5e9, 4.9e9, 4.8e9),
            0.0,
            zero,
        )?,
        check(
            "lc-spread-frequencies",
            CATEGORY,
            FormulaKind::LoopClosure,
            freqs(1e9, 3.7e9, 10e9),
            0.0,
            Tolerance::Absolute(tolerances::LOOP_IDENTITY_SPREAD_ABS),
        )?,
        check(
            "lc-vertical-earth",
            CATEGORY,
            FormulaKind::LoopClosureGr,
            radii(R_EARTH, R_EARTH + 10_000e3, R_EARTH + 20_000e3, M_EARTH),
            0.0,
            zero,
        )?,
        check(
            "lc-neutron-star",
            CATEGORY,
            FormulaKind::LoopClosureGr,
            radii(2e4, 3e4, 4e4, 1.4 * M_SUN),
            0.0,
            zero,
        )?
        .with_description("Strong field, ln D terms of order 0.1"),
        check(
            "lc-gps-constellation",
            CATEGORY,
            FormulaKind::LoopClosureGr,
            radii(R_EARTH, R_EARTH + H_GPS, R_EARTH + H_GEO, M_EARTH),
            0.0,
            zero,
        )?,
        range(
            "lc-potential-curvature",
            CATEGORY,
            FormulaKind::PotentialCurvatureProxy,
            radii(R_EARTH, R_EARTH + 1_000e3, R_EARTH + 2_000e3, M_EARTH),
            1e5,
            1e7,
        )?
        .with_description("Unequal potential steps reveal curvature while I_ABC stays zero"),
        check(
            "lc-holonomy",
            CATEGORY,
            FormulaKind::HolonomyDeficit,
            Inputs::from([("area", 1e12), ("radius", R_EARTH)]),
            0.024_636_827_903_947_216,
            Tolerance::Relative(tolerances::CLOSED_FORM_REL),
        )?,
        check(
            "lc-radial-path-independence",
            CATEGORY,
            FormulaKind::RadialPathResidual,
            Inputs::from([
                ("r_a", R_EARTH),
                ("r_b", R_EARTH + H_GPS),
                ("mass", M_EARTH),
                ("steps", 99.0),
            ]),
            0.0,
            Tolerance::Absolute(tolerances::PATH_SUM_ABS),
        )?,
    ])
}
