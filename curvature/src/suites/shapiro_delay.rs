// SPDX-License-Identifier: AGPL-3.0-only

//! Round-trip Shapiro delay: solar conjunctions, pulsars, GW170817.

use super::{check, range, CaseList};
use crate::case::{Category, Tolerance};
use crate::formula::{FormulaKind, Inputs};
use crate::physics::constants::{AU, M_SUN, PARSEC, R_SUN};
use crate::tolerances;

const CATEGORY: Category = Category::ShapiroDelay;

fn geometry(r_a: f64, r_b: f64, impact: f64, mass: f64, gamma: f64) -> Inputs {
    Inputs::from([
        ("r_a", r_a),
        ("r_b", r_b),
        ("impact", impact),
        ("mass", mass),
        ("gamma", gamma),
    ])
}

pub(super) fn cases() -> CaseList {
    let gw_distance = 40e6 * PARSEC;
    Ok(vec![
        range(
            "sh-cassini",
            CATEGORY,
            FormulaKind::ShapiroDelay,
            geometry(AU, 9.537 * AU, 1.6 * R_SUN, M_SUN, 1.0),
            50e-6,
            300e-6,
        )?,
        range(
            "sh-viking",
            CATEGORY,
            FormulaKind::ShapiroDelay,
            geometry(AU, 1.524 * AU, 2.0 * R_SUN, M_SUN, 1.0),
            100e-6,
            300e-6,
        )?,
        range(
            "sh-venus-radar",
            CATEGORY,
            FormulaKind::ShapiroDelay,
            geometry(AU, 0.723 * AU, 1.5 * R_SUN, M_SUN, 1.0),
            50e-6,
            250e-6,
        )?
        .with_description("Shapiro 1964 superior-conjunction prediction"),
        range(
            "sh-mariner",
            CATEGORY,
            FormulaKind::ShapiroDelay,
            geometry(AU, 1.524 * AU, 3.0 * R_SUN, M_SUN, 1.0),
            1e-6,
            1e-3,
        )?,
        range(
            "sh-double-pulsar",
            CATEGORY,
            FormulaKind::ShapiroDelay,
            geometry(1e9, 1e9, 1e8, 1.25 * M_SUN, 1.0),
            1e-6,
            1e-3,
        )?
        .with_description("PSR J0737-3039 companion, detectable at μs timing"),
        range(
            "sh-solar-range",
            CATEGORY,
            FormulaKind::ShapiroRange,
            Inputs::from([("mass", M_SUN)]),
            4.9e-6,
            5.0e-6,
        )?,
        check(
            "sh-ssz-matches-gr",
            CATEGORY,
            FormulaKind::ShapiroDelaySsz,
            Inputs::from([
                ("r_a", AU),
                ("r_b", AU),
                ("impact", 5.0 * R_SUN),
                ("mass", M_SUN),
            ]),
            1.755_299_789_904_022e-4,
            Tolerance::Relative(tolerances::SSZ_SHAPIRO_REL),
        )?,
        check(
            "sh-newtonian-half",
            CATEGORY,
            FormulaKind::ShapiroDelay,
            geometry(AU, 1.524 * AU, 2.0 * R_SUN, M_SUN, 0.0),
            1.099_689_852_566_690_9e-4,
            Tolerance::Relative(tolerances::CLOSED_FORM_REL),
        )?
        .with_description("γ = 0 gives half the GR delay"),
        range(
            "sh-gw170817",
            CATEGORY,
            FormulaKind::ShapiroDelay,
            geometry(
                0.5 * gw_distance,
                0.5 * gw_distance,
                8e3 * PARSEC,
                1e12 * M_SUN,
                1.0,
            ),
            1e8,
            1e9,
        )?
        .with_description("Milky Way potential, same delay for photons and gravitational waves"),
    ])
}
