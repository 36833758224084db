// SPDX-License-Identifier: AGPL-3.0-only

//! Built-in case catalog, one builder per [`Category`].
//!
//! | Module | Category | Checks |
//! |--------|----------|--------|
//! | `constant_frequency` | Constant frequency | δ identities for fixed ν |
//! | `first_order_shifts` | First-order shifts | GP-A, Galileo, Pound-Rebka, GPS budget |
//! | `loop_closure` | Loop closure | I_ABC = 0 for static loops, path independence |
//! | `relation_to_gr` | Relation to GR | gradient, tides, perihelion, deflection |
//! | `ssz_integration` | SSZ integration | N = N_SR + N_GR, weak-field SSZ |
//! | `ssz_physics` | SSZ physics | Ξ(r), universal crossing, neutron stars |
//! | `nsr_ngr_separation` | NSR/NGR separation | kinematic part removable, N_GR invariant |
//! | `shapiro_delay` | Shapiro delay | solar-system and pulsar delays |
//! | `experimental` | Experimental | prediction against published measurement |
//! | `dynamic_loops` | Dynamic loops | I_ABC(t) along orbits |
//!
//! Every tolerance comes from [`crate::tolerances`] or a
//! [`crate::provenance`] record.

mod constant_frequency;
mod dynamic_loops;
mod experimental;
mod first_order_shifts;
mod loop_closure;
mod nsr_ngr_separation;
mod relation_to_gr;
mod shapiro_delay;
mod ssz_integration;
mod ssz_physics;

use crate::case::{Category, FormulaCase, Tolerance};
use crate::error::ValidationError;
use crate::formula::{FormulaKind, Inputs};
use crate::physics::constants::{C2, G};

type CaseList = Result<Vec<FormulaCase>, ValidationError>;

/// Cases of one category.
pub fn by_category(category: Category) -> CaseList {
    match category {
        Category::ConstantFrequency => constant_frequency::cases(),
        Category::FirstOrderShifts => first_order_shifts::cases(),
        Category::LoopClosure => loop_closure::cases(),
        Category::RelationToGr => relation_to_gr::cases(),
        Category::SszIntegration => ssz_integration::cases(),
        Category::SszPhysics => ssz_physics::cases(),
        Category::NsrNgrSeparation => nsr_ngr_separation::cases(),
        Category::ShapiroDelay => shapiro_delay::cases(),
        Category::Experimental => experimental::cases(),
        Category::DynamicLoops => dynamic_loops::cases(),
    }
}

/// Every built-in case, grouped in [`Category::ALL`] order.
pub fn all_cases() -> CaseList {
    let mut cases = Vec::new();
    for category in Category::ALL {
        cases.extend(by_category(category)?);
    }
    Ok(cases)
}

fn check(
    id: &str,
    category: Category,
    kind: FormulaKind,
    inputs: Inputs,
    expected: f64,
    tolerance: Tolerance,
) -> Result<FormulaCase, ValidationError> {
    FormulaCase::new(id, category, kind.identifier(), inputs, expected, tolerance)
}

fn range(
    id: &str,
    category: Category,
    kind: FormulaKind,
    inputs: Inputs,
    lo: f64,
    hi: f64,
) -> Result<FormulaCase, ValidationError> {
    FormulaCase::within_range(id, category, kind.identifier(), inputs, lo, hi)
}

/// r_s = 2GM/c², for placing radii in units of r_s.
fn rs(mass: f64) -> f64 {
    2.0 * G * mass / C2
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_is_populated() {
        for category in Category::ALL {
            let cases = by_category(category).unwrap();
            assert!(!cases.is_empty(), "{category}");
            assert!(cases.iter().all(|c| c.category() == category), "{category}");
        }
    }

    #[test]
    fn case_ids_are_unique() {
        let cases = all_cases().unwrap();
        let ids: HashSet<&str> = cases.iter().map(FormulaCase::id).collect();
        assert_eq!(ids.len(), cases.len());
    }

    #[test]
    fn every_formula_resolves() {
        for case in all_cases().unwrap() {
            assert!(case.kind().is_ok(), "{}", case.id());
        }
    }

    #[test]
    fn rs_matches_physics() {
        let direct = crate::physics::schwarzschild_radius(1.0e30).unwrap();
        assert_eq!(rs(1.0e30), direct);
    }
}
