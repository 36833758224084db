// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized validation tolerances with physical justification.
//!
//! Every threshold a built-in case uses is defined here once, with the
//! reason for its size. Suites never carry bare numeric tolerances.
//!
//! # Tolerance categories
//!
//! | Category | Basis | Example |
//! |----------|-------|---------|
//! | Machine precision | IEEE 754 f64 | 1e-14 for log identities |
//! | Model | Leading-order vs exact, finite differences | 1% for ∂D/∂r at 1 km step |
//! | Literature | Published measurement uncertainty | Cassini γ ± 2.3e-5 |
//!
//! Reference values are frozen as constants; nothing is read from disk at
//! validation time, so a run is deterministic.

/// Machine-precision and closed-form identity tolerances.
pub mod core;
/// Measurement tolerances from the experimental literature.
pub mod experiment;
/// Model tolerances: weak-field limits, finite differences, SSZ vs GR.
pub mod physics;

pub use core::{
    CLOSED_FORM_REL, EXACT_ZERO, IDENTITY_ABS, LOG_IDENTITY_ABS, LOOP_IDENTITY_SPREAD_ABS,
    PATH_STEPS_MAX, PATH_SUM_ABS, UNIVERSAL_RATIO_ABS,
};

pub use experiment::{
    CASSINI_GAMMA_ABS, CLOCK_LOOP_SIGMA, GPA_ESTIMATE_PCT, GPS_ESTIMATE_ABS, GPS_ICD_ABS,
    OPTICAL_CLOCK_N_SIGMA, POUND_REBKA_N_SIGMA, POUND_REBKA_REL, POUND_SNIDER_N_SIGMA,
    VIKING_GAMMA_ABS,
};

pub use physics::{
    CLASSIC_TEST_REL, EQUIVALENCE_PCT, FINITE_DIFFERENCE_REL, LEADING_ORDER_REL,
    NEUTRON_STAR_ABS, SSZ_GR_RECOVERY_REL, SSZ_SHAPIRO_REL, STRONG_FIELD_SATURATION_ABS,
    WEAK_FIELD_RATIO_REL, WEAK_FIELD_REL, XI_FAR_FIELD_ABS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)] // constants sanity check
    fn tolerance_ordering() {
        assert!(IDENTITY_ABS <= LOG_IDENTITY_ABS);
        assert!(LOG_IDENTITY_ABS < LOOP_IDENTITY_SPREAD_ABS);
        assert!(CLOSED_FORM_REL < WEAK_FIELD_REL);
        assert!(WEAK_FIELD_REL < WEAK_FIELD_RATIO_REL);
        assert!(WEAK_FIELD_RATIO_REL < FINITE_DIFFERENCE_REL);
        assert!(LEADING_ORDER_REL < CLASSIC_TEST_REL);
        assert!(GPS_ICD_ABS < GPS_ESTIMATE_ABS);
    }

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn all_tolerances_non_negative() {
        for t in [
            EXACT_ZERO,
            IDENTITY_ABS,
            LOG_IDENTITY_ABS,
            LOOP_IDENTITY_SPREAD_ABS,
            CLOSED_FORM_REL,
            PATH_SUM_ABS,
            UNIVERSAL_RATIO_ABS,
            WEAK_FIELD_REL,
            CASSINI_GAMMA_ABS,
            VIKING_GAMMA_ABS,
            CLOCK_LOOP_SIGMA,
        ] {
            assert!(t >= 0.0);
        }
    }
}
