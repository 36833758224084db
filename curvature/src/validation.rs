// SPDX-License-Identifier: AGPL-3.0-only

//! Validation engine.
//!
//! [`evaluate`] resolves one case's formula, computes it and compares the
//! result against the case's tolerance. [`run`] does that for a batch and
//! never fails: a rejected case becomes a failed [`EvaluationResult`] that
//! carries the error, and the remaining cases still run.
//!
//! Cases share no state, so [`run_parallel`] fans them out over rayon and
//! produces the same report in the same order.

use crate::case::{Category, FormulaCase, Tolerance};
use crate::error::{ErrorKind, ValidationError};
use crate::report::ValidationReport;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Why a case produced no computed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// Failure class.
    pub kind: ErrorKind,
    /// Display form of the error.
    pub message: String,
}

impl From<&ValidationError> for Rejection {
    fn from(e: &ValidationError) -> Self {
        Self {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

/// Outcome of one case.
///
/// Deviations and the pass flag are derived from the computed value,
/// expected value and tolerance, also when read back from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredResult")]
pub struct EvaluationResult {
    case_id: String,
    category: Category,
    formula: String,
    computed: Option<f64>,
    expected: f64,
    tolerance: Tolerance,
    abs_deviation: Option<f64>,
    rel_deviation: Option<f64>,
    passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rejection: Option<Rejection>,
}

/// Serialized fields of [`EvaluationResult`] that are not derived.
#[derive(Deserialize)]
struct StoredResult {
    case_id: String,
    category: Category,
    formula: String,
    computed: Option<f64>,
    expected: f64,
    tolerance: Tolerance,
    #[serde(default)]
    rejection: Option<Rejection>,
}

impl From<StoredResult> for EvaluationResult {
    fn from(stored: StoredResult) -> Self {
        let base = Self {
            case_id: stored.case_id,
            category: stored.category,
            formula: stored.formula,
            computed: None,
            expected: stored.expected,
            tolerance: stored.tolerance,
            abs_deviation: None,
            rel_deviation: None,
            passed: false,
            rejection: None,
        };
        match (stored.computed, stored.rejection) {
            (Some(computed), None) => {
                let passed = base
                    .tolerance
                    .admits(computed, base.expected)
                    .unwrap_or(false);
                base.with_computed(computed, passed)
            }
            (_, rejection) => Self { rejection, ..base },
        }
    }
}

impl EvaluationResult {
    fn from_computed(case: &FormulaCase, computed: f64, passed: bool) -> Self {
        Self {
            case_id: case.id().to_string(),
            category: case.category(),
            formula: case.formula().to_string(),
            computed: None,
            expected: case.expected(),
            tolerance: case.tolerance(),
            abs_deviation: None,
            rel_deviation: None,
            passed: false,
            rejection: None,
        }
        .with_computed(computed, passed)
    }

    fn with_computed(self, computed: f64, passed: bool) -> Self {
        let abs_deviation = (computed - self.expected).abs();
        let rel_deviation = (self.expected != 0.0).then(|| abs_deviation / self.expected.abs());
        Self {
            computed: Some(computed),
            abs_deviation: Some(abs_deviation),
            rel_deviation,
            passed,
            ..self
        }
    }

    /// Failed result standing in for a case the engine rejected.
    #[must_use]
    pub fn rejected(case: &FormulaCase, error: &ValidationError) -> Self {
        Self {
            case_id: case.id().to_string(),
            category: case.category(),
            formula: case.formula().to_string(),
            computed: None,
            expected: case.expected(),
            tolerance: case.tolerance(),
            abs_deviation: None,
            rel_deviation: None,
            passed: false,
            rejection: Some(error.into()),
        }
    }

    /// Case identifier.
    #[must_use]
    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    /// Category of the case.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Formula identifier as written in the case.
    #[must_use]
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Computed value; `None` when the case was rejected.
    #[must_use]
    pub const fn computed(&self) -> Option<f64> {
        self.computed
    }

    /// Expected value.
    #[must_use]
    pub const fn expected(&self) -> f64 {
        self.expected
    }

    /// Tolerance applied.
    #[must_use]
    pub const fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// |computed − expected|.
    #[must_use]
    pub const fn abs_deviation(&self) -> Option<f64> {
        self.abs_deviation
    }

    /// |computed − expected| / |expected|; `None` when expected is zero.
    #[must_use]
    pub const fn rel_deviation(&self) -> Option<f64> {
        self.rel_deviation
    }

    /// Whether the case passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.passed
    }

    /// Rejection details, if the case could not be evaluated.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        self.rejection.as_ref()
    }
}

/// Evaluate one case.
///
/// # Errors
///
/// - [`ValidationError::UnknownFormula`] if the identifier is not in the formula set
/// - [`ValidationError::InvalidInput`] for a missing or non-finite input, a
///   domain violation, a non-finite result, or a relative tolerance against
///   an expected value of zero
pub fn evaluate(case: &FormulaCase) -> Result<EvaluationResult, ValidationError> {
    let kind = case.kind()?;
    let computed = kind.evaluate(case.inputs())?;
    let passed = case
        .tolerance()
        .admits(computed, case.expected())
        .map_err(|reason| ValidationError::invalid_input(kind.identifier(), reason))?;
    debug!(
        case = case.id(),
        formula = kind.identifier(),
        computed,
        expected = case.expected(),
        passed,
        "evaluated"
    );
    Ok(EvaluationResult::from_computed(case, computed, passed))
}

fn evaluate_or_reject(case: &FormulaCase) -> EvaluationResult {
    evaluate(case).unwrap_or_else(|e| {
        warn!(case = case.id(), error = %e, "case rejected");
        EvaluationResult::rejected(case, &e)
    })
}

/// Evaluate every case in order. One result per case; never fails.
#[must_use]
pub fn run(cases: &[FormulaCase]) -> ValidationReport {
    info!(cases = cases.len(), "running validation");
    let results: Vec<EvaluationResult> = cases.iter().map(evaluate_or_reject).collect();
    finish_run(results)
}

/// [`run`] over the rayon thread pool. Result order matches input order.
#[must_use]
pub fn run_parallel(cases: &[FormulaCase]) -> ValidationReport {
    info!(
        cases = cases.len(),
        threads = rayon::current_num_threads(),
        "running validation in parallel"
    );
    let results: Vec<EvaluationResult> = cases.par_iter().map(evaluate_or_reject).collect();
    finish_run(results)
}

fn finish_run(results: Vec<EvaluationResult>) -> ValidationReport {
    let report = ValidationReport::from_results(results);
    info!(
        passed = report.passed_count(),
        total = report.total_count(),
        "validation complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Inputs;
    use crate::physics::constants::{M_EARTH, R_EARTH};

    fn dilation_case(r: f64, expected: f64, tolerance: Tolerance) -> FormulaCase {
        FormulaCase::new(
            "d",
            Category::RelationToGr,
            "time-dilation-gr",
            Inputs::from([("r", r), ("mass", M_EARTH)]),
            expected,
            tolerance,
        )
        .unwrap()
    }

    #[test]
    fn passing_case_reports_deviations() {
        let d = crate::physics::relativity::time_dilation(R_EARTH, M_EARTH).unwrap();
        let r = evaluate(&dilation_case(R_EARTH, d, Tolerance::Absolute(0.0))).unwrap();
        assert!(r.passed());
        assert_eq!(r.abs_deviation(), Some(0.0));
        assert_eq!(r.rel_deviation(), Some(0.0));
        assert!(r.rejection().is_none());
    }

    #[test]
    fn failing_case_is_not_an_error() {
        let r = evaluate(&dilation_case(R_EARTH, 0.5, Tolerance::Absolute(1e-3))).unwrap();
        assert!(!r.passed());
        assert!(r.computed().is_some());
    }

    #[test]
    fn zero_expected_has_no_relative_deviation() {
        let case = FormulaCase::new(
            "loop",
            Category::LoopClosure,
            "loop-closure",
            Inputs::from([("freq_a", 1.0), ("freq_b", 2.0), ("freq_c", 3.0)]),
            0.0,
            Tolerance::Absolute(1e-14),
        )
        .unwrap();
        let r = evaluate(&case).unwrap();
        assert!(r.passed());
        assert_eq!(r.rel_deviation(), None);
    }

    #[test]
    fn relative_tolerance_at_zero_expected_is_invalid_input() {
        let case = FormulaCase::new(
            "loop",
            Category::LoopClosure,
            "loop-closure",
            Inputs::from([("freq_a", 1.0), ("freq_b", 2.0), ("freq_c", 3.0)]),
            0.0,
            Tolerance::Relative(1e-3),
        )
        .unwrap();
        assert_eq!(evaluate(&case).unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn run_turns_errors_into_failed_results() {
        let cases = vec![
            dilation_case(R_EARTH, 1.0, Tolerance::Absolute(1e-8)),
            dilation_case(1e-3, 1.0, Tolerance::Absolute(1e-8)),
        ];
        let report = run(&cases);
        assert_eq!(report.total_count(), 2);
        assert_eq!(report.passed_count(), 1);
        let rejected = &report.results()[1];
        assert!(!rejected.passed());
        assert_eq!(rejected.computed(), None);
        assert_eq!(rejected.rejection().map(|r| r.kind), Some(ErrorKind::InvalidInput));
    }

    #[test]
    fn redshift_at_schwarzschild_radius_is_rejected() {
        let r_s = crate::physics::schwarzschild_radius(M_EARTH).unwrap();
        let case = FormulaCase::new(
            "horizon",
            Category::RelationToGr,
            "gravitational-redshift-gr",
            Inputs::from([("r", r_s), ("mass", M_EARTH)]),
            1.0,
            Tolerance::Absolute(1.0),
        )
        .unwrap();
        let err = evaluate(&case).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let report = run(std::slice::from_ref(&case));
        let result = &report.results()[0];
        assert_eq!(result.computed(), None);
        assert!(!result.passed());
        assert_eq!(result.rejection().map(|r| r.kind), Some(ErrorKind::InvalidInput));
    }

    #[test]
    fn rejected_result_survives_json() {
        let report = run(&[dilation_case(1e-3, 1.0, Tolerance::Absolute(1e-8))]);
        let back: ValidationReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(back, report);
        assert_eq!(back.results()[0].computed(), None);
    }

    #[test]
    fn parallel_matches_sequential() {
        let cases: Vec<FormulaCase> = (1..=40)
            .map(|i| dilation_case(R_EARTH * f64::from(i), 1.0, Tolerance::Absolute(1e-9)))
            .collect();
        assert_eq!(run(&cases), run_parallel(&cases));
    }
}
