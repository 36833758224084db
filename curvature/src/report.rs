// SPDX-License-Identifier: AGPL-3.0-only

//! Aggregated outcome of a validation run.
//!
//! Counts are fixed when the report is built and cannot drift from the
//! result list. [`ValidationReport::finish`] prints the summary in the
//! harness format and exits 0 when every case passed, 1 otherwise.

use crate::case::Category;
use crate::error::ValidationError;
use crate::validation::EvaluationResult;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::process;

/// Pass count for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category.
    pub category: Category,
    /// Cases that passed.
    pub passed: usize,
    /// Cases evaluated.
    pub total: usize,
}

impl CategorySummary {
    /// Whether every case in the category passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Results in input order plus per-category and overall counts.
///
/// Deserializing reads only the results; counts are rebuilt from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredReport")]
pub struct ValidationReport {
    results: Vec<EvaluationResult>,
    categories: Vec<CategorySummary>,
    passed: usize,
    total: usize,
}

#[derive(Deserialize)]
struct StoredReport {
    results: Vec<EvaluationResult>,
}

impl From<StoredReport> for ValidationReport {
    fn from(stored: StoredReport) -> Self {
        Self::from_results(stored.results)
    }
}

impl ValidationReport {
    /// Build a report, deriving all counts from `results`.
    #[must_use]
    pub fn from_results(results: Vec<EvaluationResult>) -> Self {
        let categories = Category::ALL
            .into_iter()
            .filter_map(|category| {
                let (passed, total) = results
                    .iter()
                    .filter(|r| r.category() == category)
                    .fold((0, 0), |(p, t), r| (p + usize::from(r.passed()), t + 1));
                (total > 0).then_some(CategorySummary {
                    category,
                    passed,
                    total,
                })
            })
            .collect();
        let passed = results.iter().filter(|r| r.passed()).count();
        let total = results.len();
        Self {
            results,
            categories,
            passed,
            total,
        }
    }

    /// Results in input order.
    #[must_use]
    pub fn results(&self) -> &[EvaluationResult] {
        &self.results
    }

    /// Per-category counts, in [`Category::ALL`] order, omitting empty ones.
    #[must_use]
    pub fn categories(&self) -> &[CategorySummary] {
        &self.categories
    }

    /// Counts for one category, if it has any cases.
    #[must_use]
    pub fn category(&self, category: Category) -> Option<&CategorySummary> {
        self.categories.iter().find(|s| s.category == category)
    }

    /// Number of passing results.
    #[must_use]
    pub const fn passed_count(&self) -> usize {
        self.passed
    }

    /// Number of results.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total
    }

    /// Whether all results passed. Vacuously true for an empty run.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Failing results in input order.
    pub fn failures(&self) -> impl Iterator<Item = &EvaluationResult> {
        self.results.iter().filter(|r| !r.passed())
    }

    /// Pretty JSON.
    pub fn to_json(&self) -> Result<String, ValidationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable summary: banner, per-category counts, one line per case.
    #[must_use]
    pub fn format_summary(&self, name: &str) -> String {
        let mut s = String::new();
        let _ = writeln!(
            s,
            "═══ {name} validation: {}/{} checks passed ═══",
            self.passed, self.total
        );
        for summary in &self.categories {
            let icon = if summary.all_passed() { "✓" } else { "✗" };
            let _ = writeln!(
                s,
                "── {icon} {} ({}/{})",
                summary.category.title(),
                summary.passed,
                summary.total
            );
            for r in self.results.iter().filter(|r| r.category() == summary.category) {
                let icon = if r.passed() { "✓" } else { "✗" };
                match (r.computed(), r.rejection()) {
                    (Some(computed), _) => {
                        let _ = writeln!(
                            s,
                            "  {icon} {}: observed={computed:.6e}, expected={:.6e}, tol={} ({})",
                            r.case_id(),
                            r.expected(),
                            r.tolerance(),
                            r.formula()
                        );
                    }
                    (None, Some(rejection)) => {
                        let _ = writeln!(s, "  {icon} {}: {}", r.case_id(), rejection.message);
                    }
                    (None, None) => {
                        let _ = writeln!(s, "  {icon} {}", r.case_id());
                    }
                }
            }
        }
        s
    }

    /// Print the summary and exit with code 0 if all cases passed, 1 otherwise.
    pub fn finish(&self, name: &str) -> ! {
        println!();
        print!("{}", self.format_summary(name));
        if self.all_passed() {
            println!("ALL CHECKS PASSED");
            process::exit(0);
        } else {
            let failed: Vec<&str> = self.failures().map(EvaluationResult::case_id).collect();
            println!("FAILED CHECKS: {}", failed.join(", "));
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{FormulaCase, Tolerance};
    use crate::formula::Inputs;
    use crate::validation::run;

    fn freq_case(id: &str, category: Category, expected: f64) -> FormulaCase {
        FormulaCase::new(
            id,
            category,
            "frequency-ratio",
            Inputs::from([("freq_a", 1.0), ("freq_b", 1.0)]),
            expected,
            Tolerance::Absolute(1e-12),
        )
        .unwrap()
    }

    #[test]
    fn counts_derive_from_results() {
        let report = run(&[
            freq_case("a", Category::ConstantFrequency, 0.0),
            freq_case("b", Category::ConstantFrequency, 1.0),
            freq_case("c", Category::LoopClosure, 0.0),
        ]);
        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.total_count(), 3);
        assert!(!report.all_passed());
        let cf = report.category(Category::ConstantFrequency).unwrap();
        assert_eq!((cf.passed, cf.total), (1, 2));
        assert!(report.category(Category::ShapiroDelay).is_none());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn categories_follow_declaration_order() {
        let report = run(&[
            freq_case("x", Category::DynamicLoops, 0.0),
            freq_case("y", Category::ConstantFrequency, 0.0),
        ]);
        let order: Vec<Category> = report.categories().iter().map(|s| s.category).collect();
        assert_eq!(order, vec![Category::ConstantFrequency, Category::DynamicLoops]);
        // results keep input order
        assert_eq!(report.results()[0].case_id(), "x");
    }

    #[test]
    fn empty_report_passes_vacuously() {
        let report = ValidationReport::from_results(Vec::new());
        assert!(report.all_passed());
        assert_eq!(report.total_count(), 0);
        assert!(report.categories().is_empty());
    }

    #[test]
    fn summary_banner_and_icons() {
        let report = run(&[
            freq_case("good", Category::LoopClosure, 0.0),
            freq_case("bad", Category::LoopClosure, 2.0),
        ]);
        let s = report.format_summary("freqcurve");
        assert!(s.contains("═══ freqcurve validation: 1/2 checks passed ═══"));
        assert!(s.contains("✓ good"));
        assert!(s.contains("✗ bad"));
    }

    #[test]
    fn stored_counts_are_rebuilt_from_results() {
        let forged: ValidationReport =
            serde_json::from_str(r#"{"results":[],"categories":[],"passed":56,"total":0}"#)
                .unwrap();
        assert_eq!(forged.passed_count(), 0);
        assert_eq!(forged.total_count(), 0);

        let report = run(&[
            freq_case("a", Category::LoopClosure, 0.0),
            freq_case("b", Category::LoopClosure, 3.0),
        ]);
        let mut json: serde_json::Value =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();
        json["passed"] = 2.into();
        json["categories"][0]["passed"] = 2.into();
        json["results"][1]["passed"] = true.into();
        json["results"][1]["abs_deviation"] = 0.0.into();
        let back: ValidationReport = serde_json::from_value(json).unwrap();
        assert_eq!(back.passed_count(), 1);
        assert!(!back.results()[1].passed());
        assert_eq!(back.results()[1].abs_deviation(), Some(3.0));
        assert_eq!(back, report);
    }

    #[test]
    fn last_digit_floats_survive_json() {
        for value in [-9.020_562_075_079_396e-17_f64, 2.436_010_603_896_103_3e-8] {
            let text = serde_json::to_string(&value).unwrap();
            let back: f64 = serde_json::from_str(&text).unwrap();
            assert_eq!(back.to_bits(), value.to_bits(), "{text}");
        }
    }

    #[test]
    fn json_round_trip_preserves_report() {
        let report = run(&[freq_case("a", Category::Experimental, 0.0)]);
        let json = report.to_json().unwrap();
        let back: ValidationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
