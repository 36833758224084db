// SPDX-License-Identifier: AGPL-3.0-only

//! Case-definition files and report output.
//!
//! A case file is a JSON object keyed by case id:
//!
//! ```json
//! {
//!   "cases": {
//!     "pound-rebka": {
//!       "category": "experimental",
//!       "formula": "frequency-shift-weak",
//!       "inputs": { "r_a": 6371000.0, "r_b": 6371022.5, "mass": 5.972e24 },
//!       "expected": 2.46e-15,
//!       "tolerance": { "relative": 0.15 },
//!       "description": "Harvard tower"
//!     }
//!   }
//! }
//! ```
//!
//! Instead of `expected` + `tolerance` an entry may give `"range": [lo, hi]`.
//! Cases are returned sorted by id.

use crate::case::{Category, FormulaCase, Tolerance};
use crate::error::ValidationError;
use crate::formula::Inputs;
use crate::report::ValidationReport;
use crate::tables;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseEntry {
    category: Category,
    formula: String,
    #[serde(default)]
    inputs: Inputs,
    expected: Option<f64>,
    tolerance: Option<Tolerance>,
    range: Option<[f64; 2]>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CaseFile {
    cases: BTreeMap<String, CaseEntry>,
}

impl CaseEntry {
    fn into_case(self, id: String) -> Result<FormulaCase, ValidationError> {
        let case = match (self.expected, self.tolerance, self.range) {
            (Some(expected), Some(tolerance), None) => FormulaCase::new(
                id,
                self.category,
                self.formula,
                self.inputs,
                expected,
                tolerance,
            )?,
            (None, None, Some([lo, hi])) => {
                FormulaCase::within_range(id, self.category, self.formula, self.inputs, lo, hi)?
            }
            _ => {
                return Err(ValidationError::InvalidCase {
                    case: id,
                    reason: "give either `expected` with `tolerance`, or `range`".to_string(),
                })
            }
        };
        Ok(match self.description {
            Some(d) => case.with_description(d),
            None => case,
        })
    }
}

/// Convert every entry; a file with malformed entries is rejected as a whole,
/// with each bad entry logged and all of their ids named in the error.
fn cases_from_file(file: CaseFile) -> Result<Vec<FormulaCase>, ValidationError> {
    let mut cases = Vec::with_capacity(file.cases.len());
    let mut bad: Vec<(String, String)> = Vec::new();
    for (id, entry) in file.cases {
        match entry.into_case(id.clone()) {
            Ok(case) => cases.push(case),
            Err(e) => {
                warn!(case = %id, error = %e, "malformed case entry");
                let reason = match e {
                    ValidationError::InvalidCase { reason, .. } => reason,
                    other => other.to_string(),
                };
                bad.push((id, reason));
            }
        }
    }
    match bad.len() {
        0 => Ok(cases),
        1 => {
            let (case, reason) = bad.remove(0);
            Err(ValidationError::InvalidCase { case, reason })
        }
        n => {
            let ids: Vec<&str> = bad.iter().map(|(id, _)| id.as_str()).collect();
            Err(ValidationError::InvalidCase {
                case: ids.join(", "),
                reason: format!("{n} malformed entries; first: {}", bad[0].1),
            })
        }
    }
}

/// Parse case definitions from a JSON string.
///
/// # Errors
///
/// [`ValidationError::DataLoad`] for malformed JSON,
/// [`ValidationError::InvalidCase`] for a malformed entry.
pub fn parse_cases(json: &str) -> Result<Vec<FormulaCase>, ValidationError> {
    let file: CaseFile = serde_json::from_str(json)?;
    cases_from_file(file)
}

/// Parse case definitions from any reader.
///
/// # Errors
///
/// As [`parse_cases`].
pub fn read_cases<R: Read>(reader: R) -> Result<Vec<FormulaCase>, ValidationError> {
    let file: CaseFile = serde_json::from_reader(reader)?;
    cases_from_file(file)
}

/// Load case definitions from a file.
///
/// Uses streaming `from_reader`; the file is never held as one string.
///
/// # Errors
///
/// [`ValidationError::DataLoad`] if the file cannot be opened or parsed.
pub fn load_cases(path: &Path) -> Result<Vec<FormulaCase>, ValidationError> {
    let file = fs::File::open(path).map_err(|e| {
        ValidationError::DataLoad(format!("cannot open {}: {e}", path.display()))
    })?;
    let cases = read_cases(BufReader::new(file))?;
    info!(path = %path.display(), cases = cases.len(), "loaded case definitions");
    Ok(cases)
}

fn write_text(path: &Path, text: &str) -> Result<(), ValidationError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}

/// Write the report as pretty JSON, creating parent directories.
///
/// # Errors
///
/// [`ValidationError::DataLoad`] on any I/O or serialization failure.
pub fn write_report(path: &Path, report: &ValidationReport) -> Result<(), ValidationError> {
    write_text(path, &report.to_json()?)?;
    debug!(path = %path.display(), "report written");
    Ok(())
}

/// Write the SSZ, loop and experimental tables as one pretty JSON object.
///
/// # Errors
///
/// [`ValidationError::InvalidInput`] if a table row leaves its domain,
/// [`ValidationError::DataLoad`] on I/O or serialization failure.
pub fn write_tables(path: &Path) -> Result<(), ValidationError> {
    let json = serde_json::to_string_pretty(&tables::tables_json()?)?;
    write_text(path, &json)?;
    debug!(path = %path.display(), "tables written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const TWO_CASES: &str = r#"{
        "cases": {
            "z-loop": {
                "category": "loop_closure",
                "formula": "loop-closure",
                "inputs": { "freq_a": 5e9, "freq_b": 4.9e9, "freq_c": 4.8e9 },
                "expected": 0.0,
                "tolerance": { "absolute": 1e-14 }
            },
            "a-range": {
                "category": "shapiro_delay",
                "formula": "shapiro-range",
                "inputs": { "mass": 1.98847e30 },
                "range": [4.9e-6, 5.0e-6],
                "description": "GM/c³ for the Sun"
            }
        }
    }"#;

    #[test]
    fn parses_and_sorts_by_id() {
        let cases = parse_cases(TWO_CASES).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].id(), "a-range");
        assert_eq!(cases[1].id(), "z-loop");
        assert_eq!(cases[0].description(), Some("GM/c³ for the Sun"));
        assert_eq!(cases[1].category(), Category::LoopClosure);
    }

    #[test]
    fn range_entry_becomes_midpoint_band() {
        let cases = parse_cases(TWO_CASES).unwrap();
        let range = &cases[0];
        assert!((range.expected() - 4.95e-6).abs() < 1e-18);
        match range.tolerance() {
            Tolerance::Absolute(t) => assert!((t - 0.05e-6).abs() < 1e-18),
            other => panic!("unexpected tolerance {other}"),
        }
    }

    #[test]
    fn malformed_json_is_data_load() {
        let err = parse_cases("{ not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataLoad);
    }

    #[test]
    fn unknown_category_is_data_load() {
        let json = r#"{"cases":{"x":{"category":"astrology","formula":"loop-closure",
            "expected":0.0,"tolerance":{"absolute":1.0}}}}"#;
        assert_eq!(parse_cases(json).unwrap_err().kind(), ErrorKind::DataLoad);
    }

    #[test]
    fn expected_without_tolerance_is_invalid_case() {
        let json = r#"{"cases":{"x":{"category":"loop_closure","formula":"loop-closure",
            "expected":0.0}}}"#;
        let err = parse_cases(json).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCase);
    }

    #[test]
    fn negative_tolerance_is_invalid_case() {
        let json = r#"{"cases":{"x":{"category":"loop_closure","formula":"loop-closure",
            "expected":0.0,"tolerance":{"percent":-1.0}}}}"#;
        assert_eq!(parse_cases(json).unwrap_err().kind(), ErrorKind::InvalidCase);
    }

    #[test]
    fn every_malformed_entry_is_named() {
        let json = r#"{"cases":{
            "b-no-tolerance":{"category":"loop_closure","formula":"loop-closure","expected":0.0},
            "good":{"category":"loop_closure","formula":"loop-closure","expected":0.0,
                "tolerance":{"absolute":1.0}},
            "m-negative":{"category":"loop_closure","formula":"loop-closure","expected":0.0,
                "tolerance":{"percent":-1.0}}}}"#;
        let err = parse_cases(json).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCase);
        let message = err.to_string();
        assert!(message.contains("b-no-tolerance"), "{message}");
        assert!(message.contains("m-negative"), "{message}");
        assert!(!message.contains("good"), "{message}");
    }

    #[test]
    fn single_malformed_entry_keeps_its_id() {
        let json = r#"{"cases":{"x":{"category":"loop_closure","formula":"loop-closure",
            "expected":0.0,"tolerance":{"percent":-1.0}}}}"#;
        match parse_cases(json).unwrap_err() {
            ValidationError::InvalidCase { case, .. } => assert_eq!(case, "x"),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn tables_written_as_json() {
        let path = std::env::temp_dir()
            .join(format!("freqcurve-tables-{}", std::process::id()))
            .join("tables.json");
        write_tables(&path).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(json["ssz_vs_gr"].is_array());
        assert_eq!(json["loop_configurations"].as_array().map(Vec::len), Some(4));
        assert!(json["experimental_summary"][0]["predicted_sigma"].is_number());
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn missing_file_errors() {
        let err = load_cases(Path::new("/nonexistent/cases.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataLoad);
    }

    #[test]
    fn load_and_write_round_trip_on_disk() {
        let dir = std::env::temp_dir().join(format!("freqcurve-data-{}", std::process::id()));
        let cases_path = dir.join("cases.json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&cases_path, TWO_CASES).unwrap();

        let cases = load_cases(&cases_path).unwrap();
        let report = crate::validation::run(&cases);
        assert!(report.all_passed());

        let out = dir.join("out").join("report.json");
        write_report(&out, &report).unwrap();
        let back: ValidationReport =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(back, report);
        let _ = fs::remove_dir_all(&dir);
    }
}
