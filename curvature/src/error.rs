// SPDX-License-Identifier: AGPL-3.0-only

//! Typed errors for formula evaluation and case loading.
//!
//! Every failure of a single case is recoverable: [`crate::validation::run`]
//! records it as a failed result and moves on. Callers that need to branch on
//! the failure mode match on [`ErrorKind`] rather than parsing messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from evaluating a formula case or loading case definitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Inputs violate the domain of the formula (r ≤ r_s, |v| ≥ c, missing
    /// parameter, non-finite value, relative tolerance against zero).
    #[error("invalid input for {formula}: {reason}")]
    InvalidInput {
        /// Formula identifier the inputs were supplied to.
        formula: String,
        /// Which constraint was violated.
        reason: String,
    },

    /// The case names a formula the engine does not implement.
    #[error("unknown formula: {0}")]
    UnknownFormula(String),

    /// A case definition is malformed independently of its formula
    /// (negative tolerance, non-finite expected value).
    #[error("invalid case {case}: {reason}")]
    InvalidCase {
        /// Case identifier.
        case: String,
        /// Which constraint was violated.
        reason: String,
    },

    /// Case-definition file could not be read or parsed.
    #[error("data loading failed: {0}")]
    DataLoad(String),
}

impl ValidationError {
    /// Shorthand for [`ValidationError::InvalidInput`].
    pub fn invalid_input(formula: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            formula: formula.to_string(),
            reason: reason.into(),
        }
    }

    /// Classification used in reports.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::UnknownFormula(_) => ErrorKind::UnknownFormula,
            Self::InvalidCase { .. } => ErrorKind::InvalidCase,
            Self::DataLoad(_) => ErrorKind::DataLoad,
        }
    }
}

impl From<std::io::Error> for ValidationError {
    fn from(e: std::io::Error) -> Self {
        Self::DataLoad(e.to_string())
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        Self::DataLoad(e.to_string())
    }
}

/// Coarse failure class, serialized into reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`ValidationError::InvalidInput`].
    InvalidInput,
    /// See [`ValidationError::UnknownFormula`].
    UnknownFormula,
    /// See [`ValidationError::InvalidCase`].
    InvalidCase,
    /// See [`ValidationError::DataLoad`].
    DataLoad,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_input() {
        let err = ValidationError::invalid_input("time-dilation-gr", "r must exceed r_s");
        assert_eq!(
            err.to_string(),
            "invalid input for time-dilation-gr: r must exceed r_s"
        );
    }

    #[test]
    fn display_unknown_formula() {
        let err = ValidationError::UnknownFormula("warp-drive".into());
        assert_eq!(err.to_string(), "unknown formula: warp-drive");
    }

    #[test]
    fn kind_classifies_every_variant() {
        assert_eq!(
            ValidationError::invalid_input("x", "y").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            ValidationError::UnknownFormula("x".into()).kind(),
            ErrorKind::UnknownFormula
        );
        assert_eq!(
            ValidationError::InvalidCase {
                case: "c".into(),
                reason: "r".into()
            }
            .kind(),
            ErrorKind::InvalidCase
        );
        assert_eq!(
            ValidationError::DataLoad("x".into()).kind(),
            ErrorKind::DataLoad
        );
    }

    #[test]
    fn json_error_becomes_data_load() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: ValidationError = parse.unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::DataLoad);
    }

    #[test]
    fn error_trait_works() {
        let err = ValidationError::UnknownFormula("x".into());
        let dyn_err: &dyn std::error::Error = &err;
        assert_eq!(dyn_err.to_string(), "unknown formula: x");
    }
}
