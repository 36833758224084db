// SPDX-License-Identifier: AGPL-3.0-only

//! freqcurve: validation engine for frequency-based curvature detection.
//!
//! Checks the closed-form predictions of frequency-comparison gravimetry:
//! gravitational redshift between clocks, loop closure I_ABC = 0, the NSR/NGR
//! split of a clock comparison, Shapiro delay, and the segmented-spacetime
//! (SSZ) segment density Ξ(r). Each check is a [`FormulaCase`]: a formula at
//! named inputs, an expected value and a tolerance. [`validation::run`] turns
//! a slice of cases into a [`ValidationReport`].
//!
//! ## Modules
//!   - `physics`: pure closed-form functions with domain checks
//!   - `formula`: closed set of formula identifiers and their inputs
//!   - `case`: `FormulaCase`, `Tolerance`, `Category`
//!   - `validation`: `evaluate`, `run`, `run_parallel`
//!   - `report`: aggregated counts, JSON, harness-style summary
//!   - `suites`: built-in cases, one builder per category
//!   - `tolerances`: every threshold with its justification
//!   - `provenance`: published measurements with citations
//!   - `data`: JSON case files in, JSON reports out
//!   - `tables`: SSZ vs GR, loop configurations, experimental summary
//!
//! ## Binary
//!   - `validate_all`: runs the suites, exit code 0 only if every case passes

#![deny(clippy::expect_used, clippy::unwrap_used)]

pub mod case;
pub mod data;
pub mod error;
pub mod formula;
pub mod physics;
pub mod provenance;
pub mod report;
pub mod suites;
pub mod tables;
pub mod tolerances;
pub mod validation;

pub use case::{Category, FormulaCase, Tolerance};
pub use error::{ErrorKind, ValidationError};
pub use formula::{FormulaKind, Inputs};
pub use report::{CategorySummary, ValidationReport};
pub use validation::{evaluate, run, run_parallel, EvaluationResult, Rejection};
