// SPDX-License-Identifier: AGPL-3.0-only

//! Formula cases: what to compute, what to expect, how close is close enough.

use crate::error::ValidationError;
use crate::formula::{FormulaKind, Inputs};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Paper section or experiment family a case belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// §2: a static clock's frequency is constant.
    ConstantFrequency,
    /// §3: first-order gravitational and kinematic shifts.
    FirstOrderShifts,
    /// §4: differences of differences, loop closure.
    LoopClosure,
    /// §5: relation to GR observables.
    RelationToGr,
    /// §6: SSZ segment density in the comparison framework.
    SszIntegration,
    /// SSZ strong-field predictions.
    SszPhysics,
    /// Removable (NSR) versus non-removable (NGR) parts.
    NsrNgrSeparation,
    /// Shapiro delay and PPN γ.
    ShapiroDelay,
    /// Historical clock, radar and astrometric measurements.
    Experimental,
    /// Time-dependent loops along real trajectories.
    DynamicLoops,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Self; 10] = [
        Self::ConstantFrequency,
        Self::FirstOrderShifts,
        Self::LoopClosure,
        Self::RelationToGr,
        Self::SszIntegration,
        Self::SszPhysics,
        Self::NsrNgrSeparation,
        Self::ShapiroDelay,
        Self::Experimental,
        Self::DynamicLoops,
    ];

    /// snake_case identifier, as in case files and on the command line.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::ConstantFrequency => "constant_frequency",
            Self::FirstOrderShifts => "first_order_shifts",
            Self::LoopClosure => "loop_closure",
            Self::RelationToGr => "relation_to_gr",
            Self::SszIntegration => "ssz_integration",
            Self::SszPhysics => "ssz_physics",
            Self::NsrNgrSeparation => "nsr_ngr_separation",
            Self::ShapiroDelay => "shapiro_delay",
            Self::Experimental => "experimental",
            Self::DynamicLoops => "dynamic_loops",
        }
    }

    /// Heading used in printed summaries.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ConstantFrequency => "Constant frequency",
            Self::FirstOrderShifts => "First-order shifts",
            Self::LoopClosure => "Loop closure",
            Self::RelationToGr => "Relation to GR",
            Self::SszIntegration => "SSZ integration",
            Self::SszPhysics => "SSZ physics",
            Self::NsrNgrSeparation => "NSR/NGR separation",
            Self::ShapiroDelay => "Shapiro delay",
            Self::Experimental => "Experimental data",
            Self::DynamicLoops => "Dynamic loops",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.identifier() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|c| c.identifier()).collect();
                format!("unknown category `{s}` (expected one of: {})", known.join(", "))
            })
    }
}

/// Acceptance band around the expected value. Every bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tolerance {
    /// |computed − expected| ≤ t
    Absolute(f64),
    /// |computed − expected| / |expected| ≤ t
    Relative(f64),
    /// 100·|computed − expected| / |expected| ≤ p
    Percent(f64),
    /// |computed − expected| ≤ n_sigma·sigma
    Sigma {
        /// Number of standard deviations accepted.
        n_sigma: f64,
        /// One standard deviation of the reference value.
        sigma: f64,
    },
}

impl Tolerance {
    /// Reject negative or non-finite parameters.
    pub fn check(&self) -> Result<(), String> {
        let params: &[(&str, f64)] = match self {
            Self::Absolute(t) | Self::Relative(t) => &[("tolerance", *t)],
            Self::Percent(p) => &[("percent", *p)],
            Self::Sigma { n_sigma, sigma } => &[("n_sigma", *n_sigma), ("sigma", *sigma)],
        };
        for &(name, value) in params {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and non-negative, got {value}"));
            }
        }
        Ok(())
    }

    /// Whether the bound scales with |expected|.
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        matches!(self, Self::Relative(_) | Self::Percent(_))
    }

    /// Does `computed` fall inside the band around `expected`?
    ///
    /// Errors when a relative band is anchored at an expected value of zero.
    pub fn admits(&self, computed: f64, expected: f64) -> Result<bool, String> {
        let deviation = (computed - expected).abs();
        if self.is_relative() && expected == 0.0 {
            return Err(format!(
                "{self} tolerance is undefined for an expected value of zero"
            ));
        }
        Ok(match *self {
            Self::Absolute(t) => deviation <= t,
            Self::Relative(t) => deviation / expected.abs() <= t,
            Self::Percent(p) => 100.0 * deviation / expected.abs() <= p,
            Self::Sigma { n_sigma, sigma } => deviation <= n_sigma * sigma,
        })
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(t) => write!(f, "abs {t:.2e}"),
            Self::Relative(t) => write!(f, "rel {t:.2e}"),
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Sigma { n_sigma, sigma } => write!(f, "{n_sigma}σ (σ={sigma:.2e})"),
        }
    }
}

/// One validation check. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaCase {
    id: String,
    category: Category,
    formula: String,
    inputs: Inputs,
    expected: f64,
    tolerance: Tolerance,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl FormulaCase {
    /// Build a case, rejecting a malformed tolerance or a non-finite expected value.
    ///
    /// The formula identifier is not resolved here; an unknown formula
    /// surfaces when the case is evaluated.
    pub fn new(
        id: impl Into<String>,
        category: Category,
        formula: impl Into<String>,
        inputs: Inputs,
        expected: f64,
        tolerance: Tolerance,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        let invalid = |reason: String| ValidationError::InvalidCase {
            case: id.clone(),
            reason,
        };
        tolerance.check().map_err(invalid)?;
        if !expected.is_finite() {
            return Err(invalid(format!("expected value is not finite ({expected})")));
        }
        Ok(Self {
            id,
            category,
            formula: formula.into(),
            inputs,
            expected,
            tolerance,
            description: None,
        })
    }

    /// Case passing when `lo ≤ computed ≤ hi`, stored as midpoint ± half-width.
    pub fn within_range(
        id: impl Into<String>,
        category: Category,
        formula: impl Into<String>,
        inputs: Inputs,
        lo: f64,
        hi: f64,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
            return Err(ValidationError::InvalidCase {
                case: id,
                reason: format!("range [{lo}, {hi}] is empty or not finite"),
            });
        }
        let mid = 0.5 * (lo + hi);
        Self::new(id, category, formula, inputs, mid, Tolerance::Absolute(0.5 * (hi - lo)))
    }

    /// Attach a free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Case identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Formula identifier as written.
    #[must_use]
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Named inputs.
    #[must_use]
    pub const fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Expected value.
    #[must_use]
    pub const fn expected(&self) -> f64 {
        self.expected
    }

    /// Acceptance band.
    #[must_use]
    pub const fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Resolve the formula identifier.
    pub fn kind(&self) -> Result<FormulaKind, ValidationError> {
        self.formula.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn category_identifiers_parse_back() {
        for c in Category::ALL {
            assert_eq!(c.identifier().parse::<Category>().unwrap(), c);
        }
        assert_eq!("ssz-physics".parse::<Category>().unwrap(), Category::SszPhysics);
        assert!("astrology".parse::<Category>().is_err());
    }

    #[test]
    fn category_serde_is_snake_case() {
        let json = serde_json::to_string(&Category::RelationToGr).unwrap();
        assert_eq!(json, "\"relation_to_gr\"");
    }

    #[test]
    fn tolerance_json_shape() {
        let t: Tolerance = serde_json::from_str(r#"{"absolute": 0.2}"#).unwrap();
        assert_eq!(t, Tolerance::Absolute(0.2));
        let s: Tolerance = serde_json::from_str(r#"{"sigma": {"n_sigma": 2, "sigma": 0.5}}"#).unwrap();
        assert_eq!(s, Tolerance::Sigma { n_sigma: 2.0, sigma: 0.5 });
    }

    #[test]
    fn boundary_is_inclusive_in_every_mode() {
        assert!(Tolerance::Absolute(0.5).admits(1.5, 1.0).unwrap());
        assert!(Tolerance::Relative(0.5).admits(3.0, 2.0).unwrap());
        assert!(Tolerance::Percent(50.0).admits(3.0, 2.0).unwrap());
        assert!(Tolerance::Sigma { n_sigma: 2.0, sigma: 0.25 }
            .admits(1.5, 1.0)
            .unwrap());
    }

    #[test]
    fn outside_band_fails() {
        assert!(!Tolerance::Absolute(0.1).admits(1.2, 1.0).unwrap());
        assert!(!Tolerance::Relative(0.01).admits(1.1, 1.0).unwrap());
        assert!(!Tolerance::Percent(1.0).admits(1.1, 1.0).unwrap());
    }

    #[test]
    fn relative_against_zero_is_rejected() {
        assert!(Tolerance::Relative(0.1).admits(0.0, 0.0).is_err());
        assert!(Tolerance::Percent(1.0).admits(1e-20, 0.0).is_err());
        assert!(Tolerance::Absolute(0.0).admits(0.0, 0.0).unwrap());
    }

    #[test]
    fn negative_tolerance_rejected_at_construction() {
        let err = FormulaCase::new(
            "neg",
            Category::LoopClosure,
            "loop-closure",
            Inputs::new(),
            0.0,
            Tolerance::Absolute(-1e-3),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCase);
        assert!(err.to_string().contains("neg"));
    }

    #[test]
    fn non_finite_expected_rejected() {
        let err = FormulaCase::new(
            "nan",
            Category::LoopClosure,
            "loop-closure",
            Inputs::new(),
            f64::NAN,
            Tolerance::Absolute(1.0),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCase);
    }

    #[test]
    fn range_becomes_midpoint_band() {
        let case = FormulaCase::within_range(
            "range",
            Category::ShapiroDelay,
            "shapiro-range",
            Inputs::new(),
            4.9e-6,
            5.0e-6,
        )
        .unwrap();
        assert!((case.expected() - 4.95e-6).abs() < 1e-20);
        match case.tolerance() {
            Tolerance::Absolute(t) => assert!((t - 0.05e-6).abs() < 1e-20),
            other => panic!("expected absolute band, got {other:?}"),
        }
        assert!(FormulaCase::within_range(
            "bad",
            Category::ShapiroDelay,
            "shapiro-range",
            Inputs::new(),
            2.0,
            1.0
        )
        .is_err());
    }

    #[test]
    fn unknown_formula_is_deferred() {
        let case = FormulaCase::new(
            "later",
            Category::SszPhysics,
            "warp-factor",
            Inputs::new(),
            1.0,
            Tolerance::Absolute(0.1),
        )
        .unwrap();
        assert_eq!(case.kind().unwrap_err().kind(), ErrorKind::UnknownFormula);
    }
}
