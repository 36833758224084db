// SPDX-License-Identifier: AGPL-3.0-only

//! Closed-form physics behind every formula case.
//!
//! - `relativity`: Schwarzschild time dilation, redshift, NSR/NGR split,
//!   GPS clock budget, classic GR tests (perihelion, deflection, tides)
//! - `segmented`: SSZ segment density Ξ(r) and its time dilation
//! - `frequency`: relational observable δ_AB and loop closure I_ABC
//! - `shapiro`: light-travel delay and PPN γ inversion
//! - `trajectory`: time-dependent clock positions for dynamic loops
//!
//! Functions validate their own domain and return [`DomainError`] instead of
//! producing NaN or ±∞. The formula layer attaches the formula identifier.

pub mod constants;
pub mod frequency;
pub mod relativity;
pub mod segmented;
pub mod shapiro;
pub mod trajectory;

pub use frequency::{delta, loop_residual, LoopBreakdown};
pub use relativity::{schwarzschild_radius, GpsCorrection, ShiftBreakdown};
pub use trajectory::{dynamic_loop, DynamicLoop, Trajectory, TrajectoryPoint};

use constants::C;

/// A physics function was called outside its domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct DomainError(pub String);

/// Result type for the physics layer.
pub type PhysicsResult<T = f64> = Result<T, DomainError>;

pub(crate) fn require_finite(name: &str, value: f64) -> PhysicsResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError(format!("{name} must be finite, got {value}")))
    }
}

pub(crate) fn require_positive(name: &str, value: f64) -> PhysicsResult<()> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(DomainError(format!("{name} must be positive, got {value}")))
    }
}

pub(crate) fn require_non_negative(name: &str, value: f64) -> PhysicsResult<()> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(DomainError(format!("{name} must be non-negative, got {value}")))
    }
}

/// β = v/c, rejecting |v| ≥ c.
pub(crate) fn beta(v: f64) -> PhysicsResult {
    require_finite("v", v)?;
    let beta = v / C;
    if beta.abs() < 1.0 {
        Ok(beta)
    } else {
        Err(DomainError(format!(
            "|v| must be below the speed of light, got {v} m/s"
        )))
    }
}
