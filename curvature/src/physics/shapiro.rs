// SPDX-License-Identifier: AGPL-3.0-only

//! Shapiro (gravitational light-travel) delay.
//!
//! Round-trip excess Δt = (1 + γ)·(r_s/c)·ln(4·r_a·r_b/d²) for a radar
//! signal passing a mass at impact parameter d between endpoints at r_a and
//! r_b. In GR γ = 1 and the prefactor becomes 4GM/c³. Solar-conjunction
//! measurements (Viking, Cassini) invert this relation to bound PPN γ.

use super::constants::{C, C2, G};
use super::relativity::{compactness, schwarzschild_radius};
use super::{require_finite, require_positive, DomainError, PhysicsResult};

/// ln(4·r_a·r_b/d²), requiring a positive argument of the log above 1.
fn geometry_log(r_a: f64, r_b: f64, impact: f64, mass: f64) -> PhysicsResult {
    require_positive("r_a", r_a)?;
    require_positive("r_b", r_b)?;
    compactness(impact, mass)?;
    let ratio = 4.0 * r_a * r_b / (impact * impact);
    if ratio <= 1.0 {
        return Err(DomainError(format!(
            "impact parameter {impact:.6e} m is too large for endpoints at {r_a:.6e} m and {r_b:.6e} m"
        )));
    }
    Ok(ratio.ln())
}

/// PPN round-trip Shapiro delay in seconds.
pub fn shapiro_delay(r_a: f64, r_b: f64, impact: f64, mass: f64, gamma: f64) -> PhysicsResult {
    require_finite("gamma", gamma)?;
    if gamma < -1.0 {
        return Err(DomainError(format!("gamma must be ≥ −1, got {gamma}")));
    }
    let log = geometry_log(r_a, r_b, impact, mass)?;
    Ok((1.0 + gamma) * schwarzschild_radius(mass)? / C * log)
}

/// GR delay with the SSZ second-order factor 1 + (r_s/4d)².
pub fn shapiro_delay_ssz(r_a: f64, r_b: f64, impact: f64, mass: f64) -> PhysicsResult {
    let base = shapiro_delay(r_a, r_b, impact, mass, 1.0)?;
    let q = schwarzschild_radius(mass)? / (4.0 * impact);
    Ok(base * (1.0 + q * q))
}

/// Invert a measured delay for γ.
pub fn ppn_gamma(r_a: f64, r_b: f64, impact: f64, mass: f64, delay: f64) -> PhysicsResult {
    require_positive("mass", mass)?;
    require_finite("delay", delay)?;
    let log = geometry_log(r_a, r_b, impact, mass)?;
    let unit = schwarzschild_radius(mass)? / C * log;
    Ok(delay / unit - 1.0)
}

/// Characteristic delay scale GM/c³ in seconds.
pub fn shapiro_range(mass: f64) -> PhysicsResult {
    require_positive("mass", mass)?;
    Ok(G * mass / (C2 * C))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::constants::{AU, M_SUN, R_SUN};

    #[test]
    fn cassini_geometry_delay() {
        let dt = shapiro_delay(AU, 9.537 * AU, 1.6 * R_SUN, M_SUN, 1.0).unwrap();
        assert!(dt > 250e-6 && dt < 280e-6, "got {dt}");
    }

    #[test]
    fn newtonian_gamma_halves_delay() {
        let gr = shapiro_delay(AU, 1.524 * AU, 2.0 * R_SUN, M_SUN, 1.0).unwrap();
        let newton = shapiro_delay(AU, 1.524 * AU, 2.0 * R_SUN, M_SUN, 0.0).unwrap();
        assert!((gr / newton - 2.0).abs() < 1e-12);
    }

    #[test]
    fn gamma_inverts_delay() {
        let dt = shapiro_delay(AU, 9.537 * AU, 1.6 * R_SUN, M_SUN, 1.000_021).unwrap();
        let gamma = ppn_gamma(AU, 9.537 * AU, 1.6 * R_SUN, M_SUN, dt).unwrap();
        assert!((gamma - 1.000_021).abs() < 1e-12);
    }

    #[test]
    fn non_positive_impact_rejected() {
        assert!(shapiro_delay(AU, AU, 0.0, M_SUN, 1.0).is_err());
        assert!(shapiro_delay(AU, AU, -R_SUN, M_SUN, 1.0).is_err());
    }

    #[test]
    fn impact_beyond_endpoints_rejected() {
        assert!(shapiro_delay(1e3, 1e3, 1e4, 1.0, 1.0).is_err());
    }

    #[test]
    fn ssz_correction_is_tiny_at_sun() {
        let gr = shapiro_delay(AU, 1.524 * AU, 2.0 * R_SUN, M_SUN, 1.0).unwrap();
        let ssz = shapiro_delay_ssz(AU, 1.524 * AU, 2.0 * R_SUN, M_SUN).unwrap();
        assert!(ssz > gr);
        assert!((ssz / gr - 1.0) < 1e-11);
    }

    #[test]
    fn solar_range_is_five_microseconds() {
        let t = shapiro_range(M_SUN).unwrap();
        assert!((t - 4.9256e-6).abs() < 1e-9);
    }
}
