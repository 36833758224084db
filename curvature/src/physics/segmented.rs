// SPDX-License-Identifier: AGPL-3.0-only

//! Segmented spacetime (SSZ) observables.
//!
//! Ξ(r) = Ξ_max·(1 − e^(−φ·r_s/r)) is the segment density; it plays the role
//! of the non-removable N_GR in the frequency budget. The SSZ time dilation
//! D_SSZ = 1/(1 + Ξ) stays finite at and inside r_s, so unlike the GR
//! functions these only require r > 0.

use super::constants::{PHI, XI_MAX};
use super::relativity::{self, schwarzschild_radius};
use super::{require_finite, require_positive, PhysicsResult};

fn ratio_rs_over_r(r: f64, mass: f64) -> PhysicsResult {
    require_positive("r", r)?;
    Ok(schwarzschild_radius(mass)? / r)
}

/// Segment density Ξ(r) = Ξ_max·(1 − e^(−φ·r_s/r)).
pub fn segment_density(r: f64, mass: f64) -> PhysicsResult {
    let x = ratio_rs_over_r(r, mass)?;
    Ok(-XI_MAX * (-PHI * x).exp_m1())
}

/// Hyperbolic variant Ξ(r) = Ξ_max·tanh(α·r_s/r).
pub fn segment_density_hyperbolic(r: f64, mass: f64, alpha: f64) -> PhysicsResult {
    require_positive("alpha", alpha)?;
    let x = ratio_rs_over_r(r, mass)?;
    Ok(XI_MAX * (alpha * x).tanh())
}

/// Weak-field form Ξ(r) = r_s/(2r).
pub fn segment_density_weak(r: f64, mass: f64) -> PhysicsResult {
    Ok(0.5 * ratio_rs_over_r(r, mass)?)
}

/// Strong-field saturation form 1 − e^(−φ·r/r_s); tends to 1 far from the mass.
pub fn segment_density_strong(r: f64, mass: f64) -> PhysicsResult {
    require_positive("mass", mass)?;
    let x = ratio_rs_over_r(r, mass)?;
    Ok(-(-PHI / x).exp_m1())
}

/// D_SSZ(r) = 1/(1 + Ξ(r)).
pub fn time_dilation(r: f64, mass: f64) -> PhysicsResult {
    Ok(1.0 / (1.0 + segment_density(r, mass)?))
}

/// ln D_SSZ(r) = −ln(1 + Ξ(r)).
pub fn ln_time_dilation(r: f64, mass: f64) -> PhysicsResult {
    Ok(-segment_density(r, mass)?.ln_1p())
}

/// D_SSZ with the weak-field density r_s/(2r).
pub fn time_dilation_weak(r: f64, mass: f64) -> PhysicsResult {
    Ok(1.0 / (1.0 + segment_density_weak(r, mass)?))
}

/// SSZ redshift z = 1/D_SSZ − 1, which is Ξ(r) itself.
pub fn gravitational_redshift(r: f64, mass: f64) -> PhysicsResult {
    segment_density(r, mass)
}

/// D_SSZ/D_GR. Requires r > r_s for the GR factor.
pub fn dilation_ratio(r: f64, mass: f64) -> PhysicsResult {
    Ok(time_dilation(r, mass)? / relativity::time_dilation(r, mass)?)
}

/// Ξ(r)/N_GR(r). Tends to 2·Ξ_max·φ in the weak field.
pub fn segment_curvature_ratio(r: f64, mass: f64) -> PhysicsResult {
    require_finite("r", r)?;
    Ok(segment_density(r, mass)? / relativity::curvature_shift(r, mass)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::constants::{M_EARTH, M_SUN, R_EARTH, R_STAR_RATIO};

    #[test]
    fn density_vanishes_far_away() {
        let r_s = schwarzschild_radius(M_SUN).unwrap();
        let xi = segment_density(1e12 * r_s, M_SUN).unwrap();
        assert!(xi < 1e-11);
        assert!(xi > 0.0);
    }

    #[test]
    fn density_saturates_near_horizon() {
        let r_s = schwarzschild_radius(M_SUN).unwrap();
        let xi = segment_density(1.01 * r_s, M_SUN).unwrap();
        assert!(xi > 0.7 * XI_MAX && xi <= XI_MAX, "got {xi}");
    }

    #[test]
    fn no_singularity_at_horizon() {
        let r_s = schwarzschild_radius(M_SUN).unwrap();
        let d = time_dilation(r_s, M_SUN).unwrap();
        let expected = 1.0 / (1.0 + XI_MAX * (1.0 - (-PHI).exp()));
        assert!((d - expected).abs() < 1e-14);
        assert!(d > 0.5);
        // inside the horizon SSZ still answers
        assert!(time_dilation(0.5 * r_s, M_SUN).is_ok());
    }

    #[test]
    fn zero_radius_rejected() {
        assert!(segment_density(0.0, M_SUN).is_err());
        assert!(segment_density(-1.0, M_SUN).is_err());
    }

    #[test]
    fn ratio_at_universal_radius_is_mass_independent() {
        let ratio = |m: f64| {
            let r = R_STAR_RATIO * schwarzschild_radius(m).unwrap();
            dilation_ratio(r, m).unwrap()
        };
        let reference = ratio(M_SUN);
        for m in [M_EARTH, 10.0 * M_SUN, 1e6 * M_SUN] {
            assert!((ratio(m) - reference).abs() < 1e-12);
        }
    }

    #[test]
    fn weak_field_ratio_is_two_ximax_phi() {
        let ratio = segment_curvature_ratio(R_EARTH, M_EARTH).unwrap();
        assert!((ratio - 2.0 * XI_MAX * PHI).abs() < 1e-6);
    }

    #[test]
    fn strong_form_tends_to_one() {
        let xi = segment_density_strong(1e12, M_EARTH).unwrap();
        assert!((xi - 1.0).abs() < 1e-12);
        assert!(segment_density_strong(1.0, 0.0).is_err());
    }

    #[test]
    fn hyperbolic_below_saturation() {
        let r_s = schwarzschild_radius(M_SUN).unwrap();
        let xi = segment_density_hyperbolic(2.0 * r_s, M_SUN, 1.0).unwrap();
        assert!(xi > 0.0 && xi < XI_MAX);
        assert!(segment_density_hyperbolic(r_s, M_SUN, 0.0).is_err());
    }

    #[test]
    fn ssz_slower_than_gr_at_two_rs() {
        let m = 1.4 * M_SUN;
        let r = 2.0 * schwarzschild_radius(m).unwrap();
        let d_ssz = time_dilation(r, m).unwrap();
        let d_gr = relativity::time_dilation(r, m).unwrap();
        assert!(d_ssz < d_gr);
        assert!((gravitational_redshift(r, m).unwrap() - (1.0 / d_ssz - 1.0)).abs() < 1e-14);
    }
}
