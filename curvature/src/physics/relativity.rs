// SPDX-License-Identifier: AGPL-3.0-only

//! Schwarzschild-metric observables.
//!
//! Time dilation D(r) = √(1 − r_s/r), frequency shifts between radii, the
//! removable (N_SR) and non-removable (N_GR) parts of a frequency budget,
//! and the classic solar-system GR checks.
//!
//! Weak-field quantities near Earth are ~1e-10, so the naive forms
//! `1 − √(1 − x)` and `ln √(1 − x)` lose most of their digits. Everything
//! here goes through `ln_1p` or the rationalised `x / (1 + √(1 − x))`.

use super::constants::{
    ARCSEC_PER_RAD, C2, G, SECONDS_PER_DAY, SECONDS_PER_JULIAN_CENTURY,
};
use super::{beta, require_finite, require_non_negative, require_positive};
use super::{DomainError, PhysicsResult};
use serde::Serialize;

/// Schwarzschild radius r_s = 2GM/c².
pub fn schwarzschild_radius(mass: f64) -> PhysicsResult {
    require_non_negative("mass", mass)?;
    Ok(2.0 * G * mass / C2)
}

/// Compactness x = r_s/r, requiring r > r_s.
pub fn compactness(r: f64, mass: f64) -> PhysicsResult {
    require_positive("r", r)?;
    let r_s = schwarzschild_radius(mass)?;
    if r <= r_s {
        return Err(DomainError(format!(
            "r = {r:.6e} m lies at or inside the Schwarzschild radius r_s = {r_s:.6e} m"
        )));
    }
    Ok(r_s / r)
}

/// GR time-dilation factor D_GR(r) = √(1 − r_s/r).
pub fn time_dilation(r: f64, mass: f64) -> PhysicsResult {
    let x = compactness(r, mass)?;
    Ok((1.0 - x).sqrt())
}

/// ln D_GR(r), evaluated as ½·ln(1 − r_s/r) without cancellation.
pub fn ln_time_dilation(r: f64, mass: f64) -> PhysicsResult {
    let x = compactness(r, mass)?;
    Ok(0.5 * (-x).ln_1p())
}

/// Fractional frequency gain of a clock at `r_b` relative to one at `r_a`:
/// ln(D(r_b)/D(r_a)). Positive when `r_b` is higher in the potential.
pub fn frequency_shift(r_a: f64, r_b: f64, mass: f64) -> PhysicsResult {
    Ok(ln_time_dilation(r_b, mass)? - ln_time_dilation(r_a, mass)?)
}

/// Weak-field redshift Δν/ν = GM/c²·(1/r_a − 1/r_b).
pub fn frequency_shift_weak(r_a: f64, r_b: f64, mass: f64) -> PhysicsResult {
    compactness(r_a, mass)?;
    compactness(r_b, mass)?;
    Ok(G * mass / C2 * (1.0 / r_a - 1.0 / r_b))
}

/// [`frequency_shift`] with first-order propagation of radial uncertainties.
///
/// Returns `(δ, σ_δ)` with ∂δ/∂r = r_s / (2r²(1 − r_s/r)).
pub fn frequency_shift_with_uncertainty(
    r_a: f64,
    r_b: f64,
    mass: f64,
    sigma_r_a: f64,
    sigma_r_b: f64,
) -> PhysicsResult<(f64, f64)> {
    require_non_negative("sigma_r_a", sigma_r_a)?;
    require_non_negative("sigma_r_b", sigma_r_b)?;
    let delta = frequency_shift(r_a, r_b, mass)?;
    let partial = |r: f64| -> PhysicsResult {
        let x = compactness(r, mass)?;
        Ok(x / (2.0 * r * (1.0 - x)))
    };
    let sigma = (partial(r_a)? * sigma_r_a).hypot(partial(r_b)? * sigma_r_b);
    Ok((delta, sigma))
}

/// Surface redshift z = 1/D_GR − 1 for light escaping to infinity.
pub fn gravitational_redshift(r: f64, mass: f64) -> PhysicsResult {
    Ok(1.0 / time_dilation(r, mass)? - 1.0)
}

/// Non-removable (curvature) part N_GR = 1 − √(1 − r_s/r).
pub fn curvature_shift(r: f64, mass: f64) -> PhysicsResult {
    let x = compactness(r, mass)?;
    Ok(x / (1.0 + (1.0 - x).sqrt()))
}

/// Analytic radial gradient dD/dr = r_s / (2r²·D).
pub fn time_dilation_gradient(r: f64, mass: f64) -> PhysicsResult {
    let x = compactness(r, mass)?;
    Ok(x / (2.0 * r * (1.0 - x).sqrt()))
}

/// Forward finite difference of D over `step` metres.
///
/// D(r+h) − D(r) = N_GR(r) − N_GR(r+h), which keeps the ~1e-13 difference
/// out of the rounding noise of two numbers near 1.
pub fn time_dilation_gradient_fd(r: f64, mass: f64, step: f64) -> PhysicsResult {
    require_positive("step", step)?;
    Ok((curvature_shift(r, mass)? - curvature_shift(r + step, mass)?) / step)
}

/// Lorentz factor γ = 1/√(1 − v²/c²).
pub fn lorentz_factor(v: f64) -> PhysicsResult {
    let b = beta(v)?;
    Ok(1.0 / (1.0 - b * b).sqrt())
}

/// Removable (kinematic) part N_SR = γ − 1, exactly zero at rest.
pub fn kinematic_shift(v: f64) -> PhysicsResult {
    let b = beta(v)?;
    let s = (1.0 - b * b).sqrt();
    Ok(b * b / (s * (1.0 + s)))
}

/// Total structural information N = N_SR + N_GR.
pub fn total_shift(r: f64, v: f64, mass: f64) -> PhysicsResult {
    Ok(kinematic_shift(v)? + curvature_shift(r, mass)?)
}

/// NSR/NGR breakdown of one two-clock comparison δ_AB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShiftBreakdown {
    /// ln((1 − N_SR(A)) / (1 − N_SR(B))): frame-dependent.
    pub kinematic: f64,
    /// ln(D(A)/D(B)): frame-independent.
    pub gravitational: f64,
    /// Sum of both parts.
    pub total: f64,
}

/// Split δ_AB between clocks (r_a, v_a) and (r_b, v_b) into NSR and NGR parts.
pub fn shift_breakdown(
    r_a: f64,
    v_a: f64,
    r_b: f64,
    v_b: f64,
    mass: f64,
) -> PhysicsResult<ShiftBreakdown> {
    let n_a = kinematic_shift(v_a)?;
    let n_b = kinematic_shift(v_b)?;
    if n_a >= 1.0 || n_b >= 1.0 {
        return Err(DomainError(
            "kinematic split requires γ < 2 for both clocks".to_string(),
        ));
    }
    let kinematic = (-n_a).ln_1p() - (-n_b).ln_1p();
    let gravitational = ln_time_dilation(r_a, mass)? - ln_time_dilation(r_b, mass)?;
    Ok(ShiftBreakdown {
        kinematic,
        gravitational,
        total: kinematic + gravitational,
    })
}

/// GPS-style daily clock budget, μs/day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GpsCorrection {
    /// Gravitational blueshift of the orbiting clock (positive).
    pub gravitational: f64,
    /// Velocity time dilation (negative).
    pub kinematic: f64,
    /// Net rate offset the ground segment has to remove.
    pub total: f64,
}

/// Combined GR + SR rate offset of an orbiting clock against a ground clock.
pub fn gps_clock_correction(
    mass: f64,
    r_ground: f64,
    r_orbit: f64,
    v: f64,
) -> PhysicsResult<GpsCorrection> {
    let micro_per_day = SECONDS_PER_DAY * 1e6;
    let gravitational = frequency_shift_weak(r_ground, r_orbit, mass)? * micro_per_day;
    let b = beta(v)?;
    let kinematic = -0.5 * b * b * micro_per_day;
    Ok(GpsCorrection {
        gravitational,
        kinematic,
        total: gravitational + kinematic,
    })
}

/// Perihelion advance 6πGM/(c²a(1 − e²)) per orbit, in arcsec per Julian century.
pub fn perihelion_precession(
    semi_major: f64,
    eccentricity: f64,
    period: f64,
    mass: f64,
) -> PhysicsResult {
    require_positive("semi_major", semi_major)?;
    require_positive("period", period)?;
    require_positive("mass", mass)?;
    require_finite("eccentricity", eccentricity)?;
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(DomainError(format!(
            "eccentricity must lie in [0, 1) for a bound orbit, got {eccentricity}"
        )));
    }
    let per_orbit = 6.0 * std::f64::consts::PI * G * mass
        / (C2 * semi_major * (1.0 - eccentricity * eccentricity));
    Ok(per_orbit * ARCSEC_PER_RAD * SECONDS_PER_JULIAN_CENTURY / period)
}

/// Light deflection 4GM/(c²b) at impact parameter b, in arcsec.
pub fn light_deflection(impact: f64, mass: f64) -> PhysicsResult {
    compactness(impact, mass)?;
    Ok(4.0 * G * mass / (C2 * impact) * ARCSEC_PER_RAD)
}

/// Radial tidal acceleration 2GM/r³·s between geodesics `separation` apart.
pub fn tidal_acceleration(r: f64, mass: f64, separation: f64) -> PhysicsResult {
    require_positive("r", r)?;
    require_non_negative("mass", mass)?;
    require_finite("separation", separation)?;
    Ok(2.0 * G * mass / r.powi(3) * separation)
}

/// Newtonian potential Φ = −GM/r.
pub fn potential(r: f64, mass: f64) -> PhysicsResult {
    require_positive("r", r)?;
    require_non_negative("mass", mass)?;
    Ok(-G * mass / r)
}

/// |ΔΦ_AB − ΔΦ_BC|: non-uniformity of the potential step along A → B → C.
pub fn potential_curvature_proxy(r_a: f64, r_b: f64, r_c: f64, mass: f64) -> PhysicsResult {
    let (phi_a, phi_b, phi_c) = (potential(r_a, mass)?, potential(r_b, mass)?, potential(r_c, mass)?);
    Ok(((phi_b - phi_a) - (phi_c - phi_b)).abs())
}

/// Equivalence-principle shift g·h/c² in a uniform field.
pub fn uniform_field_shift(g: f64, height: f64) -> PhysicsResult {
    require_finite("g", g)?;
    require_finite("height", height)?;
    Ok(g * height / C2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::constants::{C, H_GPS, M_EARTH, M_SUN, R_EARTH, R_SUN, V_GPS};

    #[test]
    fn schwarzschild_radius_sun() {
        let r_s = schwarzschild_radius(M_SUN).unwrap();
        assert!((r_s - 2953.3).abs() < 1.0, "r_s(sun) ≈ 2953 m, got {r_s}");
    }

    #[test]
    fn negative_mass_rejected() {
        assert!(schwarzschild_radius(-1.0).is_err());
    }

    #[test]
    fn horizon_is_rejected() {
        let r_s = schwarzschild_radius(M_SUN).unwrap();
        assert!(time_dilation(r_s, M_SUN).is_err());
        assert!(time_dilation(0.5 * r_s, M_SUN).is_err());
        assert!(time_dilation(1.0001 * r_s, M_SUN).is_ok());
    }

    #[test]
    fn neutron_star_dilation_is_sqrt_half() {
        let m = 1.4 * M_SUN;
        let r = 2.0 * schwarzschild_radius(m).unwrap();
        let d = time_dilation(r, m).unwrap();
        assert!((d - 0.5_f64.sqrt()).abs() < 1e-12);
        let z = gravitational_redshift(r, m).unwrap();
        assert!((z - (2.0_f64.sqrt() - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn exact_and_weak_shift_agree_near_earth() {
        let exact = frequency_shift(R_EARTH, R_EARTH + 1e7, M_EARTH).unwrap();
        let weak = frequency_shift_weak(R_EARTH, R_EARTH + 1e7, M_EARTH).unwrap();
        assert!(exact > 0.0, "higher clock runs faster");
        assert!(((exact - weak) / weak).abs() < 1e-8);
    }

    #[test]
    fn shift_is_antisymmetric() {
        let ab = frequency_shift(R_EARTH, 3.0 * R_EARTH, M_EARTH).unwrap();
        let ba = frequency_shift(3.0 * R_EARTH, R_EARTH, M_EARTH).unwrap();
        assert!((ab + ba).abs() < 1e-24);
    }

    #[test]
    fn curvature_shift_matches_weak_field() {
        let n_gr = curvature_shift(R_EARTH, M_EARTH).unwrap();
        let r_s = schwarzschild_radius(M_EARTH).unwrap();
        let weak = r_s / (2.0 * R_EARTH);
        assert!(((n_gr - weak) / weak).abs() < 1e-8);
    }

    #[test]
    fn kinematic_shift_zero_at_rest() {
        assert_eq!(kinematic_shift(0.0).unwrap(), 0.0);
        let n = kinematic_shift(1000.0).unwrap();
        let approx = 0.5 * (1000.0 / C).powi(2);
        assert!(((n - approx) / approx).abs() < 1e-10);
    }

    #[test]
    fn lorentz_factor_domain() {
        assert!(lorentz_factor(C).is_err());
        assert!((lorentz_factor(0.6 * C).unwrap() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn gps_budget_components() {
        let gps = gps_clock_correction(M_EARTH, R_EARTH, R_EARTH + H_GPS, V_GPS).unwrap();
        assert!((gps.gravitational - 45.7).abs() < 0.1, "{}", gps.gravitational);
        assert!((gps.kinematic + 7.2).abs() < 0.1, "{}", gps.kinematic);
        assert!((gps.total - 38.5).abs() < 0.1, "{}", gps.total);
    }

    #[test]
    fn mercury_precession() {
        let p = perihelion_precession(57.91e9, 0.2056, 87.969 * 86_400.0, M_SUN).unwrap();
        assert!((p - 42.98).abs() < 0.05, "got {p}");
        assert!(perihelion_precession(57.91e9, 1.0, 1.0, M_SUN).is_err());
    }

    #[test]
    fn solar_deflection() {
        let theta = light_deflection(R_SUN, M_SUN).unwrap();
        assert!((theta - 1.75).abs() < 0.01, "got {theta}");
    }

    #[test]
    fn gradient_finite_difference_tracks_analytic() {
        let fd = time_dilation_gradient_fd(R_EARTH, M_EARTH, 1000.0).unwrap();
        let an = time_dilation_gradient(R_EARTH, M_EARTH).unwrap();
        assert!(((fd - an) / an).abs() < 1e-3);
        assert!(time_dilation_gradient_fd(R_EARTH, M_EARTH, 0.0).is_err());
    }

    #[test]
    fn breakdown_sums_parts() {
        let b = shift_breakdown(R_EARTH, 0.0, R_EARTH + H_GPS, V_GPS, M_EARTH).unwrap();
        assert!((b.total - (b.kinematic + b.gravitational)).abs() < 1e-30);
        assert!(b.gravitational < 0.0, "ground clock is slower than GPS");
        assert!(b.kinematic > 0.0, "moving clock is slower than ground");
    }

    #[test]
    fn uncertainty_propagation_scales_linearly() {
        let (_, s1) =
            frequency_shift_with_uncertainty(R_EARTH, 2.0 * R_EARTH, M_EARTH, 1.0, 0.0).unwrap();
        let (_, s2) =
            frequency_shift_with_uncertainty(R_EARTH, 2.0 * R_EARTH, M_EARTH, 2.0, 0.0).unwrap();
        assert!(s1 > 0.0);
        assert!((s2 / s1 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn tidal_acceleration_earth_surface() {
        let a = tidal_acceleration(R_EARTH, M_EARTH, 1.0).unwrap();
        assert!((a - 3.08e-6).abs() < 0.01e-6);
    }
}
