// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: physics layer through the public API.
//!
//! Checks that GR, SSZ, frequency and trajectory functions compose: loop
//! closure holds for every combination of radii the other modules produce.

use freqcurve_curvature::physics::constants::{
    H_GPS, H_ISS, M_EARTH, M_SUN, R_EARTH, R_STAR_RATIO, XI_MAX,
};
use freqcurve_curvature::physics::{
    dynamic_loop, frequency, relativity, schwarzschild_radius, segmented, shapiro, trajectory,
    Trajectory,
};

#[test]
fn gr_redshift_agrees_with_weak_field_at_earth() {
    let exact = relativity::frequency_shift(R_EARTH, R_EARTH + H_GPS, M_EARTH).unwrap();
    let weak = relativity::frequency_shift_weak(R_EARTH, R_EARTH + H_GPS, M_EARTH).unwrap();
    assert!(exact > 0.0, "higher clock runs fast");
    assert!(
        ((exact - weak) / weak).abs() < 1e-8,
        "exact={exact:e}, weak={weak:e}"
    );
}

#[test]
fn shift_breakdown_total_matches_separated_loop_legs() {
    let a = (R_EARTH, 0.0);
    let b = (R_EARTH + H_ISS, 7_660.0);
    let c = (R_EARTH + H_GPS, 3_874.0);
    let parts = frequency::loop_closure_separated(a, b, c, M_EARTH).unwrap();
    assert!(parts.total.abs() < 1e-16, "I = {:e}", parts.total);
    assert!(parts.kinematic.abs() < 1e-16);
    assert!(parts.gravitational.abs() < 1e-16);

    let ab = relativity::shift_breakdown(a.0, a.1, b.0, b.1, M_EARTH).unwrap();
    assert!(ab.kinematic > 0.0, "moving clock B is slowed, so A gains on it");
    assert!(ab.gravitational < 0.0, "clock B is higher, so A loses on it");
}

#[test]
fn ssz_and_gr_cross_at_r_star_for_every_mass() {
    for mass in [M_EARTH, M_SUN, 1e9 * M_SUN] {
        let r = R_STAR_RATIO * schwarzschild_radius(mass).unwrap();
        let ratio = segmented::dilation_ratio(r, mass).unwrap();
        assert!(
            (ratio - 1.221_134_671_927_425).abs() < 1e-10,
            "mass {mass:e}: ratio {ratio}"
        );
    }
}

#[test]
fn ssz_is_finite_where_gr_is_rejected() {
    let rs = schwarzschild_radius(M_SUN).unwrap();
    assert!(relativity::time_dilation(0.5 * rs, M_SUN).is_err());
    let d = segmented::time_dilation(0.5 * rs, M_SUN).unwrap();
    assert!(d > 1.0 / (1.0 + XI_MAX) && d < 1.0, "D_SSZ = {d}");
}

#[test]
fn shapiro_inversion_recovers_gamma() {
    let au = freqcurve_curvature::physics::constants::AU;
    let r_sun = freqcurve_curvature::physics::constants::R_SUN;
    for gamma in [0.0, 0.5, 1.0, 1.000_021] {
        let delay = shapiro::shapiro_delay(au, 9.537 * au, 1.6 * r_sun, M_SUN, gamma).unwrap();
        let back = shapiro::ppn_gamma(au, 9.537 * au, 1.6 * r_sun, M_SUN, delay).unwrap();
        assert!((back - gamma).abs() < 1e-12, "γ={gamma}: got {back}");
    }
}

#[test]
fn dynamic_galileo_loop_closes_while_comparisons_vary() {
    let clocks = [Trajectory::Ground, Trajectory::GalileoEccentric, Trajectory::Gps];
    let run = dynamic_loop(clocks, 0.0, trajectory::GALILEO_PERIOD, 64).unwrap();
    assert_eq!(run.times.len(), 64);
    assert!(run.max_residual() < 1e-15, "max |I| = {:e}", run.max_residual());
    // eccentric orbit modulates δ_AB at the 1e-11 level
    let amp = run.delta_ab_amplitude();
    assert!(amp > 1e-11 && amp < 1e-10, "δ_AB amplitude {amp:e}");
}

#[test]
fn radial_path_sum_is_path_independent() {
    let direct = relativity::ln_time_dilation(R_EARTH, M_EARTH).unwrap()
        - relativity::ln_time_dilation(R_EARTH + H_GPS, M_EARTH).unwrap();
    for steps in [1, 7, 250] {
        let sum = trajectory::radial_path_sum(R_EARTH, R_EARTH + H_GPS, M_EARTH, steps).unwrap();
        assert!((sum - direct).abs() < 1e-20, "steps={steps}");
    }
}
