// SPDX-License-Identifier: AGPL-3.0-only

//! Clock trajectories around Earth and time-dependent loop closure.
//!
//! Each [`Trajectory`] maps a time to a radius and speed. Sampling three of
//! them on a common time grid gives δ_AB(t), δ_BC(t), δ_CA(t): the individual
//! comparisons vary with the orbit while I_ABC(t) stays at rounding level.

use super::constants::{
    G, H_GPS, H_ISS, M_EARTH, R_EARTH, T_GPS, T_ISS, V_GPS, V_ISS,
};
use super::relativity::ln_time_dilation;
use super::{require_finite, require_positive, DomainError, PhysicsResult};
use crate::tolerances::PATH_STEPS_MAX;
use serde::Serialize;
use std::f64::consts::TAU;

/// Galileo 5/6 semi-major axis (m).
pub const GALILEO_SEMI_MAJOR: f64 = 26_000e3 + R_EARTH;
/// Galileo 5/6 eccentricity after the 2014 injection anomaly.
pub const GALILEO_ECCENTRICITY: f64 = 0.162;
/// Galileo 5/6 orbital period (s).
pub const GALILEO_PERIOD: f64 = 12.9 * 3600.0;
/// Gravity Probe A launch speed (m/s).
pub const GPA_LAUNCH_SPEED: f64 = 7_000.0;

/// A clock's position and speed at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    /// Time since start (s).
    pub t: f64,
    /// Radius from Earth's centre (m).
    pub r: f64,
    /// Speed (m/s).
    pub v: f64,
    /// Angular position (rad).
    pub theta: f64,
}

/// Built-in clock trajectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trajectory {
    /// Static clock on the surface.
    Ground,
    /// 1976 suborbital flight, ballistic from the surface.
    GravityProbeA,
    /// Galileo 5/6 in its eccentric orbit.
    GalileoEccentric,
    /// ISS circular orbit at 400 km.
    Iss,
    /// GPS circular orbit at 20 200 km.
    Gps,
}

impl Trajectory {
    /// Position at time `t` (s).
    #[must_use]
    pub fn point_at(self, t: f64) -> TrajectoryPoint {
        match self {
            Self::Ground => TrajectoryPoint { t, r: R_EARTH, v: 0.0, theta: 0.0 },
            Self::GravityProbeA => {
                let g = G * M_EARTH / (R_EARTH * R_EARTH);
                let h = (GPA_LAUNCH_SPEED * t - 0.5 * g * t * t).max(0.0);
                TrajectoryPoint {
                    t,
                    r: R_EARTH + h,
                    v: (GPA_LAUNCH_SPEED - g * t).abs(),
                    theta: 0.0,
                }
            }
            Self::GalileoEccentric => kepler_point(
                t,
                GALILEO_SEMI_MAJOR,
                GALILEO_ECCENTRICITY,
                GALILEO_PERIOD,
            ),
            Self::Iss => circular_point(t, R_EARTH + H_ISS, V_ISS, T_ISS),
            Self::Gps => circular_point(t, R_EARTH + H_GPS, V_GPS, T_GPS),
        }
    }

    /// Display name used in tables.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ground => "Ground",
            Self::GravityProbeA => "Gravity Probe A",
            Self::GalileoEccentric => "Galileo 5/6",
            Self::Iss => "ISS",
            Self::Gps => "GPS",
        }
    }
}

fn circular_point(t: f64, r: f64, v: f64, period: f64) -> TrajectoryPoint {
    TrajectoryPoint { t, r, v, theta: TAU * t / period }
}

/// Solve Kepler's equation E − e·sin E = M by Newton iteration.
fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc = mean_anomaly;
    for _ in 0..16 {
        let step = (ecc - e * ecc.sin() - mean_anomaly) / (1.0 - e * ecc.cos());
        ecc -= step;
        if step.abs() < 1e-15 {
            break;
        }
    }
    ecc
}

fn kepler_point(t: f64, a: f64, e: f64, period: f64) -> TrajectoryPoint {
    let ecc = eccentric_anomaly(TAU * t / period, e);
    let theta = 2.0
        * ((1.0 + e).sqrt() * (0.5 * ecc).sin()).atan2((1.0 - e).sqrt() * (0.5 * ecc).cos());
    let r = a * (1.0 - e * ecc.cos());
    // vis-viva
    let v = (G * M_EARTH * (2.0 / r - 1.0 / a)).sqrt();
    TrajectoryPoint { t, r, v, theta }
}

/// Sampled δ(t) series for a three-clock loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynamicLoop {
    /// Sample times (s).
    pub times: Vec<f64>,
    /// δ_AB(t).
    pub delta_ab: Vec<f64>,
    /// δ_BC(t).
    pub delta_bc: Vec<f64>,
    /// δ_CA(t).
    pub delta_ca: Vec<f64>,
    /// I_ABC(t).
    pub residual: Vec<f64>,
}

impl DynamicLoop {
    /// max |I_ABC(t)|.
    #[must_use]
    pub fn max_residual(&self) -> f64 {
        self.residual.iter().fold(0.0, |m, i| m.max(i.abs()))
    }

    /// Peak-to-peak variation of δ_AB(t).
    #[must_use]
    pub fn delta_ab_amplitude(&self) -> f64 {
        let (lo, hi) = self
            .delta_ab
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &d| (lo.min(d), hi.max(d)));
        if self.delta_ab.is_empty() { 0.0 } else { hi - lo }
    }
}

/// `samples` evenly spaced times over [t_start, t_end], both ends included.
pub fn sample_times(t_start: f64, t_end: f64, samples: usize) -> PhysicsResult<Vec<f64>> {
    require_finite("t_start", t_start)?;
    require_finite("t_end", t_end)?;
    if samples < 2 || t_end <= t_start {
        return Err(DomainError(format!(
            "need at least two samples over a non-empty interval, got {samples} over [{t_start}, {t_end}]"
        )));
    }
    let step = (t_end - t_start) / (samples - 1) as f64;
    Ok((0..samples).map(|i| t_start + step * i as f64).collect())
}

/// Sample δ_AB, δ_BC, δ_CA and I_ABC along three trajectories around Earth.
pub fn dynamic_loop(
    clocks: [Trajectory; 3],
    t_start: f64,
    t_end: f64,
    samples: usize,
) -> PhysicsResult<DynamicLoop> {
    let times = sample_times(t_start, t_end, samples)?;
    let mut out = DynamicLoop {
        times: Vec::with_capacity(samples),
        delta_ab: Vec::with_capacity(samples),
        delta_bc: Vec::with_capacity(samples),
        delta_ca: Vec::with_capacity(samples),
        residual: Vec::with_capacity(samples),
    };
    for t in times {
        let [a, b, c] = clocks.map(|clock| clock.point_at(t));
        let ln_a = ln_time_dilation(a.r, M_EARTH)?;
        let ln_b = ln_time_dilation(b.r, M_EARTH)?;
        let ln_c = ln_time_dilation(c.r, M_EARTH)?;
        let (ab, bc, ca) = (ln_a - ln_b, ln_b - ln_c, ln_c - ln_a);
        out.times.push(t);
        out.delta_ab.push(ab);
        out.delta_bc.push(bc);
        out.delta_ca.push(ca);
        out.residual.push(ab + bc + ca);
    }
    Ok(out)
}

/// Sum of δ over `steps` equal radial hops from `r_a` to `r_b`.
///
/// Telescopes to δ_AB for any step count. `steps` must lie in
/// 1..=[`PATH_STEPS_MAX`].
pub fn radial_path_sum(r_a: f64, r_b: f64, mass: f64, steps: usize) -> PhysicsResult {
    require_positive("r_a", r_a)?;
    require_positive("r_b", r_b)?;
    if !(1..=PATH_STEPS_MAX).contains(&steps) {
        return Err(DomainError(format!(
            "steps must lie in 1..={PATH_STEPS_MAX}, got {steps}"
        )));
    }
    let hop = (r_b - r_a) / steps as f64;
    let mut sum = 0.0;
    let mut prev = ln_time_dilation(r_a, mass)?;
    for i in 1..=steps {
        let r = if i == steps { r_b } else { r_a + hop * i as f64 };
        let next = ln_time_dilation(r, mass)?;
        sum += prev - next;
        prev = next;
    }
    Ok(sum)
}

/// |Σ hops − δ_AB| for the radial path.
pub fn radial_path_residual(r_a: f64, r_b: f64, mass: f64, steps: usize) -> PhysicsResult {
    let direct = ln_time_dilation(r_a, mass)? - ln_time_dilation(r_b, mass)?;
    Ok((radial_path_sum(r_a, r_b, mass, steps)? - direct).abs())
}
