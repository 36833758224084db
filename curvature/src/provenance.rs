// SPDX-License-Identifier: AGPL-3.0-only

//! Provenance of every published measurement the experimental suite checks.
//!
//! Each record carries the measured value, its one-sigma uncertainty, the
//! unit and a citation. Suites build their tolerances from these records
//! so that a reference value never appears as a bare literal.
//!
//! ## Data Sources
//!
//! | Experiment | DOI / Reference | Notes |
//! |------------|-----------------|-------|
//! | Pound & Rebka 1960 | [10.1103/PhysRevLett.4.337](https://doi.org/10.1103/PhysRevLett.4.337) | 22.5 m Harvard tower, ±10% |
//! | Pound & Snider 1965 | [10.1103/PhysRev.140.B788](https://doi.org/10.1103/PhysRev.140.B788) | Same tower, ±1% |
//! | Vessot et al. 1980 (GP-A) | [10.1103/PhysRevLett.45.2081](https://doi.org/10.1103/PhysRevLett.45.2081) | Hydrogen maser to 10 000 km, 7e-5 relative |
//! | Delva et al. 2018 (Galileo 5/6) | [10.1103/PhysRevLett.121.231101](https://doi.org/10.1103/PhysRevLett.121.231101) | Eccentric-orbit redshift modulation |
//! | Ashby 2003 (GPS) | [10.12942/lrr-2003-1](https://doi.org/10.12942/lrr-2003-1) | Living Rev. Relativ. 6, 1; IS-GPS-200 ICD |
//! | Bertotti, Iess, Tortora 2003 | [10.1038/nature01997](https://doi.org/10.1038/nature01997) | Cassini conjunction, γ − 1 = (2.1 ± 2.3)e-5 |
//! | Reasenberg et al. 1979 | [10.1086/183056](https://doi.org/10.1086/183056) | Viking lander ranging, γ to 0.2% |
//! | Chou et al. 2010 | [10.1126/science.1192720](https://doi.org/10.1126/science.1192720) | Al⁺ clocks, 33 cm height difference |
//! | Clemence 1947 | [10.1103/RevModPhys.19.361](https://doi.org/10.1103/RevModPhys.19.361) | Mercury anomalous perihelion advance |
//! | Shapiro et al. 2004 (VLBI) | [10.1103/PhysRevLett.92.121101](https://doi.org/10.1103/PhysRevLett.92.121101) | Solar limb deflection |

use crate::case::Tolerance;

/// A published measurement with its one-sigma uncertainty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentalMeasurement {
    /// Short label used in tables.
    pub label: &'static str,
    /// Measured (or ICD-specified) value.
    pub value: f64,
    /// One standard deviation.
    pub sigma: f64,
    /// Unit of `value` and `sigma`.
    pub unit: &'static str,
    /// Citation.
    pub source: &'static str,
}

impl ExperimentalMeasurement {
    /// |prediction − value| in units of the measurement and prediction
    /// uncertainties added in quadrature.
    #[must_use]
    pub fn sigma_agreement(&self, prediction: f64, prediction_sigma: f64) -> f64 {
        (prediction - self.value).abs() / self.sigma.hypot(prediction_sigma)
    }

    /// Acceptance band of `n_sigma` standard deviations.
    #[must_use]
    pub const fn tolerance(&self, n_sigma: f64) -> Tolerance {
        Tolerance::Sigma {
            n_sigma,
            sigma: self.sigma,
        }
    }

    /// Relative uncertainty σ/|value|.
    #[must_use]
    pub fn relative_sigma(&self) -> f64 {
        self.sigma / self.value.abs()
    }
}

// ═══════════════════════════════════════════════════════════════════
// Gravitational redshift
// ═══════════════════════════════════════════════════════════════════

pub const POUND_REBKA: ExperimentalMeasurement = ExperimentalMeasurement {
    label: "Pound-Rebka (1960)",
    value: 2.56e-15,
    sigma: 0.25e-15,
    unit: "Δν/ν",
    source: "Phys. Rev. Lett. 4, 337 (1960)",
};

pub const POUND_SNIDER: ExperimentalMeasurement = ExperimentalMeasurement {
    label: "Pound-Snider (1965)",
    value: 2.46e-15,
    sigma: 0.01e-15,
    unit: "Δν/ν",
    source: "Phys. Rev. 140, B788 (1965)",
};

/// Peak shift of the GP-A flight; sigma is the 7e-5 relative accuracy.
pub const GRAVITY_PROBE_A: ExperimentalMeasurement = ExperimentalMeasurement {
    label: "Gravity Probe A (1976)",
    value: 4.5e-10,
    sigma: 3.15e-14,
    unit: "Δν/ν",
    source: "Phys. Rev. Lett. 45, 2081 (1980)",
};

/// Peak-to-peak redshift modulation over one Galileo 5/6 orbit.
pub const GALILEO_MODULATION: ExperimentalMeasurement = ExperimentalMeasurement {
    label: "Galileo 5/6 (2018)",
    value: 4.8e-11,
    sigma: 1.2e-15,
    unit: "Δν/ν",
    source: "Phys. Rev. Lett. 121, 231101 (2018)",
};

pub const GPS_DAILY_OFFSET: ExperimentalMeasurement = ExperimentalMeasurement {
    label: "GPS clock offset",
    value: 38.6,
    sigma: 0.1,
    unit: "μs/day",
    source: "Living Rev. Relativ. 6, 1 (2003); IS-GPS-200",
};

pub const OPTICAL_CLOCK_33CM: ExperimentalMeasurement = ExperimentalMeasurement {
    label: "Al⁺ optical clocks, 33 cm (2010)",
    value: 4.1e-17,
    sigma: 1.6e-17,
    unit: "Δν/ν",
    source: "Science 329, 1630 (2010)",
};

// ═══════════════════════════════════════════════════════════════════
// Light propagation and orbits
// ═══════════════════════════════════════════════════════════════════

/// PPN γ from the 2002 Cassini conjunction.
pub const CASSINI_GAMMA: ExperimentalMeasurement = ExperimentalMeasurement {
    label: "Cassini γ (2003)",
    value: 1.000_021,
    sigma: 2.3e-5,
    unit: "",
    source: "Nature 425, 374 (2003)",
};

pub const VIKING_GAMMA: ExperimentalMeasurement = ExperimentalMeasurement {
    label: "Viking γ (1979)",
    value: 1.0,
    sigma: 0.002,
    unit: "",
    source: "Astrophys. J. Lett. 234, L219 (1979)",
};

pub const MERCURY_PERIHELION: ExperimentalMeasurement = ExperimentalMeasurement {
    label: "Mercury perihelion advance",
    value: 42.98,
    sigma: 0.04,
    unit: "arcsec/century",
    source: "Rev. Mod. Phys. 19, 361 (1947)",
};

pub const SOLAR_DEFLECTION: ExperimentalMeasurement = ExperimentalMeasurement {
    label: "Solar limb deflection",
    value: 1.7512,
    sigma: 0.0016,
    unit: "arcsec",
    source: "Phys. Rev. Lett. 92, 121101 (2004)",
};

/// Every record, in table order.
pub const ALL: [ExperimentalMeasurement; 10] = [
    POUND_REBKA,
    POUND_SNIDER,
    GRAVITY_PROBE_A,
    GALILEO_MODULATION,
    GPS_DAILY_OFFSET,
    OPTICAL_CLOCK_33CM,
    CASSINI_GAMMA,
    VIKING_GAMMA,
    MERCURY_PERIHELION,
    SOLAR_DEFLECTION,
];
