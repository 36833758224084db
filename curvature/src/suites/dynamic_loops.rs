// SPDX-License-Identifier: AGPL-3.0-only

//! I_ABC(t) sampled along orbits. Each sample becomes one case.

use super::{check, CaseList};
use crate::case::{Category, FormulaCase, Tolerance};
use crate::error::ValidationError;
use crate::formula::{FormulaKind, Inputs};
use crate::physics::constants::{M_EARTH, SECONDS_PER_DAY};
use crate::physics::trajectory::{sample_times, GALILEO_PERIOD};
use crate::physics::Trajectory;
use crate::tolerances;

const CATEGORY: Category = Category::DynamicLoops;
const SAMPLES: usize = 8;

struct Scenario {
    label: &'static str,
    clocks: [Trajectory; 3],
    duration: f64,
}

const SCENARIOS: [Scenario; 3] = [
    Scenario {
        label: "gpa",
        clocks: [Trajectory::Ground, Trajectory::GravityProbeA, Trajectory::Gps],
        // ballistic flight lands after ~1 426 s
        duration: 1_400.0,
    },
    Scenario {
        label: "galileo",
        clocks: [Trajectory::Ground, Trajectory::GalileoEccentric, Trajectory::Gps],
        duration: GALILEO_PERIOD,
    },
    Scenario {
        label: "iss-gps",
        clocks: [Trajectory::Iss, Trajectory::Gps, Trajectory::Ground],
        duration: SECONDS_PER_DAY,
    },
];

fn sample_case(scenario: &Scenario, t: f64) -> Result<FormulaCase, ValidationError> {
    let [a, b, c] = scenario.clocks.map(|clock| clock.point_at(t));
    let inputs = Inputs::from([
        ("r_a", a.r),
        ("v_a", a.v),
        ("r_b", b.r),
        ("v_b", b.v),
        ("r_c", c.r),
        ("v_c", c.v),
        ("mass", M_EARTH),
    ]);
    Ok(check(
        &format!("dl-{}-t{:06.0}", scenario.label, t),
        CATEGORY,
        FormulaKind::LoopClosureSeparated,
        inputs,
        0.0,
        Tolerance::Absolute(tolerances::LOG_IDENTITY_ABS),
    )?
    .with_description(format!(
        "{} / {} / {}",
        scenario.clocks[0].name(),
        scenario.clocks[1].name(),
        scenario.clocks[2].name()
    )))
}

pub(super) fn cases() -> CaseList {
    let mut cases = Vec::with_capacity(SCENARIOS.len() * SAMPLES);
    for scenario in &SCENARIOS {
        let times = sample_times(0.0, scenario.duration, SAMPLES).map_err(|e| {
            ValidationError::InvalidCase {
                case: format!("dl-{}", scenario.label),
                reason: e.0,
            }
        })?;
        for t in times {
            cases.push(sample_case(scenario, t)?);
        }
    }
    Ok(cases)
}
