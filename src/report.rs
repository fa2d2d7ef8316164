//! Console report: cast windows per circle and cost comparisons between
//! two circles over a skill range.

use std::io::{self, Write};

use tracing::debug;

use crate::core::skill_check::{
    Circle, expected_casts_for_gain, max_skill_to_cast, min_skill_to_cast,
};
use crate::core::sweep::Sweep;

/// Skill gained per successful gain check.
pub const SKILL_STEP: f64 = 0.1;

/// One side of a scenario: which circle is cast and what reagents cost per cast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contender {
    pub circle: Circle,
    pub cost_gp: f64,
}

/// Compares the cost of training a skill range on two circles.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub header: &'static str,
    /// First skill sampled.
    pub start: f64,
    /// Exclusive upper bound of the sampled skills.
    pub end: f64,
    pub contenders: [Contender; 2],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContenderTotal {
    pub circle: Circle,
    pub casts: f64,
    pub cost: f64,
}

impl Scenario {
    /// Skill levels visited while training, one per gain.
    pub fn skill_points(&self) -> Sweep {
        Sweep::exclusive(self.start, self.end, SKILL_STEP)
    }

    /// Sum of expected casts over every skill point of the range.
    pub fn total_casts(&self, circle: Circle, gain_factor: f64) -> f64 {
        let mut casts = 0.0;
        for skill in self.skill_points() {
            casts += expected_casts_for_gain(skill, circle, gain_factor);
        }
        casts
    }

    pub fn evaluate(&self, gain_factor: f64) -> [ContenderTotal; 2] {
        self.contenders.map(|contender| {
            let casts = self.total_casts(contender.circle, gain_factor);
            ContenderTotal {
                circle: contender.circle,
                casts,
                cost: casts * contender.cost_gp,
            }
        })
    }
}

/// Reagent cost per cast, in gold pieces.
const ENERGY_BOLT_GP: f64 = 7.0;
const FLAMESTRIKE_GP: f64 = 6.0;
const RESURRECTION_GP: f64 = 10.0;

/// The fixed comparison set: energy bolt vs flamestrike around 66-70 skill,
/// then flamestrike vs resurrection over three slices of 80-100.
pub fn default_scenarios() -> Vec<Scenario> {
    let eb = Contender {
        circle: Circle::new(5),
        cost_gp: ENERGY_BOLT_GP,
    };
    let fs = Contender {
        circle: Circle::new(6),
        cost_gp: FLAMESTRIKE_GP,
    };
    let res = Contender {
        circle: Circle::new(7),
        cost_gp: RESURRECTION_GP,
    };

    vec![
        Scenario {
            header: "SIMULATION: from 65.8 to 70.0 skill, casting EB(7gp) vs FS(6gp)",
            start: 65.8,
            end: 69.9,
            contenders: [eb, fs],
        },
        Scenario {
            header: "SIMULATION: from 80.0 to 100.0 skill, casting FS vs Resurrect(10gp)",
            start: 80.0,
            end: 99.9,
            contenders: [fs, res],
        },
        Scenario {
            header: "SIMULATION: from 80.0 to 81.0 skill, casting FS vs Resurrect(10gp)",
            start: 80.0,
            end: 80.9,
            contenders: [fs, res],
        },
        Scenario {
            header: "SIMULATION: from 90.0 to 100.0 skill, casting FS vs Resurrect(10gp)",
            start: 90.0,
            end: 99.9,
            contenders: [fs, res],
        },
    ]
}

/// Prints the cast window of every circle, numbered from 1, then a blank line.
pub fn write_circle_bounds<W: Write>(out: &mut W) -> io::Result<()> {
    for circle in Circle::ALL {
        writeln!(
            out,
            "Minimum/maximum skill for circle {} spells: {:.1} / {:.1}",
            u32::from(circle.index()) + 1,
            min_skill_to_cast(circle),
            max_skill_to_cast(circle)
        )?;
    }
    writeln!(out)
}

pub fn write_scenario<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    gain_factor: f64,
) -> io::Result<()> {
    writeln!(out, "{}", scenario.header)?;
    for total in scenario.evaluate(gain_factor) {
        debug!(
            circle = total.circle.index(),
            casts = total.casts,
            cost = total.cost,
            "scenario total"
        );
        writeln!(
            out,
            "Total {} circle casts: {:.6}, total cost: {:.0}",
            total.circle.ordinal(),
            total.casts,
            total.cost
        )?;
    }
    writeln!(out)
}

pub fn write_simulations<W: Write>(
    out: &mut W,
    scenarios: &[Scenario],
    gain_factor: f64,
) -> io::Result<()> {
    for scenario in scenarios {
        write_scenario(out, scenario, gain_factor)?;
    }
    Ok(())
}
