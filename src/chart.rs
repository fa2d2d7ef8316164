//! Chart descriptions for the two output images.
//!
//! Everything here is plain data: titles, axes, colored point series. The
//! drawing itself lives behind [`crate::render::ChartRenderer`].

use crate::core::skill_check::{Circle, chance_to_gain, expected_casts_for_gain, is_degenerate};
use crate::core::sweep::Sweep;

pub const GAINS_VS_SUCCESS_FILE: &str = "gains-vs-success.png";
pub const MAGERY_CIRCLES_FILE: &str = "magery-circles-gains.png";

const SUCCESS_STEP: f64 = 0.01;
const SKILL_STEP: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GREY: Rgb = Rgb(128, 128, 128);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const BLUE: Rgb = Rgb(0, 116, 217);
    pub const SEA_GREEN: Rgb = Rgb(0, 217, 101);
    pub const CRIMSON: Rgb = Rgb(217, 0, 116);
    pub const ORANGE: Rgb = Rgb(217, 101, 0);
    pub const CHARCOAL: Rgb = Rgb(51, 51, 51);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            foreground: Rgb::GREY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub desc: String,
    /// Fixed `(min, max)`; `None` fits the finite data.
    pub bounds: Option<(f64, f64)>,
    pub labels: usize,
    /// Decimal places on tick labels.
    pub precision: usize,
}

impl Axis {
    fn fitted(desc: &str) -> Self {
        Self {
            desc: desc.to_string(),
            bounds: None,
            labels: 10,
            precision: 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Legend entry; unnamed series stay out of the legend.
    pub name: Option<String>,
    pub color: Rgb,
    pub points: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub size: (u32, u32),
    pub theme: Theme,
    pub legend: bool,
    pub series: Vec<Series>,
}

/// Gain chance against success chance for a fixed skill, from 0.0 towards
/// 1.0 in steps of 0.01. Stops before the first degenerate gain chance.
pub fn gain_vs_success_points(current_skill: f64, gain_factor: f64) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(101);
    for chance in Sweep::inclusive(0.0, 1.0, SUCCESS_STEP) {
        let gain = chance_to_gain(chance, current_skill, gain_factor);
        if is_degenerate(gain) {
            break;
        }
        points.push((chance, gain));
    }
    points
}

pub fn gain_vs_success_chart(current_skill: f64, gain_factor: f64, size: (u32, u32)) -> ChartSpec {
    ChartSpec {
        title: "% chance to gain skill, based on % chance to succeed at skill".to_string(),
        x_axis: Axis::fitted("% chance to succeed"),
        y_axis: Axis::fitted("% chance to gain"),
        size,
        theme: Theme::default(),
        legend: false,
        series: vec![Series {
            name: None,
            color: Rgb::BLUE,
            points: gain_vs_success_points(current_skill, gain_factor),
        }],
    }
}

/// Skill range plotted for one circle, roughly its useful training window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleDomain {
    pub circle: Circle,
    pub start: f64,
    pub end: f64,
    pub color: Rgb,
}

pub const CIRCLE_DOMAINS: [CircleDomain; 8] = [
    CircleDomain {
        circle: Circle::new(0),
        start: 0.0,
        end: 20.0,
        color: Rgb::BLUE,
    },
    CircleDomain {
        circle: Circle::new(1),
        start: 0.0,
        end: 34.3,
        color: Rgb::GREEN,
    },
    CircleDomain {
        circle: Circle::new(2),
        start: 8.6,
        end: 48.6,
        color: Rgb::SEA_GREEN,
    },
    CircleDomain {
        circle: Circle::new(3),
        start: 22.9,
        end: 62.9,
        color: Rgb::CRIMSON,
    },
    CircleDomain {
        circle: Circle::new(4),
        start: 37.1,
        end: 77.1,
        color: Rgb::ORANGE,
    },
    CircleDomain {
        circle: Circle::new(5),
        start: 51.4,
        end: 91.4,
        color: Rgb::WHITE,
    },
    CircleDomain {
        circle: Circle::new(6),
        start: 65.7,
        end: 99.9,
        color: Rgb::CHARCOAL,
    },
    CircleDomain {
        circle: Circle::new(7),
        start: 80.0,
        end: 99.9,
        color: Rgb::RED,
    },
];

/// Expected casts per gain across the domain, sampled every 0.1 skill.
/// Nothing is filtered; a zero gain chance shows up as an infinite point.
pub fn circle_series(domain: &CircleDomain, gain_factor: f64) -> Series {
    let points = Sweep::exclusive(domain.start, domain.end, SKILL_STEP)
        .map(|skill| (skill, expected_casts_for_gain(skill, domain.circle, gain_factor)))
        .collect();
    Series {
        name: Some(domain.circle.to_string()),
        color: domain.color,
        points,
    }
}

pub fn magery_circles_chart(gain_factor: f64, size: (u32, u32)) -> ChartSpec {
    ChartSpec {
        title: "Expected casts to gain 0.1 magery skill, by spell circle".to_string(),
        x_axis: Axis {
            desc: "Magery skill".to_string(),
            bounds: Some((0.0, 100.0)),
            labels: 11,
            precision: 1,
        },
        y_axis: Axis {
            desc: "Expected casts".to_string(),
            bounds: None,
            labels: 36,
            precision: 1,
        },
        size,
        theme: Theme::default(),
        legend: true,
        series: CIRCLE_DOMAINS
            .iter()
            .map(|domain| circle_series(domain, gain_factor))
            .collect(),
    }
}
