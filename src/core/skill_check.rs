// core/skill_check.rs
// Skill-check arithmetic: cast windows per circle, gain chance, expected casts.

use std::fmt;

/// Gain factor that best matches observed magery gains.
pub const DEFAULT_GAIN_FACTOR: f64 = 2.0 / 3.0;

/// Success chance at which `chance_to_gain` peaks for any skill and factor.
///
/// The success-dependent term expands to `-0.3c² + 0.1c + 0.2`, whose
/// derivative `-0.6c + 0.1` crosses zero at `c = 1/6`.
pub const OPTIMAL_SUCCESS_CHANCE: f64 = 1.0 / 6.0;

/// Skill distance between consecutive circle centers.
const CIRCLE_SPACING: f64 = 100.0 / 7.0;

/// Half-width of the skill window in which a circle can fail or succeed.
const CAST_WINDOW_HALF: f64 = 20.0;

/// A spell circle, stored by its 0-based index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Circle(u8);

impl Circle {
    pub const ALL: [Circle; 8] = [
        Circle(0),
        Circle(1),
        Circle(2),
        Circle(3),
        Circle(4),
        Circle(5),
        Circle(6),
        Circle(7),
    ];

    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Index as the floating-point tier fed into the cast window formulas.
    pub fn tier(self) -> f64 {
        f64::from(self.0)
    }

    /// 1-based English ordinal: circle index 0 is "1st".
    pub fn ordinal(self) -> String {
        let n = u32::from(self.0) + 1;
        let suffix = match (n % 10, n % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        format!("{n}{suffix}")
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} circle", self.ordinal())
    }
}

/// Skill at which casting a spell of `circle` starts to succeed.
pub fn min_skill_to_cast(circle: Circle) -> f64 {
    CIRCLE_SPACING * circle.tier() - CAST_WINDOW_HALF
}

/// Skill at which casting a spell of `circle` always succeeds.
pub fn max_skill_to_cast(circle: Circle) -> f64 {
    CIRCLE_SPACING * circle.tier() + CAST_WINDOW_HALF
}

/// Linear position of `current_skill` inside the circle's cast window.
///
/// Not clamped: skills below the window give negative values and skills
/// above it give values past 1.0.
pub fn success_chance(current_skill: f64, circle: Circle) -> f64 {
    (current_skill - min_skill_to_cast(circle))
        / (max_skill_to_cast(circle) - min_skill_to_cast(circle))
}

/// Contribution of the distance to the 100.0 skill cap, already halved.
pub fn skill_cap_term(current_skill: f64) -> f64 {
    (100.0 - current_skill) / 100.0 / 2.0
}

/// Contribution of the attempt's success chance.
///
/// A success weighs 0.5 and a failure 0.2; blending them by the success
/// chance gives `(1 - c) * (0.5c + 0.2(1 - c))`.
pub fn success_term(success_chance: f64) -> f64 {
    (1.0 - success_chance) * ((0.5 * success_chance) + (0.2 * (1.0 - success_chance)))
}

/// Chance that one attempt raises the skill.
///
/// Not clamped to `[0, 1]`; skills past the cap or success chances far
/// outside the window produce zero or negative values.
pub fn chance_to_gain(success_chance: f64, current_skill: f64, gain_factor: f64) -> f64 {
    let mut gain = skill_cap_term(current_skill);
    gain += success_term(success_chance);
    gain /= 2.0;
    gain * gain_factor
}

/// Whether a gain chance falls outside the formula's meaningful region.
///
/// Sweeps stop at the first degenerate value. Zero is still plotted.
pub fn is_degenerate(gain_chance: f64) -> bool {
    gain_chance < 0.0
}

/// Expected attempts per gain, the reciprocal of `chance_to_gain`.
///
/// No guard on the divisor: a zero gain chance yields infinity and a
/// negative one yields negative attempts.
pub fn expected_casts_for_gain(current_skill: f64, circle: Circle, gain_factor: f64) -> f64 {
    let chance = success_chance(current_skill, circle);
    1.0 / chance_to_gain(chance, current_skill, gain_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() <= tol, "{a} vs {b} (tol {tol})");
    }

    #[test]
    fn cast_window_is_forty_wide() {
        for circle in Circle::ALL {
            let width = max_skill_to_cast(circle) - min_skill_to_cast(circle);
            assert_close(width, 40.0, 1e-9);
        }
    }

    #[test]
    fn cast_window_matches_closed_form() {
        for circle in Circle::ALL {
            let center = (100.0 / 7.0) * circle.tier();
            assert_close(min_skill_to_cast(circle), center - 20.0, 1e-9);
            assert_close(max_skill_to_cast(circle), center + 20.0, 1e-9);
        }
        assert_eq!(min_skill_to_cast(Circle::new(0)), -20.0);
        assert_close(max_skill_to_cast(Circle::new(7)), 120.0, 1e-9);
    }

    #[test]
    fn chance_to_gain_closed_form() {
        let expected = ((100.0 - 100.0) / 100.0 / 2.0 + (1.0 - 0.5) * (0.5 * 0.5 + 0.2 * 0.5)) / 2.0;
        let gain = chance_to_gain(0.5, 100.0, 1.0);
        assert_close(gain, expected, 1e-12);
        assert_close(gain, 0.0875, 1e-12);
    }

    #[test]
    fn gain_factor_scales_linearly() {
        let base = chance_to_gain(0.3, 55.0, 1.0);
        assert_close(chance_to_gain(0.3, 55.0, 0.5), base * 0.5, 1e-12);
        assert_close(chance_to_gain(0.3, 55.0, DEFAULT_GAIN_FACTOR), base * 2.0 / 3.0, 1e-12);
    }

    #[test]
    fn success_term_peaks_at_one_sixth() {
        let mut best_c = 0.0;
        let mut best = f64::NEG_INFINITY;
        for i in 0..=100_000 {
            let c = i as f64 / 100_000.0;
            let gain = chance_to_gain(c, 72.5, DEFAULT_GAIN_FACTOR);
            if gain > best {
                best = gain;
                best_c = c;
            }
        }
        assert!((best_c - OPTIMAL_SUCCESS_CHANCE).abs() < 1e-3, "argmax {best_c}");
    }

    #[test]
    fn no_neighbour_beats_optimal_success_chance() {
        for skill in [0.0, 50.0, 100.0] {
            let peak = chance_to_gain(OPTIMAL_SUCCESS_CHANCE, skill, 1.0);
            for i in -500..=500 {
                let c = OPTIMAL_SUCCESS_CHANCE + i as f64 * 1e-4;
                assert!(chance_to_gain(c, skill, 1.0) <= peak + 1e-15);
            }
        }
    }

    #[test]
    fn expected_casts_is_reciprocal_of_gain() {
        for circle in Circle::ALL {
            for skill in [10.0, 45.5, 80.0, 99.9] {
                let chance = (skill - min_skill_to_cast(circle))
                    / (max_skill_to_cast(circle) - min_skill_to_cast(circle));
                let expected = 1.0 / chance_to_gain(chance, skill, DEFAULT_GAIN_FACTOR);
                assert_eq!(expected_casts_for_gain(skill, circle, DEFAULT_GAIN_FACTOR), expected);
            }
        }
    }

    #[test]
    fn expected_casts_regression_at_eighty() {
        let seventh = expected_casts_for_gain(80.0, Circle::new(6), DEFAULT_GAIN_FACTOR);
        let eighth = expected_casts_for_gain(80.0, Circle::new(7), DEFAULT_GAIN_FACTOR);
        assert_close(seventh, 10.085763, 5e-7);
        assert_close(eighth, 10.0, 5e-7);
    }

    #[test]
    fn success_term_alone_gives_older_regression_values() {
        // Older tables left out the skill-cap term and the final halving.
        let seventh = 1.0 / success_term(success_chance(80.0, Circle::new(6)));
        let eighth = 1.0 / success_term(success_chance(80.0, Circle::new(7)));
        assert_close(seventh, 5.064599, 5e-7);
        assert_close(eighth, 5.0, 5e-7);
    }

    #[test]
    fn zero_gain_gives_infinite_casts() {
        // Past the cap by 40 points the two terms cancel exactly.
        let gain = chance_to_gain(0.0, 140.0, 1.0);
        assert_eq!(gain, 0.0);
        assert!(!is_degenerate(gain));
        assert_eq!(1.0 / gain, f64::INFINITY);
    }

    #[test]
    fn negative_gain_gives_negative_casts() {
        let casts = expected_casts_for_gain(150.0, Circle::new(0), 1.0);
        assert!(casts < 0.0, "casts {casts}");
        assert!(is_degenerate(1.0 / casts));
    }

    #[test]
    fn ordinals() {
        let names: Vec<String> = Circle::ALL.iter().map(|c| c.ordinal()).collect();
        assert_eq!(names, ["1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th"]);
        assert_eq!(Circle::new(10).ordinal(), "11th");
        assert_eq!(Circle::new(20).ordinal(), "21st");
        assert_eq!(Circle::new(6).to_string(), "7th circle");
    }
}
