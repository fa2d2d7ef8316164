// core/sweep.rs
// Floating-point ranges advanced by repeated addition.

/// Yields `start, start + step, start + step + step, ...` while the running
/// value stays below (or, for inclusive sweeps, at most) `end`.
///
/// The running value accumulates rounding error exactly as a
/// `x += step` loop does, so `Sweep::inclusive(0.0, 1.0, 0.01)` stops
/// one short of 1.0.
#[derive(Clone, Copy, Debug)]
pub struct Sweep {
    next: f64,
    end: f64,
    step: f64,
    inclusive: bool,
}

impl Sweep {
    /// `start <= x < end`
    pub fn exclusive(start: f64, end: f64, step: f64) -> Self {
        debug_assert!(step > 0.0, "sweep step must be positive");
        Self {
            next: start,
            end,
            step,
            inclusive: false,
        }
    }

    /// `start <= x <= end`
    pub fn inclusive(start: f64, end: f64, step: f64) -> Self {
        debug_assert!(step > 0.0, "sweep step must be positive");
        Self {
            next: start,
            end,
            step,
            inclusive: true,
        }
    }

    fn in_range(&self) -> bool {
        if self.inclusive {
            self.next <= self.end
        } else {
            self.next < self.end
        }
    }
}

impl Iterator for Sweep {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if !self.in_range() {
            return None;
        }
        let x = self.next;
        self.next += self.step;
        Some(x)
    }
}
