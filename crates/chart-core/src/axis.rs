// File: crates/chart-core/src/axis.rs
// Summary: Axis model with label, range and tick generation.

use crate::grid::{nice_ticks, Ticks};

/// Fraction of the data span added on each side when autoscaling.
pub const DEFAULT_MARGIN: f64 = 0.05;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Label font size in points; `None` uses the context's label size.
    pub label_size: Option<f32>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, label_size: None }
    }

    pub fn default_x() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn with_label_size(mut self, size: f32) -> Self {
        self.label_size = Some(size);
        self
    }

    /// Fit the range to `[lo, hi]` widened by `margin` of the span on each side.
    /// Non-finite bounds reset to `[0, 1]`; a zero span is widened by 1.
    pub fn fit(&mut self, lo: f64, hi: f64, margin: f64) {
        if !lo.is_finite() || !hi.is_finite() || hi < lo {
            self.min = 0.0;
            self.max = 1.0;
            return;
        }
        let (lo, hi) = if (hi - lo).abs() < 1e-9 { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
        let m = (hi - lo) * margin;
        self.min = lo - m;
        self.max = hi + m;
    }

    pub fn ticks(&self, target: usize) -> Ticks {
        nice_ticks(self.min, self.max, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_adds_margin() {
        let mut a = Axis::default_x();
        a.fit(1.0, 21.0, DEFAULT_MARGIN);
        assert!((a.min - 0.0).abs() < 1e-12);
        assert!((a.max - 22.0).abs() < 1e-12);
    }

    #[test]
    fn fit_handles_empty_and_flat_data() {
        let mut a = Axis::default_y();
        a.fit(f64::INFINITY, f64::NEG_INFINITY, DEFAULT_MARGIN);
        assert_eq!((a.min, a.max), (0.0, 1.0));
        a.fit(3.0, 3.0, 0.0);
        assert_eq!((a.min, a.max), (2.5, 3.5));
    }
}
