// File: crates/chart-core/src/series.rs
// Summary: Scatter series model with optional hue grouping and marker styling.
// Notes:
// - Points keep their input order; drawing follows it, not the hue grouping.
// - Hue levels are ordered by first appearance in the data.

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Marker appearance. Sizes are in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Marker area in pt²; the circle diameter is `sqrt(size)`.
    pub size: f32,
    pub edge_color: skia::Color,
    /// Edge stroke width; `None` uses `0.08 * sqrt(size)`.
    pub edge_width: Option<f32>,
}

impl Marker {
    pub fn new(size: f32) -> Self {
        Self { size: size.max(0.0), ..Self::default() }
    }

    pub fn with_edge(mut self, color: skia::Color) -> Self {
        self.edge_color = color;
        self
    }

    pub fn diameter_pt(&self) -> f32 { self.size.max(0.0).sqrt() }

    pub fn edge_width_pt(&self) -> f32 {
        self.edge_width.unwrap_or(0.08 * self.diameter_pt())
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self { size: 36.0, edge_color: skia::Color::WHITE, edge_width: None }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    /// Hue level index per point; empty when the series is ungrouped.
    pub hue: Vec<usize>,
    /// Hue level labels, indexed by the values in `hue`.
    pub levels: Vec<String>,
    pub marker: Marker,
}

impl Series {
    /// Ungrouped scatter; every point uses the first palette color.
    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, hue: Vec::new(), levels: Vec::new(), marker: Marker::default() }
    }

    /// Scatter colored by `labels`, one label per point.
    pub fn with_hue<S: AsRef<str>>(data: Vec<(f64, f64)>, labels: &[S]) -> Result<Self> {
        if data.len() != labels.len() {
            return Err(ChartError::LengthMismatch { points: data.len(), labels: labels.len() });
        }
        let mut levels: Vec<String> = Vec::new();
        let hue = labels
            .iter()
            .map(|l| {
                let l = l.as_ref();
                match levels.iter().position(|seen| seen == l) {
                    Some(i) => i,
                    None => {
                        levels.push(l.to_string());
                        levels.len() - 1
                    }
                }
            })
            .collect();
        Ok(Self { data_xy: data, hue, levels, marker: Marker::default() })
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }
    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
    pub fn is_grouped(&self) -> bool { !self.levels.is_empty() }

    /// Hue level of point `i` (0 for ungrouped series).
    pub fn level_of(&self, i: usize) -> usize {
        self.hue.get(i).copied().unwrap_or(0)
    }

    /// Data extent as `(x_min, x_max, y_min, y_max)`, skipping non-finite points.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(xl, xh, yl, yh), &(x, y)| {
            (xl.min(x), xh.max(x), yl.min(y), yh.max(y))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_follow_first_appearance() {
        let s = Series::with_hue(
            vec![(0.0, 0.0); 5],
            &["Email", "Search", "Email", "Display", "Search"],
        )
        .unwrap();
        assert_eq!(s.levels, vec!["Email", "Search", "Display"]);
        assert_eq!(s.hue, vec![0, 1, 0, 2, 1]);
        assert_eq!(s.level_of(3), 2);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = Series::with_hue(vec![(0.0, 0.0); 2], &["a"]).unwrap_err();
        assert!(matches!(err, ChartError::LengthMismatch { points: 2, labels: 1 }));
    }

    #[test]
    fn default_edge_width_tracks_size() {
        let m = Marker::new(100.0);
        assert_eq!(m.diameter_pt(), 10.0);
        assert!((m.edge_width_pt() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn bounds_skip_nan() {
        let s = Series::with_data(vec![(1.0, 5.0), (f64::NAN, 0.0), (3.0, -1.0)]);
        assert_eq!(s.bounds(), Some((1.0, 3.0, -1.0, 5.0)));
        assert_eq!(Series::with_data(Vec::new()).bounds(), None);
    }
}
