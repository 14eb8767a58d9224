// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transform for the X and Y axes.

/// Maps a data interval onto a pixel interval. For a Y axis pass the plot
/// bottom as `px_start` and the top as `px_end` so larger values go up.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub data_min: f64,
    pub data_max: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    pub fn new(data_min: f64, data_max: f64, px_start: f32, px_end: f32) -> Self {
        let mut s = Self { data_min, data_max, px_start, px_end };
        if (s.data_max - s.data_min).abs() < 1e-12 { s.data_max = s.data_min + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.data_max - self.data_min).max(1e-12);
        self.px_start + ((v - self.data_min) / span) as f32 * (self.px_end - self.px_start)
    }
}
