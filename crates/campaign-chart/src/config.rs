// File: crates/campaign-chart/src/config.rs
// Summary: Fixed run parameters for the campaign chart.

use std::path::PathBuf;

use chart_core::skia_safe::Color;

/// Everything the run needs, with the values the chart is published with.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub n_samples: usize,
    pub seed: u64,
    pub output: PathBuf,
    /// Figure size in inches.
    pub figsize: (f32, f32),
    pub dpi: f32,
    pub theme: String,
    pub context: String,
    pub palette: String,
    pub title: String,
    pub title_size: f32,
    pub x_label: String,
    pub y_label: String,
    pub label_size: f32,
    pub legend_title: String,
    /// Marker area in pt².
    pub marker_size: f32,
    pub marker_edge: Color,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            n_samples: 100,
            seed: 42,
            output: PathBuf::from("chart.png"),
            figsize: (8.0, 8.0),
            dpi: 64.0,
            theme: "whitegrid".to_string(),
            context: "talk".to_string(),
            palette: "Set2".to_string(),
            title: "Marketing Campaign Effectiveness".to_string(),
            title_size: 16.0,
            x_label: "Ad Spend ($k)".to_string(),
            y_label: "Conversion Rate (%)".to_string(),
            label_size: 14.0,
            legend_title: "Channel".to_string(),
            marker_size: 100.0,
            marker_edge: Color::BLACK,
        }
    }
}

impl ChartConfig {
    /// Pixel size of the written image.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.figsize.0 * self.dpi).round() as u32,
            (self.figsize.1 * self.dpi).round() as u32,
        )
    }
}
