// File: crates/chart-core/src/error.rs
// Summary: Error type shared by styling, layout and rendering.

use thiserror::Error;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A theme, context or palette name that has no preset.
    #[error("unknown {kind} '{name}'")]
    UnknownStyle { kind: &'static str, name: String },

    #[error("column length mismatch: {points} points but {labels} hue labels")]
    LengthMismatch { points: usize, labels: usize },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("no room left for the plot area ({width:.1}x{height:.1} px)")]
    Layout { width: f32, height: f32 },

    #[error("png encoding failed: {0}")]
    Encode(String),

    #[error("failed to write {}", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ChartError {
    pub(crate) fn unknown_style(kind: &'static str, name: &str) -> Self {
        Self::UnknownStyle { kind, name: name.to_string() }
    }
}
