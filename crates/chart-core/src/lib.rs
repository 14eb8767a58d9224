// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for scatter chart construction, styling and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod context;
pub mod palette;
pub mod style;
pub mod text;
pub mod legend;
pub mod layout;
pub mod error;

pub use chart::{Chart, Figure, RenderOptions, Title};
pub use series::{Marker, Series};
pub use axis::{Axis, DEFAULT_MARGIN};
pub use theme::Theme;
pub use context::Context;
pub use palette::Palette;
pub use style::StyleSheet;
pub use text::TextShaper;
pub use legend::{Legend, LegendEntry, LegendPlacement};
pub use error::{ChartError, Result};

/// Re-exported so callers can name colors without a direct dependency.
pub use skia_safe;
