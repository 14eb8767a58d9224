// File: crates/chart-core/src/theme.rs
// Summary: Background/grid themes (darkgrid, whitegrid, dark, white, ticks).

use skia_safe as skia;

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub figure_background: skia::Color,
    pub axes_background: skia::Color,
    /// Grid line color; `None` draws no grid.
    pub grid: Option<skia::Color>,
    pub spine: skia::Color,
    pub text: skia::Color,
    /// Draw outward tick marks on the bottom and left spines.
    pub ticks: bool,
}

// Grays named by lightness (0.8 -> 204).
fn gray(level: u8) -> skia::Color { skia::Color::from_rgb(level, level, level) }
fn white() -> skia::Color { gray(255) }
fn lavender() -> skia::Color { skia::Color::from_rgb(0xea, 0xea, 0xf2) }

impl Theme {
    pub fn darkgrid() -> Self {
        Self {
            name: "darkgrid",
            figure_background: white(),
            axes_background: lavender(),
            grid: Some(white()),
            spine: white(),
            text: gray(38),
            ticks: false,
        }
    }

    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            figure_background: white(),
            axes_background: white(),
            grid: Some(gray(204)),
            spine: gray(204),
            text: gray(38),
            ticks: false,
        }
    }

    pub fn dark() -> Self {
        Self { name: "dark", grid: None, ..Self::darkgrid() }
    }

    pub fn white() -> Self {
        Self {
            name: "white",
            figure_background: white(),
            axes_background: white(),
            grid: None,
            spine: gray(38),
            text: gray(38),
            ticks: false,
        }
    }

    pub fn ticks() -> Self {
        Self { name: "ticks", ticks: true, ..Self::white() }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::darkgrid() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::darkgrid(),
        Theme::whitegrid(),
        Theme::dark(),
        Theme::white(),
        Theme::ticks(),
    ]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Result<Theme> {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ChartError::unknown_style("theme", name))
}
