// File: crates/chart-core/src/context.rs
// Summary: Context profiles scaling font sizes, line widths and paddings.

use crate::error::{ChartError, Result};

/// Sizes in points for one display purpose. All values are the notebook
/// baseline multiplied by `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Context {
    pub name: &'static str,
    pub scale: f32,
    pub font_size: f32,
    pub label_size: f32,
    pub title_size: f32,
    pub tick_label_size: f32,
    pub legend_size: f32,
    pub legend_title_size: f32,
    pub axes_line_width: f32,
    pub grid_line_width: f32,
    pub tick_width: f32,
    pub tick_length: f32,
    pub patch_line_width: f32,
    pub tick_pad: f32,
    pub label_pad: f32,
    pub title_pad: f32,
}

impl Context {
    fn scaled(name: &'static str, scale: f32) -> Self {
        Self {
            name,
            scale,
            font_size: 12.0 * scale,
            label_size: 12.0 * scale,
            title_size: 12.0 * scale,
            tick_label_size: 11.0 * scale,
            legend_size: 11.0 * scale,
            legend_title_size: 12.0 * scale,
            axes_line_width: 1.25 * scale,
            grid_line_width: 1.0 * scale,
            tick_width: 1.25 * scale,
            tick_length: 6.0 * scale,
            patch_line_width: 1.0 * scale,
            tick_pad: 3.5 * scale,
            label_pad: 4.0 * scale,
            title_pad: 6.0 * scale,
        }
    }

    pub fn paper() -> Self { Self::scaled("paper", 0.8) }
    pub fn notebook() -> Self { Self::scaled("notebook", 1.0) }
    pub fn talk() -> Self { Self::scaled("talk", 1.5) }
    pub fn poster() -> Self { Self::scaled("poster", 2.0) }
}

impl Default for Context {
    fn default() -> Self { Self::notebook() }
}

pub fn presets() -> Vec<Context> {
    vec![Context::paper(), Context::notebook(), Context::talk(), Context::poster()]
}

pub fn find(name: &str) -> Result<Context> {
    presets()
        .into_iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ChartError::unknown_style("context", name))
}
