// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure size, resolution, subplot margins).

/// Default figure width in inches.
pub const FIG_WIDTH_IN: f32 = 6.4;
/// Default figure height in inches.
pub const FIG_HEIGHT_IN: f32 = 4.8;
/// Default raster resolution in dots per inch.
pub const DPI: f32 = 100.0;
/// Typographic points per inch; font sizes and line widths are given in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert a length in points to pixels at `dpi`.
#[inline]
pub fn pt_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / POINTS_PER_INCH
}

/// Pixel size of a figure of `inches` at `dpi`, rounded to whole pixels.
#[inline]
pub fn figure_px(inches: f32, dpi: f32) -> i32 {
    (inches * dpi).round().max(1.0) as i32
}

/// Plot area margins as fractions of the figure, used when tight layout is off.
/// Contract: `left < right` and `bottom < top`, all within `0.0..=1.0`.
/// `top`/`bottom` are measured from the figure bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotParams {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl SubplotParams {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self::new(0.125, 0.9, 0.88, 0.11)
    }
}
