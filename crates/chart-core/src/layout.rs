// File: crates/chart-core/src/layout.rs
// Summary: Plot area placement: fixed subplot fractions or a tight fit around decorations.

use crate::error::{ChartError, Result};
use crate::geometry::RectF32;
use crate::legend::{self, LegendPlacement};
use crate::types::SubplotParams;

/// Pixel extents of everything drawn around the plot area. Zero means absent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Decorations {
    pub title_height: f32,
    pub title_pad: f32,
    pub x_label_height: f32,
    /// Height of the y label text, which becomes a width once rotated.
    pub y_label_width: f32,
    pub label_pad: f32,
    pub x_tick_height: f32,
    pub y_tick_width: f32,
    /// Gap between spine and tick labels, tick marks included.
    pub tick_pad: f32,
    /// How far the last x tick label reaches past the right spine.
    pub x_tick_overhang: f32,
}

/// Legend box size and where it goes; `pad` is the inside-corner inset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendFit {
    pub width: f32,
    pub height: f32,
    pub placement: LegendPlacement,
    pub pad: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
    pub canvas: RectF32,
    pub plot: RectF32,
    pub legend: Option<RectF32>,
}

fn with_pad(extent: f32, pad: f32) -> f32 {
    if extent > 0.0 { extent + pad } else { 0.0 }
}

/// Plot area from fixed figure fractions; decorations may fall off the canvas.
pub fn subplot(width: f32, height: f32, params: &SubplotParams, legend: Option<LegendFit>) -> PlotLayout {
    let plot = RectF32::from_ltrb(
        params.left * width,
        (1.0 - params.top) * height,
        params.right * width,
        (1.0 - params.bottom) * height,
    );
    PlotLayout {
        canvas: RectF32::from_ltwh(0.0, 0.0, width, height),
        plot,
        legend: legend.map(|l| legend::place(&plot, l.width, l.height, l.placement, l.pad)),
    }
}

/// Shrink the plot area until every decoration fits inside the canvas with
/// `pad` pixels to spare on each side.
pub fn tight(width: f32, height: f32, pad: f32, deco: &Decorations, legend: Option<LegendFit>) -> Result<PlotLayout> {
    let left = pad
        + with_pad(deco.y_label_width, deco.label_pad)
        + with_pad(deco.y_tick_width, deco.tick_pad);
    let top = pad + with_pad(deco.title_height, deco.title_pad);
    let bottom = height
        - pad
        - with_pad(deco.x_label_height, deco.label_pad)
        - with_pad(deco.x_tick_height, deco.tick_pad);
    let limit = width - pad;

    let right = match legend.and_then(|l| l.placement.outside_gap().map(|gap| (l, gap))) {
        // plot_w * (1 + gap) + pad + legend width must end at the limit
        Some((l, gap)) => {
            let plot_w = (limit - left - l.pad - l.width) / (1.0 + gap);
            (left + plot_w).min(limit - deco.x_tick_overhang)
        }
        None => limit - deco.x_tick_overhang,
    };

    let plot = RectF32::from_ltrb(left, top, right, bottom);
    if plot.width() < 1.0 || plot.height() < 1.0 {
        return Err(ChartError::Layout { width: plot.width(), height: plot.height() });
    }
    log::debug!(
        "tight layout: plot {:.1},{:.1} .. {:.1},{:.1} in {}x{}",
        plot.left, plot.top, plot.right, plot.bottom, width, height
    );
    Ok(PlotLayout {
        canvas: RectF32::from_ltwh(0.0, 0.0, width, height),
        plot,
        legend: legend.map(|l| legend::place(&plot, l.width, l.height, l.placement, l.pad)),
    })
}
