// File: crates/chart-core/src/legend.rs
// Summary: Legend model, measurement and drawing for hue-grouped scatter series.

use skia_safe as skia;

use crate::geometry::RectF32;
use crate::text::{Align, TextShaper};

/// Where the legend box goes relative to the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LegendPlacement {
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
    /// Upper-left corner of the box anchored at `(x, y)` in axes fractions
    /// (0,0 bottom-left, 1,1 top-right). `x > 1` puts it right of the plot.
    Anchored { x: f32, y: f32 },
}

impl LegendPlacement {
    /// Anchored at (1.05, 1.0): just outside the right edge, top-aligned.
    pub const OUTSIDE_RIGHT: Self = Self::Anchored { x: 1.05, y: 1.0 };

    /// Horizontal axes fraction reserved right of the plot, if any.
    pub fn outside_gap(&self) -> Option<f32> {
        match *self {
            Self::Anchored { x, .. } if x >= 1.0 => Some(x - 1.0),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub title: Option<String>,
    pub placement: LegendPlacement,
}

impl Legend {
    pub fn new(placement: LegendPlacement) -> Self {
        Self { title: None, placement }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Default for Legend {
    fn default() -> Self { Self::new(LegendPlacement::UpperRight) }
}

/// One legend row: marker color and label.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
}

/// Pixel sizes that drive the legend box. `em` is the entry font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendMetrics {
    pub em: f32,
    pub title_size: f32,
    pub marker_diameter: f32,
    pub marker_edge: skia::Color,
    pub marker_edge_width: f32,
    pub frame_width: f32,
}

impl LegendMetrics {
    pub fn border_pad(&self) -> f32 { 0.4 * self.em }
    pub fn label_spacing(&self) -> f32 { 0.5 * self.em }
    pub fn handle_length(&self) -> f32 { 2.0 * self.em }
    pub fn handle_text_pad(&self) -> f32 { 0.8 * self.em }
    pub fn border_axes_pad(&self) -> f32 { 0.5 * self.em }
}

/// Measured legend contents, ready to place and draw.
pub struct LegendBox<'a> {
    pub legend: &'a Legend,
    pub entries: Vec<LegendEntry>,
    pub metrics: LegendMetrics,
    title_height: f32,
    row_height: f32,
    pub width: f32,
    pub height: f32,
}

impl<'a> LegendBox<'a> {
    /// Size the box. Without a shaper the text takes no room, leaving only
    /// frame and markers.
    pub fn measure(legend: &'a Legend, entries: Vec<LegendEntry>, metrics: LegendMetrics, shaper: Option<&TextShaper>) -> Self {
        let (title_w, title_height) = match (legend.title.as_deref(), shaper) {
            (Some(t), Some(shaper)) => shaper.measure(t, metrics.title_size, false),
            _ => (0.0, 0.0),
        };
        let mut label_w: f32 = 0.0;
        let mut text_h: f32 = 0.0;
        if let Some(shaper) = shaper {
            for e in &entries {
                let (w, h) = shaper.measure(&e.label, metrics.em, false);
                label_w = label_w.max(w);
                text_h = text_h.max(h);
            }
        }
        let row_height = text_h.max(metrics.marker_diameter);
        let n = entries.len() as f32;

        let row_w = metrics.handle_length() + metrics.handle_text_pad() + label_w;
        let width = 2.0 * metrics.border_pad() + row_w.max(title_w);
        let mut height = 2.0 * metrics.border_pad();
        if title_height > 0.0 {
            height += title_height + metrics.label_spacing();
        }
        if n > 0.0 {
            height += n * row_height + (n - 1.0) * metrics.label_spacing();
        }
        Self { legend, entries, metrics, title_height, row_height, width, height }
    }

    pub fn draw(&self, canvas: &skia::Canvas, rect: &RectF32, shaper: Option<&TextShaper>, background: skia::Color, text: skia::Color) {
        let m = &self.metrics;
        let radius = 0.2 * m.em;

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(background.with_a(204));
        canvas.draw_round_rect(rect.to_skia(), radius, radius, &fill);

        let mut frame = skia::Paint::default();
        frame.set_anti_alias(true);
        frame.set_style(skia::paint::Style::Stroke);
        frame.set_stroke_width(m.frame_width);
        frame.set_color(skia::Color::from_rgb(204, 204, 204));
        canvas.draw_round_rect(rect.to_skia(), radius, radius, &frame);

        let left = rect.left + m.border_pad();
        let mut y = rect.top + m.border_pad();
        if let (Some(title), Some(shaper)) = (self.legend.title.as_deref(), shaper) {
            shaper.draw(canvas, title, rect.center_x(), y, m.title_size, text, false, Align::Center);
            y += self.title_height + m.label_spacing();
        }

        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_style(skia::paint::Style::Fill);
        let mut edge = skia::Paint::default();
        edge.set_anti_alias(true);
        edge.set_style(skia::paint::Style::Stroke);
        edge.set_stroke_width(m.marker_edge_width);
        edge.set_color(m.marker_edge);

        let r = m.marker_diameter * 0.5;
        for e in &self.entries {
            let cy = y + self.row_height * 0.5;
            let cx = left + m.handle_length() * 0.5;
            dot.set_color(e.color);
            canvas.draw_circle((cx, cy), r, &dot);
            if m.marker_edge_width > 0.0 {
                canvas.draw_circle((cx, cy), r, &edge);
            }
            if let Some(shaper) = shaper {
                let (_, th) = shaper.measure(&e.label, m.em, false);
                let tx = left + m.handle_length() + m.handle_text_pad();
                shaper.draw(canvas, &e.label, tx, cy - th * 0.5, m.em, text, false, Align::Left);
            }
            y += self.row_height + m.label_spacing();
        }
    }
}

/// Position a `width` x `height` box against `plot`. Anchored boxes hang
/// from the anchor point offset right and down by `pad`.
pub fn place(plot: &RectF32, width: f32, height: f32, placement: LegendPlacement, pad: f32) -> RectF32 {
    match placement {
        LegendPlacement::UpperRight => RectF32::from_ltwh(plot.right - pad - width, plot.top + pad, width, height),
        LegendPlacement::UpperLeft => RectF32::from_ltwh(plot.left + pad, plot.top + pad, width, height),
        LegendPlacement::LowerRight => {
            RectF32::from_ltwh(plot.right - pad - width, plot.bottom - pad - height, width, height)
        }
        LegendPlacement::LowerLeft => RectF32::from_ltwh(plot.left + pad, plot.bottom - pad - height, width, height),
        LegendPlacement::Anchored { x, y } => {
            let left = plot.left + x * plot.width() + pad;
            let top = plot.bottom - y * plot.height() + pad;
            RectF32::from_ltwh(left, top, width, height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchored_outside_right_starts_past_plot() {
        let plot = RectF32::from_ltrb(100.0, 50.0, 300.0, 450.0);
        let r = place(&plot, 80.0, 120.0, LegendPlacement::OUTSIDE_RIGHT, 5.0);
        assert!((r.left - 315.0).abs() < 1e-4);
        assert_eq!(r.top, 55.0);
        assert_eq!(r.height(), 120.0);
    }

    #[test]
    fn inside_corners_respect_pad() {
        let plot = RectF32::from_ltrb(0.0, 0.0, 200.0, 100.0);
        let r = place(&plot, 50.0, 20.0, LegendPlacement::LowerLeft, 4.0);
        assert_eq!((r.left, r.bottom), (4.0, 96.0));
        assert!(plot.contains(&place(&plot, 50.0, 20.0, LegendPlacement::UpperRight, 4.0)));
    }

    #[test]
    fn outside_gap_only_for_right_anchors() {
        assert!((LegendPlacement::OUTSIDE_RIGHT.outside_gap().unwrap() - 0.05).abs() < 1e-6);
        assert_eq!(LegendPlacement::UpperRight.outside_gap(), None);
    }
}
