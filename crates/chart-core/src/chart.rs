// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless scatter rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::axis::Axis;
use crate::error::{ChartError, Result};
use crate::geometry::RectF32;
use crate::grid::Ticks;
use crate::layout::{self, Decorations, LegendFit, PlotLayout};
use crate::legend::{Legend, LegendBox, LegendEntry, LegendMetrics};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::style::{self, StyleSheet};
use crate::text::{Align, TextShaper};
use crate::types::{figure_px, pt_to_px, SubplotParams, DPI, FIG_HEIGHT_IN, FIG_WIDTH_IN};

/// Intervals aimed for when choosing tick steps.
const TICK_TARGET: usize = 6;
/// Tight layout padding, in multiples of the base font size.
const TIGHT_PAD: f32 = 1.08;

pub struct RenderOptions {
    /// Figure size in inches.
    pub figsize: (f32, f32),
    pub dpi: f32,
    pub tight_layout: bool,
    /// Plot placement when `tight_layout` is off.
    pub subplot: SubplotParams,
    /// Draw text (title, labels, ticks, legend text). Off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            figsize: (FIG_WIDTH_IN, FIG_HEIGHT_IN),
            dpi: DPI,
            tight_layout: true,
            subplot: SubplotParams::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn width(&self) -> i32 { figure_px(self.figsize.0, self.dpi) }
    pub fn height(&self) -> i32 { figure_px(self.figsize.1, self.dpi) }
    fn px(&self, pt: f32) -> f32 { pt_to_px(pt, self.dpi) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Title {
    pub text: String,
    /// Font size in points; `None` uses the context's title size.
    pub size: Option<f32>,
    pub bold: bool,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), size: None, bold: false }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub struct Chart {
    pub title: Option<Title>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<Legend>,
    pub style: StyleSheet,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    /// New chart using the process-wide style as it is right now.
    pub fn new() -> Self {
        Self::with_style(style::current())
    }

    pub fn with_style(style: StyleSheet) -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: None,
            style,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data extent of all series, padded by `margin`
    /// (fraction of the span). Without data the axes fall back to `[0, 1]`.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let bounds = self.series.iter().filter_map(Series::bounds).reduce(|a, b| {
            (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3))
        });
        let (x0, x1, y0, y1) = bounds.unwrap_or((f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY));
        self.x_axis.fit(x0, x1, margin);
        self.y_axis.fit(y0, y1, margin);
    }

    /// Distinct hue labels across all grouped series, in first-appearance order.
    fn level_table(&self) -> Vec<&str> {
        let mut table: Vec<&str> = Vec::new();
        for s in &self.series {
            for l in &s.levels {
                if !table.contains(&l.as_str()) {
                    table.push(l);
                }
            }
        }
        table
    }

    /// Palette color for each point of each series. Grouped points take the
    /// color of their hue label; ungrouped series take the colors after them.
    fn point_colors(&self) -> Vec<Vec<skia::Color>> {
        let table = self.level_table();
        let palette = &self.style.palette;
        let mut next_plain = table.len();
        self.series
            .iter()
            .map(|s| {
                if s.is_grouped() {
                    let level_colors: Vec<skia::Color> = s
                        .levels
                        .iter()
                        .map(|l| palette.color(table.iter().position(|t| t == l).unwrap_or(0)))
                        .collect();
                    (0..s.len()).map(|i| level_colors[s.level_of(i)]).collect()
                } else {
                    let c = palette.color(next_plain);
                    next_plain += 1;
                    vec![c; s.len()]
                }
            })
            .collect()
    }

    /// One legend entry per hue label.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        let palette = &self.style.palette;
        self.level_table()
            .into_iter()
            .enumerate()
            .map(|(i, label)| LegendEntry { label: label.to_string(), color: palette.color(i) })
            .collect()
    }

    /// Rasterize the chart into an in-memory figure.
    pub fn render(&self, opts: &RenderOptions) -> Result<Figure> {
        let (width, height) = (opts.width(), opts.height());
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;

        let shaper = opts.draw_labels.then(TextShaper::new);
        let ctx = &self.style.context;
        let theme = &self.style.theme;

        let x_ticks = self.x_axis.ticks(TICK_TARGET);
        let y_ticks = self.y_axis.ticks(TICK_TARGET);
        let text = TextSizes::measure(self, opts, shaper.as_ref(), &x_ticks, &y_ticks);

        let marker = self.series.iter().find(|s| s.is_grouped()).map(|s| s.marker).unwrap_or_default();
        let entries = self.legend_entries();
        let legend_box = match &self.legend {
            Some(legend) if !entries.is_empty() => {
                let metrics = LegendMetrics {
                    em: opts.px(ctx.legend_size),
                    title_size: opts.px(ctx.legend_title_size),
                    marker_diameter: opts.px(marker.diameter_pt()),
                    marker_edge: marker.edge_color,
                    marker_edge_width: opts.px(marker.edge_width_pt()),
                    frame_width: opts.px(ctx.patch_line_width),
                };
                Some(LegendBox::measure(legend, entries, metrics, shaper.as_ref()))
            }
            _ => None,
        };
        let fit = legend_box.as_ref().map(|b| LegendFit {
            width: b.width,
            height: b.height,
            placement: b.legend.placement,
            pad: b.metrics.border_axes_pad(),
        });

        let tick_pad = opts.px(ctx.tick_pad + if theme.ticks { ctx.tick_length } else { 0.0 });
        let deco = Decorations {
            title_height: text.title.1,
            title_pad: opts.px(ctx.title_pad),
            x_label_height: text.x_label.1,
            y_label_width: text.y_label.1,
            label_pad: opts.px(ctx.label_pad),
            x_tick_height: text.x_tick_height,
            y_tick_width: text.y_tick_width,
            tick_pad,
            x_tick_overhang: text.x_tick_overhang,
        };
        let (w, h) = (width as f32, height as f32);
        let plot_layout = if opts.tight_layout {
            layout::tight(w, h, opts.px(TIGHT_PAD * ctx.font_size), &deco, fit)?
        } else {
            layout::subplot(w, h, &opts.subplot, fit)
        };
        let plot = plot_layout.plot;

        let canvas = surface.canvas();
        canvas.clear(theme.figure_background);

        let mut bg = skia::Paint::default();
        bg.set_color(theme.axes_background);
        canvas.draw_rect(plot.to_skia(), &bg);

        let sx = LinearScale::new(self.x_axis.min, self.x_axis.max, plot.left, plot.right);
        let sy = LinearScale::new(self.y_axis.min, self.y_axis.max, plot.bottom, plot.top);

        if let Some(grid) = theme.grid {
            draw_grid(canvas, &plot, &sx, &sy, &x_ticks, &y_ticks, grid, opts.px(ctx.grid_line_width));
        }
        draw_points(canvas, &plot, &sx, &sy, &self.series, &self.point_colors(), opts);
        draw_spines(canvas, &plot, theme.spine, opts.px(ctx.axes_line_width));
        if theme.ticks {
            draw_tick_marks(canvas, &plot, &sx, &sy, &x_ticks, &y_ticks, theme.text, opts.px(ctx.tick_width), opts.px(ctx.tick_length));
        }

        if let Some(shaper) = shaper.as_ref() {
            let tick_size = opts.px(ctx.tick_label_size);
            for (v, label) in x_ticks.values.iter().zip(x_ticks.labels()) {
                shaper.draw(canvas, &label, sx.to_px(*v), plot.bottom + tick_pad, tick_size, theme.text, false, Align::Center);
            }
            for (v, label) in y_ticks.values.iter().zip(y_ticks.labels()) {
                let (_, th) = shaper.measure(&label, tick_size, false);
                shaper.draw(canvas, &label, plot.left - tick_pad, sy.to_px(*v) - th * 0.5, tick_size, theme.text, false, Align::Right);
            }

            let x_label_top = plot.bottom + tick_pad + text.x_tick_height + deco.label_pad;
            shaper.draw(canvas, &self.x_axis.label, plot.center_x(), x_label_top, text.x_label_size, theme.text, false, Align::Center);

            let y_label_cx = plot.left - tick_pad - text.y_tick_width - deco.label_pad - text.y_label.1 * 0.5;
            shaper.draw_vertical(canvas, &self.y_axis.label, y_label_cx, plot.center_y(), text.y_label_size, theme.text);

            if let Some(title) = &self.title {
                let top = plot.top - deco.title_pad - text.title.1;
                shaper.draw(canvas, &title.text, plot.center_x(), top, text.title_size, theme.text, title.bold, Align::Center);
            }
        }

        if let (Some(b), Some(rect)) = (&legend_box, plot_layout.legend) {
            b.draw(canvas, &rect, shaper.as_ref(), theme.axes_background, theme.text);
        }

        log::debug!(
            "rendered {} series ({} points) into {}x{}",
            self.series.len(),
            self.series.iter().map(Series::len).sum::<usize>(),
            width,
            height
        );
        Ok(Figure { surface, width, height, layout: plot_layout })
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        self.render(opts)?.save_png(output_png_path)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.render(opts)?.to_png_bytes()
    }

    /// Render to straight RGBA8: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.render(opts)?.to_rgba8()
    }
}

/// A rendered chart held in a raster surface. Saving consumes it, which
/// releases the surface.
pub struct Figure {
    surface: skia::Surface,
    width: i32,
    height: i32,
    layout: PlotLayout,
}

impl Figure {
    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    /// Where the plot area and legend ended up.
    pub fn layout(&self) -> &PlotLayout { &self.layout }

    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Encode("pixel readback failed".to_string()));
        }
        Ok((pixels, self.width as u32, self.height as u32, stride))
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.to_rgba8()?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| ChartError::Encode("pixel buffer does not match figure size".to_string()))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| ChartError::Encode(e.to_string()))?;
        Ok(out.into_inner())
    }

    /// Encode as PNG and write to `path`, replacing any existing file. The
    /// parent directory must already exist.
    pub fn save_png(mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        let io_err = |source| ChartError::Io { path: path.to_path_buf(), source };
        std::fs::write(path, &bytes).map_err(io_err)?;
        log::debug!("wrote {} ({} bytes, {}x{})", path.display(), bytes.len(), self.width, self.height);
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

/// Measured text extents in pixels; all zero when labels are off.
#[derive(Default)]
struct TextSizes {
    title: (f32, f32),
    title_size: f32,
    x_label: (f32, f32),
    x_label_size: f32,
    y_label: (f32, f32),
    y_label_size: f32,
    x_tick_height: f32,
    x_tick_overhang: f32,
    y_tick_width: f32,
}

impl TextSizes {
    fn measure(chart: &Chart, opts: &RenderOptions, shaper: Option<&TextShaper>, x_ticks: &Ticks, y_ticks: &Ticks) -> Self {
        let Some(shaper) = shaper else { return Self::default() };
        let ctx = &chart.style.context;
        let tick_size = opts.px(ctx.tick_label_size);

        let mut sizes = Self {
            title_size: opts.px(chart.title.as_ref().and_then(|t| t.size).unwrap_or(ctx.title_size)),
            x_label_size: opts.px(chart.x_axis.label_size.unwrap_or(ctx.label_size)),
            y_label_size: opts.px(chart.y_axis.label_size.unwrap_or(ctx.label_size)),
            ..Self::default()
        };
        if let Some(title) = &chart.title {
            sizes.title = shaper.measure(&title.text, sizes.title_size, title.bold);
        }
        sizes.x_label = shaper.measure(&chart.x_axis.label, sizes.x_label_size, false);
        sizes.y_label = shaper.measure(&chart.y_axis.label, sizes.y_label_size, false);

        for label in x_ticks.labels() {
            let (w, h) = shaper.measure(&label, tick_size, false);
            sizes.x_tick_height = sizes.x_tick_height.max(h);
            sizes.x_tick_overhang = sizes.x_tick_overhang.max(w * 0.5);
        }
        for label in y_ticks.labels() {
            sizes.y_tick_width = sizes.y_tick_width.max(shaper.measure(&label, tick_size, false).0);
        }
        sizes
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectF32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
    color: skia::Color,
    width: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(width);

    // verticals
    for &v in &x_ticks.values {
        let x = sx.to_px(v);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    // horizontals
    for &v in &y_ticks.values {
        let y = sy.to_px(v);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_spines(canvas: &skia::Canvas, plot: &RectF32, color: skia::Color, width: f32) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    canvas.draw_rect(plot.to_skia(), &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_marks(
    canvas: &skia::Canvas,
    plot: &RectF32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
    color: skia::Color,
    width: f32,
    length: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(width);

    for &v in &x_ticks.values {
        let x = sx.to_px(v);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + length), &paint);
    }
    for &v in &y_ticks.values {
        let y = sy.to_px(v);
        canvas.draw_line((plot.left - length, y), (plot.left, y), &paint);
    }
}

/// Filled circles with an edge stroke, in data order, clipped to the plot area.
fn draw_points(
    canvas: &skia::Canvas,
    plot: &RectF32,
    sx: &LinearScale,
    sy: &LinearScale,
    series: &[Series],
    colors: &[Vec<skia::Color>],
    opts: &RenderOptions,
) {
    let saved = canvas.save();
    canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);

    for (s, colors) in series.iter().zip(colors) {
        if s.is_empty() {
            continue;
        }
        let r = opts.px(s.marker.diameter_pt()) * 0.5;
        let edge_w = opts.px(s.marker.edge_width_pt());
        edge.set_color(s.marker.edge_color);
        edge.set_stroke_width(edge_w);

        for (&(x, y), &color) in s.data_xy.iter().zip(colors) {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let center = (sx.to_px(x), sy.to_px(y));
            fill.set_color(color);
            canvas.draw_circle(center, r, &fill);
            if edge_w > 0.0 {
                canvas.draw_circle(center, r, &edge);
            }
        }
    }
    canvas.restore_to_count(saved);
}
