// File: crates/campaign-chart/src/pipeline.rs
// Summary: The four run stages (synthesize, style, render, write) and `run` chaining them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{
    style, Axis, Chart, Figure, Legend, LegendPlacement, Marker, RenderOptions, Series, Title, DEFAULT_MARGIN,
};

use crate::config::ChartConfig;
use crate::data::ObservationTable;

pub fn synthesize(cfg: &ChartConfig) -> ObservationTable {
    let table = ObservationTable::synthesize(cfg.n_samples, cfg.seed);
    log::info!("synthesized {} observations (seed {})", table.len(), cfg.seed);
    log::info!("summary: {}", table.summary());
    table
}

/// Set the process-wide theme, context and palette used by charts built afterwards.
pub fn configure_style(cfg: &ChartConfig) -> Result<()> {
    style::set_theme(&cfg.theme).context("setting theme")?;
    style::set_context(&cfg.context).context("setting context")?;
    style::set_palette(&cfg.palette).context("setting palette")?;
    log::info!("style: {} / {} / {}", cfg.theme, cfg.context, cfg.palette);
    Ok(())
}

/// Scatter of spend vs conversion rate, colored by channel, with the legend
/// outside the right edge.
pub fn build_chart(table: &ObservationTable, cfg: &ChartConfig) -> Result<Chart> {
    let mut chart = Chart::new();
    chart.title = Some(Title::new(&cfg.title).with_size(cfg.title_size).bold());
    chart.x_axis = Axis::new(&cfg.x_label, 0.0, 1.0).with_label_size(cfg.label_size);
    chart.y_axis = Axis::new(&cfg.y_label, 0.0, 1.0).with_label_size(cfg.label_size);

    let marker = Marker::new(cfg.marker_size).with_edge(cfg.marker_edge);
    let series = Series::with_hue(table.points(), &table.channel_labels())
        .context("grouping observations by channel")?
        .with_marker(marker);
    chart.add_series(series);
    chart.autoscale_axes(DEFAULT_MARGIN);
    chart.legend = Some(Legend::new(LegendPlacement::OUTSIDE_RIGHT).with_title(&cfg.legend_title));
    Ok(chart)
}

pub fn render_options(cfg: &ChartConfig) -> RenderOptions {
    RenderOptions {
        figsize: cfg.figsize,
        dpi: cfg.dpi,
        tight_layout: true,
        ..RenderOptions::default()
    }
}

pub fn render(table: &ObservationTable, cfg: &ChartConfig) -> Result<Figure> {
    let chart = build_chart(table, cfg)?;
    let figure = chart.render(&render_options(cfg)).context("rendering chart")?;
    log::info!("rendered {}x{} figure", figure.width(), figure.height());
    Ok(figure)
}

/// Encode the figure to `cfg.output`, replacing any existing file. The figure
/// is consumed and its surface released.
pub fn write(figure: Figure, cfg: &ChartConfig) -> Result<PathBuf> {
    figure
        .save_png(&cfg.output)
        .with_context(|| format!("writing {}", cfg.output.display()))?;
    log::info!("wrote {}", cfg.output.display());
    Ok(cfg.output.clone())
}

pub fn run(cfg: &ChartConfig) -> Result<PathBuf> {
    let table = synthesize(cfg);
    configure_style(cfg)?;
    let figure = render(&table, cfg)?;
    write(figure, cfg)
}
