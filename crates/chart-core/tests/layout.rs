// File: crates/chart-core/tests/layout.rs
// Purpose: Tight layout keeps title, labels and an outside legend on the canvas.

use chart_core::{Axis, Chart, ChartError, Legend, LegendPlacement, RenderOptions, Series, StyleSheet, Title};

fn labelled_chart() -> Chart {
    let mut chart = Chart::with_style(StyleSheet::from_names("whitegrid", "talk", "Set2").unwrap());
    chart.title = Some(Title::new("Marketing Campaign Effectiveness").with_size(16.0).bold());
    chart.x_axis = Axis::new("Ad Spend ($k)", 0.0, 21.0).with_label_size(14.0);
    chart.y_axis = Axis::new("Conversion Rate (%)", -5.0, 25.0).with_label_size(14.0);
    let data = vec![(2.0, 3.0), (8.0, 9.0), (14.0, 12.0), (19.0, 20.0)];
    let labels = ["Social Media", "Email", "Search", "Display"];
    chart.add_series(Series::with_hue(data, &labels).unwrap());
    chart.legend = Some(Legend::new(LegendPlacement::OUTSIDE_RIGHT).with_title("Channel"));
    chart
}

#[test]
fn tight_layout_keeps_legend_inside_canvas() {
    let chart = labelled_chart();
    let opts = RenderOptions { figsize: (8.0, 8.0), dpi: 64.0, ..RenderOptions::default() };
    let fig = chart.render(&opts).expect("render");
    let layout = fig.layout();
    let legend = layout.legend.expect("legend placed");

    assert!(layout.canvas.contains(&legend), "legend {legend:?} outside {:?}", layout.canvas);
    assert!(layout.canvas.contains(&layout.plot));
    assert!(legend.left > layout.plot.right, "legend sits right of the plot");
    let pad = legend.left - layout.plot.right - 0.05 * layout.plot.width();
    assert!(pad > 0.0, "legend offset from its anchor");
    assert!((legend.top - layout.plot.top - pad).abs() < 1e-3, "legend hangs one pad below the axes top");
}

#[test]
fn fixed_subplot_lets_outside_legend_overflow() {
    let chart = labelled_chart();
    let opts = RenderOptions { figsize: (8.0, 8.0), dpi: 64.0, tight_layout: false, ..RenderOptions::default() };
    let fig = chart.render(&opts).expect("render");
    let legend = fig.layout().legend.expect("legend placed");
    assert!(legend.right > fig.layout().canvas.right);
}

#[test]
fn tiny_canvas_reports_layout_error() {
    let chart = labelled_chart();
    let opts = RenderOptions { figsize: (1.0, 1.0), dpi: 32.0, ..RenderOptions::default() };
    match chart.render(&opts) {
        Err(ChartError::Layout { .. }) => {}
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("a 32px canvas cannot hold a talk-sized legend"),
    }
}
