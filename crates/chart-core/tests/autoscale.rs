// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over several scatter series.

use chart_core::{Chart, Series, StyleSheet};

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::with_style(StyleSheet::default());
    chart.add_series(Series::with_data(vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::with_hue(vec![(2.0, 6.0), (3.0, 1.5)], &["a", "b"]).unwrap());

    chart.autoscale_axes(0.0);

    // X spans 0..5 from the first series
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);
    // Y spans 1..6 across both
    assert!(chart.y_axis.min <= 1.0 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn autoscale_pads_by_margin() {
    let mut chart = Chart::with_style(StyleSheet::default());
    chart.add_series(Series::with_data(vec![(1.0, 10.0), (21.0, 30.0)]));
    chart.autoscale_axes(0.05);
    assert!((chart.x_axis.min - 0.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 22.0).abs() < 1e-9);
    assert!((chart.y_axis.min - 9.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 31.0).abs() < 1e-9);
}

#[test]
fn legend_entries_share_colors_across_series() {
    let mut chart = Chart::with_style(StyleSheet::from_names("white", "paper", "tab10").unwrap());
    chart.add_series(Series::with_hue(vec![(0.0, 0.0); 2], &["x", "y"]).unwrap());
    chart.add_series(Series::with_hue(vec![(1.0, 1.0); 2], &["z", "x"]).unwrap());
    let entries = chart.legend_entries();
    let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["x", "y", "z"]);
    assert_eq!(entries[2].color, chart.style.palette.color(2));
}
