// File: crates/chart-core/tests/style_global.rs
// Purpose: Process-wide style: setters, snapshot on Chart::new, error on unknown names.
// Runs as its own test binary; a single test keeps the global state sequential.

use chart_core::{style, Chart, ChartError, Palette};

#[test]
fn global_style_flows_into_new_charts() {
    style::reset();
    let before = Chart::new();
    assert_eq!(before.style.theme.name, "darkgrid");
    assert_eq!(before.style.context.name, "notebook");
    assert_eq!(before.style.palette.name, "deep");

    style::set_theme("whitegrid").unwrap();
    style::set_context("talk").unwrap();
    style::set_palette("Set2").unwrap();

    let chart = Chart::new();
    assert_eq!(chart.style.theme.name, "whitegrid");
    assert_eq!(chart.style.context.scale, 1.5);
    assert_eq!(chart.style.palette, Palette::named("Set2").unwrap());
    // Charts built earlier keep their snapshot.
    assert_eq!(before.style.theme.name, "darkgrid");

    let err = style::set_context("huge").unwrap_err();
    assert!(matches!(err, ChartError::UnknownStyle { kind: "context", .. }));
    assert_eq!(style::current().context.name, "talk", "failed set leaves style untouched");

    style::reset();
    assert_eq!(style::current().theme.name, "darkgrid");
}
