// File: crates/campaign-chart/tests/pipeline.rs
// Purpose: End-to-end pipeline: PNG size, overwrite, and failure on an unwritable path.

use std::path::PathBuf;

use campaign_chart::pipeline;
use campaign_chart::ChartConfig;

fn config_at(name: &str) -> ChartConfig {
    let dir = PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    ChartConfig { output: dir.join(name), ..ChartConfig::default() }
}

#[test]
fn run_writes_512_square_png() {
    let cfg = config_at("pipeline_chart.png");
    let out = pipeline::run(&cfg).expect("pipeline run");
    assert_eq!(out, cfg.output);
    assert_eq!(image::image_dimensions(&out).expect("decode"), (512, 512));
    assert_eq!(cfg.pixel_size(), (512, 512));
}

#[test]
fn rerun_overwrites_existing_file() {
    let cfg = config_at("pipeline_overwrite.png");
    std::fs::write(&cfg.output, b"not a png").unwrap();
    pipeline::run(&cfg).expect("first run");
    let first = std::fs::read(&cfg.output).unwrap();
    pipeline::run(&cfg).expect("second run");
    let second = std::fs::read(&cfg.output).unwrap();
    assert!(first.starts_with(&[137, 80, 78, 71]));
    assert_eq!(first, second, "same seed renders the same image");
}

#[test]
fn unwritable_output_fails() {
    let blocker = PathBuf::from("target/test_out/pipeline_blocker");
    std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    std::fs::write(&blocker, b"file").unwrap();
    let cfg = ChartConfig { output: blocker.join("chart.png"), ..ChartConfig::default() };

    let err = pipeline::run(&cfg).expect_err("cannot write under a regular file");
    assert!(format!("{err:#}").contains("writing"), "{err:#}");
    assert!(!cfg.output.exists());
}

#[test]
fn chart_uses_configured_style_and_labels() {
    let cfg = ChartConfig::default();
    pipeline::configure_style(&cfg).expect("style");
    let table = pipeline::synthesize(&cfg);
    let chart = pipeline::build_chart(&table, &cfg).expect("chart");

    assert_eq!(chart.style.theme.name, "whitegrid");
    assert_eq!(chart.style.context.name, "talk");
    assert_eq!(chart.style.palette.name, "Set2");
    assert_eq!(chart.x_axis.label, "Ad Spend ($k)");
    assert_eq!(chart.y_axis.label, "Conversion Rate (%)");
    assert_eq!(chart.legend.as_ref().and_then(|l| l.title.as_deref()), Some("Channel"));
    assert!(chart.x_axis.min < 1.0 && chart.x_axis.max > 19.0);
    assert_eq!(chart.legend_entries().len(), 4);
    assert_eq!(chart.series[0].len(), 100);
}

#[test]
fn legend_fits_inside_the_image() {
    let cfg = ChartConfig::default();
    pipeline::configure_style(&cfg).expect("style");
    let table = pipeline::synthesize(&cfg);
    let figure = pipeline::render(&table, &cfg).expect("render");
    let layout = figure.layout();
    let legend = layout.legend.expect("legend");
    assert!(layout.canvas.contains(&legend));
    assert!(legend.left > layout.plot.right);
}
