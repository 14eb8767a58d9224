// File: crates/campaign-chart/tests/data.rs
// Purpose: Properties of the synthesized observation table.

use campaign_chart::data::{AD_SPEND_RANGE, BASE_RATE, SLOPE};
use campaign_chart::{Channel, ChartConfig, ObservationTable};

fn default_table() -> ObservationTable {
    let cfg = ChartConfig::default();
    ObservationTable::synthesize(cfg.n_samples, cfg.seed)
}

#[test]
fn table_has_exactly_one_hundred_rows() {
    assert_eq!(default_table().len(), 100);
}

#[test]
fn same_seed_same_table() {
    assert_eq!(default_table(), default_table());
    assert_ne!(default_table(), ObservationTable::synthesize(100, 43));
}

#[test]
fn ad_spend_within_half_open_range() {
    for row in &default_table() {
        assert!(row.ad_spend >= AD_SPEND_RANGE.0 && row.ad_spend < AD_SPEND_RANGE.1, "{row:?}");
    }
}

#[test]
fn channels_come_from_the_fixed_set() {
    let allowed = ["Social Media", "Email", "Search", "Display"];
    let table = default_table();
    assert!(table.channel_labels().iter().all(|l| allowed.contains(l)));
    let summary = table.summary();
    assert_eq!(summary.channel_counts.iter().map(|&(_, n)| n).sum::<usize>(), 100);
    assert!(summary.channel_counts.iter().all(|&(_, n)| n > 0), "{summary}");
}

#[test]
fn conversion_tracks_spend() {
    let table = default_table();
    let summary = table.summary();
    assert!(summary.correlation > 0.6, "r = {}", summary.correlation);

    // Residuals are the Gaussian noise; their mean sits near zero.
    let mean_residual = table
        .iter()
        .map(|r| r.conversion_rate - (BASE_RATE + SLOPE * r.ad_spend))
        .sum::<f64>()
        / table.len() as f64;
    assert!(mean_residual.abs() < 1.5, "mean residual {mean_residual}");
}

#[test]
fn points_and_labels_line_up_with_rows() {
    let table = default_table();
    let points = table.points();
    let labels = table.channel_labels();
    for (i, row) in table.rows().iter().enumerate() {
        assert_eq!(points[i], (row.ad_spend, row.conversion_rate));
        assert_eq!(labels[i], row.channel.label());
    }
    assert_eq!(Channel::ALL.len(), 4);
}
