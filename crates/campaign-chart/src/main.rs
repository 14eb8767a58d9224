// File: crates/campaign-chart/src/main.rs
// Summary: Renders the synthetic marketing campaign scatter chart to chart.png.

use anyhow::Result;
use campaign_chart::ChartConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = ChartConfig::default();
    campaign_chart::run(&cfg)?;
    Ok(())
}
