// File: crates/campaign-chart/src/lib.rs
// Summary: Campaign chart app library: fixed config, synthetic data and the render pipeline.

pub mod config;
pub mod data;
pub mod pipeline;

pub use config::ChartConfig;
pub use data::{Channel, Observation, ObservationTable, TableSummary};
pub use pipeline::run;
