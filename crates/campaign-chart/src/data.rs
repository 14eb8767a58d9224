// File: crates/campaign-chart/src/data.rs
// Summary: Synthetic marketing observations: seeded ad spend, noisy conversion rate, random channel.
// Notes:
// - Columns are drawn one at a time (all spend, then all noise, then all channels),
//   so changing one column's distribution never shifts another column's draws.

use std::fmt;

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Ad spend is uniform on `[low, high)`, in $k.
pub const AD_SPEND_RANGE: (f64, f64) = (1.0, 20.0);
/// conversion_rate = BASE_RATE + SLOPE * ad_spend + Normal(0, NOISE_SD)
pub const BASE_RATE: f64 = 2.0;
pub const SLOPE: f64 = 0.8;
pub const NOISE_SD: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    SocialMedia,
    Email,
    Search,
    Display,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::SocialMedia, Channel::Email, Channel::Search, Channel::Display];

    pub fn label(self) -> &'static str {
        match self {
            Channel::SocialMedia => "Social Media",
            Channel::Email => "Email",
            Channel::Search => "Search",
            Channel::Display => "Display",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub ad_spend: f64,
    pub conversion_rate: f64,
    pub channel: Channel,
}

/// Immutable table of observations in generation order.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservationTable {
    rows: Vec<Observation>,
}

impl ObservationTable {
    /// Draw `n_samples` rows from a generator seeded with `seed`. The same
    /// arguments give the same table.
    pub fn synthesize(n_samples: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let spend = Uniform::new(AD_SPEND_RANGE.0, AD_SPEND_RANGE.1);
        let ad_spend: Vec<f64> = (0..n_samples).map(|_| rng.sample(spend)).collect();
        let noise: Vec<f64> = (0..n_samples)
            .map(|_| NOISE_SD * rng.sample::<f64, _>(StandardNormal))
            .collect();
        let channels: Vec<Channel> = (0..n_samples)
            .map(|_| Channel::ALL[rng.gen_range(0..Channel::ALL.len())])
            .collect();

        let rows = ad_spend
            .into_iter()
            .zip(noise)
            .zip(channels)
            .map(|((ad_spend, noise), channel)| Observation {
                ad_spend,
                conversion_rate: BASE_RATE + SLOPE * ad_spend + noise,
                channel,
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn rows(&self) -> &[Observation] { &self.rows }
    pub fn iter(&self) -> impl Iterator<Item = &Observation> { self.rows.iter() }

    /// `(ad_spend, conversion_rate)` per row.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.rows.iter().map(|r| (r.ad_spend, r.conversion_rate)).collect()
    }

    pub fn channel_labels(&self) -> Vec<&'static str> {
        self.rows.iter().map(|r| r.channel.label()).collect()
    }

    pub fn summary(&self) -> TableSummary {
        let spend: Vec<f64> = self.rows.iter().map(|r| r.ad_spend).collect();
        let rate: Vec<f64> = self.rows.iter().map(|r| r.conversion_rate).collect();
        let channel_counts = Channel::ALL.map(|c| (c, self.rows.iter().filter(|r| r.channel == c).count()));
        TableSummary {
            rows: self.len(),
            ad_spend: ColumnStats::of(&spend),
            conversion_rate: ColumnStats::of(&rate),
            correlation: pearson(&spend, &rate),
            channel_counts,
        }
    }
}

impl<'a> IntoIterator for &'a ObservationTable {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;
    fn into_iter(self) -> Self::IntoIter { self.rows.iter() }
}

/// Min, max and mean of a column; NaN for an empty column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ColumnStats {
    fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self { min: f64::NAN, max: f64::NAN, mean: f64::NAN };
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Self { min, max, mean }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableSummary {
    pub rows: usize,
    pub ad_spend: ColumnStats,
    pub conversion_rate: ColumnStats,
    /// Pearson correlation of ad spend and conversion rate.
    pub correlation: f64,
    pub channel_counts: [(Channel, usize); 4],
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows; ad_spend [{:.2}, {:.2}] mean {:.2}; conversion_rate [{:.2}, {:.2}] mean {:.2}; r = {:.3}",
            self.rows,
            self.ad_spend.min,
            self.ad_spend.max,
            self.ad_spend.mean,
            self.conversion_rate.min,
            self.conversion_rate.max,
            self.conversion_rate.mean,
            self.correlation,
        )?;
        for (c, n) in &self.channel_counts {
            write!(f, "; {c}: {n}")?;
        }
        Ok(())
    }
}

/// Pearson correlation; NaN with fewer than two pairs or a constant column.
fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return f64::NAN;
    }
    let mx = xs[..n].iter().sum::<f64>() / n as f64;
    let my = ys[..n].iter().sum::<f64>() / n as f64;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mx, y - my);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    sxy / (sxx * syy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pearson_of_a_line_is_one() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [3.0, 5.0, 7.0, 9.0];
        assert!((pearson(&xs, &ys) - 1.0).abs() < 1e-12);
        let down = [9.0, 7.0, 5.0, 3.0];
        assert!((pearson(&xs, &down) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_degenerate_inputs() {
        assert!(pearson(&[1.0], &[2.0]).is_nan());
        assert!(pearson(&[1.0, 1.0], &[2.0, 3.0]).is_nan());
    }

    #[test]
    fn empty_table_summary() {
        let t = ObservationTable::synthesize(0, 42);
        assert!(t.is_empty());
        let s = t.summary();
        assert_eq!(s.rows, 0);
        assert!(s.ad_spend.mean.is_nan());
        assert!(s.channel_counts.iter().all(|&(_, n)| n == 0));
    }

    #[test]
    fn channel_labels_are_fixed() {
        let labels: Vec<_> = Channel::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, ["Social Media", "Email", "Search", "Display"]);
    }

    #[test]
    fn summary_display_mentions_every_channel() {
        let text = ObservationTable::synthesize(20, 1).summary().to_string();
        for c in Channel::ALL {
            assert!(text.contains(c.label()), "{text}");
        }
    }
}
