// File: crates/chart-core/src/grid.rs
// Summary: Tick placement and tick label formatting for linear axes.

/// Mantissas a tick step may take, times a power of ten.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Tick positions and the step between them.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticks {
    pub values: Vec<f64>,
    pub step: f64,
}

impl Ticks {
    /// Labels for every tick, all printed with the same number of decimals.
    pub fn labels(&self) -> Vec<String> {
        let decimals = tick_decimals(self.step);
        self.values.iter().map(|&v| format_tick(v, decimals)).collect()
    }
}

/// Smallest step of the form m * 10^k (m in 1, 2, 2.5, 5, 10) giving at most
/// `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let target = target.max(1) as f64;
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let raw = span / target;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let m = NICE_STEPS
        .iter()
        .copied()
        .find(|&m| m >= norm - 1e-9)
        .unwrap_or(10.0);
    m * mag
}

/// Ticks covering `[min, max]` at a nice step, inclusive of both ends when they
/// fall on the step grid.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Ticks {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Ticks { values: vec![min], step: 1.0 };
    }
    let step = nice_step(max - min, target);
    let first = (min / step - 1e-9).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    let values = (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect();
    Ticks { values, step }
}

/// Decimals needed to print multiples of `step` exactly (2.5 -> 1, 0.25 -> 2).
pub fn tick_decimals(step: f64) -> usize {
    let mut d = 0;
    while d < 10 {
        let scaled = step * 10f64.powi(d as i32);
        if (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0) {
            break;
        }
        d += 1;
    }
    d
}

pub fn format_tick(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v);
    // "-0" / "-0.0" after rounding
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
