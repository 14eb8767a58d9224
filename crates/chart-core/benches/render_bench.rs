use chart_core::{Axis, Chart, ChartError, RenderOptions, Series, StyleSheet};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart_scatter(n: usize) -> Chart {
    let mut ch = Chart::with_style(StyleSheet::default());
    let mut data = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        let x = (i as f64 * 0.37).sin() * 10.0 + 10.0;
        let y = (i as f64 * 0.11).cos() * 10.0 + x * 0.5;
        data.push((x, y));
        labels.push(["a", "b", "c", "d"][i % 4]);
    }
    ch.x_axis = Axis::new("X", 0.0, 20.0);
    ch.y_axis = Axis::new("Y", -12.0, 22.0);
    // lengths match by construction
    if let Ok(series) = Series::with_hue(data, &labels) {
        ch.add_series(series);
    }
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[100usize, 10_000usize] {
        group.bench_function(format!("scatter_{n}"), |b| {
            let ch = build_chart_scatter(n);
            let mut opts = RenderOptions::default();
            opts.figsize = (8.0, 8.0);
            opts.dpi = 64.0;
            opts.draw_labels = false;
            b.iter(|| -> Result<(), ChartError> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
