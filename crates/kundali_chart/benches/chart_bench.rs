use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_chart::{BirthInput, ChartConfig, compute_chart, compute_chart_unchecked, parse_latitude};

fn chart_bench(c: &mut Criterion) {
    let input = BirthInput::new("bench", 1987, 6, 15, 14, 30, 5.5, 28.6, 77.2);
    let config = ChartConfig::default();

    let mut group = c.benchmark_group("chart");
    group.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(&input), &config))
    });
    group.bench_function("compute_chart_unchecked", |b| {
        b.iter(|| compute_chart_unchecked(black_box(&input)))
    });
    group.bench_function("parse_latitude", |b| {
        b.iter(|| parse_latitude(black_box("28N36")))
    });
    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
