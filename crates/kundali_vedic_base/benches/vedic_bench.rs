use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_vedic_base::{
    LunarNode, ascendant_deg, ayanamsa_deg, house_signs, lunar_node_deg, moon_tropical_longitude_deg,
    nakshatra_from_longitude, navamsha_sign, rashi_from_longitude,
};

fn ayanamsha_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ayanamsha");
    group.bench_function("lahiri_quadratic", |b| {
        b.iter(|| ayanamsa_deg(black_box(2024), black_box(3), black_box(15)))
    });
    group.finish();
}

fn body_bench(c: &mut Criterion) {
    let t = 0.24;
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("bodies");
    group.bench_function("moon_series", |b| {
        b.iter(|| moon_tropical_longitude_deg(black_box(t)))
    });
    group.bench_function("mean_rahu", |b| {
        b.iter(|| lunar_node_deg(LunarNode::Rahu, black_box(jd), 24.19))
    });
    group.bench_function("ascendant", |b| {
        b.iter(|| ascendant_deg(black_box(123.4), 23.44, black_box(28.6)))
    });
    group.finish();
}

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.bench_function("navamsha_sign", |b| {
        b.iter(|| navamsha_sign(black_box(lon)))
    });
    group.bench_function("house_signs", |b| b.iter(|| house_signs(black_box(7))));
    group.finish();
}

criterion_group!(benches, ayanamsha_bench, body_bench, zodiac_bench);
criterion_main!(benches);
