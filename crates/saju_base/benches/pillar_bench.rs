use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    BirthMoment, GanJi, PillarConfig, calculate_pillars, calculate_pillars_with, day_pillar,
    interpretation_for, month_branch,
};

fn cycle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");
    group.bench_function("day_pillar", |b| {
        b.iter(|| day_pillar(black_box(2005), black_box(11), black_box(18)))
    });
    group.bench_function("month_branch", |b| {
        b.iter(|| month_branch(black_box(7), black_box(6)))
    });
    group.bench_function("ganji_hanja", |b| {
        b.iter(|| GanJi::from_index(black_box(56)).hanja())
    });
    group.finish();
}

fn pillars_bench(c: &mut Criterion) {
    let moment = BirthMoment::new(1995, 3, 30, 5, 32);
    let config = PillarConfig::default();

    let mut group = c.benchmark_group("pillars");
    group.bench_function("calculate_pillars", |b| {
        b.iter(|| calculate_pillars(black_box(1995), 3, 30, black_box(5), 32))
    });
    group.bench_function("calculate_pillars_with", |b| {
        b.iter(|| calculate_pillars_with(black_box(&moment), &config))
    });
    group.bench_function("calculate_pillars_year_sweep", |b| {
        b.iter(|| {
            for year in 1900..2100 {
                black_box(calculate_pillars(year, 6, 15, 12, 0));
            }
        })
    });
    group.finish();
}

fn interpretation_bench(c: &mut Criterion) {
    let day = GanJi::from_index(27);
    c.bench_function("interpretation_for", |b| {
        b.iter(|| interpretation_for(black_box(day), false))
    });
}

criterion_group!(benches, cycle_bench, pillars_bench, interpretation_bench);
criterion_main!(benches);
