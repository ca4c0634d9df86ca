//! Benchmarks for rotor generation, projection and solid selection.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rps_core::{
    phase::{PhaseForm, PhaseSequence},
    projection::{lift, project},
    verify, PlatonicSolid, RotorSource, SolidSelector,
};

fn bench_rotor_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("phase_rotor");
    for form in [PhaseForm::DoubleAngle, PhaseForm::ConjugatePair] {
        let seq = PhaseSequence::new(form);
        group.bench_with_input(BenchmarkId::from_parameter(form), &seq, |b, seq| {
            b.iter(|| {
                for n in 0..1000u32 {
                    black_box(seq.rotor(black_box(n)).ok());
                }
            })
        });
    }
    group.finish();

    c.bench_function("phase_rotor_huge_index", |b| {
        b.iter(|| PhaseForm::DoubleAngle.rotor(black_box(u32::MAX)))
    });
}

fn bench_projection(c: &mut Criterion) {
    let points: Vec<[f64; 3]> = (0..1000)
        .map(|i| {
            let t = i as f64 * 0.01;
            [t.sin() * 3.0, t.cos() * 2.0, (t * 0.5).sin()]
        })
        .collect();
    let rotors: Vec<_> = points.iter().filter_map(|p| lift(p).ok()).collect();

    c.bench_function("lift_1000", |b| {
        b.iter(|| {
            for p in &points {
                black_box(lift(black_box(p)).ok());
            }
        })
    });

    c.bench_function("project_1000", |b| {
        b.iter(|| {
            for q in &rotors {
                black_box(project(black_box(q)).ok());
            }
        })
    });
}

fn bench_selector(c: &mut Criterion) {
    c.bench_function("selector_build_and_validate", |b| {
        b.iter(|| black_box(SolidSelector::new().ok()))
    });

    let Ok(selector) = SolidSelector::new() else {
        return;
    };

    let mut group = c.benchmark_group("rotation_symmetry");
    for solid in PlatonicSolid::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(solid), &solid, |b, &solid| {
            let points = selector.vertices(solid);
            b.iter(|| verify::has_rotation_symmetry(black_box(points), solid, 1e-9))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rotor_generation, bench_projection, bench_selector);
criterion_main!(benches);
