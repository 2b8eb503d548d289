//! Benchmarks for the multi-panel driver and its two placement strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use guillotine_core::{optimize, CuttingConfig, PanelSpec, PieceSpec, Settings};

fn uniform_config(piece_count: i64, poignet_enabled: bool) -> CuttingConfig {
    CuttingConfig {
        panel: PanelSpec { width: 2440, height: 1220 },
        settings: Settings {
            min_waste_size: 50,
            poignet_enabled,
        },
        pieces: vec![PieceSpec {
            id: 0,
            width: 300,
            height: 200,
            quantity: piece_count,
            rotation_allowed: true,
        }],
    }
}

fn mixed_config(piece_count: i64) -> CuttingConfig {
    CuttingConfig {
        panel: PanelSpec { width: 2440, height: 1220 },
        settings: Settings::default(),
        pieces: vec![
            PieceSpec { id: 0, width: 500, height: 400, quantity: piece_count, rotation_allowed: true },
            PieceSpec { id: 1, width: 200, height: 150, quantity: piece_count * 2, rotation_allowed: true },
            PieceSpec { id: 2, width: 80, height: 80, quantity: piece_count * 3, rotation_allowed: false },
        ],
    }
}

fn bench_free_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver/free_mode");

    for count in [10, 50, 200] {
        let config = uniform_config(count, false);
        group.bench_with_input(BenchmarkId::new("uniform_pieces", count), &config, |b, config| {
            b.iter(|| black_box(optimize(config)))
        });
    }

    group.finish();
}

fn bench_edge_aligned_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver/edge_aligned_mode");

    for count in [10, 50, 200] {
        let config = uniform_config(count, true);
        group.bench_with_input(BenchmarkId::new("uniform_pieces", count), &config, |b, config| {
            b.iter(|| black_box(optimize(config)))
        });
    }

    group.finish();
}

fn bench_mixed_piece_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver/mixed_sizes");

    for count in [5, 20, 80] {
        let config = mixed_config(count);
        group.bench_with_input(BenchmarkId::new("piece_multiplier", count), &config, |b, config| {
            b.iter(|| black_box(optimize(config)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_free_mode, bench_edge_aligned_mode, bench_mixed_piece_sizes);
criterion_main!(benches);
