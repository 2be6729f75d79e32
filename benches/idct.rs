use criterion::{black_box, criterion_group, criterion_main, Criterion};

use texcodec_core::idct::{idct_1d, idct_1d_8};

fn bench_idct_8(c: &mut Criterion) {
    let src = [1.0f32, 0.5, -0.25, 0.0, 0.1, -0.1, 0.2, -0.2];
    let mut dst = [0.0f32; 8];
    c.bench_function("idct_1d_8", |b| {
        b.iter(|| idct_1d_8(black_box(&src), 1, black_box(&mut dst), 1));
    });
}

fn bench_idct_generic_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("idct_1d_generic");
    for n in [2usize, 4, 6, 8, 10, 12] {
        let src = vec![1.0f32; n];
        let mut dst = vec![0.0f32; n];
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| idct_1d(n, black_box(&src), 1, black_box(&mut dst), 1));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_idct_8, bench_idct_generic_sizes);
criterion_main!(benches);
