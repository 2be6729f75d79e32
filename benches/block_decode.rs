use criterion::{black_box, criterion_group, criterion_main, Criterion};

use texcodec_core::block::{bc1, bc3, bc4, bc5, bc7, eac, etc1, etc2_rgba};
use texcodec_core::pixel::opaque_black_tile;

fn bench_bc1(c: &mut Criterion) {
    let payload: [u8; 8] = [0xFF, 0xFF, 0x00, 0x00, 0xE4, 0xE4, 0xE4, 0xE4];
    c.bench_function("bc1_decode", |b| {
        b.iter(|| black_box(bc1::decode(black_box(&payload))));
    });
}

fn bench_bc3(c: &mut Criterion) {
    let payload: [u8; 16] = [
        0x00, 0xFF, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF, 0x00, 0x00, 0xE4, 0xE4, 0xE4, 0xE4,
    ];
    c.bench_function("bc3_decode", |b| {
        b.iter(|| black_box(bc3::decode(black_box(&payload))));
    });
}

fn bench_bc4(c: &mut Criterion) {
    let payload: [u8; 8] = [0xFF, 0x00, 0b1010_1000, 0b1100_0110, 0b1111_1010, 0, 0, 0];
    c.bench_function("bc4_decode", |b| {
        b.iter(|| black_box(bc4::decode(black_box(&payload))));
    });
}

fn bench_bc5(c: &mut Criterion) {
    let payload = [0u8; 16];
    c.bench_function("bc5_decode", |b| {
        b.iter(|| black_box(bc5::decode(black_box(&payload))));
    });
}

fn bench_bc7(c: &mut Criterion) {
    let mut payload = [0xFFu8; 16];
    payload[0] = 0b0100_0000;
    c.bench_function("bc7_mode6_decode", |b| {
        b.iter(|| black_box(bc7::decode(black_box(&payload))));
    });
}

fn bench_etc1(c: &mut Criterion) {
    let payload = [0x88, 0x88, 0x88, 0, 0, 0, 0, 0];
    c.bench_function("etc1_decode", |b| {
        b.iter(|| black_box(etc1::decode(black_box(&payload))));
    });
}

fn bench_eac(c: &mut Criterion) {
    let payload = [128, 0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE];
    c.bench_function("eac_decode", |b| {
        b.iter(|| black_box(eac::decode(black_box(&payload))));
    });
}

fn bench_etc2_rgba(c: &mut Criterion) {
    let payload = [0u8; 16];
    c.bench_function("etc2_rgba_decode", |b| {
        b.iter(|| black_box(etc2_rgba::decode(black_box(&payload))));
    });
}

fn bench_decode_block_dispatch(c: &mut Criterion) {
    use texcodec_core::block::decode_block;
    use texcodec_core::format::Format;
    let payload = [0u8; 8];
    c.bench_function("decode_block_dispatch_bc1", |b| {
        b.iter(|| {
            let mut tile = opaque_black_tile();
            black_box(decode_block(Format::Bc1, black_box(&payload), &mut tile));
        });
    });
}

criterion_group!(
    benches,
    bench_bc1,
    bench_bc3,
    bench_bc4,
    bench_bc5,
    bench_bc7,
    bench_etc1,
    bench_eac,
    bench_etc2_rgba,
    bench_decode_block_dispatch,
);
criterion_main!(benches);
