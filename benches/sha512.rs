use cryptal_sha512::hash::sha512::compress;
use cryptal_sha512::{BLOCK_SIZE, Sha512Backend, Sha512State, sha512};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha512(c: &mut Criterion) {
    c.bench_function("sha512 compress", |b| {
        let mut state = [0u64; 8];
        b.iter(|| compress(black_box(&[0u8; BLOCK_SIZE]), &mut state))
    });

    c.bench_function("sha512 128 bytes", |b| {
        b.iter(|| sha512(black_box(&[0u8; 128])))
    });

    c.bench_function("sha512 incremental 4 KiB", |b| {
        let data = vec![0u8; 4096];
        b.iter(|| {
            let mut state = Sha512State::init();
            state.update_blocks(black_box(&data)).unwrap();
            state.finish(&[]).unwrap();
            state.digest().unwrap()
        })
    });
}

criterion_group!(benches, bench_sha512);
criterion_main!(benches);
