use criterion::{Criterion, criterion_group, criterion_main};
use sha2::{Digest, Sha512};
use std::hint::black_box;

pub fn bench_sha2_ref(c: &mut Criterion) {
    c.bench_function("sha2 sha512 128 bytes", |b| {
        b.iter(|| Sha512::digest(black_box(&[0u8; 128])))
    });

    c.bench_function("sha2 sha512 4 KiB", |b| {
        let data = vec![0u8; 4096];
        b.iter(|| {
            let mut hasher = Sha512::new();
            hasher.update(black_box(&data));
            hasher.finalize()
        })
    });
}

criterion_group!(benches, bench_sha2_ref);
criterion_main!(benches);
