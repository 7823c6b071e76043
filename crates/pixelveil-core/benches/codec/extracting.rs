use criterion::{criterion_group, criterion_main, Criterion};
use pixelveil_core::LsbCodec;

/// Benchmark for extracting a payload from a carrier
pub fn extracting_benchmark(c: &mut Criterion) {
    let payload = vec![0x5A_u8; 1024];
    let mut carrier = vec![0_u8; 32 + payload.len() * 8];
    LsbCodec::embed(&mut carrier, &payload).expect("Cannot embed payload");

    c.bench_function("lsb_codec_extracting", |b| {
        b.iter(|| {
            LsbCodec::extract(&carrier).expect("Cannot extract payload");
        })
    });
}

criterion_group!(benches, extracting_benchmark);
criterion_main!(benches);
