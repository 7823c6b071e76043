use criterion::{criterion_group, criterion_main, Criterion};
use pixelveil_core::LsbCodec;

/// Benchmark for embedding a payload into a carrier
pub fn embedding_benchmark(c: &mut Criterion) {
    let payload = vec![0x5A_u8; 1024];
    let mut carrier = vec![0_u8; 32 + payload.len() * 8];

    c.bench_function("lsb_codec_embedding", |b| {
        b.iter(|| {
            LsbCodec::embed(&mut carrier, &payload).expect("Cannot embed payload");
        })
    });
}

criterion_group!(benches, embedding_benchmark);
criterion_main!(benches);
