use std::io::Cursor;

use channel_slurper::{
    decoder::decode, encoder::encode, frequency::FREQUENCY_TABLE, ChannelRegistry,
    SortedChannels,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

fn random_channels(rng: &mut impl Rng, n: u32) -> SortedChannels {
    let mut reg = ChannelRegistry::new();
    for id in 0..n {
        reg.add(id, *FREQUENCY_TABLE.choose(rng).unwrap()).unwrap();
    }
    reg.sort()
}

fn benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let channels = random_channels(&mut rng, 32);
    let duration = 10_000;

    let mut block = Cursor::new(Vec::new());
    encode(0, duration, &channels, &mut block).unwrap();
    let block = block.into_inner();

    c.bench_function("encode 10s", |b| {
        b.iter(|| {
            let mut out = Cursor::new(Vec::with_capacity(block.len()));
            encode(
                black_box(0),
                black_box(duration),
                black_box(&channels),
                &mut out,
            )
            .unwrap()
        })
    });

    c.bench_function("decode 10s", |b| {
        b.iter(|| decode(&mut black_box(&block[..]), black_box(&channels)).unwrap())
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
