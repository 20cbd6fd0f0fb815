use classic_registry::{decode, encode_with_rng, seeded_rng, CipherId, Params};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

fn sample_text(len: usize) -> String {
    let mut rng = seeded_rng(Some(1));
    (0..len)
        .map(|_| char::from(b'A' + rng.gen_range(0..26)))
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let text = sample_text(1024);
    let params = Params::new();
    let mut rng = seeded_rng(Some(2));

    let mut group = c.benchmark_group("encode");
    group.sample_size(20);
    for id in [
        CipherId::Vigenere,
        CipherId::Playfair,
        CipherId::Bifid,
        CipherId::Homophonic,
        CipherId::DoubleTransposition,
        CipherId::Adfgvx,
    ] {
        group.bench_function(id.as_str(), |b| {
            b.iter(|| {
                let _ = encode_with_rng(id, &text, &params, &mut rng);
            });
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let text = sample_text(1024);
    let params = Params::new();
    let mut rng = seeded_rng(Some(3));

    let mut group = c.benchmark_group("decode");
    group.sample_size(20);
    for id in [CipherId::Checkerboard, CipherId::Nihilist, CipherId::Adfgvx] {
        let ct = encode_with_rng(id, &text, &params, &mut rng).unwrap_or_default();
        group.bench_function(id.as_str(), |b| {
            b.iter(|| {
                let _ = decode(id, &ct, &params);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
