use bitveil_core::media::raster::DctCodec;
use bitveil_core::DctCodecOptions;
use bitveil_dct::SamplePlane;
use criterion::{criterion_group, criterion_main, Criterion};

pub fn dct_encoding(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(7);
    let plane = SamplePlane::from_fn(256, 256, |_, _| rng.u8(60..196));
    let opts = DctCodecOptions::default();
    let secret_message = b"Hello World!";

    c.bench_function("DCT Encoding", |b| {
        b.iter(|| DctCodec::hide(&plane, &secret_message[..], &opts).expect("Cannot hide message"))
    });

    let (secret, _) =
        DctCodec::hide(&plane, &secret_message[..], &opts).expect("Cannot hide message");
    c.bench_function("DCT Decoding", |b| {
        b.iter(|| DctCodec::unveil(&secret, &opts).expect("Cannot unveil message"))
    });
}

criterion_group!(benches, dct_encoding);
criterion_main!(benches);
