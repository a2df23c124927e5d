use bitveil_core::media::bitmap::Lsb2Codec;
use criterion::{criterion_group, criterion_main, Criterion};

fn carrier(len: usize) -> Vec<u8> {
    let mut rng = fastrand::Rng::with_seed(7);
    let mut bytes: Vec<u8> = std::iter::repeat_with(|| rng.u8(..)).take(len).collect();
    bytes[10..14].copy_from_slice(&54u32.to_le_bytes());
    bytes
}

pub fn lsb2_encoding(c: &mut Criterion) {
    let plain = carrier(512 * 512 * 3 + 54);
    let secret_message = b"Hello World!";

    c.bench_function("LSB2 Encoding", |b| {
        b.iter(|| Lsb2Codec::hide(&plain, &secret_message[..]).expect("Cannot hide message"))
    });

    let (secret, _) = Lsb2Codec::hide(&plain, &secret_message[..]).expect("Cannot hide message");
    c.bench_function("LSB2 Decoding", |b| {
        b.iter(|| Lsb2Codec::unveil(&secret).expect("Cannot unveil message"))
    });
}

criterion_group!(benches, lsb2_encoding);
criterion_main!(benches);
