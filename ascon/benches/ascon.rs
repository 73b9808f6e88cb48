//! Ascon hashing, XOF and AEAD throughput across variants.

use core::hint::black_box;

use ascon_lwc::{
    decrypt_in_place_detached, encrypt_in_place_detached, hash, hash256, hash_a, hash_x4,
    variant, xof128, AeadVariant,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [usize; 3] = [64, 1024, 16 * 1024];

fn fixed_bytes(len: usize, tag: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_add(tag.wrapping_mul(37))).collect()
}

fn permutation_benches(c: &mut Criterion) {
    let mut state = [0x00400c0000000100u64, 0, 0, 0, 0];
    c.bench_function("permute/p12", |b| {
        b.iter(|| ascon_lwc::ascon_perm::permute(black_box(&mut state), 12));
    });
    let mut lanes = [[1u64, 2, 3, 4, 5]; 4];
    c.bench_function("permute/p12_x4", |b| {
        b.iter(|| ascon_lwc::ascon_perm::permute_x4(black_box(&mut lanes), 12));
    });
}

fn hash_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");
    for size in SIZES {
        let msg = fixed_bytes(size, 1);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("Ascon-Hash", size), &msg, |b, m| {
            b.iter(|| black_box(hash(black_box(m))));
        });
        group.bench_with_input(BenchmarkId::new("Ascon-HashA", size), &msg, |b, m| {
            b.iter(|| black_box(hash_a(black_box(m))));
        });
        group.bench_with_input(BenchmarkId::new("Ascon-Hash256", size), &msg, |b, m| {
            b.iter(|| black_box(hash256(black_box(m))));
        });
        group.bench_with_input(BenchmarkId::new("Ascon-XOF128/64", size), &msg, |b, m| {
            b.iter(|| black_box(xof128(black_box(m), 64)));
        });
        group.throughput(Throughput::Bytes(4 * size as u64));
        group.bench_with_input(BenchmarkId::new("Ascon-Hash x4", size), &msg, |b, m| {
            let lane: &[u8] = m;
            b.iter(|| black_box(hash_x4::<variant::Hash>([lane; 4])));
        });
    }
    group.finish();
}

fn aead_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("aead");
    let nonce = fixed_bytes(16, 3);
    let ad = fixed_bytes(32, 4);
    for v in AeadVariant::ALL {
        let key = fixed_bytes(v.key_len(), 2);
        for size in SIZES {
            let mut buffer = fixed_bytes(size, 5);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_function(BenchmarkId::new(format!("{v}/encrypt"), size), |b| {
                b.iter(|| {
                    let tag = encrypt_in_place_detached(v, &key, &nonce, &ad, &mut buffer);
                    black_box(tag)
                });
            });

            let mut ciphertext = fixed_bytes(size, 5);
            let tag = encrypt_in_place_detached(v, &key, &nonce, &ad, &mut ciphertext)
                .expect("valid lengths");
            group.bench_function(BenchmarkId::new(format!("{v}/decrypt"), size), |b| {
                b.iter(|| {
                    let mut buffer = ciphertext.clone();
                    let ok = decrypt_in_place_detached(v, &key, &nonce, &ad, &mut buffer, &tag);
                    black_box(ok)
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, permutation_benches, hash_benches, aead_benches);
criterion_main!(benches);
