use algorithms::{cbc_iv0_encrypt, gcm_encrypt, Aes, Mode};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [usize; 4] = [16, 256, 1024, 16384];

fn bench_aes_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES");

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        for (name, mode) in [("ECB", Mode::Ecb), ("CBC", Mode::Cbc), ("CTR", Mode::Ctr)] {
            for key_len in [16usize, 32] {
                let key = vec![0u8; key_len];
                group.bench_with_input(
                    BenchmarkId::new(format!("{}-{}", name, key_len * 8), size),
                    &size,
                    |b, &size| {
                        let mut a = Aes::init(mode, &key, None).unwrap();
                        let mut data = vec![[0u8; 16]; size / 16];
                        b.iter(|| {
                            for block in data.iter_mut() {
                                a.encrypt(block);
                            }
                        });
                    },
                );
            }
        }

        let data = vec![0u8; size];
        let mut out = vec![0u8; size + 16];
        group.bench_with_input(BenchmarkId::new("CBC-IV0-128", size), &size, |b, _| {
            b.iter(|| cbc_iv0_encrypt(&[0u8; 16], &data, &mut out).unwrap());
        });
    }

    group.finish();
}

fn bench_gcm(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-GCM");
    let key = [0x11u8; 16];
    let iv = [0x22u8; 12];

    for size in SIZES {
        let data = vec![0u8; size];
        let mut out = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encrypt", size), &size, |b, _| {
            b.iter(|| gcm_encrypt(&key, &iv, b"header", &data, &mut out).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aes_modes, bench_gcm);
criterion_main!(benches);
