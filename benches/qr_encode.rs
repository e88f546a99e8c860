use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qrgen::{ECLevel, encode};

fn bench_encode_small(c: &mut Criterion) {
    c.bench_function("encode_hello_world_v1", |b| {
        b.iter(|| encode(black_box(b"HELLO WORLD"), black_box(ECLevel::M)))
    });
}

fn bench_encode_url(c: &mut Criterion) {
    let url = b"https://example.com/some/longer/path?with=query&and=parameters";
    c.bench_function("encode_url_byte_mode", |b| {
        b.iter(|| encode(black_box(url.as_slice()), black_box(ECLevel::M)))
    });
}

fn bench_encode_numeric_large(c: &mut Criterion) {
    let digits = vec![b'7'; 1000];
    c.bench_function("encode_1000_digits", |b| {
        b.iter(|| encode(black_box(&digits), black_box(ECLevel::L)))
    });
}

fn bench_encode_version_40(c: &mut Criterion) {
    // Fills a near-maximal symbol: 40 versions scanned, 8 masks scored
    // on a 177x177 matrix.
    let data = vec![b'x'; 2900];
    c.bench_function("encode_2900_bytes_v40", |b| {
        b.iter(|| encode(black_box(&data), black_box(ECLevel::L)))
    });
}

fn bench_encode_levels(c: &mut Criterion) {
    let data = b"benchmark payload across levels 0123456789";
    for (name, level) in [
        ("encode_level_l", ECLevel::L),
        ("encode_level_m", ECLevel::M),
        ("encode_level_q", ECLevel::Q),
        ("encode_level_h", ECLevel::H),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| encode(black_box(data.as_slice()), black_box(level)))
        });
    }
}

criterion_group!(
    benches,
    bench_encode_small,
    bench_encode_url,
    bench_encode_numeric_large,
    bench_encode_version_40,
    bench_encode_levels
);
criterion_main!(benches);
