use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use p4conv_rust::p4conv_common_rs::codec::core::{encode, Value};
use p4conv_rust::p4conv_common_rs::codec::core::integer::{decode_num, encode_num};
use p4conv_rust::p4conv_common_rs::codec::core::matchers::detect_format;

fn benchmark_format_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_detection");

    let inputs = vec![
        ("mac", "aa:bb:cc:dd:ee:ff"),
        ("ipv4", "10.0.0.1"),
        ("ipv6", "2001:db8:85a3::8a2e:370:7334"),
        ("passthrough", "not-an-address"),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::new("detect_format", name), &input, |b, input| {
            b.iter(|| black_box(detect_format(black_box(input))));
        });
    }

    group.finish();
}

fn benchmark_integer_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_encoding");

    let widths = vec![8u32, 32, 48, 128, 256];

    for width in widths {
        group.bench_with_input(BenchmarkId::new("encode_num", width), &width, |b, width| {
            b.iter(|| black_box(encode_num(black_box(-42), *width)))
        });
    }

    let encoded = encode_num(1337, 40).unwrap_or_default();
    group.bench_function("decode_num", |b| {
        b.iter(|| black_box(decode_num(black_box(&encoded))))
    });

    group.finish();
}

fn benchmark_dispatch(c: &mut Criterion) {
    c.bench_function("encode_dispatch_mac", |b| {
        b.iter(|| black_box(encode(black_box("aa:bb:cc:dd:ee:ff"), 48)))
    });

    c.bench_function("encode_dispatch_singleton_int", |b| {
        b.iter(|| {
            let wrapped = Value::Sequence(vec![Value::Integer(black_box(1337))]);
            black_box(encode(wrapped, 40))
        })
    });
}

criterion_group!(
    benches,
    benchmark_format_detection,
    benchmark_integer_encoding,
    benchmark_dispatch
);
criterion_main!(benches);
