//! Benchmark – `bytecursor::ByteCursor`
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use bytecursor::ByteCursor;

/// Deterministic buffer of `len` bytes so every scenario sees the same data.
fn make_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) ^ (i >> 3)) as u8).collect()
}

fn drain_with(bytes: &[u8], width: usize) -> u64 {
    let mut cursor = ByteCursor::new(bytes);
    let mut acc = 0u64;
    while let Ok(v) = cursor.read_uint_x(width) {
        acc = acc.wrapping_add(u64::from(v));
    }
    acc
}

fn bench_fixed_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_uint_x");
    for &len in &[64usize, 4 * 1024, 256 * 1024] {
        let payload = make_payload(len);
        group.throughput(Throughput::Bytes(len as u64));
        for width in [1usize, 2, 4] {
            group.bench_with_input(
                BenchmarkId::new(format!("width{width}"), len),
                &payload,
                |b, payload| b.iter(|| drain_with(black_box(payload), width)),
            );
        }
    }
    group.finish();
}

fn bench_mixed_record(c: &mut Criterion) {
    let record: Vec<u8> = {
        let mut r = vec![0u8; 0];
        r.push(1);
        r.extend_from_slice(&7u16.to_be_bytes());
        r.extend_from_slice(&0.5f64.to_be_bytes());
        r.extend_from_slice(&3.0f32.to_le_bytes());
        r.push(4);
        r.extend_from_slice(b"name");
        r
    };
    let stream = record.repeat(1024);

    c.bench_function("mixed_record_stream", |b| {
        b.iter(|| {
            let mut cursor = ByteCursor::new(black_box(&stream));
            let mut n = 0usize;
            while !cursor.has_ended() {
                let _ = cursor.read_u8();
                let _ = cursor.read_u16();
                let _ = black_box(cursor.read_f64());
                let _ = black_box(cursor.read_f32_le());
                let len = cursor.peek_u8(0).map_or(0, usize::from);
                let _ = cursor.read_u8();
                let _ = black_box(cursor.read_buffer(len));
                n += 1;
            }
            n
        });
    });
}

criterion_group!(benches, bench_fixed_width, bench_mixed_record);
criterion_main!(benches);
