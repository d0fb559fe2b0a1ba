// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Benchmark scalar encode and decode throughput.
// Author: Lukas Bower

use criterion::{criterion_group, criterion_main, Criterion};
use tinypack_codec::{PackReader, PackWriter};

fn encode_record(writer: &mut PackWriter) {
    writer.write_map_header(4);
    writer.write_str(Some("id"));
    writer.write_u64(0x1234_5678_9ABC_DEF0);
    writer.write_str(Some("name"));
    writer.write_str(Some("tinypack"));
    writer.write_str(Some("score"));
    writer.write_f64(99.25);
    writer.write_str(Some("tags"));
    writer.write_array_header(3);
    writer.write_i32(-1);
    writer.write_i32(0);
    writer.write_i32(70_000);
}

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_record", |b| {
        let mut writer = PackWriter::new();
        b.iter(|| {
            writer.clear();
            encode_record(&mut writer);
            writer.len()
        });
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut writer = PackWriter::new();
    encode_record(&mut writer);
    let bytes = writer.into_bytes();

    c.bench_function("decode_record", |b| {
        b.iter(|| {
            let mut reader = PackReader::new(&bytes);
            let pairs = reader.read_map_header().unwrap().unwrap();
            let mut total = u64::from(pairs);
            let _ = reader.read_str().unwrap();
            total = total.wrapping_add(reader.read_u64().unwrap());
            let _ = reader.read_str().unwrap();
            let _ = reader.read_str().unwrap();
            let _ = reader.read_str().unwrap();
            let _ = reader.read_f64().unwrap();
            let _ = reader.read_str().unwrap();
            let items = reader.read_array_header().unwrap().unwrap();
            for _ in 0..items {
                total = total.wrapping_add(reader.read_i32().unwrap() as u64);
            }
            total
        });
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
