use criterion::{criterion_group, criterion_main, Criterion};
use es_geo::output::Format;
use es_geo::{process, DecodeOptions, Shape};
use std::fs::File;
use std::io::{BufReader, Result, Write};

struct MockWriter;

impl Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(buf.len())
    }
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

const COLLECTION: &[u8] = br#"{"type":"geometrycollection","geometries":[{"type":"point","coordinates":[100.0,0.0]},{"type":"linestring","coordinates":[[101.0,0.0],[102.0,1.0]]},{"type":"polygon","coordinates":[[[100.0,0.0],[101.0,0.0],[101.0,1.0],[100.0,1.0],[100.0,0.0]]]}]}"#;

pub fn decode_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape");
    group.bench_function("decode_collection", |b| {
        b.iter(|| Shape::from_json(COLLECTION).unwrap())
    });
    let shape = Shape::from_json(COLLECTION).unwrap();
    group.bench_function("encode_collection", |b| {
        b.iter(|| serde_json::to_string(&shape).unwrap())
    });
    group.finish();
}

pub fn process_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes.ndjson");
    group.sample_size(10);
    group.bench_function("process", |b| {
        b.iter(|| {
            let file = File::open("./tests/data/shapes.ndjson").unwrap();
            let mut writer = MockWriter;
            process(
                BufReader::new(file),
                &mut writer,
                &[],
                Format::JsonLines,
                &DecodeOptions::default(),
            )
            .unwrap();
        })
    });
    group.finish();
}

criterion_group!(benches, decode_bench, process_bench);
criterion_main!(benches);
