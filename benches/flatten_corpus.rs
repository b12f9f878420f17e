use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::fs;
use std::hint::black_box;
use std::path::PathBuf;
use treeflat::{flatten, parse_bracketed};

fn prepare_test_data() -> Vec<(String, String)> {
    let mut test_data = Vec::new();
    let test_data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data");

    let mrg_files = ["wsj_0001.mrg"];

    for file_path in &mrg_files {
        let full_path = test_data_dir.join(file_path);
        if let Ok(content) = fs::read_to_string(&full_path) {
            let name = file_path.replace(".mrg", "");
            test_data.push((name, content));
        }
    }

    test_data
}

fn bench_parse_bracketed(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_bracketed");
    for (name, content) in prepare_test_data() {
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(&name), &content, |b, content| {
            b.iter(|| parse_bracketed(black_box(content)))
        });
    }
    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    for (name, content) in prepare_test_data() {
        let Ok(trees) = parse_bracketed(&content) else {
            continue;
        };
        group.throughput(Throughput::Elements(trees.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(&name), &trees, |b, trees| {
            b.iter(|| trees.iter().map(|tree| flatten(black_box(tree))).collect::<Vec<_>>())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_bracketed, bench_flatten);
criterion_main!(benches);
