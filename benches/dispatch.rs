//! Benchmarks for URL dispatch and the built-in vendor parsers.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use jdbcinfo::prelude::*;
use std::hint::black_box;

const URLS: [(&str, &str); 5] = [
    ("mysql", "jdbc:mysql://db1:3306,db2:3307/orders?useSSL=false"),
    ("oracle", "jdbc:oracle:thin:@//ora.example.com:1521/sales"),
    ("h2", "jdbc:h2:tcp://localhost:9092/~/sample;MODE=MySQL"),
    ("postgresql", "jdbc:postgresql://pg:5432/app?user=app"),
    ("unknown", "jdbc:sqlite:/tmp/app.db"),
];

/// Benchmark parsing each vendor through the dispatcher.
fn bench_parse(c: &mut Criterion) {
    let parser = UrlParser::new();
    let mut group = c.benchmark_group("parse");

    for (name, url) in URLS {
        group.bench_with_input(BenchmarkId::from_parameter(name), url, |b, url| {
            b.iter(|| black_box(parser.parse(black_box(url))))
        });
    }

    group.finish();
}

/// Benchmark lookup cost as the registry grows.
fn bench_registry_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_size");

    for extra in [0usize, 16, 128] {
        let parser = UrlParser::new();
        for i in 0..extra {
            parser
                .register_connection_parser(
                    &format!("jdbc:custom{i}"),
                    |_url: &str| -> ParseResult<ConnectionInfo> { Ok(ConnectionInfo::unknown()) },
                )
                .unwrap();
        }

        // last built-in prefix, so every lookup walks the built-ins first
        group.bench_with_input(BenchmarkId::from_parameter(extra), &parser, |b, parser| {
            b.iter(|| black_box(parser.parse("jdbc:postgresql://pg/app")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_registry_size);

criterion_main!(benches);
