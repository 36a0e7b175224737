//! Criterion benchmarks for URL template parsing and expansion.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use service_template::parse_url_template;

/// Benchmark: parse_url_template with varying template shapes
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let test_cases = [
        ("empty", ""),
        ("relative", "/api/users/:userId"),
        ("relative_query", "/api/users/:userId?page=:page&sort=desc"),
        (
            "absolute",
            "https://api.example.com:8080/api/users/:userId?page=:page&sort=desc",
        ),
        ("ipv6", "https://[2001:db8::1]:8080/api/users/:userId"),
        (
            "deep_path",
            "https://example.com/a/:b/c/:d/e/:f/g/:h/i/:j/k/:l?m=:m&n=o&p=:p&q=r",
        ),
    ];

    for (name, template) in test_cases {
        group.throughput(Throughput::Bytes(template.len() as u64));
        group.bench_with_input(BenchmarkId::new("template", name), &template, |b, t| {
            b.iter(|| parse_url_template(black_box(t)));
        });
    }

    group.finish();
}

/// Benchmark: expansion with a growing number of variables
fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    for count in [1, 4, 16] {
        let path: Vec<String> = (0..count).map(|i| format!("seg/:v{i}")).collect();
        let template = format!("https://example.com/{}", path.join("/"));
        let components = parse_url_template(&template).expect("valid test template");

        group.bench_with_input(
            BenchmarkId::new("variables", count),
            &components,
            |b, components| {
                b.iter(|| black_box(components).expand(|name| Some(name.to_string())));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_expand);
criterion_main!(benches);
