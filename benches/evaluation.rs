//! Rule evaluation benchmarks
//!
//! Measures:
//! - Compiling rules from source
//! - Single-document evaluation for rules of growing size
//! - Batch throughput for varying document counts
//!
//! Run benchmarks: `cargo bench --bench evaluation`
//!
//! Compare specific groups:
//! ```
//! cargo bench --bench evaluation -- "batch_throughput"
//! cargo bench --bench evaluation -- "rule_size"
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;
use verity::{Evaluator, Rule};

const RULE: &str = "$.age >= 18 && !($.country == 'US') && (abs($.balance) < 100 or $.vip) \
                    && arr.contains($.tags, 'beta')";

/// Generate test documents
fn generate_documents(count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|i| {
            json!({
                "id": i,
                "age": 10 + (i % 60),
                "country": if i % 3 == 0 { "US" } else { "GB" },
                "balance": (i as f64) * -1.5,
                "vip": i % 7 == 0,
                "tags": ["alpha", if i % 2 == 0 { "beta" } else { "gamma" }],
                "orders": [{ "total": i }, { "total": i * 2 }]
            })
        })
        .collect()
}

/// A rule with `clauses` comparisons on the same path.
fn wide_rule(clauses: usize) -> String {
    (0..clauses)
        .map(|n| format!("$.orders[1].total >= {}", n))
        .collect::<Vec<_>>()
        .join(" && ")
}

fn benchmark_compile(c: &mut Criterion) {
    c.bench_function("compile_rule", |b| {
        b.iter(|| Rule::parse(black_box(RULE)).expect("Rule should compile"))
    });
}

/// Repeated paths are answered from the per-evaluation cache
fn benchmark_rule_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_size");
    let evaluator = Evaluator::new();
    let document = generate_documents(100).remove(99);

    for clauses in [1, 10, 50] {
        let rule = Rule::parse(&wide_rule(clauses)).expect("Rule should compile");
        group.bench_with_input(BenchmarkId::new("clauses", clauses), &rule, |b, rule| {
            b.iter(|| rule.matches(&evaluator, black_box(&document)))
        });
    }

    group.finish();
}

fn benchmark_batch_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_throughput");
    let evaluator = Evaluator::new();
    let rule = Rule::parse(RULE).expect("Rule should compile");

    for count in [10, 100, 1000] {
        let documents = generate_documents(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("documents", count), &documents, |b, docs| {
            b.iter(|| rule.matches_all(&evaluator, black_box(docs)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_compile,
    benchmark_rule_size,
    benchmark_batch_throughput
);
criterion_main!(benches);
