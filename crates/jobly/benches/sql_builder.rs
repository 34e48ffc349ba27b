use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jobly::sql::{ColumnMap, FieldMap, JobFilter, sql_for_partial_update};

const COLUMNS: ColumnMap = ColumnMap::new(&[
    ("col0", "column_0"),
    ("col1", "column_1"),
    ("col2", "column_2"),
]);

/// `n` fields named col0..col{n-1}; the first three are translated.
fn field_map(n: usize) -> FieldMap {
    (0..n).map(|i| (format!("col{i}"), i as i32)).collect()
}

fn bench_partial_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/partial_update");

    for n in [1, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let built = sql_for_partial_update(field_map(n), &COLUMNS);
                black_box(built)
            });
        });
    }

    group.finish();
}

fn bench_job_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/job_filter");

    let filters = [
        ("empty", JobFilter::new()),
        ("title", JobFilter::new().title("%ist%")),
        (
            "all",
            JobFilter::new()
                .title("%ist%")
                .min_salary(101)
                .has_equity("true"),
        ),
    ];

    for (name, filter) in &filters {
        group.bench_with_input(BenchmarkId::from_parameter(name), filter, |b, filter| {
            b.iter(|| black_box(filter.build()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_partial_update, bench_job_filter);
criterion_main!(benches);
