//! Form and table rendering benchmarks
//!
//! Measures rendering with varying field counts (10, 100, 1000) and row
//! layouts (one field per row, three fields per shared row).
//!
//! Run benchmarks: `cargo bench --bench form_rendering`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use formwork::{Form, Formwork, StaticToken, Table, Value};
use serde_json::json;
use std::hint::black_box;
use std::sync::Arc;

fn context() -> Formwork {
    match Formwork::builder()
        .with_html_renderer()
        .with_csrf(Arc::new(StaticToken::new("bench")))
        .build()
    {
        Ok(formwork) => formwork,
        Err(e) => panic!("failed to build context: {e}"),
    }
}

fn build_form(formwork: &Formwork, fields: usize, per_row: usize) -> Form {
    let mut form = formwork.form().with_properties(json!({"baseFieldName": "record"}));
    for i in 0..fields {
        let row = json!(format!("row-{}", i / per_row));
        form.text(
            &format!("field_{i}"),
            format!("Value {i}"),
            json!({"label": format!("Field {i}"), "row": row}),
        );
    }
    form.select(
        "status",
        json!("open"),
        json!({"options": {"open": "Open", "closed": "Closed"}}),
    );
    form.submit("Save", json!({}));
    form
}

fn bench_form_rendering(c: &mut Criterion) {
    let formwork = context();
    let mut group = c.benchmark_group("form_rendering");

    for fields in [10, 100, 1000] {
        for per_row in [1, 3] {
            let form = build_form(&formwork, fields, per_row);
            group.throughput(Throughput::Elements(fields as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("per_row_{per_row}"), fields),
                &form,
                |b, form| b.iter(|| black_box(form.html())),
            );
        }
    }
    group.finish();
}

fn bench_table_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_rendering");

    for rows in [10, 100, 1000] {
        let mut table = Table::new();
        table.headers_from_labels(["Id", "Name", "Email"]);
        let items: Vec<Value> = (0..rows)
            .map(|i| json!({"id": i, "name": format!("User {i}"), "email": format!("u{i}@example.com")}))
            .collect();
        table.set_items(items).set_row_builder(|t, item, i| {
            t.cell(i, "id", &item["id"]);
            t.cell(i, "name", &item["name"]);
            t.cell(i, "email", &item["email"]);
        });

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| black_box(table.render()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_form_rendering, bench_table_rendering);
criterion_main!(benches);
