//! Performance benchmarks for the reporting structure calculation.
//!
//! Two org-chart shapes are measured:
//! - wide: one manager with every other employee as a direct report
//! - deep: a single reporting chain
//!
//! for the bare count and for the nested tree, plus the full HTTP round trip
//! for the seeded org chart.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use employee_directory::api::{AppState, create_router};
use employee_directory::config::{ConfigLoader, MAX_REPORT_DEPTH_CEILING};
use employee_directory::directory::{RequestContext, calculate_reporting_structure, count_reports};
use employee_directory::models::{Employee, EmployeeRef};
use employee_directory::store::{EmployeeRepository, MemoryStore};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn employee(id: usize, reports: Vec<usize>) -> Employee {
    Employee {
        employee_id: format!("emp_{:05}", id),
        first_name: format!("First{}", id),
        last_name: format!("Last{}", id),
        position: "Developer".to_string(),
        department: "Engineering".to_string(),
        direct_reports: reports
            .into_iter()
            .map(|r| EmployeeRef::new(format!("emp_{:05}", r)))
            .collect(),
    }
}

/// One manager (emp_00000) with `size - 1` direct reports.
fn wide_chart(size: usize) -> Vec<Employee> {
    let mut employees = vec![employee(0, (1..size).collect())];
    employees.extend((1..size).map(|i| employee(i, vec![])));
    employees
}

/// A chain where each employee manages the next one.
fn deep_chart(size: usize) -> Vec<Employee> {
    (0..size)
        .map(|i| {
            let reports = if i + 1 < size { vec![i + 1] } else { vec![] };
            employee(i, reports)
        })
        .collect()
}

fn seeded_store(runtime: &tokio::runtime::Runtime, employees: Vec<Employee>) -> Arc<MemoryStore> {
    runtime.block_on(async {
        let store = Arc::new(MemoryStore::new());
        store.seed(employees).await.expect("Failed to seed store");
        store
    })
}

fn bench_count_reports(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("count_reports");

    for size in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        let wide = seeded_store(&runtime, wide_chart(size));
        group.bench_with_input(BenchmarkId::new("wide", size), &size, |b, _| {
            b.to_async(&runtime).iter(|| async {
                let session = wide.session();
                black_box(count_reports(&session, "emp_00000").await.unwrap())
            });
        });

        let deep = seeded_store(&runtime, deep_chart(size));
        group.bench_with_input(BenchmarkId::new("deep", size), &size, |b, _| {
            b.to_async(&runtime).iter(|| async {
                let session = deep.session();
                black_box(count_reports(&session, "emp_00000").await.unwrap())
            });
        });
    }

    group.finish();
}

fn bench_calculate_reporting_structure(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("calculate_reporting_structure");

    let charts = [
        ("wide", wide_chart(1000)),
        ("deep", deep_chart(MAX_REPORT_DEPTH_CEILING + 1)),
    ];
    for (shape, chart) in charts {
        group.throughput(Throughput::Elements(chart.len() as u64));
        let store = seeded_store(&runtime, chart);
        group.bench_function(shape, |b| {
            b.to_async(&runtime).iter(|| async {
                let session = store.session();
                let root = session.get_by_id("emp_00000").await.unwrap();
                let structure = calculate_reporting_structure(
                    &RequestContext::new(),
                    &session,
                    root,
                    MAX_REPORT_DEPTH_CEILING,
                )
                .await
                .unwrap();
                black_box(structure.total_report_count)
            });
        });
    }

    group.finish();
}

fn bench_reporting_structure_endpoint(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let state = runtime.block_on(async {
        let config = ConfigLoader::load("./config/directory").expect("Failed to load config");
        AppState::seeded(config).await.expect("Failed to seed store")
    });

    c.bench_function("reporting_structure_endpoint", |b| {
        b.to_async(&runtime).iter(|| async {
            let router = create_router(state.clone());
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/api/employee/16a596ae-edd3-4847-99fe-c4518e82c86f/reportingStructure")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response.status())
        });
    });
}

criterion_group!(
    benches,
    bench_count_reports,
    bench_calculate_reporting_structure,
    bench_reporting_structure_endpoint
);
criterion_main!(benches);
