//! Performance benchmarks for the Payroll Engine.
//!
//! Covers the pure calculations (tax walk, full salary breakdown) and the
//! payslip service and HTTP router on top of them.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{calculate_and_format_salary, calculate_tax};
use payroll_engine::config::{ConfigLoader, PayrollConfig};
use payroll_engine::service::PayslipService;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const CONFIG_PATH: &str = "./config/victoria";

fn load_config() -> PayrollConfig {
    ConfigLoader::load(CONFIG_PATH)
        .expect("Failed to load config")
        .into_parts()
        .0
}

/// Benchmark: tax walk at one salary per bracket.
fn bench_income_tax(c: &mut Criterion) {
    let config = load_config();
    let mut group = c.benchmark_group("income_tax");

    for gross in [15_000i64, 40_000, 80_000, 150_000, 250_000] {
        let salary = Decimal::new(gross, 0);
        group.bench_with_input(BenchmarkId::new("gross", gross), &salary, |b, salary| {
            b.iter(|| black_box(calculate_tax(black_box(*salary), config.tax_table()).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: formatted salary breakdown for every configured country.
fn bench_salary_breakdown(c: &mut Criterion) {
    let config = load_config();
    let countries: Vec<String> = config
        .currency_table()
        .rates()
        .iter()
        .map(|rate| rate.country.clone())
        .collect();
    let gross = Decimal::new(9_500_050, 2);

    let mut group = c.benchmark_group("salary_breakdown");
    group.throughput(Throughput::Elements(countries.len() as u64));

    group.bench_function("all_countries", |b| {
        b.iter(|| {
            for country in &countries {
                black_box(calculate_and_format_salary(gross, country, &config).unwrap());
            }
        })
    });

    group.finish();
}

/// Benchmark: a payslip for every employee in the registry.
///
/// The store is reused across iterations, so after the first pass every
/// request replaces an existing payslip.
fn bench_payslip_run(c: &mut Criterion) {
    let mut service = PayslipService::load(CONFIG_PATH).expect("Failed to load config");
    let employee_ids: Vec<u32> = service
        .registry()
        .iter()
        .map(|employee| employee.employee_id)
        .collect();

    let mut group = c.benchmark_group("payslip_run");
    group.throughput(Throughput::Elements(employee_ids.len() as u64));

    group.bench_function("whole_registry", |b| {
        b.iter(|| {
            for employee_id in &employee_ids {
                black_box(service.create_payslip(*employee_id).unwrap());
            }
        })
    });

    group.finish();
}

/// Benchmark: POST /payslips through the router.
fn bench_create_payslip_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = PayslipService::load(CONFIG_PATH).expect("Failed to load config");
    let router = create_router(AppState::new(service));
    let body = r#"{"employee_id": 100001}"#;

    c.bench_function("create_payslip_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payslips")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_income_tax,
    bench_salary_breakdown,
    bench_payslip_run,
    bench_create_payslip_endpoint,
);
criterion_main!(benches);
