// Criterion benchmarks for the request contract and planners

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use swarmfill_ai::config::PlanningSettings;
use swarmfill_ai::core::{distance, estimate_time, validate_request, Payload, Point};
use swarmfill_ai::models::RouteOptimizationRequest;
use swarmfill_ai::services::plan_route;

fn create_payload(fields: usize) -> Payload {
    (0..fields)
        .map(|i| (format!("field_{}", i), json!(i)))
        .collect()
}

fn bench_validate_request(c: &mut Criterion) {
    let payload = create_payload(32);
    let required: Vec<String> = (0..32).step_by(2).map(|i| format!("field_{}", i)).collect();
    let required: Vec<&str> = required.iter().map(String::as_str).collect();

    c.bench_function("validate_request", |b| {
        b.iter(|| validate_request(black_box(Some(&payload)), black_box(&required)));
    });
}

fn bench_distance(c: &mut Criterion) {
    c.bench_function("distance", |b| {
        b.iter(|| distance(black_box(&[40.7128, -74.0060]), black_box(&[40.72, -74.01])));
    });

    c.bench_function("estimate_time", |b| {
        b.iter(|| estimate_time(black_box(137.5), black_box(50.0)));
    });
}

fn bench_plan_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_route");
    let planning = PlanningSettings::default();

    for stops in [10usize, 100, 1000].iter() {
        let request = RouteOptimizationRequest {
            start_location: Point::new(0.0, 0.0),
            end_location: Point::new(100.0, 100.0),
            delivery_points: (0..*stops)
                .map(|i| Point::new((i % 50) as f64, (i / 50) as f64))
                .collect(),
            vehicle_capacity: 1000.0,
            avg_speed_kmh: None,
        };

        group.bench_with_input(BenchmarkId::from_parameter(stops), &request, |b, req| {
            b.iter(|| plan_route(black_box(req), &planning));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate_request, bench_distance, bench_plan_route);
criterion_main!(benches);
