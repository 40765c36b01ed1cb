//! Throughput of the full request pipeline against a populated city.

use criterion::{criterion_group, criterion_main, Criterion};
use nearcycle_core::{Location, MaterialType};
use nearcycle_engine::{MatchConfig, MatchRequest, MatchService};
use nearcycle_test_utils::{buyer_at, destination, directory_with, seller_at};
use rand::Rng;
use std::sync::Arc;

fn populated_service(buyer_count: u64) -> MatchService {
    let origin = Location::new(12.97, 77.59).unwrap();
    let mut rng = rand::rng();
    let buyers = (0..buyer_count)
        .map(|i| {
            let bearing = rng.random_range(0.0..360.0);
            let distance = rng.random_range(0.1..60.0);
            let material = MaterialType::ALL[(i % 6) as usize];
            buyer_at(
                1000 + i,
                &format!("org-{i}"),
                material,
                destination(&origin, bearing, distance),
            )
        })
        .collect();
    let dir = directory_with(vec![seller_at(1, "bench@example.com", origin)], buyers);
    MatchService::start(MatchConfig::default(), Arc::new(dir)).expect("valid default config")
}

fn bench_find_buyers(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_buyers");
    for buyer_count in [100u64, 1_000, 10_000] {
        let service = populated_service(buyer_count);
        let narrow = MatchRequest {
            requester_email: "bench@example.com".to_string(),
            material: "plastic".to_string(),
            range: Some("1-5 km".to_string()),
        };
        let wide = MatchRequest {
            requester_email: "bench@example.com".to_string(),
            material: "any".to_string(),
            range: Some("10-50 km".to_string()),
        };
        group.bench_function(format!("narrow/{buyer_count}"), |b| {
            b.iter(|| service.find_buyers(&narrow))
        });
        group.bench_function(format!("wide/{buyer_count}"), |b| {
            b.iter(|| service.find_buyers(&wide))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_buyers);
criterion_main!(benches);
