//! End-to-end planner benchmarks: validation, Kruskal, and redundancy
//! selection together.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use gridspan_benches::{
    error::BenchSetupError,
    params::{GraphBenchParams, PlannerBenchParams},
    source::{MAX_BENCH_WEIGHT, connected_graph},
};
use gridspan_core::{GridError, GridPlannerBuilder, WeightRange};

/// Seed used for all benchmark graphs.
const SEED: u64 = 42;

/// Planner runs to benchmark.
const RUNS: &[PlannerBenchParams] = &[
    PlannerBenchParams {
        graph: GraphBenchParams::with_density(1_000, 4),
        redundancy: 0,
    },
    PlannerBenchParams {
        graph: GraphBenchParams::with_density(1_000, 4),
        redundancy: 100,
    },
    PlannerBenchParams {
        graph: GraphBenchParams::with_density(10_000, 4),
        redundancy: 1_000,
    },
];

fn plan_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("plan");
    group.sample_size(20);
    let weight_range = WeightRange::new(1, MAX_BENCH_WEIGHT).map_err(GridError::from)?;

    for &params in RUNS {
        let graph = connected_graph(params.graph, SEED)?;
        let planner = GridPlannerBuilder::new()
            .with_redundancy(params.redundancy)
            .with_weight_range(weight_range)
            .build()?;

        group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
            b.iter(|| planner.plan(graph));
        });
    }

    group.finish();
    Ok(())
}

fn plan(c: &mut Criterion) {
    if let Err(err) = plan_impl(c) {
        panic!("plan benchmark setup failed: {err}");
    }
}

criterion_group!(benches, plan);
criterion_main!(benches);
