mod common;

use common::{footway_random, petgraph_random, RANDOM_SEED};
use fastrand::Rng;
use footway::algo::{shortest_paths::Algo, ShortestPaths};
use petgraph::prelude::*;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.05, 0.25])]
fn footway_dijkstra_heap_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = footway_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        ShortestPaths::on(&graph)
            .using(Algo::BinaryHeap)
            .run(0)
    });
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn footway_dijkstra_linear_scan_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = footway_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        ShortestPaths::on(&graph)
            .using(Algo::LinearScan)
            .run(0)
    });
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.05, 0.25])]
fn footway_dijkstra_goal_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = footway_random(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let goal = N as u32 / 2;

    bencher.bench(|| ShortestPaths::on(&graph).goal(goal).run(0));
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.05, 0.25])]
fn petgraph_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = NodeIndex::new(0);

    bencher.bench(|| petgraph::algo::dijkstra(&graph, start, None, |e| *e.weight()));
}
