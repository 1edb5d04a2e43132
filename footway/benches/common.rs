#![allow(dead_code)]

use fastrand::Rng;
use footway::WeightedGraph;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Based on the implementation in footway::infra::proptest.

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

/// Random graph where each generated connection is a pair of opposite edges,
/// as in a map of footways.
pub fn footway_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> WeightedGraph<u32, f32> {
    let mut graph = WeightedGraph::with_capacity(vertex_count);

    for v in 0..vertex_count as u32 {
        graph.add_vertex(v);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let (u, v) = (u as u32, v as u32);
        let weight = rng.f32();

        graph.add_edge(&u, &v, weight);
        graph.add_edge(&v, &u, weight);
    }

    graph
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<u32, f32> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for v in 0..vertex_count as u32 {
        graph.add_node(v);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let (u, v) = (NodeIndex::new(u), NodeIndex::new(v));
        let weight = rng.f32();

        graph.add_edge(u, v, weight);
        graph.add_edge(v, u, weight);
    }

    graph
}
