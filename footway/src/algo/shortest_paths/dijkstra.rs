use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use log::{debug, trace};

use crate::{
    core::{VertexId, VertexIndex, Weight},
    graph::WeightedGraph,
};

use super::SearchState;

// Queue entry ordered by distance, then by vertex identifier.
struct Candidate<'a, V, W: Weight> {
    dist: W::Ord,
    id: &'a V,
    index: VertexIndex,
}

impl<'a, V, W: Weight> Candidate<'a, V, W> {
    fn new(dist: W, id: &'a V, index: VertexIndex) -> Self {
        Self {
            dist: dist.into(),
            id,
            index,
        }
    }
}

impl<'a, V: Ord, W: Weight> PartialEq for Candidate<'a, V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<'a, V: Ord, W: Weight> Eq for Candidate<'a, V, W> {}

impl<'a, V: Ord, W: Weight> PartialOrd for Candidate<'a, V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, V: Ord, W: Weight> Ord for Candidate<'a, V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .cmp(&other.dist)
            .then_with(|| self.id.cmp(other.id))
    }
}

pub fn dijkstra<V, W>(
    graph: &WeightedGraph<V, W>,
    source: VertexIndex,
    goal: Option<VertexIndex>,
) -> SearchState<W>
where
    V: VertexId,
    W: Weight,
{
    let ids = graph.ids();
    let mut state = SearchState::new(graph.vertex_count(), source);
    let mut queue = BinaryHeap::new();

    queue.push(Reverse(Candidate::new(W::zero(), &ids[source], source)));

    while let Some(Reverse(Candidate { index: vertex, .. })) = queue.pop() {
        // This can happen due to duplication of vertices when doing relaxation
        // in our implementation.
        if state.is_finalized(vertex) {
            continue;
        }

        state.finalize(vertex);
        trace!("settled vertex {:?}", ids[vertex]);

        if goal == Some(vertex) {
            debug!("goal {:?} settled, stopping the search", ids[vertex]);
            return state;
        }

        for (next, weight) in graph.out_edges(vertex) {
            if state.is_finalized(next) {
                continue;
            }

            if state.relax(vertex, next, weight) {
                // A textbook version of the algorithm would update the priority
                // of `next`. Adding it as a new item causes duplicities which
                // is unfortunate for dense graphs, but should be fine in
                // practice.
                queue.push(Reverse(Candidate::new(
                    state.dist(next).clone(),
                    &ids[next],
                    next,
                )));
            }
        }
    }

    state.exhaust();
    state
}
