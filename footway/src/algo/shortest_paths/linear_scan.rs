use std::cmp::Ordering;

use log::{debug, trace};

use crate::{
    core::{IdMap, VertexId, VertexIndex, Weight},
    graph::WeightedGraph,
};

use super::SearchState;

pub fn linear_scan<V, W>(
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

    // Terminates when all vertices are settled or the rest is unreachable.
    while let Some(vertex) = select_closest(ids, &state) {
        state.finalize(vertex);
        trace!("settled vertex {:?}", ids[vertex]);

        if goal == Some(vertex) {
            debug!("goal {:?} settled, stopping the search", ids[vertex]);
            return state;
        }

        for (next, weight) in graph.out_edges(vertex) {
            if !state.is_finalized(next) {
                state.relax(vertex, next, weight);
            }
        }
    }

    state.exhaust();
    state
}

/// Finds the unsettled vertex with the smallest finite distance, preferring
/// smaller identifiers on ties.
fn select_closest<V, W>(ids: &IdMap<V>, state: &SearchState<W>) -> Option<VertexIndex>
where
    V: VertexId,
    W: Weight,
{
    let mut closest: Option<(W::Ord, VertexIndex)> = None;

    for vertex in (0..ids.len()).map(VertexIndex::from_usize) {
        if state.is_finalized(vertex) || state.dist(vertex).is_inf() {
            continue;
        }

        let dist = W::Ord::from(state.dist(vertex).clone());

        let is_closer = match &closest {
            None => true,
            Some((closest_dist, closest_vertex)) => match dist.cmp(closest_dist) {
                Ordering::Less => true,
                Ordering::Equal => ids[vertex] < ids[*closest_vertex],
                Ordering::Greater => false,
            },
        };

        if is_closer {
            closest = Some((dist, vertex));
        }
    }

    closest.map(|(_, vertex)| vertex)
}
