use std::fmt;

use thiserror::Error;

use crate::{
    core::{VertexId, VertexIndex},
    graph::WeightedGraph,
};

pub fn create_complete<W: Clone>(vertex_count: usize, weight: W) -> WeightedGraph<usize, W> {
    let mut graph = WeightedGraph::with_capacity(vertex_count);

    for v in 0..vertex_count {
        graph.add_vertex(v);
    }

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u != v {
                graph.add_edge(&u, &v, weight.clone());
            }
        }
    }

    graph
}

pub fn create_path<W: Clone>(vertex_count: usize, weight: W) -> WeightedGraph<usize, W> {
    let mut graph = WeightedGraph::with_capacity(vertex_count);

    for v in 0..vertex_count {
        graph.add_vertex(v);
    }

    for v in 1..vertex_count {
        graph.add_edge(&(v - 1), &v, weight.clone());
        graph.add_edge(&v, &(v - 1), weight.clone());
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("sum of out degrees ({0}) is not equal to edge count ({1})")]
    OutDegreeSum(usize, usize),
    #[error("vertex at index {0} does not map back to its index")]
    IndexMismatch(usize),
    #[error("edge {0} references a vertex that is not in the graph")]
    DanglingEdge(String),
    #[error("neighbors of vertex {0} are not strictly ascending")]
    NeighborsUnordered(String),
    #[error("weight lookup of edge {0} does not match the stored weight")]
    WeightMismatch(String),
}

pub fn check_consistency<V, W>(graph: &WeightedGraph<V, W>) -> Result<(), ConsistencyCheckError>
where
    V: VertexId,
    W: PartialEq,
{
    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();

    cmp(
        graph.vertices().count(),
        vertex_count,
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;
    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    let out_deg_sum = graph
        .vertices()
        .map(|id| graph.out_degree(id))
        .sum::<usize>();

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    cmp(out_deg_sum, edge_count, ConsistencyCheckError::OutDegreeSum)?;

    for (i, id) in graph.vertices().enumerate() {
        if graph.index_of(id) != Some(VertexIndex::from_usize(i)) || graph.id(i.into()) != Some(id)
        {
            return Err(ConsistencyCheckError::IndexMismatch(i));
        }

        let neighbors = graph.neighbors(id).collect::<Vec<_>>();
        if neighbors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConsistencyCheckError::NeighborsUnordered(format!("{id:?}")));
        }
    }

    for (from, to, weight) in graph.edges() {
        if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
            return Err(ConsistencyCheckError::DanglingEdge(edge_name(from, to)));
        }

        if graph.weight(from, to) != Some(weight) {
            return Err(ConsistencyCheckError::WeightMismatch(edge_name(from, to)));
        }
    }

    Ok(())
}

fn cmp<F>(lhs: usize, rhs: usize, err: F) -> Result<(), ConsistencyCheckError>
where
    F: FnOnce(usize, usize) -> ConsistencyCheckError,
{
    if lhs == rhs {
        Ok(())
    } else {
        Err(err(lhs, rhs))
    }
}

fn edge_name<V: fmt::Debug>(from: &V, to: &V) -> String {
    format!("{from:?} -> {to:?}")
}
