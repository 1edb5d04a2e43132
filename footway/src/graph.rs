//! Directed graph with weighted edges keyed by opaque vertex identifiers.
//!
//! # Examples
//!
//! ```
//! use footway::WeightedGraph;
//!
//! let mut graph = WeightedGraph::new();
//!
//! graph.add_vertex("library");
//! graph.add_vertex("gym");
//! graph.add_vertex("cafeteria");
//!
//! assert!(graph.add_edge(&"library", &"gym", 0.4));
//! assert!(graph.add_edge(&"gym", &"library", 0.4));
//! assert!(!graph.add_edge(&"library", &"dorms", 0.9));
//!
//! assert_eq!(graph.weight(&"library", &"gym"), Some(&0.4));
//! assert_eq!(graph.weight(&"library", &"cafeteria"), None);
//! assert_eq!(graph.edge_count(), 2);
//! ```

use std::{iter::FusedIterator, slice};

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind},
    IdMap, VertexId, VertexIndex,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Edge<W> {
    pub(crate) to: VertexIndex,
    pub(crate) weight: W,
}

/// Directed graph storing outgoing edges of each vertex.
///
/// Vertex identifiers are mapped to dense [indices](VertexIndex) on insertion
/// and the adjacency is addressed by these indices. There is at most one edge
/// for each ordered pair of vertices; adding it again overwrites its weight.
/// Outgoing edges of a vertex are kept sorted by the identifier of their
/// destination, which gives [`neighbors`](WeightedGraph::neighbors) its
/// canonical order for free.
///
/// Undirected connection requires adding two edges, one in each direction.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W> {
    ids: IdMap<V>,
    adjacency: Vec<Vec<Edge<W>>>,
    edge_count: usize,
}

impl<V, W> WeightedGraph<V, W> {
    pub fn new() -> Self {
        Self {
            ids: IdMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of directed edges. An undirected hop counts as two.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Iterates over vertex identifiers in the order they were added.
    pub fn vertices(&self) -> slice::Iter<'_, V> {
        self.ids.ids()
    }

    /// Iterates over all edges as `(from, to, weight)` triples, grouped by
    /// source vertex in insertion order.
    pub fn edges(&self) -> EdgesIter<'_, V, W> {
        EdgesIter {
            ids: &self.ids,
            adjacency: self.adjacency.iter().enumerate(),
            current: None,
        }
    }

    /// Returns the identifier of the vertex at given dense index.
    pub fn id(&self, index: VertexIndex) -> Option<&V> {
        self.ids.to_id(index)
    }

    pub(crate) fn ids(&self) -> &IdMap<V> {
        &self.ids
    }

    /// Outgoing edges of the vertex at given index, sorted by destination
    /// identifier.
    pub(crate) fn out_edges(
        &self,
        index: VertexIndex,
    ) -> impl Iterator<Item = (VertexIndex, &W)> {
        self.adjacency[index.as_usize()]
            .iter()
            .map(|edge| (edge.to, &edge.weight))
    }
}

impl<V: VertexId, W> WeightedGraph<V, W> {
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            ids: IdMap::with_capacity(vertex_capacity),
            adjacency: Vec::with_capacity(vertex_capacity),
            edge_count: 0,
        }
    }

    /// Adds the vertex if it is not present. Returns `true` if it was newly
    /// added.
    pub fn add_vertex(&mut self, id: V) -> bool {
        let (_, inserted) = self.ids.insert(id);

        if inserted {
            self.adjacency.push(Vec::new());
        }

        inserted
    }

    pub fn contains_vertex(&self, id: &V) -> bool {
        self.ids.contains(id)
    }

    /// Returns the dense index of given vertex.
    pub fn index_of(&self, id: &V) -> Option<VertexIndex> {
        self.ids.to_index(id)
    }

    /// Adds the directed edge or overwrites the weight of an existing one.
    ///
    /// On success, returns the weight that was overwritten, if any. Fails if
    /// any of the endpoints is not in the graph, handing the weight back.
    pub fn try_add_edge(
        &mut self,
        from: &V,
        to: &V,
        weight: W,
    ) -> Result<Option<W>, AddEdgeError<W>> {
        let Some(src) = self.ids.to_index(from) else {
            return Err(AddEdgeError::new(weight, AddEdgeErrorKind::SourceAbsent));
        };

        let Some(dst) = self.ids.to_index(to) else {
            return Err(AddEdgeError::new(weight, AddEdgeErrorKind::DestinationAbsent));
        };

        let ids = &self.ids;
        let edges = &mut self.adjacency[src.as_usize()];

        match edges.binary_search_by(|edge| ids[edge.to].cmp(to)) {
            Ok(pos) => Ok(Some(std::mem::replace(&mut edges[pos].weight, weight))),
            Err(pos) => {
                edges.insert(pos, Edge { to: dst, weight });
                self.edge_count += 1;
                Ok(None)
            }
        }
    }

    /// Adds the directed edge or overwrites the weight of an existing one.
    ///
    /// Returns `false` if any of the endpoints is not in the graph.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: W) -> bool {
        self.try_add_edge(from, to, weight).is_ok()
    }

    /// Adds the directed edge, adding its endpoints to the graph first if they
    /// are not present.
    pub fn add_edge_connecting(&mut self, from: V, to: V, weight: W) -> Option<W> {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        match self.try_add_edge(&from, &to, weight) {
            Ok(previous) => previous,
            Err(_) => unreachable!("both endpoints were just added"),
        }
    }

    pub fn extend_with_edges<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        for (from, to, weight) in iter {
            self.add_edge_connecting(from, to, weight);
        }
    }

    /// Returns the weight of the directed edge, or `None` if there is no such
    /// edge or any of the endpoints is not in the graph.
    pub fn weight(&self, from: &V, to: &V) -> Option<&W> {
        let src = self.ids.to_index(from)?;
        let edges = &self.adjacency[src.as_usize()];

        edges
            .binary_search_by(|edge| self.ids[edge.to].cmp(to))
            .ok()
            .map(|pos| &edges[pos].weight)
    }

    /// Iterates over vertices reachable from given vertex by one outgoing
    /// edge, in ascending order of identifiers.
    ///
    /// The iterator is empty if the vertex is not in the graph.
    pub fn neighbors(&self, id: &V) -> Neighbors<'_, V, W> {
        let edges: &[Edge<W>] = match self.ids.to_index(id) {
            Some(index) => &self.adjacency[index.as_usize()],
            None => &[],
        };

        Neighbors {
            ids: &self.ids,
            edges: edges.iter(),
        }
    }

    /// Returns the number of outgoing edges of given vertex, or zero if the
    /// vertex is not in the graph.
    pub fn out_degree(&self, id: &V) -> usize {
        self.ids
            .to_index(id)
            .map(|index| self.adjacency[index.as_usize()].len())
            .unwrap_or(0)
    }
}

impl<V, W> Default for WeightedGraph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two graphs are equal if they have the same vertices added in the same order
/// and the same edges.
impl<V: VertexId, W: PartialEq> PartialEq for WeightedGraph<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices().eq(other.vertices()) && self.edges().eq(other.edges())
    }
}

impl<V: VertexId, W> FromIterator<(V, V, W)> for WeightedGraph<V, W> {
    fn from_iter<I: IntoIterator<Item = (V, V, W)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend_with_edges(iter);
        graph
    }
}

pub struct Neighbors<'a, V, W> {
    ids: &'a IdMap<V>,
    edges: slice::Iter<'a, Edge<W>>,
}

impl<'a, V, W> Iterator for Neighbors<'a, V, W> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.edges.next().map(|edge| &self.ids[edge.to])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl<'a, V, W> ExactSizeIterator for Neighbors<'a, V, W> {}

impl<'a, V, W> FusedIterator for Neighbors<'a, V, W> {}

pub struct EdgesIter<'a, V, W> {
    ids: &'a IdMap<V>,
    adjacency: std::iter::Enumerate<slice::Iter<'a, Vec<Edge<W>>>>,
    current: Option<(VertexIndex, slice::Iter<'a, Edge<W>>)>,
}

impl<'a, V, W> Iterator for EdgesIter<'a, V, W> {
    type Item = (&'a V, &'a V, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((from, edges)) = self.current.as_mut() {
                if let Some(edge) = edges.next() {
                    return Some((&self.ids[*from], &self.ids[edge.to], &edge.weight));
                }
            }

            let (index, edges) = self.adjacency.next()?;
            self.current = Some((VertexIndex::from_usize(index), edges.iter()));
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn create_triangle() -> WeightedGraph<char, u32> {
        let mut graph = WeightedGraph::new();

        graph.add_vertex('A');
        graph.add_vertex('B');
        graph.add_vertex('C');

        graph.add_edge(&'A', &'B', 1);
        graph.add_edge(&'B', &'C', 2);
        graph.add_edge(&'A', &'C', 5);

        graph
    }

    #[test]
    fn add_vertex_once() {
        let mut graph = WeightedGraph::<i64, f64>::new();

        assert!(graph.add_vertex(5));
        assert!(graph.add_vertex(-1));
        assert!(!graph.add_vertex(5));

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec![5, -1]);
        assert!(graph.contains_vertex(&-1));
        assert!(!graph.contains_vertex(&0));
    }

    #[test]
    fn add_edge_missing_endpoint() {
        let mut graph = create_triangle();

        assert!(!graph.add_edge(&'A', &'D', 3));
        assert!(!graph.add_edge(&'D', &'A', 3));

        assert_matches!(
            graph.try_add_edge(&'D', &'A', 3),
            Err(AddEdgeError {
                weight: 3,
                kind: AddEdgeErrorKind::SourceAbsent
            })
        );
        assert_matches!(
            graph.try_add_edge(&'A', &'D', 4),
            Err(AddEdgeError {
                weight: 4,
                kind: AddEdgeErrorKind::DestinationAbsent
            })
        );

        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn add_edge_idempotent() {
        let mut graph = create_triangle();

        assert!(graph.add_edge(&'C', &'A', 7));
        assert_eq!(graph.edge_count(), 4);

        assert!(graph.add_edge(&'C', &'A', 7));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn add_edge_overwrite() {
        let mut graph = create_triangle();

        assert_eq!(graph.try_add_edge(&'A', &'B', 10), Ok(Some(1)));

        assert_eq!(graph.weight(&'A', &'B'), Some(&10));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(&'A').count(), 2);
    }

    #[test]
    fn weight_absent_vs_zero() {
        let mut graph = create_triangle();
        graph.add_edge(&'C', &'B', 0);

        assert_eq!(graph.weight(&'C', &'B'), Some(&0));
        assert_eq!(graph.weight(&'B', &'A'), None);
        assert_eq!(graph.weight(&'X', &'A'), None);
        assert_eq!(graph.weight(&'A', &'X'), None);
    }

    #[test]
    fn directed() {
        let graph = create_triangle();

        assert_eq!(graph.weight(&'A', &'B'), Some(&1));
        assert_eq!(graph.weight(&'B', &'A'), None);
        assert_eq!(graph.neighbors(&'C').count(), 0);
    }

    #[test]
    fn neighbors_sorted() {
        let mut graph = WeightedGraph::new();

        for id in [40u64, 10, 30, 20] {
            graph.add_vertex(id);
        }

        graph.add_edge(&40, &30, 1.0);
        graph.add_edge(&40, &10, 1.0);
        graph.add_edge(&40, &20, 1.0);

        assert_eq!(graph.neighbors(&40).copied().collect::<Vec<_>>(), vec![10, 20, 30]);
        assert_eq!(graph.neighbors(&40).len(), 3);
        assert_eq!(graph.out_degree(&40), 3);
    }

    #[test]
    fn neighbors_absent() {
        let graph = create_triangle();

        assert_eq!(graph.neighbors(&'Z').next(), None);
        assert_eq!(graph.out_degree(&'Z'), 0);
    }

    #[test]
    fn edges_iter() {
        let graph = create_triangle();

        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(&'A', &'B', &1), (&'A', &'C', &5), (&'B', &'C', &2)]
        );
    }

    #[test]
    fn extend_connecting() {
        let graph: WeightedGraph<&str, u32> = [("x", "y", 3), ("y", "x", 3), ("y", "z", 1)]
            .into_iter()
            .collect();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.index_of(&"z"), Some(VertexIndex::from_usize(2)));
        assert_eq!(graph.id(VertexIndex::from_usize(1)), Some(&"y"));
    }

    #[test]
    fn clone_is_independent() {
        let graph = create_triangle();
        let mut copy = graph.clone();

        copy.add_edge(&'C', &'A', 4);

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(copy.edge_count(), 4);
        assert_eq!(copy.weight(&'A', &'C'), graph.weight(&'A', &'C'));
    }

    #[test]
    fn equality_respects_insertion_order() {
        let graph = create_triangle();

        let mut same = create_triangle();
        assert_eq!(graph, same);

        same.add_edge(&'C', &'A', 4);
        assert_ne!(graph, same);

        let mut reordered = WeightedGraph::new();
        for v in ['B', 'A', 'C'] {
            reordered.add_vertex(v);
        }
        for (u, v, w) in graph.edges() {
            reordered.add_edge(u, v, *w);
        }

        assert_eq!(reordered.edge_count(), graph.edge_count());
        assert_ne!(graph, reordered);
    }
}
