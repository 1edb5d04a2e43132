//! Find [single source shortest paths] and their distances in a graph.
//!
//! The search is Dijkstra's algorithm and requires non-negative edge weights;
//! negative weights are not detected and give meaningless results. When a
//! [goal](ShortestPathsBuilder::goal) is given, the search stops as soon as
//! the goal distance is settled.
//!
//! Among vertices with equal tentative distance, the one with the smallest
//! identifier is settled first. This makes the reconstructed paths
//! deterministic even when there are multiple shortest paths, regardless of
//! the [selection strategy](Algo).
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use footway::{algo::ShortestPaths, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new();
//!
//! graph.extend_with_edges([
//!     ("SEO", "SCE", 0.12),
//!     ("SCE", "SEO", 0.12),
//!     ("SCE", "LIB", 0.2),
//!     ("LIB", "SCE", 0.2),
//!     ("SEO", "LIB", 0.45),
//!     ("LIB", "SEO", 0.45),
//! ]);
//!
//! let shortest_paths = ShortestPaths::on(&graph).goal("LIB").run("SEO").unwrap();
//! let route = shortest_paths.route(&"LIB").unwrap();
//!
//! assert_eq!(route.path, vec!["SEO", "SCE", "LIB"]);
//! println!("{:.2} miles through {}", route.distance, route.path.join(" -> "));
//! ```

use std::iter::FusedIterator;

use fixedbitset::FixedBitSet;
use thiserror::Error;

use crate::{
    core::{IdMap, VertexId, VertexIndex, Weight},
    graph::WeightedGraph,
};

mod builder;
mod dijkstra;
mod linear_scan;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths<'a, V, W> {
    graph: &'a WeightedGraph<V, W>,
    source: VertexIndex,
    state: SearchState<W>,
}

impl<'a, V, W> ShortestPaths<'a, V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Source vertex where the search was started.
    pub fn source(&self) -> &V {
        &self.graph.ids()[self.source]
    }

    /// Returns `true` if the shortest distance to the vertex is known.
    pub fn is_settled(&self, vertex: &V) -> bool {
        self.graph
            .index_of(vertex)
            .is_some_and(|index| self.state.is_finalized(index))
    }

    /// Returns the number of vertices whose shortest distance is known.
    pub fn settled_count(&self) -> usize {
        self.state.finalized.count_ones(..)
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if it's not known.
    ///
    /// There are two causes why the distance between two vertices is not known:
    /// (1) the vertices are not connected, or (2) the
    /// [goal](ShortestPathsBuilder::goal) was reached before settling the given
    /// vertex.
    pub fn dist(&self, to: &V) -> Option<&W> {
        let index = self.graph.index_of(to)?;
        self.state
            .is_finalized(index)
            .then(|| self.state.dist(index))
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order, excluding the given vertex
    /// itself.
    ///
    /// The iterator is empty if the vertex is the source, was not reached or
    /// is not in the graph.
    pub fn reconstruct(&self, to: &V) -> PathReconstruction<'_, V> {
        PathReconstruction {
            curr: self.graph.index_of(to),
            pred: &self.state.pred,
            ids: self.graph.ids(),
        }
    }

    /// Returns the shortest route from the source to the given vertex.
    pub fn route(&self, to: &V) -> Result<Route<V, W>, Error> {
        let index = self.graph.index_of(to).ok_or(Error::VertexNotFound)?;

        if !self.state.is_finalized(index) {
            return Err(if self.state.exhausted {
                Error::Unreachable
            } else {
                Error::NotSettled
            });
        }

        let mut path = vec![to.clone()];
        path.extend(self.reconstruct(to).cloned());
        path.reverse();

        Ok(Route {
            distance: self.state.dist(index).clone(),
            path,
        })
    }
}

/// Finds the shortest route between two vertices.
///
/// This is a shorthand for running [`ShortestPaths`] with the destination as
/// the goal.
pub fn shortest_path<V, W>(
    graph: &WeightedGraph<V, W>,
    source: &V,
    dest: &V,
) -> Result<Route<V, W>, Error>
where
    V: VertexId,
    W: Weight,
{
    ShortestPaths::on(graph)
        .goal(dest.clone())
        .run(source.clone())?
        .route(dest)
}

/// Distance and ordered vertices of a shortest path.
///
/// The path always contains at least one vertex. A route from a vertex to
/// itself has zero distance and the path consists of that vertex only.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<V, W> {
    pub distance: W,
    pub path: Vec<V>,
}

impl<V, W> Route<V, W> {
    pub fn source(&self) -> &V {
        &self.path[0]
    }

    pub fn destination(&self) -> &V {
        &self.path[self.path.len() - 1]
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len() - 1
    }
}

/// Strategy for selecting the next vertex to settle in [`ShortestPaths`].
///
/// Both strategies settle vertices in the same order and thus produce the same
/// distances and paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    /// Binary heap with lazy deletion of outdated entries.
    ///
    /// Runs in _O((V + E) log V)_.
    #[default]
    BinaryHeap,

    /// Full scan over all unsettled vertices in every step.
    ///
    /// Runs in _O(V²)_, which can be competitive on small dense graphs.
    LinearScan,
}

/// The error encountered when querying [`ShortestPaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source, goal or queried vertex is not in the graph.
    #[error("vertex not found in the graph")]
    VertexNotFound,

    /// There is no path from the source to the vertex.
    #[error("destination unreachable")]
    Unreachable,

    /// The search stopped at its goal before settling the vertex.
    #[error("search stopped before settling the vertex")]
    NotSettled,
}

/// State of a single search, owned by its run.
#[derive(Debug, Clone)]
pub(crate) struct SearchState<W> {
    finalized: FixedBitSet,
    dist: Vec<W>,
    // Unreached vertices and the source point to themselves.
    pred: Vec<VertexIndex>,
    exhausted: bool,
}

impl<W: Weight> SearchState<W> {
    fn new(vertex_count: usize, source: VertexIndex) -> Self {
        let mut dist = vec![W::inf(); vertex_count];
        dist[source.as_usize()] = W::zero();

        Self {
            finalized: FixedBitSet::with_capacity(vertex_count),
            dist,
            pred: (0..vertex_count).map(VertexIndex::from_usize).collect(),
            exhausted: false,
        }
    }

    fn is_finalized(&self, vertex: VertexIndex) -> bool {
        self.finalized.contains(vertex.as_usize())
    }

    fn finalize(&mut self, vertex: VertexIndex) {
        self.finalized.insert(vertex.as_usize());
    }

    fn dist(&self, vertex: VertexIndex) -> &W {
        &self.dist[vertex.as_usize()]
    }

    /// Relaxation operation. If the distance through `from` is better than what
    /// we had so far, update it and return `true`.
    ///
    /// A distance that does not fit into `W` is unreachable.
    fn relax(&mut self, from: VertexIndex, to: VertexIndex, weight: &W) -> bool {
        let next_dist = self.dist(from).clone().saturating_add(weight.clone());

        if next_dist < self.dist[to.as_usize()] {
            self.dist[to.as_usize()] = next_dist;
            self.pred[to.as_usize()] = from;
            true
        } else {
            false
        }
    }

    /// Marks that no other vertex can be reached from the source.
    fn exhaust(&mut self) {
        self.exhausted = true;
    }
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a, V> {
    curr: Option<VertexIndex>,
    pred: &'a [VertexIndex],
    ids: &'a IdMap<V>,
}

impl<'a, V> Iterator for PathReconstruction<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr?;
        let prev = self.pred[curr.as_usize()];

        if prev == curr {
            self.curr = None;
            None
        } else {
            self.curr = Some(prev);
            Some(&self.ids[prev])
        }
    }
}

impl<'a, V> FusedIterator for PathReconstruction<'a, V> {}
