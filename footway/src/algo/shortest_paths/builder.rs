use crate::{
    core::{VertexId, Weight},
    graph::WeightedGraph,
};

use super::{dijkstra::dijkstra, linear_scan::linear_scan, Algo, Error, ShortestPaths};

pub struct ShortestPathsBuilder<'a, V, W> {
    graph: &'a WeightedGraph<V, W>,
    goal: Option<V>,
    algo: Algo,
}

impl<'a, V, W> ShortestPaths<'a, V, W>
where
    V: VertexId,
    W: Weight,
{
    pub fn on(graph: &'a WeightedGraph<V, W>) -> ShortestPathsBuilder<'a, V, W> {
        ShortestPathsBuilder {
            graph,
            goal: None,
            algo: Algo::default(),
        }
    }
}

impl<'a, V, W> ShortestPathsBuilder<'a, V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Stops the search as soon as the distance to the goal is settled.
    pub fn goal(self, goal: V) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    pub fn using(self, algo: Algo) -> Self {
        Self { algo, ..self }
    }

    pub fn run(self, source: V) -> Result<ShortestPaths<'a, V, W>, Error> {
        let ShortestPathsBuilder { graph, goal, algo } = self;

        let source = graph.index_of(&source).ok_or(Error::VertexNotFound)?;
        let goal = goal
            .map(|goal| graph.index_of(&goal).ok_or(Error::VertexNotFound))
            .transpose()?;

        let state = match algo {
            Algo::BinaryHeap => dijkstra(graph, source, goal),
            Algo::LinearScan => linear_scan(graph, source, goal),
        };

        Ok(ShortestPaths {
            graph,
            source,
            state,
        })
    }
}
