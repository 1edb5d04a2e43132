//! Strategies generating random weighted graphs for property-based tests.
//!
//! The generated graphs have vertex identifiers `0..n` that are added to the
//! graph in shuffled order, so that identifier order and insertion order
//! generally disagree.

use std::fmt;

use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::graph::WeightedGraph;

/// Graphs in which every connection is a single directed edge.
pub fn graph_directed<W: Strategy>(weight: W) -> GraphStrategy<W> {
    GraphStrategy::new(weight, true)
}

/// Graphs in which every connection is a pair of opposite edges with the same
/// weight.
pub fn graph_undirected<W: Strategy>(weight: W) -> GraphStrategy<W> {
    GraphStrategy::new(weight, false)
}

pub struct GraphStrategy<W: Strategy> {
    weight: W,
    directed: bool,
    params: StrategyParams,
}

impl<W: Strategy> fmt::Debug for GraphStrategy<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("weight", &self.weight)
            .field("directed", &self.directed)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<W: Strategy> GraphStrategy<W> {
    pub fn new(weight: W, directed: bool) -> Self {
        Self::with_params(weight, directed, StrategyParams::default())
    }

    pub fn with_params(weight: W, directed: bool, params: StrategyParams) -> Self {
        Self {
            weight,
            directed,
            params,
        }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph_directed(0..10u32).max_size(100).sparse()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
}

#[derive(Debug)]
pub struct StrategyParams {
    max_size: usize,
    allow_loops: bool,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 512,
            allow_loops: false,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.05)
    }
}

impl<W: Strategy> Strategy for GraphStrategy<W> {
    type Tree = GraphValueTree<W::Tree>;
    type Value = WeightedGraph<u32, W::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(0..=self.params.max_size);
        let p = runner.rng().gen::<f32>() * self.params.density;

        // Fisher-Yates shuffle of the insertion order.
        let mut order = (0..n).collect::<Vec<_>>();
        for i in (1..n).rev() {
            let j = runner.rng().gen_range(0..=i);
            order.swap(i, j);
        }

        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf

        let m_guess = if n > 0 {
            ((n * (n - 1) / 2) as f32 * p).round() as usize
        } else {
            0
        };
        let mut edges = Vec::with_capacity(m_guess);

        let mut v = 1;
        let mut w = usize::MAX; // -1

        while v < n {
            let r: f32 = runner.rng().gen();
            w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

            if self.params.allow_loops {
                // Using `w > v` instead of `w >= v` to allow loops.
                while w > v && v < n {
                    w -= v;
                    v += 1;
                }
            } else {
                while w >= v && v < n {
                    w -= v;
                    v += 1;
                }
            }

            if v < n {
                let weight = self.weight.new_tree(runner)?;

                // In half of the cases, swap the vertices so that directed
                // edges go both from lower to higher and from higher to lower.
                let (s, t) = if runner.rng().gen_bool(0.5) {
                    (w, v)
                } else {
                    (v, w)
                };

                edges.push((s, t, weight));
            }
        }

        Ok(GraphValueTree {
            directed: self.directed,
            order,
            edges,
            removed_vertices: FxHashSet::default(),
            removed_edges: FxHashSet::default(),
            command: Shrink::Vertex(0),
            previous: None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shrink {
    Vertex(usize),
    Edge(usize),
    Weight(usize),
    Done,
}

/// Value tree of [`GraphStrategy`].
///
/// Shrinking first tries to remove vertices one by one, then edges one by one,
/// and finally simplifies the weights of the remaining edges. The remaining
/// vertices are always relabeled to `0..n`.
#[derive(Debug, Clone)]
pub struct GraphValueTree<W: ValueTree> {
    directed: bool,
    // Vertex `order[i]` is the `i`-th to be added to the graph.
    order: Vec<usize>,
    edges: Vec<(usize, usize, W)>,
    removed_vertices: FxHashSet<usize>,
    removed_edges: FxHashSet<usize>,
    command: Shrink,
    previous: Option<Shrink>,
}

impl<W: ValueTree> GraphValueTree<W> {
    fn vertex_exists(&self, v: usize) -> bool {
        !self.removed_vertices.contains(&v)
    }

    fn edge_exists(&self, e: usize) -> bool {
        let (src, dst, _) = &self.edges[e];
        !self.removed_edges.contains(&e) && self.vertex_exists(*src) && self.vertex_exists(*dst)
    }
}

impl<W: ValueTree> ValueTree for GraphValueTree<W> {
    type Value = WeightedGraph<u32, W::Value>;

    fn current(&self) -> Self::Value {
        let n = self.order.len();

        let mut labels = vec![None; n];
        let mut next_label = 0u32;

        for (v, label) in labels.iter_mut().enumerate() {
            if self.vertex_exists(v) {
                *label = Some(next_label);
                next_label += 1;
            }
        }

        let mut graph = WeightedGraph::with_capacity(next_label as usize);

        for &v in self.order.iter() {
            if let Some(label) = labels[v] {
                graph.add_vertex(label);
            }
        }

        for (e, (src, dst, weight)) in self.edges.iter().enumerate() {
            if !self.edge_exists(e) {
                continue;
            }

            if let (Some(src), Some(dst)) = (labels[*src], labels[*dst]) {
                graph.add_edge(&src, &dst, weight.current());

                if !self.directed {
                    graph.add_edge(&dst, &src, weight.current());
                }
            }
        }

        graph
    }

    fn simplify(&mut self) -> bool {
        loop {
            match self.command {
                Shrink::Vertex(v) => {
                    if v >= self.order.len() {
                        self.command = Shrink::Edge(0);
                    } else {
                        self.command = Shrink::Vertex(v + 1);

                        if self.vertex_exists(v) {
                            self.removed_vertices.insert(v);
                            self.previous = Some(Shrink::Vertex(v));
                            return true;
                        }
                    }
                }
                Shrink::Edge(e) => {
                    if e >= self.edges.len() {
                        self.command = Shrink::Weight(0);
                    } else {
                        self.command = Shrink::Edge(e + 1);

                        if self.edge_exists(e) {
                            self.removed_edges.insert(e);
                            self.previous = Some(Shrink::Edge(e));
                            return true;
                        }
                    }
                }
                Shrink::Weight(e) => {
                    if e >= self.edges.len() {
                        self.command = Shrink::Done;
                    } else if self.edge_exists(e) && self.edges[e].2.simplify() {
                        self.previous = Some(Shrink::Weight(e));
                        return true;
                    } else {
                        self.command = Shrink::Weight(e + 1);
                    }
                }
                Shrink::Done => return false,
            }
        }
    }

    fn complicate(&mut self) -> bool {
        match self.previous.take() {
            None | Some(Shrink::Done) => false,
            Some(Shrink::Vertex(v)) => {
                self.removed_vertices.remove(&v);
                true
            }
            Some(Shrink::Edge(e)) => {
                self.removed_edges.remove(&e);
                true
            }
            Some(Shrink::Weight(e)) => {
                if self.edges[e].2.complicate() {
                    self.previous = Some(Shrink::Weight(e));
                    true
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::{strategy::check_strategy_sanity, test_runner::TestRunner};

    use crate::infra::testing::check_consistency;

    use super::*;

    #[test]
    #[ignore = "takes too long, run it only when the strategy is changed"]
    fn graph_strategy_sanity() {
        check_strategy_sanity(graph_undirected(0..100u32).max_size(16), None);
    }

    #[test]
    fn vertices_labeled_densely() {
        let strategy = graph_directed(0..100u32).max_size(32);
        let mut runner = TestRunner::deterministic();

        for _ in 0..16 {
            let graph = strategy.new_tree(&mut runner).unwrap().current();
            let n = graph.vertex_count() as u32;

            let mut ids = graph.vertices().copied().collect::<Vec<_>>();
            ids.sort_unstable();

            assert_eq!(ids, (0..n).collect::<Vec<_>>());
            assert_eq!(check_consistency(&graph), Ok(()));
        }
    }

    #[test]
    fn undirected_edges_paired() {
        let strategy = graph_undirected(0..100u32).max_size(32);
        let mut runner = TestRunner::deterministic();

        for _ in 0..16 {
            let graph = strategy.new_tree(&mut runner).unwrap().current();

            for (u, v, w) in graph.edges() {
                assert_eq!(graph.weight(v, u), Some(w));
            }
        }
    }

    #[test]
    fn simplifies_structure_and_data() {
        let strategy = graph_undirected(0..100u32).max_size(64);
        let mut runner = TestRunner::deterministic();

        let mut tree = loop {
            let tree = strategy.new_tree(&mut runner).unwrap();
            if tree.current().edge_count() > 0 {
                break tree;
            }
        };

        loop {
            let graph = tree.current();

            if graph.vertex_count() < 1 || graph.edge_count() < 1 {
                if !tree.complicate() {
                    break;
                }
            } else if !tree.simplify() {
                break;
            }
        }

        let graph = tree.current();

        // No loops => two vertices connected in both directions.
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 2);

        // Weights simplified too.
        for (_, _, weight) in graph.edges() {
            assert_eq!(*weight, 0);
        }
    }
}
