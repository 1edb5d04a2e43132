use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{error::AddEdgeError, VertexId},
    graph::WeightedGraph,
};

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<V, W> {
    AddVertex(V),
    AddEdge(V, V, W),
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<W> {
    AddVertex(bool),
    AddEdge(Result<Option<W>, AddEdgeError<W>>),
}

impl<V: VertexId, W> MutOp<V, W> {
    pub fn apply(self, graph: &mut WeightedGraph<V, W>) -> MutOpResult<W> {
        match self {
            MutOp::AddVertex(vertex) => MutOpResult::AddVertex(graph.add_vertex(vertex)),
            MutOp::AddEdge(from, to, weight) => {
                MutOpResult::AddEdge(graph.try_add_edge(&from, &to, weight))
            }
        }
    }
}

pub struct MutOpsSeq<V, W>(pub Vec<MutOp<V, W>>);

impl<V, W> IntoIterator for MutOpsSeq<V, W> {
    type Item = MutOp<V, W>;
    type IntoIter = std::vec::IntoIter<MutOp<V, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V, W> MutOpsSeq<V, W>
where
    V: VertexId,
    W: fmt::Debug,
{
    pub fn replay(self, graph: &mut WeightedGraph<V, W>) {
        println!("let mut graph = WeightedGraph::new();");
        println!();

        for op in self {
            match &op {
                MutOp::AddVertex(vertex) => println!("graph.add_vertex({vertex:?});"),
                MutOp::AddEdge(from, to, weight) => {
                    println!("graph.add_edge(&{from:?}, &{to:?}, {weight:?});")
                }
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<V: fmt::Debug, W: fmt::Debug> fmt::Debug for MutOpsSeq<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_mut_ops_seq`")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    AddVertex,
    AddEdge,
}

impl<'a, V, W> Arbitrary<'a> for MutOpsSeq<V, W>
where
    V: Arbitrary<'a>,
    W: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let n_target = u.int_in_range(10..=1000)?;
        let r = u.nice_f64()?;

        let m_target = ((n_target * (n_target - 1) / 2) as f64 * r).round() as usize;

        let total = u.len();

        let mut n = 0usize;
        let mut m = 0usize;
        let mut seq = Vec::with_capacity(n_target);

        while !u.is_empty() {
            let rv = (n as f64 / n_target as f64).min(1.0);
            let re = (m as f64 / m_target.max(1) as f64).min(1.0);
            let r = (total - u.len()) as f64 / total as f64;

            let op = match arbitrary_op(u, rv, re, r) {
                Ok(op) => op,
                Err(_) => break,
            };

            match op {
                MutOp::AddVertex(_) => n += 1,
                MutOp::AddEdge(_, _, _) => m += 1,
            }

            seq.push(op);
        }

        Ok(MutOpsSeq(seq))
    }
}

fn arbitrary_op<'a, V, W>(
    u: &mut Unstructured<'a>,
    rv: f64,
    re: f64,
    r: f64,
) -> arbitrary::Result<MutOp<V, W>>
where
    V: Arbitrary<'a>,
    W: Arbitrary<'a>,
{
    // The more vertices are in the graph, the less is needed to add them. The
    // ratio is biased by the progress so that vertices come mostly at the
    // beginning while edges keep being added during the whole process.
    let wv = non_linear_decrease(0.4 * rv + 0.6 * r);
    let we = non_linear_decrease(0.6 * re + 0.4 * r).max(0.5);

    u.choose_weighted(&[OpKind::AddVertex, OpKind::AddEdge], &[wv, we])
        .and_then(|kind| match kind {
            OpKind::AddVertex => Ok(MutOp::AddVertex(u.arbitrary()?)),
            OpKind::AddEdge => Ok(MutOp::AddEdge(
                u.arbitrary()?,
                u.arbitrary()?,
                u.arbitrary()?,
            )),
        })
}

trait UnstructuredExt {
    fn nice_f64(&mut self) -> arbitrary::Result<f64>;
    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T>;
}

impl<'a> UnstructuredExt for Unstructured<'a> {
    fn nice_f64(&mut self) -> arbitrary::Result<f64> {
        const RESOLUTION: u8 = 100;
        let int = self.int_in_range(0..=RESOLUTION)?;
        Ok(int as f64 / RESOLUTION as f64)
    }

    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T> {
        if choices.is_empty() || choices.len() != weights.len() {
            return Err(arbitrary::Error::EmptyChoose);
        }

        let weight_sum = weights.iter().copied().sum::<f64>();

        let random = self.nice_f64()?;
        let bound = random * weight_sum;

        let mut acc = 0.0;
        for (choice, weight) in choices.iter().zip(weights.iter().copied()) {
            acc += weight;

            if acc >= bound {
                return Ok(choice);
            }
        }

        // Rounding errors in the sum.
        Ok(&choices[choices.len() - 1])
    }
}

// f(0) = 1, f(1) ~= 0.152
fn non_linear_decrease(x: f64) -> f64 {
    1.0 / (x + 1.0).powf(std::f64::consts::E)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use fastrand::Rng;

    use crate::{
        algo::shortest_paths::{Algo, ShortestPaths},
        core::error::AddEdgeErrorKind,
        infra::testing::check_consistency,
    };

    use super::*;

    #[test]
    fn apply_reports_outcome() {
        let mut graph = WeightedGraph::new();

        assert_eq!(MutOp::AddVertex(1i8).apply(&mut graph), MutOpResult::AddVertex(true));
        assert_eq!(MutOp::AddVertex(1i8).apply(&mut graph), MutOpResult::AddVertex(false));
        assert_eq!(MutOp::AddVertex(2i8).apply(&mut graph), MutOpResult::AddVertex(true));

        assert_eq!(
            MutOp::AddEdge(1, 2, 5u8).apply(&mut graph),
            MutOpResult::AddEdge(Ok(None))
        );
        assert_eq!(
            MutOp::AddEdge(1, 2, 7u8).apply(&mut graph),
            MutOpResult::AddEdge(Ok(Some(5)))
        );
        assert_eq!(
            MutOp::AddEdge(3, 2, 1u8).apply(&mut graph),
            MutOpResult::AddEdge(Err(AddEdgeError::new(1, AddEdgeErrorKind::SourceAbsent)))
        );
    }

    #[test]
    fn mut_ops_seq_arbitrary_sanity() {
        let mut frequency = HashMap::<_, usize>::new();
        let mut position = HashMap::<_, Vec<f64>>::new();

        let mut total = 0;

        // Try to collect operations frequency and position at which they occur
        // in the sequence from a few runs.
        for size in [500, 1000, 5000, 10000] {
            let mut raw = vec![0; size];

            for seed in [0, 3, 7, 13, 23, 42, 69, 123, 666, 1024] {
                let mut rng = Rng::with_seed(seed);
                rng.fill(&mut raw);

                let mut u = Unstructured::new(&raw);
                let seq: MutOpsSeq<i8, u8> = u.arbitrary().unwrap();

                let count = seq.0.len();
                total += count;

                for (i, op) in seq.into_iter().enumerate() {
                    let kind = match op {
                        MutOp::AddVertex(_) => OpKind::AddVertex,
                        MutOp::AddEdge(_, _, _) => OpKind::AddEdge,
                    };

                    *frequency.entry(kind).or_default() += 1;
                    position
                        .entry(kind)
                        .or_default()
                        .push(i as f64 / count as f64);
                }
            }
        }

        let vertex_share = frequency[&OpKind::AddVertex] as f64 / total as f64;
        let vertex_position = position[&OpKind::AddVertex].iter().sum::<f64>()
            / position[&OpKind::AddVertex].len() as f64;
        let edge_position = position[&OpKind::AddEdge].iter().sum::<f64>()
            / position[&OpKind::AddEdge].len() as f64;

        // Both kinds are well represented and vertices lean towards the
        // beginning of the process.
        assert!((0.1..=0.7).contains(&vertex_share), "{vertex_share}");
        assert!(vertex_position < edge_position);
    }

    #[test]
    fn mut_ops_seq_keeps_graph_consistent() {
        let mut raw = vec![0; 2000];
        let mut rng = Rng::with_seed(42);
        rng.fill(&mut raw);

        let mut u = Unstructured::new(&raw);
        let seq: MutOpsSeq<i8, u8> = u.arbitrary().unwrap();

        let mut graph = WeightedGraph::new();

        for op in seq {
            op.apply(&mut graph);
            assert_eq!(check_consistency(&graph), Ok(()));
        }

        // Widen the weights so that path distances cannot overflow.
        let graph = graph
            .edges()
            .map(|(u, v, w)| (*u, *v, u32::from(*w)))
            .collect::<WeightedGraph<_, _>>();

        if let Some(source) = graph.vertices().next().copied() {
            let heap = ShortestPaths::on(&graph)
                .using(Algo::BinaryHeap)
                .run(source)
                .unwrap();
            let scan = ShortestPaths::on(&graph)
                .using(Algo::LinearScan)
                .run(source)
                .unwrap();

            for v in graph.vertices() {
                assert_eq!(heap.route(v), scan.route(v));
            }
        }
    }

    #[test]
    #[ignore = "placeholder for fuzz findings"]
    fn fuzz_replay_mut_ops_seq() {
        let mut graph = WeightedGraph::new();

        MutOpsSeq(vec![
            MutOp::AddVertex(0i8),
            MutOp::AddEdge(0, 0, 0u8),
            MutOp::AddEdge(0, 1, 0),
        ])
        .replay(&mut graph);

        panic!("check_consistency is required for reproduction");
    }
}
