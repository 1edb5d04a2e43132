#![no_main]

use libfuzzer_sys::fuzz_target;

use footway::{
    algo::shortest_paths::{Algo, ShortestPaths},
    infra::arbitrary::MutOpsSeq,
    WeightedGraph,
};

fuzz_target!(|input: (MutOpsSeq<i8, u8>, i8)| {
    let (ops, source) = input;
    let mut graph = WeightedGraph::new();

    for op in ops {
        op.apply(&mut graph);
    }

    // Widen the weights so that path distances cannot overflow.
    let graph = graph
        .edges()
        .map(|(u, v, w)| (*u, *v, u32::from(*w)))
        .collect::<WeightedGraph<_, _>>();

    let Ok(heap) = ShortestPaths::on(&graph).using(Algo::BinaryHeap).run(source) else {
        return;
    };
    let scan = ShortestPaths::on(&graph)
        .using(Algo::LinearScan)
        .run(source)
        .unwrap();

    for v in graph.vertices() {
        let route = heap.route(v);
        assert_eq!(route, scan.route(v));

        if let Ok(route) = route {
            let sum = route
                .path
                .windows(2)
                .map(|hop| *graph.weight(&hop[0], &hop[1]).unwrap())
                .sum::<u32>();

            assert_eq!(sum, route.distance);
        }
    }
});
