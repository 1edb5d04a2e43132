#![no_main]

use libfuzzer_sys::fuzz_target;

use footway::{
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    WeightedGraph,
};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut graph = WeightedGraph::new();

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
