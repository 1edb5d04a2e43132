use log::{debug, warn};
use rustc_hash::FxHashSet;

use crate::graph::WeightedGraph;

use super::{distance_miles, MapData, NodeId};

/// Graph of walkable connections between map points.
#[derive(Debug, Clone)]
pub struct Walkways {
    pub graph: WeightedGraph<NodeId, f64>,
    /// First and last points of all footways, deduplicated, in the order of
    /// first appearance.
    pub endpoints: Vec<NodeId>,
}

/// Builds the walking graph from map data.
///
/// Every map point becomes a vertex. Each pair of consecutive points on a
/// footway is connected by two opposite edges weighted by the distance
/// between the points in miles. Hops that refer to points missing in the map
/// are skipped.
pub fn build_graph(map: &MapData) -> Walkways {
    let mut graph = WeightedGraph::with_capacity(map.nodes.len());

    for &id in map.nodes.keys() {
        graph.add_vertex(id);
    }

    let mut skipped = 0;

    for footway in &map.footways {
        for hop in footway.nodes.windows(2) {
            let (from, to) = (hop[0], hop[1]);

            let (Some(from_coords), Some(to_coords)) = (map.coords(from), map.coords(to)) else {
                warn!(
                    "footway {} refers to unknown point in hop {} -> {}, skipping",
                    footway.id, from, to
                );
                skipped += 1;
                continue;
            };

            let distance = distance_miles(&from_coords, &to_coords);
            graph.add_edge(&from, &to, distance);
            graph.add_edge(&to, &from, distance);
        }
    }

    let mut seen = FxHashSet::default();
    let endpoints = map
        .footways
        .iter()
        .filter_map(|footway| footway.endpoints())
        .flat_map(|(first, last)| [first, last])
        .filter(|id| graph.contains_vertex(id))
        .filter(|&id| seen.insert(id))
        .collect::<Vec<_>>();

    debug!(
        "built graph with {} vertices, {} edges and {} footway endpoints ({} hops skipped)",
        graph.vertex_count(),
        graph.edge_count(),
        endpoints.len(),
        skipped
    );

    Walkways { graph, endpoints }
}
