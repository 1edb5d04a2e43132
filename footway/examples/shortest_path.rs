use footway::{algo::ShortestPaths, WeightedGraph};

fn main() {
    let mut graph = WeightedGraph::new();

    // Roads between the cities go both ways, so each is added in both directions.
    for (from, to, km) in [
        ("Prague", "Bratislava", 328u32),
        ("Prague", "Nuremberg", 297),
        ("Prague", "Vienna", 293),
        ("Bratislava", "Vienna", 79),
        ("Nuremberg", "Munich", 170),
        ("Vienna", "Munich", 402),
        ("Vienna", "Florence", 863),
        ("Munich", "Florence", 646),
        ("Florence", "Rome", 278),
    ] {
        graph.add_edge_connecting(from, to, km);
        graph.add_edge_connecting(to, from, km);
    }

    // The search stops as soon as the distance to Prague is known.
    let shortest_paths = ShortestPaths::on(&graph).goal("Prague").run("Rome").unwrap();
    let route = shortest_paths.route(&"Prague").unwrap();

    println!(
        "{} km from Rome through {}",
        route.distance,
        route.path.join(" - ")
    );
    // 1391 km from Rome through Rome - Florence - Munich - Nuremberg - Prague
}
