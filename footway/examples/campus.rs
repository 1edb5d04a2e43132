use footway::map::{Building, Coordinates, Footway, MapData, Navigator};

fn main() {
    let nodes = [
        (1, 41.8700, -87.6500),
        (2, 41.8700, -87.6490),
        (3, 41.8700, -87.6480),
        (4, 41.8690, -87.6480),
    ]
    .into_iter()
    .map(|(id, lat, lon)| (id, Coordinates::new(lat, lon)))
    .collect();

    let map = MapData {
        nodes,
        footways: vec![
            Footway {
                id: 10,
                nodes: vec![1, 2, 3],
            },
            Footway {
                id: 11,
                nodes: vec![3, 4],
            },
        ],
        buildings: vec![
            Building {
                fullname: "Science and Engineering Offices".to_string(),
                abbrev: "SEO".to_string(),
                coords: Coordinates::new(41.8701, -87.6501),
            },
            Building {
                fullname: "Student Center East".to_string(),
                abbrev: "SCE".to_string(),
                coords: Coordinates::new(41.8689, -87.6479),
            },
        ],
    };

    let navigator = Navigator::new(map);
    let (trip, route) = navigator.navigate("SEO", "Student Center").unwrap();

    println!(
        "{} -> {}: {:.3} miles",
        trip.start.abbrev, trip.destination.abbrev, route.distance
    );
    println!(
        "{}",
        route
            .path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("->")
    );
    // SEO -> SCE: 0.172 miles
    // 1->2->3->4
}
