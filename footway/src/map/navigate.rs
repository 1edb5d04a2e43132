use log::debug;
use thiserror::Error;

use crate::algo::{
    nearest::{self, nearest},
    shortest_paths::{self, shortest_path, Route},
};

use super::{build_graph, distance_miles, Building, Coordinates, MapData, NodeId, Walkways};

/// The error encountered during [`Navigator::navigate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("start building not found")]
    StartNotFound,

    #[error("destination building not found")]
    DestinationNotFound,

    #[error("{0}")]
    Nearest(#[from] nearest::Error),

    #[error("{0}")]
    ShortestPath(#[from] shortest_paths::Error),
}

/// A building snapped to a graph vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapped {
    pub node: NodeId,
    pub coords: Coordinates,
    /// Distance between the building and the vertex in miles.
    pub offset: f64,
}

/// Start and destination buildings resolved to graph vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip<'a> {
    pub start: &'a Building,
    pub destination: &'a Building,
    pub start_node: Snapped,
    pub destination_node: Snapped,
}

/// Answers building to building walking queries on a map.
#[derive(Debug, Clone)]
pub struct Navigator {
    map: MapData,
    walkways: Walkways,
}

impl Navigator {
    pub fn new(map: MapData) -> Self {
        let walkways = build_graph(&map);
        Self { map, walkways }
    }

    pub fn map(&self) -> &MapData {
        &self.map
    }

    pub fn walkways(&self) -> &Walkways {
        &self.walkways
    }

    /// Looks up both buildings and snaps them to the closest footway
    /// endpoints.
    pub fn locate(&self, start: &str, destination: &str) -> Result<Trip<'_>, Error> {
        let start = self.map.find_building(start).ok_or(Error::StartNotFound)?;
        let destination = self
            .map
            .find_building(destination)
            .ok_or(Error::DestinationNotFound)?;

        Ok(Trip {
            start,
            destination,
            start_node: self.snap(&start.coords)?,
            destination_node: self.snap(&destination.coords)?,
        })
    }

    /// Finds the shortest walking route between the snapped vertices.
    pub fn route(&self, trip: &Trip<'_>) -> Result<Route<NodeId, f64>, Error> {
        let route = shortest_path(
            &self.walkways.graph,
            &trip.start_node.node,
            &trip.destination_node.node,
        )?;

        debug!(
            "route from {} to {}: {:.4} miles in {} hops",
            trip.start.abbrev,
            trip.destination.abbrev,
            route.distance,
            route.hops()
        );

        Ok(route)
    }

    pub fn navigate(
        &self,
        start: &str,
        destination: &str,
    ) -> Result<(Trip<'_>, Route<NodeId, f64>), Error> {
        let trip = self.locate(start, destination)?;
        let route = self.route(&trip)?;
        Ok((trip, route))
    }

    fn snap(&self, coords: &Coordinates) -> Result<Snapped, Error> {
        let candidates = self
            .walkways
            .endpoints
            .iter()
            .filter_map(|&node| Some((node, self.map.coords(node)?)));

        let closest = nearest(coords, candidates, distance_miles)?;

        Ok(Snapped {
            node: closest.vertex,
            // Endpoints are filtered to the points with known coordinates.
            coords: self.map.coords(closest.vertex).unwrap_or_default(),
            offset: closest.distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::map::tests::create_campus;

    use super::*;

    #[test]
    fn navigate_between_buildings() {
        let navigator = Navigator::new(create_campus());
        let (trip, route) = navigator.navigate("SEO", "SCE").unwrap();

        assert_eq!(trip.start.abbrev, "SEO");
        assert_eq!(trip.start_node.node, 1);
        assert_eq!(trip.destination_node.node, 5);

        // The way through 2 and 3 is about 0.172 miles, the way through 4 is
        // about 0.241 miles.
        assert_eq!(route.path, vec![1, 2, 3, 5]);
        assert!((route.distance - 0.1722).abs() < 1e-3, "{}", route.distance);
    }

    #[test]
    fn snaps_only_to_endpoints() {
        let navigator = Navigator::new(create_campus());
        let trip = navigator.locate("ERF", "SEO").unwrap();

        // The building is exactly at point 2, which is in the middle of a
        // footway.
        assert_ne!(trip.start_node.node, 2);
        assert!(trip.start_node.offset > 0.0);
    }

    #[test]
    fn same_building() {
        let navigator = Navigator::new(create_campus());
        let (_, route) = navigator.navigate("LIB", "Library").unwrap();

        assert_eq!(route.path, vec![7]);
        assert_eq!(route.distance, 0.0);
    }

    #[test]
    fn disconnected_unreachable() {
        let navigator = Navigator::new(create_campus());
        let trip = navigator.locate("SEO", "LIB").unwrap();

        assert_eq!(trip.destination_node.node, 7);
        assert_matches!(
            navigator.route(&trip),
            Err(Error::ShortestPath(shortest_paths::Error::Unreachable))
        );
    }

    #[test]
    fn building_not_found() {
        let navigator = Navigator::new(create_campus());

        assert_matches!(navigator.navigate("XYZ", "SEO"), Err(Error::StartNotFound));
        assert_matches!(navigator.navigate("SEO", "XYZ"), Err(Error::DestinationNotFound));
    }

    #[test]
    fn no_footways_unresolved() {
        let mut map = create_campus();
        map.footways.clear();

        let navigator = Navigator::new(map);

        assert_matches!(
            navigator.locate("SEO", "SCE"),
            Err(Error::Nearest(nearest::Error::Unresolved))
        );
    }
}
