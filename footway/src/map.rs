//! Walking navigation over a campus map.
//!
//! A map consists of points with geographic coordinates, footways (walkable
//! paths given as sequences of points) and named buildings. The graph built
//! from a map has a vertex for each point and a pair of opposite edges for
//! each consecutive pair of points on a footway, weighted by the great-circle
//! distance in miles.
//!
//! Buildings are not part of the graph. A building is snapped to the closest
//! footway *endpoint*, i.e., the first or last point of some footway. Points
//! in the middle of footways are never used as a start or destination even
//! if they are closer to the building.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod build;
mod distance;
mod navigate;

pub use build::{build_graph, Walkways};
pub use distance::distance_miles;
pub use navigate::{Error, Navigator, Snapped, Trip};

/// Identifier of a map point (an OpenStreetMap node id).
pub type NodeId = i64;

/// Latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A walkable path through an ordered sequence of points.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Footway {
    pub id: i64,
    pub nodes: Vec<NodeId>,
}

impl Footway {
    /// Returns the first and the last point of the footway.
    pub fn endpoints(&self) -> Option<(NodeId, NodeId)> {
        Some((*self.nodes.first()?, *self.nodes.last()?))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Building {
    pub fullname: String,
    pub abbrev: String,
    pub coords: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapData {
    pub nodes: BTreeMap<NodeId, Coordinates>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub footways: Vec<Footway>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub buildings: Vec<Building>,
}

impl MapData {
    /// Finds a building by its abbreviation or, if no abbreviation matches, by
    /// a part of its full name.
    ///
    /// If more buildings match, the one listed last is returned. An empty
    /// query matches no building.
    pub fn find_building(&self, query: &str) -> Option<&Building> {
        if query.is_empty() {
            return None;
        }

        self.buildings
            .iter()
            .rev()
            .find(|building| building.abbrev == query)
            .or_else(|| {
                self.buildings
                    .iter()
                    .rev()
                    .find(|building| building.fullname.contains(query))
            })
    }

    pub fn coords(&self, node: NodeId) -> Option<Coordinates> {
        self.nodes.get(&node).copied()
    }
}
