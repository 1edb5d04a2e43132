//! Weighted directed graphs and shortest walking routes between buildings on
//! a campus map.
//!
//! The [`graph`] module provides the graph container, the [`algo`] module the
//! shortest path search and the nearest vertex resolution, and the [`map`]
//! module ties them together into building-to-building navigation.

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod map;

pub use graph::WeightedGraph;
