pub mod nearest;
pub mod shortest_paths;

pub use nearest::{nearest, Nearest};
pub use shortest_paths::{shortest_path, Route, ShortestPaths};
