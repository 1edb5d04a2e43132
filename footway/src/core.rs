pub mod error;
pub mod index;
pub mod weight;

pub use index::{IdMap, VertexId, VertexIndex};
pub use weight::Weight;
