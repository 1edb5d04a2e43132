//! Vertex identifiers and their mapping to dense indices.
//!
//! Graphs are keyed by an opaque identifier chosen by the user (e.g., an
//! OpenStreetMap node id). Internally, each identifier is assigned a dense
//! [`VertexIndex`] when the vertex is added, so that adjacency and the
//! per-query search state can be stored in contiguous arrays.

use std::{fmt::Debug, hash::Hash, ops::Index};

use rustc_hash::FxHashMap;

/// Identification of a vertex in a [`WeightedGraph`](crate::WeightedGraph).
///
/// The ordering of identifiers matters: it is used for canonical ordering of
/// neighbors and for breaking ties between equally distant vertices in
/// shortest path search.
pub trait VertexId: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> VertexId for T {}

/// Position of a vertex in the dense storage of a graph.
///
/// Indices are assigned in insertion order, starting from zero, and never
/// change since vertices are not removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexIndex(usize);

impl VertexIndex {
    #[inline]
    pub const fn from_usize(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexIndex {
    fn from(index: usize) -> Self {
        Self::from_usize(index)
    }
}

/// Bidirectional mapping between vertex identifiers and dense indices.
///
/// * identifier to index: _O(1)_ expected (hash map lookup)
/// * index to identifier: _O(1)_ (array access)
#[derive(Debug, Clone)]
pub struct IdMap<V> {
    ids: Vec<V>,
    lookup: FxHashMap<V, VertexIndex>,
}

impl<V> IdMap<V> {
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            lookup: FxHashMap::default(),
        }
    }

    /// Returns the number of identifiers in the map.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the map contains no identifiers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maps given index to the corresponding identifier.
    pub fn to_id(&self, index: VertexIndex) -> Option<&V> {
        self.ids.get(index.as_usize())
    }

    /// Iterates over identifiers in insertion order.
    pub fn ids(&self) -> std::slice::Iter<'_, V> {
        self.ids.iter()
    }
}

impl<V: VertexId> IdMap<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            lookup: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts the identifier if it is not present yet.
    ///
    /// Returns the index of the identifier and whether it was newly inserted.
    pub fn insert(&mut self, id: V) -> (VertexIndex, bool) {
        if let Some(&index) = self.lookup.get(&id) {
            return (index, false);
        }

        let index = VertexIndex::from_usize(self.ids.len());
        self.ids.push(id.clone());
        self.lookup.insert(id, index);
        (index, true)
    }

    /// Maps given identifier to its index.
    pub fn to_index(&self, id: &V) -> Option<VertexIndex> {
        self.lookup.get(id).copied()
    }

    pub fn contains(&self, id: &V) -> bool {
        self.lookup.contains_key(id)
    }
}

impl<V> Default for IdMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Index<VertexIndex> for IdMap<V> {
    type Output = V;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.ids[index.as_usize()]
    }
}
