//! A Module with some utilities for working with NodeIds

use std::hash::{BuildHasherDefault, Hasher};

/// The type used to reference a Node in a [`NavGraph`](crate::NavGraph).
///
/// Ids are handed out by [`add_node`](crate::NavGraph::add_node) and stay
/// valid for the life of the graph.
pub type NodeId = usize;

/// A specialized [`HashMap`](std::collections::HashMap) for NodeIds with a faster Hasher.
///
/// NodeIds are small dense integers; feeding them through a general-purpose
/// hasher is wasted work.
pub type NodeIdMap<V> = std::collections::HashMap<NodeId, V, BuildHasherDefault<NodeIdHasher>>;

/// Creates a [`NodeIdMap`] sized for `capacity` entries.
pub fn node_id_map_with_cap<V>(capacity: usize) -> NodeIdMap<V> {
    NodeIdMap::with_capacity_and_hasher(capacity, BuildHasherDefault::default())
}

/// A [`Hasher`](Hasher) specialized on NodeIds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIdHasher(u64);

impl Hasher for NodeIdHasher {
    /// panics, since only NodeIds are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with NodeIds")
    }
    /// Writes a single NodeId into this hasher.
    fn write_usize(&mut self, id: NodeId) {
        self.0 = id as u64
    }
    fn finish(&self) -> u64 {
        self.0
    }
}
