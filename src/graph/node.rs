use crate::NodeId;
use glam::Vec3;

/// A vertex of a [`NavGraph`](crate::NavGraph).
///
/// A Node is a fixed position plus the list of Nodes reachable from it.
/// Edges are directed: `a -> b` says nothing about `b -> a` unless the caller
/// adds that edge too. Nodes hold ids, not references; the graph owns all of
/// them.
#[derive(Clone, Debug)]
pub struct Node {
    pos: Vec3,
    pub(crate) edges: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(pos: Vec3) -> Node {
        Node {
            pos,
            edges: Vec::new(),
        }
    }

    /// The position this Node was created at. Immutable for the life of the
    /// graph; it doubles as the Node's lookup key.
    pub fn pos(&self) -> Vec3 {
        self.pos
    }

    /// Ids of the Nodes reachable from this one, in the order their edges
    /// were added.
    pub fn edges(&self) -> &[NodeId] {
        &self.edges
    }
}
