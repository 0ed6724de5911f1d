use super::Node;
use crate::NodeId;
use glam::Vec3;
use hashbrown::HashMap;

/// Node positions are indexed on a fixed grid of `1 / KEY_SCALE` world
/// units. Two positions inside the same cell address the same Node, which
/// keeps lookups stable when coordinates pick up float noise on their way
/// through level-baking transforms.
const KEY_SCALE: f32 = 1024.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct PointKey(i32, i32, i32);

impl PointKey {
    fn of(pos: Vec3) -> PointKey {
        PointKey(
            (pos.x * KEY_SCALE).round() as i32,
            (pos.y * KEY_SCALE).round() as i32,
            (pos.z * KEY_SCALE).round() as i32,
        )
    }
}

/// A set of [`Node`]s at fixed positions, connected by directed edges.
///
/// The graph owns its Nodes and addresses them by [`NodeId`]. It is built
/// once by the caller (from level data, a baking step, hand-placed markers)
/// and then queried any number of times with
/// [`find_path`](NavGraph::find_path); queries never mutate it.
#[derive(Clone, Debug, Default)]
pub struct NavGraph {
    nodes: slab::Slab<Node>,
    pos_map: HashMap<PointKey, NodeId>,
}

impl NavGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: slab::Slab::default(),
            pos_map: HashMap::default(),
        }
    }

    /// Number of Nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the graph holds no Nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a Node at `pos` and returns its id.
    ///
    /// Idempotent: if a Node already occupies `pos`, that Node's id is
    /// returned and the graph is unchanged.
    pub fn add_node(&mut self, pos: Vec3) -> NodeId {
        let key = PointKey::of(pos);
        if let Some(&id) = self.pos_map.get(&key) {
            return id;
        }
        let id = self.nodes.insert(Node::new(pos));
        self.pos_map.insert(key, id);
        id
    }

    /// The id of the Node occupying `pos`, if any.
    pub fn node_at(&self, pos: Vec3) -> Option<NodeId> {
        self.pos_map.get(&PointKey::of(pos)).copied()
    }

    /// Appends the directed edge `from -> to`.
    ///
    /// The reverse edge is not added. Duplicate edges and self-edges are not
    /// rejected either; callers own that discipline.
    ///
    /// # Panics
    /// Panics if either id is not a Node of this graph.
    #[track_caller]
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        assert!(
            self.nodes.contains(to),
            "add_edge: target {to} is not a Node of this graph"
        );
        self.nodes[from].edges.push(to);
    }

    /// The Node closest to `pos` by Euclidean distance.
    ///
    /// A linear scan over every Node; ties keep the Node that was inserted
    /// first.
    ///
    /// # Panics
    /// Panics if the graph is empty.
    #[track_caller]
    pub fn nearest_node(&self, pos: Vec3) -> NodeId {
        assert!(!self.is_empty(), "nearest_node: graph has no Nodes");

        let mut min_distance = f32::INFINITY;
        let mut nearest = 0;
        for (id, node) in self.nodes.iter() {
            let d = pos.distance_squared(node.pos());
            if d < min_distance {
                min_distance = d;
                nearest = id;
            }
        }
        nearest
    }

    /// Borrows the Node with the given id, `None` if the id is invalid.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Iterates over all `(id, Node)` pairs in insertion order.
    pub fn iter(&self) -> slab::Iter<Node> {
        self.nodes.iter()
    }
}

use std::ops::Index;
impl Index<NodeId> for NavGraph {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeId) -> &Node {
        &self.nodes[index]
    }
}

#[test]
fn add_node_is_idempotent() {
    let mut graph = NavGraph::new();
    let first = graph.add_node(Vec3::new(1.0, 2.0, 3.0));
    let other = graph.add_node(Vec3::new(4.0, 5.0, 6.0));
    let second = graph.add_node(Vec3::new(1.0, 2.0, 3.0));

    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_eq!(graph.len(), 2);
}

#[test]
fn node_lookup_survives_float_noise() {
    let mut graph = NavGraph::new();
    let id = graph.add_node(Vec3::new(7.0, 0.0, -3.0));

    // a third of the key quantum away; same cell
    let noisy = Vec3::new(7.0 + 1.0 / 3072.0, 0.0, -3.0);
    assert_eq!(graph.node_at(noisy), Some(id));
}

#[test]
fn nearest_tie_keeps_first_inserted() {
    let mut graph = NavGraph::new();
    let left = graph.add_node(Vec3::new(-1.0, 0.0, 0.0));
    let _right = graph.add_node(Vec3::new(1.0, 0.0, 0.0));

    assert_eq!(graph.nearest_node(Vec3::new(0.0, 5.0, 0.0)), left);
}

#[test]
#[should_panic]
fn nearest_on_empty_graph_panics() {
    NavGraph::new().nearest_node(Vec3::ZERO);
}

#[test]
#[should_panic]
fn add_edge_rejects_unknown_target() {
    let mut graph = NavGraph::new();
    let a = graph.add_node(Vec3::ZERO);
    graph.add_edge(a, 99);
}
