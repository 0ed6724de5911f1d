#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! Point-to-point shortest paths on sparse navigation graphs in continuous space.
//!
//! ## Introduction
//! Grid-based pathfinding treats every tile as a Node, which works poorly for
//! worlds that are mostly open space with a handful of interesting places to
//! stand. A navigation graph flips that around: the level editor (or a
//! baking step) drops Nodes at hand-picked positions in 2D/3D space and
//! connects them with directed edges, and the search only ever has to look at
//! those few Nodes. Edge costs are the Euclidean distances between the Node
//! positions, so the straight-line heuristic is admissible and the returned
//! route is the shortest one the graph allows.
//!
//! Query positions do not need to coincide with a Node. An off-graph start or
//! goal *snaps* to the nearest Node: the raw query position becomes the first
//! (or last) waypoint of the result and the distance of that extra leg is
//! charged to the total length. This is what lets a unit standing anywhere on
//! the map route itself through a sparse set of waypoints.
//!
//! This crate only searches graphs; building them from level data, smoothing
//! the resulting route, and steering along it belong to the caller.
//!
//! ## Examples
//! Building a graph and finding a path:
//! ```
//! use glam::Vec3;
//! use navgraph::NavGraph;
//!
//! let mut graph = NavGraph::new();
//! let a = graph.add_node(Vec3::new(0.0, 0.0, 0.0));
//! let b = graph.add_node(Vec3::new(10.0, 0.0, 0.0));
//! let c = graph.add_node(Vec3::new(10.0, 10.0, 0.0));
//!
//! // edges are directed; add both directions where movement is symmetric
//! graph.add_edge(a, b);
//! graph.add_edge(b, c);
//!
//! let path = graph
//!     .find_path(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 10.0, 0.0))
//!     .unwrap();
//!
//! assert_eq!(path.waypoints().len(), 3);
//! assert_eq!(path[1], Vec3::new(10.0, 0.0, 0.0));
//! assert_eq!(path.total_length(), 20.0);
//! ```
//!
//! Querying from a position that is not a Node snaps to the nearest one:
//! ```
//! # use glam::Vec3;
//! # use navgraph::NavGraph;
//! # let mut graph = NavGraph::new();
//! # let a = graph.add_node(Vec3::new(0.0, 0.0, 0.0));
//! # let b = graph.add_node(Vec3::new(10.0, 0.0, 0.0));
//! # let c = graph.add_node(Vec3::new(10.0, 10.0, 0.0));
//! # graph.add_edge(a, b);
//! # graph.add_edge(b, c);
//! #
//! let path = graph
//!     .find_path(Vec3::new(0.0, -5.0, 0.0), Vec3::new(10.0, 10.0, 0.0))
//!     .unwrap();
//!
//! // the raw query position leads the waypoint list, then the snapped Node
//! assert_eq!(path[0], Vec3::new(0.0, -5.0, 0.0));
//! assert_eq!(path[1], Vec3::new(0.0, 0.0, 0.0));
//! assert_eq!(path.total_length(), 25.0);
//! ```
//!
//! An unreachable goal is an explicit failure, not an empty path:
//! ```
//! # use glam::Vec3;
//! # use navgraph::NavGraph;
//! let mut graph = NavGraph::new();
//! let a = graph.add_node(Vec3::new(0.0, 0.0, 0.0));
//! let b = graph.add_node(Vec3::new(10.0, 0.0, 0.0));
//! graph.add_edge(a, b); // no way back
//!
//! let path = graph.find_path(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0));
//! assert!(path.is_none());
//! ```
//!
//! ## Positions
//! Positions are [`glam::Vec3`]. Graphs embedded in 2D simply leave one
//! component at zero throughout; nothing in the search cares. Node lookup
//! quantizes coordinates to a fine grid (1/1024 of a world unit), so
//! positions that went through a lossy transform still find their Node
//! instead of falling back to a nearest-neighbor scan.

mod node_id;
pub use self::node_id::{NodeId, NodeIdHasher, NodeIdMap};

mod graph;
pub use self::graph::{NavGraph, Node};

mod path;
pub use self::path::NavPath;
