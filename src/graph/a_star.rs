use super::frontier::Frontier;
use super::NavGraph;
use crate::node_id::{node_id_map_with_cap, NodeIdMap};
use crate::path::NavPath;
use crate::NodeId;
use glam::Vec3;

/// Best known way to reach a Node during one search. Living in a per-query
/// map instead of on the Node keeps the graph immutable while searches run,
/// so concurrent queries against one graph are fine.
#[derive(Clone, Copy, Debug)]
struct VisitRecord {
    g: f32,
    came_from: Option<NodeId>,
}

/// A query endpoint after resolution: the Node the search actually uses,
/// plus the length of the snap leg if the raw position was off-graph.
struct Endpoint {
    node: NodeId,
    snap: Option<f32>,
}

impl NavGraph {
    /// Computes the shortest route from `start` to `goal` through the graph.
    ///
    /// Neither position needs to coincide with a Node: an off-graph endpoint
    /// snaps to the nearest Node, the raw query position becomes the first
    /// (or last) waypoint, and the snap distance is charged to the total
    /// length.
    ///
    /// Edge costs are the Euclidean distances between Node positions, which
    /// makes the straight-line heuristic admissible and consistent: the
    /// returned route is the cheapest directed chain of edges between the
    /// resolved endpoints.
    ///
    /// Returns `None` when the resolved goal is unreachable from the
    /// resolved start. No partial path is produced in that case.
    ///
    /// # Panics
    /// Panics if the graph is empty.
    #[track_caller]
    pub fn find_path(&self, start: Vec3, goal: Vec3) -> Option<NavPath> {
        assert!(!self.is_empty(), "find_path: graph has no Nodes");
        a_star_search(self, start, goal)
    }
}

fn resolve(graph: &NavGraph, pos: Vec3) -> Endpoint {
    match graph.node_at(pos) {
        Some(node) => Endpoint { node, snap: None },
        None => {
            let node = graph.nearest_node(pos);
            Endpoint {
                node,
                snap: Some(graph[node].pos().distance(pos)),
            }
        }
    }
}

fn a_star_search(graph: &NavGraph, start_pos: Vec3, goal_pos: Vec3) -> Option<NavPath> {
    #[cfg(feature = "log")]
    let search_started = std::time::Instant::now();

    let start = resolve(graph, start_pos);
    let goal = resolve(graph, goal_pos);

    let goal_node_pos = graph[goal.node].pos();
    let h = |id: NodeId| graph[id].pos().distance(goal_node_pos);

    let mut visited: NodeIdMap<VisitRecord> = node_id_map_with_cap(graph.len());
    let mut frontier = Frontier::with_capacity(graph.len() / 2);

    visited.insert(
        start.node,
        VisitRecord {
            g: 0.0,
            came_from: None,
        },
    );
    frontier.push(start.node, 0.0, h(start.node));

    while let Some((current, current_g)) = frontier.pop() {
        if current == goal.node {
            break;
        }
        if current_g > visited[&current].g {
            continue; // re-scored since this entry was pushed
        }

        let current_pos = graph[current].pos();
        for &next in graph[current].edges() {
            let dist = current_pos.distance(graph[next].pos());
            let next_g = current_g + dist;

            match visited.get_mut(&next) {
                Some(record) if record.g <= next_g => continue,
                Some(record) => {
                    record.g = next_g;
                    record.came_from = Some(current);
                }
                None => {
                    visited.insert(
                        next,
                        VisitRecord {
                            g: next_g,
                            came_from: Some(current),
                        },
                    );
                }
            }
            frontier.push(next, next_g, next_g + h(next));
        }
    }

    // every visited Node has a live heap entry until popped, so an exhausted
    // frontier with the goal unvisited means its component was never reached
    if !visited.contains_key(&goal.node) {
        #[cfg(feature = "log")]
        log::debug!(
            "no path: expanded {} Nodes in {:?}",
            visited.len(),
            search_started.elapsed()
        );
        return None;
    }

    // walk the back-pointers goal -> start, then flip; the resolved start
    // appears exactly once, first, and contributes no length
    let steps = {
        let mut steps = vec![];
        let mut current = goal.node;

        while current != start.node {
            steps.push(current);
            current = visited[&current]
                .came_from
                .expect("back-pointer chain broke before the start Node");
        }
        steps.push(start.node);
        steps.reverse();
        steps
    };

    let mut total_length = visited[&goal.node].g;
    let mut waypoints = Vec::with_capacity(steps.len() + 2);
    if let Some(snap) = start.snap {
        waypoints.push(start_pos);
        total_length += snap;
    }
    waypoints.extend(steps.iter().map(|&id| graph[id].pos()));
    if let Some(snap) = goal.snap {
        waypoints.push(goal_pos);
        total_length += snap;
    }

    #[cfg(feature = "log")]
    log::debug!(
        "path: {} waypoints, length {}, expanded {} Nodes in {:?}",
        waypoints.len(),
        total_length,
        visited.len(),
        search_started.elapsed()
    );

    Some(NavPath::new(waypoints, total_length))
}
