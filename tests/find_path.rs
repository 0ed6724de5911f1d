use glam::Vec3;
use navgraph::{NavGraph, NodeId};

/// Three Nodes in an L: (0,0) -> (10,0) -> (10,10), one-way.
fn corridor() -> (NavGraph, [NodeId; 3]) {
    let mut graph = NavGraph::new();
    let a = graph.add_node(Vec3::new(0.0, 0.0, 0.0));
    let b = graph.add_node(Vec3::new(10.0, 0.0, 0.0));
    let c = graph.add_node(Vec3::new(10.0, 10.0, 0.0));
    graph.add_edge(a, b);
    graph.add_edge(b, c);
    (graph, [a, b, c])
}

#[test]
fn corridor_walk() {
    let (graph, [a, b, _]) = corridor();
    assert_eq!(graph[a].edges(), &[b]);

    let path = graph
        .find_path(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 10.0, 0.0))
        .unwrap();

    assert_eq!(
        path,
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 10.0, 0.0),
        ]
    );
    assert_eq!(path.total_length(), 20.0);
}

#[test]
fn exact_endpoints_incur_no_snap() {
    let (graph, _) = corridor();

    let start = Vec3::new(0.0, 0.0, 0.0);
    let goal = Vec3::new(10.0, 10.0, 0.0);
    let path = graph.find_path(start, goal).unwrap();

    assert_eq!(path[0], start);
    assert_eq!(path[path.len() - 1], goal);
    assert_eq!(path.total_length(), 20.0);
}

#[test]
fn off_graph_start_snaps_to_nearest() {
    let (graph, _) = corridor();

    let path = graph
        .find_path(Vec3::new(0.0, -5.0, 0.0), Vec3::new(10.0, 10.0, 0.0))
        .unwrap();

    // raw query position first, then the Node it snapped to
    assert_eq!(path[0], Vec3::new(0.0, -5.0, 0.0));
    assert_eq!(path[1], Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(path.len(), 4);
    assert_eq!(path.total_length(), 25.0);
}

#[test]
fn off_graph_goal_snaps_to_nearest() {
    let (graph, _) = corridor();

    let path = graph
        .find_path(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 15.0, 0.0))
        .unwrap();

    assert_eq!(path[path.len() - 2], Vec3::new(10.0, 10.0, 0.0));
    assert_eq!(path[path.len() - 1], Vec3::new(10.0, 15.0, 0.0));
    assert_eq!(path.len(), 4);
    assert_eq!(path.total_length(), 25.0);
}

#[test]
fn both_endpoints_snapped() {
    let (graph, _) = corridor();

    let path = graph
        .find_path(Vec3::new(0.0, -5.0, 0.0), Vec3::new(10.0, 15.0, 0.0))
        .unwrap();

    assert_eq!(path.len(), 5);
    assert_eq!(path.total_length(), 30.0);
}

#[test]
fn picks_the_cheaper_of_two_routes() {
    let mut graph = NavGraph::new();
    let a = graph.add_node(Vec3::new(0.0, 0.0, 0.0));
    let b = graph.add_node(Vec3::new(3.0, 4.0, 0.0));
    let c = graph.add_node(Vec3::new(3.0, 0.0, 0.0));

    // direct diagonal costs 5, the dog-leg through c costs 3 + 4 = 7
    graph.add_edge(a, c);
    graph.add_edge(c, b);
    graph.add_edge(a, b);

    let path = graph
        .find_path(Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 4.0, 0.0))
        .unwrap();

    assert_eq!(
        path,
        vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 4.0, 0.0)]
    );
    assert_eq!(path.total_length(), 5.0);
}

#[test]
fn unreachable_goal_is_a_failure() {
    let mut graph = NavGraph::new();
    let a = graph.add_node(Vec3::new(0.0, 0.0, 0.0));
    let b = graph.add_node(Vec3::new(10.0, 0.0, 0.0));
    graph.add_edge(a, b);

    // a second component, no edges to or from the first
    graph.add_node(Vec3::new(100.0, 0.0, 0.0));
    assert_eq!(graph.iter().count(), 3);

    let path = graph.find_path(Vec3::new(0.0, 0.0, 0.0), Vec3::new(100.0, 0.0, 0.0));
    assert!(path.is_none());
}

#[test]
fn edges_are_one_way() {
    let (graph, _) = corridor();

    let path = graph.find_path(Vec3::new(10.0, 10.0, 0.0), Vec3::new(0.0, 0.0, 0.0));
    assert!(path.is_none());
}

#[test]
fn reverse_query_takes_the_long_way_round() {
    let mut graph = NavGraph::new();
    let a = graph.add_node(Vec3::new(0.0, 0.0, 0.0));
    let b = graph.add_node(Vec3::new(10.0, 0.0, 0.0));
    let c = graph.add_node(Vec3::new(10.0, 10.0, 0.0));
    let d = graph.add_node(Vec3::new(0.0, 10.0, 0.0));
    graph.add_edge(a, b);
    graph.add_edge(b, c);
    graph.add_edge(c, d);
    graph.add_edge(d, a);

    // b -> a directly would cost 10, but that edge only exists the other
    // way; the cycle forces the 30-unit detour
    let path = graph
        .find_path(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0))
        .unwrap();

    assert_eq!(path.len(), 4);
    assert_eq!(path.total_length(), 30.0);
}

#[test]
fn start_equals_goal() {
    let (graph, _) = corridor();

    let pos = Vec3::new(10.0, 0.0, 0.0);
    let path = graph.find_path(pos, pos).unwrap();

    assert_eq!(path, vec![pos]);
    assert_eq!(path.total_length(), 0.0);
}

#[test]
fn snapped_endpoints_can_share_a_node() {
    let mut graph = NavGraph::new();
    graph.add_node(Vec3::new(0.0, 0.0, 0.0));

    let path = graph
        .find_path(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0))
        .unwrap();

    assert_eq!(
        path,
        vec![
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]
    );
    assert_eq!(path.total_length(), 2.0);
}

#[test]
fn repeated_add_node_does_not_duplicate() {
    let mut graph = NavGraph::new();
    let first = graph.add_node(Vec3::new(5.0, 5.0, 5.0));
    let second = graph.add_node(Vec3::new(5.0, 5.0, 5.0));

    assert_eq!(first, second);
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.get(first).unwrap().pos(), Vec3::new(5.0, 5.0, 5.0));
    assert!(graph.get(first + 1).is_none());
}

#[test]
fn queries_do_not_disturb_each_other() {
    // scratch state is per query, so the same graph can serve any number of
    // searches and keep giving the same answers
    let (graph, _) = corridor();

    let first = graph
        .find_path(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 10.0, 0.0))
        .unwrap();
    let miss = graph.find_path(Vec3::new(10.0, 10.0, 0.0), Vec3::new(0.0, 0.0, 0.0));
    let second = graph
        .find_path(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 10.0, 0.0))
        .unwrap();

    assert!(miss.is_none());
    assert_eq!(first, second);
}

#[test]
#[should_panic]
fn query_against_empty_graph_panics() {
    NavGraph::new().find_path(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
}
