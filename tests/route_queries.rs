//! Integration tests for route queries over the public graph API.

use waygraph::{NavError, NavGraph, SearchOutcome, Vec2, WaypointId};

/// All simple start-to-goal paths and their weighted costs, by exhaustive
/// DFS. Only usable on tiny graphs; serves as the optimality oracle.
fn brute_force_best_cost(graph: &NavGraph, start: WaypointId, goal: WaypointId) -> Option<f32> {
    fn dfs(
        graph: &NavGraph,
        current: WaypointId,
        goal: WaypointId,
        cost: f32,
        visited: &mut Vec<WaypointId>,
        best: &mut Option<f32>,
    ) {
        if current == goal {
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for (neighbor, link) in graph.neighbors(current).unwrap() {
            if visited.contains(&neighbor) {
                continue;
            }
            visited.push(neighbor);
            let edge = graph.link_cost(link).unwrap();
            dfs(graph, neighbor, goal, cost + edge, visited, best);
            visited.pop();
        }
    }

    let mut best = None;
    let mut visited = vec![start];
    dfs(graph, start, goal, 0.0, &mut visited, &mut best);
    best
}

/// A graph with two routes of different weighted cost between the corners.
fn two_route_graph() -> (NavGraph, WaypointId, WaypointId) {
    let mut graph = NavGraph::new();
    let start = graph.add_waypoint(Vec2::new(0.0, 0.0), 1.0);
    let goal = graph.add_waypoint(Vec2::new(20.0, 0.0), 1.0);
    let short_mid = graph.add_waypoint(Vec2::new(10.0, 2.0), 1.0);
    let long_mid = graph.add_waypoint(Vec2::new(10.0, -2.0), 1.0);

    // Geometrically similar routes, but the lower one is weighted heavier.
    graph.link(start, short_mid, 1.0).unwrap();
    graph.link(short_mid, goal, 1.0).unwrap();
    graph.link(start, long_mid, 3.0).unwrap();
    graph.link(long_mid, goal, 3.0).unwrap();

    (graph, start, goal)
}

#[test]
fn test_trivial_query_returns_already_there() {
    let mut graph = NavGraph::new();
    let w = graph.add_waypoint(Vec2::new(5.0, 5.0), 1.0);
    let outcome = graph.find_path_between(w, w).unwrap();
    assert!(outcome.is_already_there());
    assert!(outcome.route().is_none());
}

#[test]
fn test_single_connected_edge() {
    let mut graph = NavGraph::new();
    let a = graph.add_waypoint(Vec2::new(0.0, 0.0), 1.0);
    let b = graph.add_waypoint(Vec2::new(7.0, 0.0), 1.0);
    graph.link(a, b, 1.0).unwrap();

    let plan = graph.find_path_between(a, b).unwrap().route().unwrap();
    assert_eq!(plan.waypoints(), vec![a, b]);
    assert!((plan.cost() - 7.0).abs() < 1e-5);
}

#[test]
fn test_returns_minimum_cost_route() {
    let (graph, start, goal) = two_route_graph();
    let plan = graph.find_path_between(start, goal).unwrap().route().unwrap();

    let oracle = brute_force_best_cost(&graph, start, goal).unwrap();
    assert!(
        (plan.cost() - oracle).abs() < 1e-4,
        "A* cost {} differs from brute-force optimum {}",
        plan.cost(),
        oracle
    );
}

#[test]
fn test_optimality_on_dense_small_graph() {
    // Fully linked 6-waypoint graph with varied weights; every pair's A*
    // result must match the exhaustive optimum.
    let positions = [
        Vec2::new(0.0, 0.0),
        Vec2::new(4.0, 1.0),
        Vec2::new(8.0, -2.0),
        Vec2::new(3.0, 6.0),
        Vec2::new(9.0, 5.0),
        Vec2::new(6.0, 3.0),
    ];
    let weights = [1.0, 2.5, 1.5, 4.0, 1.0];

    let mut graph = NavGraph::new();
    let ids: Vec<_> = positions
        .iter()
        .map(|&p| graph.add_waypoint(p, 1.0))
        .collect();
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            graph.link(ids[i], ids[j], weights[(i + j) % weights.len()]).unwrap();
        }
    }

    for &start in &ids {
        for &goal in &ids {
            if start == goal {
                continue;
            }
            let plan = graph.find_path_between(start, goal).unwrap().route().unwrap();
            let oracle = brute_force_best_cost(&graph, start, goal).unwrap();
            assert!(
                (plan.cost() - oracle).abs() < 1e-3,
                "{start} -> {goal}: A* {} vs oracle {}",
                plan.cost(),
                oracle
            );
        }
    }
}

#[test]
fn test_disconnected_components_are_no_path() {
    let mut graph = NavGraph::new();
    let a = graph.add_waypoint(Vec2::new(0.0, 0.0), 1.0);
    let b = graph.add_waypoint(Vec2::new(5.0, 0.0), 1.0);
    let c = graph.add_waypoint(Vec2::new(50.0, 0.0), 1.0);
    let d = graph.add_waypoint(Vec2::new(55.0, 0.0), 1.0);
    graph.link(a, b, 1.0).unwrap();
    graph.link(c, d, 1.0).unwrap();

    assert!(graph.find_path_between(a, c).unwrap().is_no_path());
    assert!(graph.find_path_between(d, b).unwrap().is_no_path());
}

#[test]
fn test_requery_is_idempotent() {
    let (graph, start, goal) = two_route_graph();
    let first = graph.find_path_between(start, goal).unwrap().route().unwrap();
    let second = graph.find_path_between(start, goal).unwrap().route().unwrap();
    assert_eq!(first.waypoints(), second.waypoints());
    assert_eq!(first.cost(), second.cost());
}

#[test]
fn test_back_to_back_queries_do_not_contaminate() {
    let (graph, start, goal) = two_route_graph();

    // An unreachable island queried between the two real queries.
    let mut graph = graph;
    let island = graph.add_waypoint(Vec2::new(-100.0, -100.0), 1.0);

    let before = graph.find_path_between(start, goal).unwrap().route().unwrap();
    assert!(graph.find_path_between(start, island).unwrap().is_no_path());
    let after = graph.find_path_between(start, goal).unwrap().route().unwrap();

    assert_eq!(before.waypoints(), after.waypoints());
    assert_eq!(before.cost(), after.cost());
}

#[test]
fn test_position_queries_snap_to_nearest_waypoints() {
    let (graph, start, goal) = two_route_graph();
    let near_start = Vec2::new(-0.5, 0.3);
    let near_goal = Vec2::new(20.4, -0.2);

    let plan = graph.find_path(near_start, near_goal).unwrap().route().unwrap();
    assert_eq!(plan.waypoints().first(), Some(&start));
    assert_eq!(plan.waypoints().last(), Some(&goal));

    // Mixed waypoint/position entry points reduce to the same query.
    let from_wp = graph.find_path_from(start, near_goal).unwrap().route().unwrap();
    let to_wp = graph.find_path_to(near_start, goal).unwrap().route().unwrap();
    assert_eq!(from_wp.waypoints(), plan.waypoints());
    assert_eq!(to_wp.waypoints(), plan.waypoints());
}

#[test]
fn test_path_query_on_empty_graph_is_an_error() {
    let graph = NavGraph::new();
    assert!(matches!(
        graph.find_path(Vec2::origin(), Vec2::new(1.0, 1.0)),
        Err(NavError::EmptyGraph)
    ));
}

#[test]
fn test_both_positions_snapping_to_one_waypoint() {
    let mut graph = NavGraph::new();
    graph.add_waypoint(Vec2::new(0.0, 0.0), 1.0);
    let outcome = graph
        .find_path(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0))
        .unwrap();
    assert!(matches!(outcome, SearchOutcome::AlreadyThere));
}
