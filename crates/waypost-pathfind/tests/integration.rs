//! End-to-end tests through the public engine, menu and batch surfaces.
//!
//! Run with: cargo test --package waypost-pathfind --test integration

use std::io::Cursor;

use waypost_core::CAPACITY;
use waypost_graph::GraphError;
use waypost_pathfind::menu::{Menu, MenuOptions};
use waypost_pathfind::{batch, PathfindEngine, PathfindError};

fn engine_with(clients: &[(&str, &str)]) -> PathfindEngine {
    let mut engine = PathfindEngine::new();
    for (name, neighborhood) in clients {
        engine.graph_mut().add_client(name, neighborhood).unwrap();
    }
    engine
}

fn quiet() -> MenuOptions {
    MenuOptions {
        clear_screen: false,
        show_table_after_edit: false,
        json_output: false,
    }
}

fn drive_menu(script: &str, options: MenuOptions) -> (String, PathfindEngine) {
    let mut output = Vec::new();
    let mut menu = Menu::new(
        PathfindEngine::new(),
        Cursor::new(script.as_bytes().to_vec()),
        &mut output,
        options,
    );
    menu.run().unwrap();
    let engine = menu.into_engine();
    (String::from_utf8(output).unwrap(), engine)
}

#[test]
fn test_capacity_is_exactly_ten() {
    let mut engine = PathfindEngine::new();
    let mut successes = 0;
    for i in 0..CAPACITY {
        engine
            .graph_mut()
            .add_client(&format!("c{i}"), "Centro")
            .unwrap();
        successes += 1;
    }
    assert_eq!(successes, CAPACITY);
    assert_eq!(
        engine.graph_mut().add_client("late", "Centro").unwrap_err(),
        GraphError::CapacityExceeded { capacity: CAPACITY }
    );
}

#[test]
fn test_cascade_clear_then_invalid_start() {
    let mut engine = engine_with(&[("A", "X"), ("B", "X")]);
    engine.graph_mut().add_edge(0, 1, 5, false).unwrap();
    engine.graph_mut().remove_client(0).unwrap();

    assert_eq!(engine.graph().weight(0, 1), 0);
    assert_eq!(engine.graph().weight(1, 0), 0);
    assert!(matches!(
        engine.shortest_paths(0),
        Err(PathfindError::InvalidStart { .. })
    ));
    assert!(matches!(
        engine.report_from("A", "X"),
        Err(PathfindError::InvalidStart { .. })
    ));
}

#[test]
fn test_literal_three_client_scenario() {
    let mut engine = engine_with(&[("A", "X"), ("B", "X"), ("C", "X")]);
    engine.graph_mut().add_edge(0, 1, 1, false).unwrap();
    engine.graph_mut().add_edge(1, 2, 2, false).unwrap();
    engine.graph_mut().add_edge(0, 2, 10, false).unwrap();

    let result = engine.shortest_paths(0).unwrap();
    assert_eq!(result.distances[1], 1);
    assert_eq!(result.route_to(1).unwrap().path, vec![0, 1]);
    assert_eq!(result.distances[2], 3);
    assert_eq!(result.route_to(2).unwrap().path, vec![0, 1, 2]);
}

#[test]
fn test_isolated_client_excluded() {
    let mut engine = engine_with(&[("A", "X"), ("B", "X"), ("C", "X"), ("D", "X")]);
    engine.graph_mut().add_edge(0, 1, 1, false).unwrap();
    engine.graph_mut().add_edge(1, 2, 1, false).unwrap();

    let report = engine.report_from("A", "X").unwrap();
    assert!(report.routes.iter().all(|r| r.client.name() != "D"));
    assert_eq!(report.routes.len(), 2);
}

#[test]
fn test_failed_operations_leave_state_untouched() {
    let mut engine = engine_with(&[("A", "X"), ("B", "X")]);
    engine.graph_mut().add_edge(0, 1, 3, false).unwrap();
    let before = engine.graph().matrix().clone();

    let graph = engine.graph_mut();
    assert!(graph.add_edge(0, 1, 9, true).is_err());
    assert!(graph.add_edge(0, 0, 9, true).is_err());
    assert!(graph.add_edge(1, 0, -1, true).is_err());
    assert!(graph.remove_edge(1, 0).is_err());
    assert!(graph.remove_client(5).is_err());
    assert!(graph.add_client("A", "X").is_err());

    assert_eq!(engine.graph().matrix(), &before);
    assert_eq!(engine.graph().client_count(), 2);
}

#[test]
fn test_menu_full_session() {
    let script = "\
1\nA\nX\n\
1\nB\nX\n\
1\nC\nX\n\
4\nA\nX\nB\nX\n1\nn\n\
4\nB\nX\nC\nX\n2\nn\n\
4\nA\nX\nC\nX\n10\nn\n\
7\nA\nX\n\
0\n";
    let (out, engine) = drive_menu(script, quiet());

    assert_eq!(engine.graph().edge_count(), 3);
    assert!(out.contains("Shortest paths from A (X):"));
    assert!(out.contains("A (X) -> B (X) (distance 1)"));
    assert!(out.contains("A (X) -> B (X) -> C (X) (distance 3)"));
}

#[test]
fn test_menu_remove_both_directions() {
    let script = "\
1\nA\nX\n\
1\nB\nX\n\
4\nA\nX\nB\nX\n7\ny\n\
5\nA\nX\nB\nX\ny\n\
5\nA\nX\nB\nX\nn\n\
0\n";
    let (out, engine) = drive_menu(script, quiet());

    assert_eq!(engine.graph().edge_count(), 0);
    assert!(out.contains("Path 0 <-> 1 created with weight 7."));
    assert!(out.contains("Path 0 -> 1 removed."));
    assert!(out.contains("Path 1 -> 0 removed."));
    assert!(out.contains("Error: No path 0 -> 1"));
}

#[test]
fn test_menu_self_path_rejected() {
    let script = "1\nA\nX\n4\nA\nX\nA\nX\n3\ny\n0\n";
    let (out, engine) = drive_menu(script, quiet());
    assert!(out.contains("Error: Cannot connect slot 0 to itself"));
    assert_eq!(engine.graph().edge_count(), 0);
}

#[test]
fn test_menu_json_output() {
    let options = MenuOptions {
        json_output: true,
        ..quiet()
    };
    let script = "1\nA\nX\n1\nB\nX\n4\nA\nX\nB\nX\n4\nn\n7\nA\nX\n0\n";
    let (out, _) = drive_menu(script, options);

    let start = out.find('{').unwrap();
    let end = out.rfind('}').unwrap();
    let report: serde_json::Value = serde_json::from_str(&out[start..=end]).unwrap();
    assert_eq!(report["start"], 0);
    assert_eq!(report["routes"][0]["distance"], 4);
    assert_eq!(report["routes"][0]["path"], serde_json::json!([0, 1]));
}

#[test]
fn test_menu_table_after_edit() {
    let options = MenuOptions {
        show_table_after_edit: true,
        ..quiet()
    };
    let script = "1\nA\nX\n1\nB\nX\n4\nA\nX\nB\nX\n6\nn\n0\n";
    let (out, _) = drive_menu(script, options);
    let table_row = out
        .lines()
        .find(|l| l.split_whitespace().take(3).collect::<Vec<_>>() == ["0", "0", "6"])
        .unwrap();
    assert!(table_row.ends_with('-'));
}

#[test]
fn test_batch_json_literal_scenario() {
    let input = serde_json::json!({
        "clients": [
            {"name": "A", "neighborhood": "X"},
            {"name": "B", "neighborhood": "X"},
            {"name": "C", "neighborhood": "X"}
        ],
        "paths": [
            {"from": {"name": "A", "neighborhood": "X"}, "to": {"name": "B", "neighborhood": "X"}, "weight": 1},
            {"from": {"name": "B", "neighborhood": "X"}, "to": {"name": "C", "neighborhood": "X"}, "weight": 2},
            {"from": {"name": "A", "neighborhood": "X"}, "to": {"name": "C", "neighborhood": "X"}, "weight": 10}
        ],
        "start": {"name": "A", "neighborhood": "X"}
    })
    .to_string();

    let output = batch::run_json(&input).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let routes = &value["shortest_paths"]["routes"];
    assert_eq!(routes[1]["distance"], 3);
    assert_eq!(routes[1]["path"], serde_json::json!([0, 1, 2]));
    assert_eq!(value["failures"], serde_json::json!([]));
    assert_eq!(value["stats"]["edge_count"], 3);
}
