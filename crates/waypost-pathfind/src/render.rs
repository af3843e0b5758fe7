//! Plain-text rendering of clients, the weight table, and routes.

use std::fmt::Write;

use waypost_core::{Client, CAPACITY};
use waypost_graph::ClientGraph;

use crate::types::{RouteReport, ShortestPathReport};

const CELL_WIDTH: usize = 5;

pub fn client_line(slot: usize, client: &Client) -> String {
    format!("[{slot}] {client}")
}

/// One line per registered client, or a placeholder when empty.
pub fn client_list(graph: &ClientGraph) -> String {
    if graph.client_count() == 0 {
        return "No clients registered.\n".to_string();
    }
    let mut out = String::new();
    for (slot, client) in graph.clients() {
        let _ = writeln!(out, "{}", client_line(slot, client));
    }
    out
}

/// The full `CAPACITY × CAPACITY` weight table.
///
/// Rows are sources and columns targets. Cells touching an empty slot show
/// `-`; `0` means both clients exist but no path links them.
pub fn weight_table(graph: &ClientGraph) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:>CELL_WIDTH$}", "");
    for to in 0..CAPACITY {
        let _ = write!(out, "{to:>CELL_WIDTH$}");
    }
    out.push('\n');

    for from in 0..CAPACITY {
        let _ = write!(out, "{from:>CELL_WIDTH$}");
        for to in 0..CAPACITY {
            if graph.is_occupied(from) && graph.is_occupied(to) {
                let _ = write!(out, "{:>CELL_WIDTH$}", graph.weight(from, to));
            } else {
                let _ = write!(out, "{:>CELL_WIDTH$}", "-");
            }
        }
        out.push('\n');
    }
    out
}

/// `A (X) -> B (Y) -> C (Z) (distance 3)`
pub fn route_line(route: &RouteReport) -> String {
    let hops: Vec<String> = route.stops.iter().map(Client::to_string).collect();
    format!("{} (distance {})", hops.join(" -> "), route.distance)
}

pub fn report_text(report: &ShortestPathReport) -> String {
    let mut out = format!("Shortest paths from {}:\n", report.start_client);
    if report.routes.is_empty() {
        out.push_str("  no other client is reachable\n");
        return out;
    }
    for route in &report.routes {
        let _ = writeln!(out, "  {}", route_line(route));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathfindEngine;

    fn sample_engine() -> PathfindEngine {
        let mut engine = PathfindEngine::new();
        let graph = engine.graph_mut();
        graph.add_client("A", "Centro").unwrap();
        graph.add_client("B", "Norte").unwrap();
        graph.add_client("C", "Sul").unwrap();
        graph.add_edge(0, 1, 1, false).unwrap();
        graph.add_edge(1, 2, 2, true).unwrap();
        engine
    }

    #[test]
    fn test_client_list() {
        let engine = sample_engine();
        assert_eq!(
            client_list(engine.graph()),
            "[0] A (Centro)\n[1] B (Norte)\n[2] C (Sul)\n"
        );
        assert_eq!(
            client_list(&ClientGraph::new()),
            "No clients registered.\n"
        );
    }

    #[test]
    fn test_weight_table_shape() {
        let engine = sample_engine();
        let table = weight_table(engine.graph());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), CAPACITY + 1);
        assert!(lines.iter().all(|l| l.len() == CELL_WIDTH * (CAPACITY + 1)));

        let row_b: Vec<&str> = lines[2].split_whitespace().collect();
        assert_eq!(&row_b[..4], &["1", "0", "0", "2"]);
        assert_eq!(row_b[4], "-");

        let row_empty: Vec<&str> = lines[5].split_whitespace().collect();
        assert_eq!(row_empty[0], "4");
        assert!(row_empty[1..].iter().all(|&c| c == "-"));
    }

    #[test]
    fn test_report_text() {
        let engine = sample_engine();
        let report = engine.report_from("A", "Centro").unwrap();
        assert_eq!(
            report_text(&report),
            "Shortest paths from A (Centro):\n  \
             A (Centro) -> B (Norte) (distance 1)\n  \
             A (Centro) -> B (Norte) -> C (Sul) (distance 3)\n"
        );
    }

    #[test]
    fn test_report_text_nothing_reachable() {
        let mut engine = sample_engine();
        engine.graph_mut().add_client("D", "Leste").unwrap();
        let report = engine.report_from("D", "Leste").unwrap();
        assert!(report_text(&report).ends_with("no other client is reachable\n"));
    }
}
