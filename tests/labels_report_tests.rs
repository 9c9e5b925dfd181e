use lazy_sssp::graph::DirectedGraph;
use lazy_sssp::{Dijkstra, Error, Report, ShortestPathAlgorithm, VertexLabels};

const AIRPORTS: &str = "# code index
PDX 0
SEA 1

SFO 2
LAX 3
";

#[test]
fn test_parse_and_lookup_labels() {
    let labels = VertexLabels::parse(AIRPORTS).unwrap();
    assert_eq!(labels.len(), 4);
    assert_eq!(labels.index_of("SFO"), Some(2));
    assert_eq!(labels.name_of(3), Some("LAX"));
    assert_eq!(labels.name_of(9), None);
    assert_eq!(labels.index_of("ATL"), None);
}

#[test]
fn test_resolve_accepts_labels_and_indices() {
    let labels = VertexLabels::from_pairs(vec![("PDX", 0), ("SEA", 1)]).unwrap();
    assert_eq!(labels.resolve("SEA").unwrap(), 1);
    assert_eq!(labels.resolve("7").unwrap(), 7);
    assert!(matches!(labels.resolve("ORD"), Err(Error::UnknownLabel(name)) if name == "ORD"));
}

#[test]
fn test_duplicate_labels_are_rejected() {
    let mut labels = VertexLabels::new();
    labels.insert("PDX", 0).unwrap();
    assert!(matches!(labels.insert("PDX", 4), Err(Error::DuplicateLabel(_))));
    assert!(matches!(labels.insert("SEA", 0), Err(Error::DuplicateLabel(name)) if name == "PDX"));
    assert_eq!(labels.len(), 1);
}

#[test]
fn test_malformed_label_lines() {
    assert!(matches!(VertexLabels::parse("PDX\n"), Err(Error::Parse { line: 1, .. })));
    assert!(matches!(VertexLabels::parse("PDX 0\nSEA one\n"), Err(Error::Parse { line: 2, .. })));
    assert!(matches!(VertexLabels::parse("PDX 0 extra\n"), Err(Error::Parse { .. })));
}

fn solved() -> lazy_sssp::ShortestPathResult<i64> {
    let graph = DirectedGraph::from_edges(4, vec![(0, 1, 1i64), (0, 2, 4), (1, 2, 2)]).unwrap();
    Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap()
}

#[test]
fn test_table_report() {
    let result = solved();
    let labels = VertexLabels::parse(AIRPORTS).unwrap();
    let table = Report::new(&result).with_labels(&labels).render_table();
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], "Shortest paths from 0 (PDX):");
    assert!(lines[1].starts_with("End point"));
    assert_eq!(lines.len(), 6);
    assert!(lines[3].starts_with("1 (SEA)"));
    assert!(lines[3].ends_with("|| 0 (PDX)"));
    assert!(lines[4].contains("|| 3 "));
    assert!(lines[5].contains("unreachable"));
    assert!(lines[5].ends_with("|| -"));
    assert!(table.ends_with("|| -\n"), "every line is newline terminated");
}

#[test]
fn test_json_report() {
    let result = solved();
    let json = Report::new(&result).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["source"], 0);
    assert_eq!(value["reachable"], 3);
    assert!(value.get("source_label").is_none());

    let vertices = value["vertices"].as_array().unwrap();
    assert_eq!(vertices.len(), 4);
    assert_eq!(vertices[2]["distance"], 3);
    assert_eq!(vertices[2]["predecessor"], 1);
    assert!(vertices[0].get("predecessor").is_none());
    assert!(vertices[3].get("distance").is_none());
}

#[test]
fn test_report_rows_follow_result() {
    let result = solved();
    let rows = Report::new(&result).rows();
    let dijkstra = Dijkstra::new();

    for row in rows {
        assert_eq!(row.distance, result.distance(row.vertex));
        assert_eq!(row.label, None);
        let path = <Dijkstra as ShortestPathAlgorithm<i64, DirectedGraph<i64>>>::get_path(&dijkstra, &result, row.vertex);
        assert_eq!(path.is_some(), row.distance.is_some());
    }
}
