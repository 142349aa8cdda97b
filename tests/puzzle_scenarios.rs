//! Puzzle validation and lookup over prepared graphs.

use std::sync::Arc;

use etymon::dataset::Dataset;
use etymon::pipeline::build_prepared;
use etymon::prelude::*;
use etymon::puzzle::{
    GuessRequest, Violation, builtin_definitions, validate_puzzle, validate_puzzles,
};

fn graph_from(json: &str) -> EtymologyGraph {
    let dataset = Dataset::from_json_str(json).unwrap();
    build_prepared(&dataset, "n/a").build.graph
}

/// The chains behind every built-in puzzle.
fn full_graph() -> EtymologyGraph {
    graph_from(
        r#"{ "words": [
            { "word": "mouse (n.)_E", "etymology_chain": [
                { "source": "muscular_E", "target": "musculus_L" },
                { "source": "musculus_L", "target": "mus_L" },
                { "source": "mus_L", "target": "*mus-_PIE" },
                { "source": "*mus_PGer", "target": "*mus-_PIE" },
                { "source": "mus_OE", "target": "*mus_PGer" },
                { "source": "mouse (n.)_E", "target": "mus_OE" }
            ] },
            { "word": "approbate_E", "etymology_chain": [
                { "source": "approbate_E", "target": "approbatus_L" },
                { "source": "approbatus_L", "target": "approbare_L" },
                { "source": "approbare_L", "target": "probare_L" },
                { "source": "prove_E", "target": "probare_L" }
            ] },
            { "word": "manitou_E", "etymology_chain": [
                { "source": "manitou_E", "target": "/manet:u/_Unami" }
            ] },
            { "word": "capital (adj.)_E", "etymology_chain": [
                { "source": "chief (n.)_E", "target": "chief_OF" },
                { "source": "chief_OF", "target": "caput_L" },
                { "source": "capitalis_L", "target": "caput_L" },
                { "source": "capital (adj.)_E", "target": "capitalis_L" }
            ] }
        ] }"#,
    )
}

#[test]
fn test_builtin_puzzles_validate_against_full_graph() {
    let graph = full_graph();
    let summary = validate_puzzles(&graph, &builtin_definitions());
    assert!(summary.is_valid(), "{:?}", summary.reports);

    let service = PuzzleService::with_builtin(Arc::new(graph));
    assert_eq!(service.get_all_puzzle_ids(), vec!["1", "2", "3", "4", "5"]);
    assert_eq!(service.get_default_puzzle().unwrap().puzzle_id, "1");
}

#[test]
fn test_approbate_scenario() {
    let definition = PuzzleDefinition::new(
        "2",
        "Approbate chain",
        ["approbate_E", "approbatus_L", "approbare_L"],
    );

    let graph = graph_from(
        r#"{ "words": [ { "word": "approbate_E", "etymology_chain": [
            { "source": "approbate_E", "target": "approbatus_L" },
            { "source": "approbatus_L", "target": "approbare_L" }
        ] } ] }"#,
    );
    assert!(validate_puzzle(&graph, &definition).is_valid());

    let without_second_edge = graph_from(
        r#"{ "words": [
            { "word": "approbate_E", "etymology_chain": [
                { "source": "approbate_E", "target": "approbatus_L" }
            ] },
            { "word": "approbare_L" }
        ] }"#,
    );
    let report = validate_puzzle(&without_second_edge, &definition);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.broken_links(), 1);
}

#[test]
fn test_default_falls_through_invalid_definitions() {
    // Only the manitou chain is present, so puzzles 1 and 2 are missing nodes.
    let graph = graph_from(
        r#"{ "words": [ { "word": "manitou_E", "etymology_chain": [
            { "source": "manitou_E", "target": "/manet:u/_Unami" }
        ] } ] }"#,
    );
    let service = PuzzleService::with_builtin(Arc::new(graph));

    assert!(service.get_puzzle_by_id("1").is_none());
    assert!(service.get_puzzle_by_id("does-not-exist").is_none());

    let puzzle = service.get_default_puzzle().unwrap();
    assert_eq!(puzzle.puzzle_id, "3");
    assert_eq!(puzzle.target_node.lang, "Unami");
    assert_eq!(service.get_all_puzzle_ids(), vec!["3"]);
}

#[test]
fn test_all_invalid_yields_no_default() {
    let service = PuzzleService::with_builtin(Arc::new(EtymologyGraph::default()));
    assert!(service.get_default_puzzle().is_none());

    let summary = validate_puzzles(service.graph(), service.definitions());
    assert_eq!(summary.invalid().count(), 5);
    for report in &summary.reports {
        let violation = &report.violations[0];
        assert!(matches!(violation, Violation::MissingNodes { .. }));
    }
}

#[test]
fn test_validation_leaves_definitions_untouched() {
    let graph = EtymologyGraph::default();
    let definitions = builtin_definitions();
    let before = definitions.clone();
    validate_puzzles(&graph, &definitions);
    assert_eq!(definitions, before);
}

#[test]
fn test_scaffold_for_long_path() {
    let service = PuzzleService::with_builtin(Arc::new(full_graph()));
    let puzzle = service.get_puzzle_by_id("1").unwrap();

    assert_eq!(puzzle.start_node.id, "muscular_E");
    assert_eq!(puzzle.target_node.id, "mouse (n.)_E");
    assert_eq!(puzzle.total_path_length, 7);

    let langs: Vec<_> = puzzle.scaffold.iter().map(|s| s.lang.as_str()).collect();
    let expected = [
        "Latin",
        "Latin",
        "Proto-Indo-European",
        "Proto-Germanic",
        "Old English",
    ];
    assert_eq!(langs, expected);
    let indices: Vec<_> = puzzle.scaffold.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    assert!(puzzle.scaffold.iter().all(|s| s.hint.definition == "n/a"));
}

#[test]
fn test_guess_along_builtin_path() {
    let service = PuzzleService::with_builtin(Arc::new(full_graph()));

    let request = GuessRequest::new("capitalis_L")
        .with_current("caput_L")
        .in_puzzle("4");
    let response = service.validate_guess(&request).unwrap();
    assert!(response.is_valid_neighbor);
    assert_eq!(response.path_index, 3);

    let request = GuessRequest::new("prove_E")
        .with_current("caput_L")
        .in_puzzle("4");
    let response = service.validate_guess(&request).unwrap();
    assert!(!response.is_valid_neighbor);
    assert_eq!(response.path_index, -1);
}
