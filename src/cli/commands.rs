//! Command implementations for the etymon CLI.

use std::sync::Arc;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::PrepareConfig;
use crate::error::{EtymonError, Result};
use crate::graph::EtymologyGraph;
use crate::pipeline::prepare;
use crate::puzzle::{
    GuessRequest, PuzzleDefinition, PuzzleService, builtin_definitions, load_definitions,
    validate_puzzles,
};
use crate::search_index::SearchIndex;

/// Execute a CLI command.
pub fn execute_command(args: EtymonArgs) -> Result<()> {
    match &args.command {
        Command::Prepare(prepare_args) => run_prepare(prepare_args, &args),
        Command::ValidatePuzzles(source) => run_validate_puzzles(source, &args),
        Command::Puzzle(puzzle_args) => show_puzzle(puzzle_args, &args),
        Command::ListPuzzles(source) => list_puzzles(source, &args),
        Command::Guess(guess_args) => check_guess(guess_args, &args),
        Command::Lookup(lookup_args) => lookup(lookup_args, &args),
    }
}

/// Merge the optional config file with command line overrides.
pub fn resolve_prepare_config(args: &PrepareArgs) -> Result<PrepareConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading config from: {}", path.display());
            PrepareConfig::from_file(path)?
        }
        None => PrepareConfig::default(),
    };

    if let Some(input) = &args.input {
        config.input_path = input.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(definition) = &args.fallback_definition {
        config.fallback_definition = definition.clone();
    }
    if args.compact {
        config.pretty = false;
    }

    config.validate()?;
    Ok(config)
}

fn run_prepare(args: &PrepareArgs, cli_args: &EtymonArgs) -> Result<()> {
    let config = resolve_prepare_config(args)?;
    let report = prepare(&config)?;
    output_result("Preparation complete", &report, cli_args)
}

fn load_definition_set(source: &PuzzleSourceArgs) -> Result<Vec<PuzzleDefinition>> {
    match &source.puzzles {
        Some(path) => {
            debug!("Loading puzzle definitions from: {}", path.display());
            load_definitions(path)
        }
        None => Ok(builtin_definitions()),
    }
}

fn load_service(source: &PuzzleSourceArgs) -> Result<PuzzleService> {
    info!("Loading graph from {}", source.graph.display());
    let graph = EtymologyGraph::load(&source.graph)?;
    debug!("Loaded {} nodes", graph.len());

    let definitions = load_definition_set(source)?;
    Ok(PuzzleService::new(Arc::new(graph), definitions))
}

fn run_validate_puzzles(source: &PuzzleSourceArgs, cli_args: &EtymonArgs) -> Result<()> {
    let service = load_service(source)?;
    let summary = validate_puzzles(service.graph(), service.definitions());

    let message = "Validating puzzle definitions against graph data";
    output_result(message, &summary, cli_args)?;

    if summary.is_valid() {
        return Ok(());
    }
    let failed = summary.invalid().count();
    let error = anyhow::anyhow!("{failed} puzzle definition(s) failed validation");
    Err(error.into())
}

fn show_puzzle(args: &PuzzleArgs, cli_args: &EtymonArgs) -> Result<()> {
    let service = load_service(&args.source)?;

    let puzzle = match &args.id {
        Some(id) => service.get_puzzle_by_id(id),
        None => service.get_default_puzzle(),
    };
    let Some(puzzle) = puzzle else {
        let wanted = match &args.id {
            Some(id) => format!("puzzle {id}"),
            None => "any valid puzzle".to_string(),
        };
        return Err(EtymonError::not_found(wanted));
    };

    output_result("", &puzzle, cli_args)
}

fn list_puzzles(source: &PuzzleSourceArgs, cli_args: &EtymonArgs) -> Result<()> {
    let service = load_service(source)?;
    let result = PuzzleIdList {
        puzzle_ids: service.get_all_puzzle_ids(),
    };
    output_result("Servable puzzles", &result, cli_args)
}

fn check_guess(args: &GuessArgs, cli_args: &EtymonArgs) -> Result<()> {
    let service = load_service(&args.source)?;

    let request = GuessRequest {
        current_word_id: args.current.clone(),
        guessed_word_id: Some(args.guess.clone()),
        puzzle_id: args.puzzle_id.clone(),
    };
    let response = service
        .validate_guess(&request)
        .map_err(|e| anyhow::anyhow!("{e} (status {})", e.status_code()))?;

    output_result("", &response, cli_args)
}

fn lookup(args: &LookupArgs, cli_args: &EtymonArgs) -> Result<()> {
    let index = SearchIndex::load(&args.index)?;
    let result = LookupResults {
        query: args.query.clone(),
        hits: index
            .lookup(&args.query, args.limit)
            .into_iter()
            .cloned()
            .collect(),
    };
    output_result("", &result, cli_args)
}
