//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{EtymonArgs, OutputFormat};
use crate::error::Result;
use crate::pipeline::PrepareReport;
use crate::puzzle::{GuessResponse, Puzzle, ValidationSummary};
use crate::search_index::SearchIndexItem;

/// Result structure for puzzle listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct PuzzleIdList {
    pub puzzle_ids: Vec<String>,
}

/// Result structure for search index lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResults {
    pub query: String,
    pub hits: Vec<SearchIndexItem>,
}

/// Plain-text rendering used by [`OutputFormat::Human`].
pub trait HumanReadable {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Output a result in the format selected on the command line.
pub fn output_result<T>(message: &str, result: &T, args: &EtymonArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args)
}

/// Write a result to `out`; split from [`output_result`] for testing.
pub fn write_result<T>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &EtymonArgs,
) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 && !message.is_empty() {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)?;
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

impl HumanReadable for PrepareReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        let stats = &self.stats;
        writeln!(
            out,
            "Generated {} nodes and {} edges from {} entries.",
            stats.nodes, stats.edges, stats.entries
        )?;
        writeln!(out, "  Duplicate links dropped: {}", stats.duplicate_links)?;
        if stats.dangling_edges > 0 {
            writeln!(out, "  Dangling edges skipped: {}", stats.dangling_edges)?;
        }
        writeln!(out, "  Graph:        {}", self.graph_path.display())?;
        writeln!(out, "  Search index: {}", self.search_index_path.display())?;
        writeln!(out, "  Time:         {}ms", self.duration_ms)
    }
}

impl HumanReadable for ValidationSummary {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for report in self.invalid() {
            writeln!(
                out,
                "Puzzle \"{}\" (ID: {}) is invalid.",
                report.name, report.puzzle_id
            )?;
            for violation in &report.violations {
                writeln!(out, "   {violation}")?;
            }
        }

        if self.is_valid() {
            writeln!(out, "All {} puzzles are valid.", self.reports.len())
        } else {
            writeln!(
                out,
                "Validation failed: {} violation(s) in {} of {} puzzles.",
                self.violation_count(),
                self.invalid().count(),
                self.reports.len()
            )
        }
    }
}

impl HumanReadable for Puzzle {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Puzzle {}", self.puzzle_id)?;
        let (start, target) = (&self.start_node, &self.target_node);
        writeln!(out, "  Start:  {} ({})", start.word, start.lang)?;
        writeln!(out, "  Target: {} ({})", target.word, target.lang)?;
        writeln!(out, "  Path length: {}", self.total_path_length)?;
        for step in &self.scaffold {
            write!(out, "  [{}] {}", step.index, step.lang)?;
            if let Some(pos) = &step.hint.pos {
                write!(out, " {pos}")?;
            }
            writeln!(out, ": {}", step.hint.definition)?;
        }
        Ok(())
    }
}

impl HumanReadable for PuzzleIdList {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.puzzle_ids.is_empty() {
            return writeln!(out, "No valid puzzles.");
        }
        for id in &self.puzzle_ids {
            writeln!(out, "{id}")?;
        }
        Ok(())
    }
}

impl HumanReadable for GuessResponse {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        match &self.relation {
            Some(relation) if self.is_valid_neighbor => {
                writeln!(out, "Valid neighbor ({relation}): {}", self.node.id)?
            }
            _ => writeln!(out, "Not a neighbor: {}", self.node.id)?,
        }
        writeln!(out, "  {} ({})", self.node.word, self.node.lang)?;
        if self.path_index >= 0 {
            writeln!(out, "  On path at index {}", self.path_index)
        } else {
            writeln!(out, "  Not on the puzzle path")
        }
    }
}

impl HumanReadable for LookupResults {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.hits.is_empty() {
            return writeln!(out, "No matches for \"{}\".", self.query);
        }
        for hit in &self.hits {
            writeln!(out, "{}\t{}\t{}", hit.id, hit.label, hit.lang)?;
        }
        Ok(())
    }
}
