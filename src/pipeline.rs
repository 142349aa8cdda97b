//! The preparation run: dataset in, graph and search index out.
//!
//! A run is one synchronous pass. The dataset is read once, the graph and
//! index are built in memory, and both files are written at the end. If the
//! input is missing or serialization fails, nothing is written.
//!
//! # Examples
//!
//! ```
//! use etymon::dataset::{Dataset, WordEntry};
//! use etymon::pipeline::build_prepared;
//!
//! let dataset = Dataset::new(vec![
//!     WordEntry::new("mouse (n.)_E").with_link("mouse (n.)_E", "mus_OE"),
//! ]);
//! let prepared = build_prepared(&dataset, "n/a");
//!
//! assert_eq!(prepared.graph().len(), 2);
//! assert_eq!(prepared.search_index.len(), 2);
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use tempfile::{NamedTempFile, TempPath};

use crate::config::PrepareConfig;
use crate::dataset::Dataset;
use crate::error::{EtymonError, Result};
use crate::graph::{BuildOutput, BuildStats, EtymologyGraph, GraphBuilder};
use crate::search_index::{SearchIndexItem, build_search_index};

/// Everything a run produces, before it is written.
#[derive(Debug, Clone)]
pub struct PreparedData {
    pub build: BuildOutput,
    pub search_index: Vec<SearchIndexItem>,
}

impl PreparedData {
    pub fn graph(&self) -> &EtymologyGraph {
        &self.build.graph
    }

    pub fn stats(&self) -> BuildStats {
        self.build.stats
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareReport {
    pub stats: BuildStats,
    pub graph_path: PathBuf,
    pub search_index_path: PathBuf,
    pub duration_ms: u64,
}

/// Build graph and search index from a dataset, without touching disk.
pub fn build_prepared(dataset: &Dataset, fallback_definition: &str) -> PreparedData {
    let mut builder = GraphBuilder::new(fallback_definition);
    builder.add_entries(&dataset.words);
    let build = builder.finish();
    let search_index = build_search_index(&build.graph);

    PreparedData {
        build,
        search_index,
    }
}

/// Run a full preparation as described by `config`.
pub fn prepare(config: &PrepareConfig) -> Result<PrepareReport> {
    config.validate()?;
    let start_time = Instant::now();

    info!("Reading dataset from {}", config.input_path.display());
    let dataset = Dataset::load(&config.input_path)?;

    let prepared = build_prepared(&dataset, &config.fallback_definition);
    write_prepared(&prepared, config)?;

    let stats = prepared.stats();
    info!(
        "Generated {} nodes and {} edges; files written to {}",
        stats.nodes,
        stats.edges,
        config.output_dir.display()
    );

    Ok(PrepareReport {
        stats,
        graph_path: config.graph_path(),
        search_index_path: config.search_index_path(),
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    Ok(bytes)
}

/// Write both output files.
///
/// Both documents are serialized before any file is created, then staged in
/// temp files inside the output directory and renamed into place. The two
/// files are not replaced as an atomic pair: they are renamed one after the
/// other, and if the search index cannot be renamed the graph file is rolled
/// back to what it held before the call.
pub fn write_prepared(prepared: &PreparedData, config: &PrepareConfig) -> Result<()> {
    let graph_json = to_json(prepared.graph(), config.pretty)?;
    let index_json = to_json(&prepared.search_index, config.pretty)?;

    fs::create_dir_all(&config.output_dir)?;
    let graph_path = config.graph_path();
    let index_path = config.search_index_path();

    let graph_tmp = stage(&config.output_dir, &graph_json)?;
    let index_tmp = stage(&config.output_dir, &index_json)?;
    let previous_graph = backup(&config.output_dir, &graph_path)?;

    persist(graph_tmp, &graph_path)?;
    if let Err(e) = persist(index_tmp, &index_path) {
        restore(previous_graph, &graph_path);
        return Err(e);
    }
    Ok(())
}

fn stage(dir: &Path, bytes: &[u8]) -> Result<NamedTempFile> {
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(bytes)?;
    temp_file.flush()?;
    Ok(temp_file)
}

/// Copy an existing output file aside; the copy is removed when dropped.
fn backup(dir: &Path, path: &Path) -> Result<Option<TempPath>> {
    if !path.exists() {
        return Ok(None);
    }
    let temp_path = NamedTempFile::new_in(dir)?.into_temp_path();
    fs::copy(path, &temp_path)?;
    Ok(Some(temp_path))
}

fn restore(previous: Option<TempPath>, path: &Path) {
    let restored = match previous {
        Some(temp_path) => temp_path.persist(path).map_err(|e| e.error),
        None => fs::remove_file(path),
    };
    if let Err(e) = restored {
        warn!("Could not roll back {}: {e}", path.display());
    }
}

fn persist(temp_file: NamedTempFile, path: &Path) -> Result<()> {
    match temp_file.persist(path) {
        Ok(_) => Ok(()),
        Err(e) => Err(EtymonError::Persist {
            path: path.to_path_buf(),
            source: e.error,
        }),
    }
}
