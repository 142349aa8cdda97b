//! Configuration for a preparation run.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EtymonError, Result};
use crate::graph::builder::FALLBACK_DEFINITION;

/// Where to read the dataset, where to write outputs, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepareConfig {
    /// Raw dataset file, `{ "words": [...] }`.
    pub input_path: PathBuf,

    /// Directory receiving both output files. Created if missing.
    pub output_dir: PathBuf,

    pub graph_file_name: String,

    pub search_index_file_name: String,

    /// Definition text for nodes without one.
    pub fallback_definition: String,

    /// Pretty-print output JSON.
    pub pretty: bool,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/etymologies.json"),
            output_dir: PathBuf::from("data/out"),
            graph_file_name: "graph.json".to_string(),
            search_index_file_name: "search_index.json".to_string(),
            fallback_definition: FALLBACK_DEFINITION.to_string(),
            pretty: true,
        }
    }
}

impl PrepareConfig {
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input_path: I, output_dir: O) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Load a JSON config file; absent fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                let msg = format!("cannot open config {}: {e}", path.display());
                return Err(EtymonError::config(msg));
            }
        };
        let config: PrepareConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_fallback_definition<S: Into<String>>(mut self, definition: S) -> Self {
        self.fallback_definition = definition.into();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_file_names<G: Into<String>, S: Into<String>>(
        mut self,
        graph: G,
        search: S,
    ) -> Self {
        self.graph_file_name = graph.into();
        self.search_index_file_name = search.into();
        self
    }

    pub fn graph_path(&self) -> PathBuf {
        self.output_dir.join(&self.graph_file_name)
    }

    pub fn search_index_path(&self) -> PathBuf {
        self.output_dir.join(&self.search_index_file_name)
    }

    /// Reject configs whose outputs would collide or have no name.
    pub fn validate(&self) -> Result<()> {
        if self.graph_file_name.is_empty() || self.search_index_file_name.is_empty() {
            return Err(EtymonError::config("output file names must not be empty"));
        }
        if self.graph_file_name == self.search_index_file_name {
            let msg = "graph and search index must be written to different files";
            return Err(EtymonError::config(msg));
        }
        Ok(())
    }
}
