//! Authored puzzle definitions.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EtymonError, Result};

/// An authored puzzle: an ordered path from start word to target word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub path_ids: Vec<String>,
}

impl PuzzleDefinition {
    pub fn new<I, N, P, S>(id: I, name: N, path_ids: P) -> Self
    where
        I: Into<String>,
        N: Into<String>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PuzzleDefinition {
            id: id.into(),
            name: name.into(),
            path_ids: path_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn start_id(&self) -> Option<&str> {
        self.path_ids.first().map(String::as_str)
    }

    pub fn target_id(&self) -> Option<&str> {
        self.path_ids.last().map(String::as_str)
    }

    /// Position of `id` on the path.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.path_ids.iter().position(|p| p == id)
    }
}

const BUILTIN_PUZZLES: &[(&str, &str, &[&str])] = &[
    (
        "1",
        "Muscular to Mouse (Original Long)",
        &[
            "muscular_E",
            "musculus_L",
            "mus_L",
            "*mus-_PIE",
            "*mus_PGer",
            "mus_OE",
            "mouse (n.)_E",
        ],
    ),
    (
        "2",
        "Approbate chain",
        &["approbate_E", "approbatus_L", "approbare_L"],
    ),
    ("3", "Manitou (Unami) link", &["manitou_E", "manet:u_Unami"]),
    (
        "4",
        "Chief to Capital (Adj.)",
        &[
            "chief (n.)_E",
            "chief_OF",
            "caput_L",
            "capitalis_L",
            "capital (adj.)_E",
        ],
    ),
    (
        "5",
        "Approbate to Prove",
        &[
            "approbate_E",
            "approbatus_L",
            "approbare_L",
            "probare_L",
            "prove_E",
        ],
    ),
];

/// The authoritative built-in definition set, in authoring order.
pub fn builtin_definitions() -> Vec<PuzzleDefinition> {
    let mut definitions = Vec::with_capacity(BUILTIN_PUZZLES.len());
    for &(id, name, path) in BUILTIN_PUZZLES {
        definitions.push(PuzzleDefinition::new(id, name, path.iter().copied()));
    }
    definitions
}

/// Load definitions from a JSON array file.
pub fn load_definitions<P: AsRef<Path>>(path: P) -> Result<Vec<PuzzleDefinition>> {
    let path = path.as_ref();
    if !path.exists() {
        let what = format!("puzzle definitions at {}", path.display());
        return Err(EtymonError::not_found(what));
    }

    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
