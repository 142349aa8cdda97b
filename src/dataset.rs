//! Raw etymology dataset input.
//!
//! The input file has the shape:
//! ```json
//! {
//!   "words": [
//!     {
//!       "word": "mouse (n.)_E",
//!       "word_root": "mouse",
//!       "etymology_chain": [{ "source": "mouse (n.)_E", "target": "mus_OE" }]
//!     }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EtymonError, Result};

/// One derivation step: `source` derives from `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
}

impl ChainLink {
    pub fn new<S: Into<String>, T: Into<String>>(source: S, target: T) -> Self {
        ChainLink {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A dataset entry for one word and its etymology chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(default)]
    pub word: String,

    /// Preferred display form for the entry's own node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_root: Option<String>,

    #[serde(default)]
    pub etymology_chain: Vec<ChainLink>,
}

impl WordEntry {
    pub fn new<S: Into<String>>(word: S) -> Self {
        WordEntry {
            word: word.into(),
            word_root: None,
            etymology_chain: Vec::new(),
        }
    }

    pub fn with_root<S: Into<String>>(mut self, root: S) -> Self {
        self.word_root = Some(root.into());
        self
    }

    pub fn with_link<S: Into<String>, T: Into<String>>(mut self, source: S, target: T) -> Self {
        self.etymology_chain.push(ChainLink::new(source, target));
        self
    }

    /// The root hint, treating an empty string as absent.
    pub fn root_hint(&self) -> Option<&str> {
        self.word_root.as_deref().filter(|root| !root.is_empty())
    }
}

/// The whole input file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub words: Vec<WordEntry>,
}

impl Dataset {
    pub fn new(words: Vec<WordEntry>) -> Self {
        Dataset { words }
    }

    /// Load a dataset file. A missing file is reported as
    /// [`EtymonError::MissingInput`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EtymonError::MissingInput(path.to_path_buf()));
        }

        let reader = BufReader::new(File::open(path)?);
        let dataset: Dataset = serde_json::from_reader(reader)?;
        Ok(dataset)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset() {
        let json = r#"{
            "words": [
                {
                    "word": "mouse (n.)_E",
                    "etymology_chain": [{ "source": "mouse (n.)_E", "target": "mus_OE" }]
                },
                { "word": "approbate_E", "word_root": "approbate", "etymology_chain": [] }
            ]
        }"#;

        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.words[0].etymology_chain[0].target, "mus_OE");
        assert_eq!(dataset.words[0].word_root, None);
        assert_eq!(dataset.words[1].root_hint(), Some("approbate"));
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"{ "words": [ {} , { "word": "x_L" } ] }"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.words[0].word, "");
        assert!(dataset.words[1].etymology_chain.is_empty());

        let empty = Dataset::from_json_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_empty_root_is_absent() {
        let entry = WordEntry::new("x_L").with_root("");
        assert_eq!(entry.root_hint(), None);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("etymologies.json");

        match Dataset::load(&path) {
            Err(EtymonError::MissingInput(p)) => assert_eq!(p, path),
            other => panic!("Expected MissingInput, got {other:?}"),
        }
    }
}
