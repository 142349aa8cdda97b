//! Guess validation: is the guessed word a legal next step?
//!
//! Request and response use the camelCase JSON field names of the serving
//! layer:
//! ```json
//! { "currentWordId": "approbate_E", "guessedWordId": "approbatus_L", "puzzleId": "2" }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::Node;
use crate::puzzle::service::PuzzleService;

/// Errors reported back to the caller of [`PuzzleService::validate_guess`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("guessedWordId is required")]
    MissingGuess,

    #[error("Puzzle configuration error")]
    PuzzleUnavailable,

    #[error("Invalid word ID: {0}")]
    UnknownWord(String),
}

impl GuessError {
    /// HTTP-style status for a serving layer: 4xx are client errors.
    pub fn status_code(&self) -> u16 {
        match self {
            GuessError::InvalidRequest(_) | GuessError::MissingGuess => 400,
            GuessError::UnknownWord(_) => 404,
            GuessError::PuzzleUnavailable => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

/// A player's guess.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    #[serde(default)]
    pub current_word_id: Option<String>,
    #[serde(default)]
    pub guessed_word_id: Option<String>,
    #[serde(default)]
    pub puzzle_id: Option<String>,
}

impl GuessRequest {
    pub fn new<S: Into<String>>(guessed_word_id: S) -> Self {
        GuessRequest {
            guessed_word_id: Some(guessed_word_id.into()),
            ..Default::default()
        }
    }

    pub fn with_current<S: Into<String>>(mut self, current_word_id: S) -> Self {
        self.current_word_id = Some(current_word_id.into());
        self
    }

    pub fn in_puzzle<S: Into<String>>(mut self, puzzle_id: S) -> Self {
        self.puzzle_id = Some(puzzle_id.into());
        self
    }

    /// Parse a request body; malformed JSON is a client error.
    pub fn from_json_str(body: &str) -> Result<Self, GuessError> {
        serde_json::from_str(body).map_err(|e| GuessError::InvalidRequest(e.to_string()))
    }
}

/// The answer to a guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub is_valid_neighbor: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    pub node: Node,
    /// Index of the guess on the puzzle's path, or -1 when it is off the path.
    pub path_index: i64,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl PuzzleService {
    /// Validate a guess against the requested puzzle, falling back to the
    /// default puzzle when the request names none or an unusable one.
    pub fn validate_guess(&self, request: &GuessRequest) -> Result<GuessResponse, GuessError> {
        let Some(guessed_id) = non_empty(&request.guessed_word_id) else {
            return Err(GuessError::MissingGuess);
        };

        let puzzle = non_empty(&request.puzzle_id)
            .and_then(|id| self.get_puzzle_by_id(id))
            .or_else(|| self.get_default_puzzle())
            .ok_or(GuessError::PuzzleUnavailable)?;

        let node = self
            .graph()
            .get_node(guessed_id)
            .ok_or_else(|| GuessError::UnknownWord(guessed_id.to_string()))?;

        let current_id = non_empty(&request.current_word_id);
        let connection = current_id.and_then(|id| self.graph().check_connection(id, guessed_id));

        let path_index = puzzle
            .path_ids
            .iter()
            .position(|id| id == guessed_id)
            .map_or(-1, |i| i as i64);

        Ok(GuessResponse {
            is_valid_neighbor: connection.is_some(),
            relation: connection.map(|n| n.relation.clone()),
            node: node.clone(),
            path_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dataset::WordEntry;
    use crate::graph::{DERIVED_FROM, GraphBuilder};
    use crate::puzzle::definition::PuzzleDefinition;

    fn service() -> PuzzleService {
        let mut builder = GraphBuilder::default();
        let entry = WordEntry::new("approbate_E")
            .with_link("approbate_E", "approbatus_L")
            .with_link("approbatus_L", "approbare_L")
            .with_link("approbare_L", "probare_L");
        builder.add_entry(&entry);
        PuzzleService::new(
            Arc::new(builder.finish().graph),
            vec![
                PuzzleDefinition::new("1", "Missing", ["ghost_L", "approbate_E"]),
                PuzzleDefinition::new(
                    "2",
                    "Approbate chain",
                    ["approbate_E", "approbatus_L", "approbare_L"],
                ),
            ],
        )
    }

    fn guess(request: GuessRequest) -> Result<GuessResponse, GuessError> {
        service().validate_guess(&request)
    }

    #[test]
    fn test_valid_neighbor_on_path() {
        let request = GuessRequest::new("approbatus_L")
            .with_current("approbate_E")
            .in_puzzle("2");
        let response = guess(request).unwrap();

        assert!(response.is_valid_neighbor);
        assert_eq!(response.relation.as_deref(), Some(DERIVED_FROM));
        assert_eq!(response.node.id, "approbatus_L");
        assert_eq!(response.path_index, 1);
    }

    #[test]
    fn test_reverse_step_is_valid_neighbor() {
        let request = GuessRequest::new("approbate_E").with_current("approbatus_L");
        let response = guess(request).unwrap();
        assert!(response.is_valid_neighbor);
        assert_eq!(response.path_index, 0);
    }

    #[test]
    fn test_off_path_guess() {
        let request = GuessRequest::new("probare_L")
            .with_current("approbatus_L")
            .in_puzzle("2");
        let response = guess(request).unwrap();

        assert!(!response.is_valid_neighbor);
        assert_eq!(response.relation, None);
        assert_eq!(response.path_index, -1);
    }

    #[test]
    fn test_no_current_word() {
        let response = guess(GuessRequest::new("approbare_L")).unwrap();
        assert!(!response.is_valid_neighbor);
        assert_eq!(response.path_index, 2);
    }

    #[test]
    fn test_unknown_puzzle_falls_back_to_default() {
        let request = GuessRequest::new("approbare_L").in_puzzle("99");
        let response = guess(request).unwrap();
        assert_eq!(response.path_index, 2);

        // Puzzle "1" is invalid, so the default ("2") is used instead.
        let request = GuessRequest::new("approbare_L").in_puzzle("1");
        assert_eq!(guess(request).unwrap().path_index, 2);
    }

    #[test]
    fn test_missing_guess() {
        let err = guess(GuessRequest::default()).unwrap_err();
        assert_eq!(err, GuessError::MissingGuess);
        assert!(err.is_client_error());

        let err = guess(GuessRequest::new("")).unwrap_err();
        assert_eq!(err, GuessError::MissingGuess);
    }

    #[test]
    fn test_unknown_word() {
        let err = guess(GuessRequest::new("ghost_L")).unwrap_err();
        assert_eq!(err, GuessError::UnknownWord("ghost_L".to_string()));
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_no_servable_puzzle() {
        let service = PuzzleService::new(Arc::new(Default::default()), Vec::new());
        let request = GuessRequest::new("x_L");
        let err = service.validate_guess(&request).unwrap_err();
        assert_eq!(err, GuessError::PuzzleUnavailable);
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_parse_request() {
        let body = r#"{ "currentWordId": "approbate_E", "guessedWordId": "approbatus_L" }"#;
        let request = GuessRequest::from_json_str(body).unwrap();
        assert_eq!(request.puzzle_id, None);
        assert_eq!(request.guessed_word_id.as_deref(), Some("approbatus_L"));

        let err = GuessRequest::from_json_str("not json").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_response_json_shape() {
        let request = GuessRequest::new("probare_L").in_puzzle("2");
        let value = serde_json::to_value(guess(request).unwrap()).unwrap();
        assert_eq!(value["isValidNeighbor"], false);
        assert_eq!(value["pathIndex"], -1);
        assert!(value.get("relation").is_none());
    }
}
