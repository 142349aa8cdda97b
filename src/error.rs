//! Error types for the etymon library.
//!
//! All fallible operations return [`Result`], whose error side is
//! [`EtymonError`]. Graph building itself never fails on bad records; errors
//! come from I/O, JSON decoding, configuration, and missing inputs.
//!
//! # Examples
//!
//! ```
//! use etymon::error::{EtymonError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(EtymonError::config("output directory is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for etymon operations.
#[derive(Error, Debug)]
pub enum EtymonError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The raw etymology dataset was not found.
    #[error("Missing input file at {}; place the etymology dataset there first", .0.display())]
    MissingInput(PathBuf),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A prepared output file could not be moved into place.
    #[error("Failed to persist {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Errors raised with `anyhow!` at the command boundary
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with EtymonError.
pub type Result<T> = std::result::Result<T, EtymonError>;

impl EtymonError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        EtymonError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        EtymonError::Other(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        EtymonError::Other(format!("Not found: {}", msg.into()))
    }
}
