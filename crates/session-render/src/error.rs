//! Errors reported by the `session-render` binary.

use std::{io, path::PathBuf};

use session_value::ConfigError;
use thiserror::Error;

/// Everything that can stop `session-render` before it renders.
#[derive(Debug, Error)]
pub enum Error {
    /// The store file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// Store file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The store file is not valid JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        /// Store file path.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
    /// The store file holds JSON that is not an object.
    #[error("{} must contain a JSON object", .path.display())]
    NotAnObject {
        /// Store file path.
        path: PathBuf,
    },
    /// A `--set` argument without `KEY=`.
    #[error("expected KEY=VALUE, got '{arg}'")]
    Assignment {
        /// The argument as given.
        arg: String,
    },
    /// The layout token was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
