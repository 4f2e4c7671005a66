//! Resolution misses and configuration errors.

use thiserror::Error;

/// Why a session variable produced no value.
///
/// None of these are failures from the caller's point of view: every miss
/// renders as empty text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Miss {
    /// The path was absent or empty, or a nested path had an empty segment.
    #[error("invalid variable path")]
    InvalidPath,
    /// The store has no entry for the root key.
    #[error("key not found in session")]
    KeyNotFound,
    /// A segment named a member the current value does not have.
    #[error("member not found")]
    MemberNotFound,
    /// A null value was reached with segments still to walk.
    #[error("cannot walk through null")]
    NullTraversal,
}

/// Errors produced while building a renderer configuration from a layout token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The token is not wrapped in `${` ... `}`.
    #[error("layout token must have the form ${{name:...}}, got '{token}'")]
    Envelope {
        /// The offending token.
        token: String,
    },
    /// The token names a different layout renderer.
    #[error("unknown layout renderer '{name}'")]
    UnknownRenderer {
        /// Renderer name found in the token.
        name: String,
    },
    /// An option the session renderer does not understand.
    #[error("unknown option '{name}'")]
    UnknownOption {
        /// Option name as written.
        name: String,
    },
    /// An option value that could not be parsed.
    #[error("invalid value '{value}' for option '{option}': expected {expected}")]
    InvalidValue {
        /// Option name as written.
        option: String,
        /// Value as written.
        value: String,
        /// Description of the accepted values.
        expected: &'static str,
    },
    /// The variable was given both as the default parameter and by name, or twice by name.
    #[error("variable given more than once")]
    DuplicateVariable,
}
