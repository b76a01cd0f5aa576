//! Error types for Rulekit
//!
//! Uses `thiserror` for library errors. Every error is terminal to the
//! whole compile call: no retries, no partial results across targets.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Rulekit operations
pub type RulekitResult<T> = Result<T, RulekitError>;

/// Main error type for Rulekit operations
#[derive(Error, Debug)]
pub enum RulekitError {
    /// Resource is missing a required top-level field
    #[error("missing required field '{field}' in resource document")]
    MissingField { field: &'static str },

    /// Compile was requested with an empty target list
    #[error("no targets specified - pass at least one target name")]
    NoTargetsSpecified,

    /// Requested target name is not registered
    #[error("unknown target '{name}'")]
    UnknownTarget { name: String },

    /// Resource's apiVersion is not accepted by a target compiler
    #[error("target '{target}' does not support apiVersion '{declared}' (supported: {})", .supported.join(", "))]
    UnsupportedApiVersion {
        target: String,
        declared: String,
        supported: Vec<String>,
    },

    /// Resource kind is not one of the four sanctioned variants
    #[error("unsupported kind '{kind}' - expected Rule, Ruleset, Prompt or Promptset")]
    UnsupportedKind { kind: String },

    /// An identifier contains a character outside `[A-Za-z0-9_-]`
    #[error("invalid identifier '{id}': character '{found}' is not allowed (use letters, digits, '-' or '_')")]
    InvalidIdentifier { id: String, found: char },

    /// An identifier is empty
    #[error("invalid identifier: must not be empty")]
    EmptyIdentifier,

    /// A rule name contains a parenthesis, which would collide with the
    /// `# Name (ENFORCEMENT)` header syntax
    #[error("invalid rule name '{name}': character '{found}' conflicts with the enforcement header")]
    InvalidRuleName { name: String, found: char },

    /// Resource document could not be parsed
    #[error("invalid resource document {file}: {message}")]
    InvalidDocument { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
