//! Rulekit - rule and prompt compiler for AI coding assistants
//!
//! Rulekit takes a validated AI resource document (a rule or prompt,
//! possibly organized into a named collection) and compiles it into the
//! file layout and markup dialect each supported assistant expects. The
//! engine is pure: it consumes a typed `Resource` and produces
//! path/content pairs; loading documents and writing files live at the
//! edges.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod models;
pub mod paths;
pub mod targets;
pub mod validate;
pub mod writer;

// Re-exports for convenience
pub use config::Config;
pub use engine::{CompileOptions, Engine};
pub use error::{RulekitError, RulekitResult};
pub use loader::{load_file, load_str};
pub use models::{
    Body, CompilationResult, Kind, Metadata, PromptSpec, PromptsetSpec, Resource, RuleSpec,
    RulesetSpec, ScopeEntry,
};
pub use targets::{TargetCompiler, TargetRegistry, SUPPORTED_API_VERSIONS};
