//! Core data models for Rulekit
//!
//! Defines the fundamental data structures used throughout Rulekit:
//! - `Resource`: a parsed resource document (apiVersion + metadata + kind)
//! - `Kind`: the four document variants (Rule, Ruleset, Prompt, Promptset)
//! - `Body`: literal text or an ordered list of fragment references
//! - `CompilationResult`: one compiled output file (path + content + target)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A fully parsed resource document.
///
/// Immutable once loaded; the engine never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    /// Schema dialect tag, e.g. `rulekit.dev/v1`
    pub api_version: String,

    /// Top-level document metadata
    pub metadata: Metadata,

    /// Document payload, dispatched on the `kind` tag
    pub kind: Kind,
}

impl Resource {
    /// Top-level identifier shorthand
    pub fn id(&self) -> &str {
        &self.metadata.id
    }
}

/// Top-level document metadata
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Metadata {
    /// Top-level identifier (filesystem-safe, see `validate::validate_id`)
    #[serde(default)]
    pub id: String,
}

/// Document payload.
///
/// A closed tagged union: the loader rejects any other `kind` tag, so
/// dispatch over this enum is exhaustive by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// A single enforceable instruction
    Rule(RuleSpec),
    /// A named collection of rules keyed by local item-id
    Ruleset(RulesetSpec),
    /// A single reusable instruction without enforcement
    Prompt(PromptSpec),
    /// A named collection of prompts keyed by local item-id
    Promptset(PromptsetSpec),
}

impl Kind {
    /// The document tag this variant was parsed from
    pub fn tag(&self) -> &'static str {
        match self {
            Kind::Rule(_) => "Rule",
            Kind::Ruleset(_) => "Ruleset",
            Kind::Prompt(_) => "Prompt",
            Kind::Promptset(_) => "Promptset",
        }
    }
}

/// A single rule: standalone document payload or collection item.
///
/// Standalone rules take their id from the resource metadata; collection
/// items are keyed by the map key in the enclosing `RulesetSpec`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuleSpec {
    /// Human-readable name, rendered into the enforcement header
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Enforcement level. `must`/`should`/`may` by convention; the engine
    /// uppercases the stored value verbatim and does not reject others.
    #[serde(default)]
    pub enforcement: String,

    /// Named groups of file glob patterns this rule applies to
    #[serde(default)]
    pub scope: Vec<ScopeEntry>,

    #[serde(default)]
    pub body: Body,
}

/// A named collection of rules sharing a fragment dictionary
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RulesetSpec {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Items keyed by local id. BTreeMap keeps iteration key-sorted so
    /// compiled output order is reproducible.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSpec>,

    /// Shared text snippets referenced from item bodies via `$key`
    #[serde(default)]
    pub fragments: BTreeMap<String, String>,
}

/// A single prompt: standalone document payload or collection item
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PromptSpec {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub scope: Vec<ScopeEntry>,

    #[serde(default)]
    pub body: Body,
}

/// A named collection of prompts sharing a fragment dictionary
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PromptsetSpec {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub prompts: BTreeMap<String, PromptSpec>,

    #[serde(default)]
    pub fragments: BTreeMap<String, String>,
}

/// A named grouping of file glob patterns
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScopeEntry {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub files: Vec<String>,
}

/// Flatten scope entries into one glob list, in entry order
pub fn flatten_scope(scope: &[ScopeEntry]) -> Vec<&str> {
    scope
        .iter()
        .flat_map(|entry| entry.files.iter().map(String::as_str))
        .collect()
}

/// Rule or prompt body: literal text, or an ordered list of segments
/// where a leading `$` marks a fragment reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Body {
    Literal(String),
    Segments(Vec<String>),
}

impl Default for Body {
    fn default() -> Self {
        Body::Literal(String::new())
    }
}

/// One compiled output file.
///
/// `path` is relative and forward-slash separated; `content` already
/// includes any frontmatter, metadata block and header. The target tag
/// lets the output sink route the file without re-asking the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompilationResult {
    /// Relative output path (forward slashes)
    pub path: String,
    /// Full compiled content
    pub content: String,
    /// Name of the target that produced this result
    pub target: String,
}

impl CompilationResult {
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            target: target.into(),
        }
    }
}
