//! Target compilers
//!
//! Each supported AI assistant gets one implementation of `TargetCompiler`.
//! Compilers transform a typed `Resource` into zero or more
//! `CompilationResult`s; they never touch the filesystem.

pub mod claude;
pub mod copilot;
pub mod cursor;
pub mod kiro;
pub mod markdown;

pub use claude::ClaudeCompiler;
pub use copilot::CopilotCompiler;
pub use cursor::CursorCompiler;
pub use kiro::KiroCompiler;
pub use markdown::MarkdownCompiler;

use std::collections::BTreeMap;

use crate::error::{RulekitError, RulekitResult};
use crate::models::{CompilationResult, Resource};

/// apiVersion tags accepted by all built-in compilers
pub const SUPPORTED_API_VERSIONS: &[&str] = &["rulekit.dev/v1", "rulekit.dev/v1alpha1"];

/// One output dialect.
///
/// `compile` dispatches on the resource kind and produces path/content
/// pairs; an error from any branch fails the whole invocation.
pub trait TargetCompiler {
    /// Registry name of this target (e.g. `cursor`)
    fn name(&self) -> &'static str;

    /// apiVersion tags this compiler accepts
    fn supported_versions(&self) -> &'static [&'static str];

    /// Compile one resource into this target's file layout
    fn compile(&self, resource: &Resource) -> RulekitResult<Vec<CompilationResult>>;
}

/// Reject resources whose declared apiVersion a target does not accept.
///
/// Called both by the orchestrator (before invoking a compiler) and by
/// each compiler itself; the two layers must agree.
pub fn check_api_version(target: &str, supported: &[&str], declared: &str) -> RulekitResult<()> {
    if supported.contains(&declared) {
        return Ok(());
    }

    Err(RulekitError::UnsupportedApiVersion {
        target: target.to_string(),
        declared: declared.to_string(),
        supported: supported.iter().map(|v| v.to_string()).collect(),
    })
}

/// Render a glob list as a YAML flow sequence: `["a", "b"]`, or `[]`
pub(crate) fn yaml_flow_list(items: &[&str]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }

    let quoted: Vec<String> = items.iter().map(|item| format!("\"{item}\"")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Empty fragment dictionary for standalone resources, which have no
/// enclosing collection to resolve against.
pub(crate) fn no_fragments() -> BTreeMap<String, String> {
    BTreeMap::new()
}

/// Name-to-compiler registry.
///
/// An explicit value handed to the engine rather than process-global
/// state, so tests get a fresh registry each. Registration under an
/// existing name overwrites the prior compiler.
pub struct TargetRegistry {
    compilers: BTreeMap<String, Box<dyn TargetCompiler>>,
}

impl TargetRegistry {
    /// Registry with the five built-in targets
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("markdown", Box::new(MarkdownCompiler::new()));
        registry.register("kiro", Box::new(KiroCompiler::new()));
        registry.register("cursor", Box::new(CursorCompiler::new()));
        registry.register("claude", Box::new(ClaudeCompiler::new()));
        registry.register("copilot", Box::new(CopilotCompiler::new()));
        registry
    }

    /// Registry with no targets (for tests and custom setups)
    pub fn empty() -> Self {
        Self {
            compilers: BTreeMap::new(),
        }
    }

    /// Register a compiler under `name`, replacing any prior registration
    pub fn register(&mut self, name: impl Into<String>, compiler: Box<dyn TargetCompiler>) {
        self.compilers.insert(name.into(), compiler);
    }

    /// Look up a compiler by registry name
    pub fn get(&self, name: &str) -> Option<&dyn TargetCompiler> {
        self.compilers.get(name).map(Box::as_ref)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.compilers.keys().map(String::as_str).collect()
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_five_built_ins() {
        let registry = TargetRegistry::new();
        assert_eq!(
            registry.names(),
            vec!["claude", "copilot", "cursor", "kiro", "markdown"]
        );
    }

    #[test]
    fn registry_lookup_by_name() {
        let registry = TargetRegistry::new();
        assert!(registry.get("cursor").is_some());
        assert!(registry.get("bogus").is_none());
    }

    #[test]
    fn registry_register_overwrites() {
        let mut registry = TargetRegistry::new();
        // Re-register "kiro" with the markdown compiler; lookup must
        // return the replacement.
        registry.register("kiro", Box::new(MarkdownCompiler::new()));

        assert_eq!(registry.get("kiro").unwrap().name(), "markdown");
    }

    #[test]
    fn registry_empty_has_no_targets() {
        let registry = TargetRegistry::empty();
        assert!(registry.names().is_empty());
    }

    #[test]
    fn check_api_version_accepts_listed() {
        assert!(check_api_version("markdown", SUPPORTED_API_VERSIONS, "rulekit.dev/v1").is_ok());
        assert!(
            check_api_version("markdown", SUPPORTED_API_VERSIONS, "rulekit.dev/v1alpha1").is_ok()
        );
    }

    #[test]
    fn check_api_version_rejects_unlisted() {
        let err =
            check_api_version("markdown", SUPPORTED_API_VERSIONS, "rulekit.dev/v0").unwrap_err();
        assert!(matches!(
            err,
            RulekitError::UnsupportedApiVersion { .. }
        ));
    }

    #[test]
    fn yaml_flow_list_formats() {
        assert_eq!(yaml_flow_list(&[]), "[]");
        assert_eq!(yaml_flow_list(&["*.rs"]), "[\"*.rs\"]");
        assert_eq!(
            yaml_flow_list(&["src/**", "tests/**"]),
            "[\"src/**\", \"tests/**\"]"
        );
    }
}
