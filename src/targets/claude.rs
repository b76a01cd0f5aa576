//! Claude target
//!
//! Rules are flat `.md` files; a `paths:` frontmatter block is prepended
//! only when the rule actually has scope patterns. Prompts use the skill
//! convention instead: a directory per prompt holding a fixed `SKILL.md`
//! with the bare resolved body.

use crate::error::RulekitResult;
use crate::metadata::{collection_rule_block, resolve_body, standalone_rule_block};
use crate::models::{flatten_scope, CompilationResult, Kind, Resource, ScopeEntry};
use crate::paths::{
    claude_collection_path, claude_standalone_path, collection_path, standalone_path,
};
use crate::targets::{check_api_version, no_fragments, TargetCompiler, SUPPORTED_API_VERSIONS};
use crate::validate::{validate_id, validate_rule_name};

/// Claude compiler
pub struct ClaudeCompiler;

impl ClaudeCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Wrap a metadata block with a `paths:` frontmatter block when the
    /// rule has scope patterns; pass the block through untouched otherwise.
    fn with_paths_frontmatter(&self, scope: &[ScopeEntry], block: String) -> String {
        let files = flatten_scope(scope);
        if files.is_empty() {
            return block;
        }

        let mut fm = String::from("---\npaths:\n");
        for glob in files {
            fm.push_str(&format!("  - \"{glob}\"\n"));
        }
        fm.push_str("---");

        format!("{fm}\n\n{block}")
    }
}

impl Default for ClaudeCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetCompiler for ClaudeCompiler {
    fn name(&self) -> &'static str {
        "claude"
    }

    fn supported_versions(&self) -> &'static [&'static str] {
        SUPPORTED_API_VERSIONS
    }

    fn compile(&self, resource: &Resource) -> RulekitResult<Vec<CompilationResult>> {
        check_api_version(self.name(), self.supported_versions(), &resource.api_version)?;

        let mut outputs = Vec::new();

        match &resource.kind {
            Kind::Rule(rule) => {
                validate_id(resource.id())?;
                validate_rule_name(&rule.name)?;

                let body = resolve_body(&rule.body, &no_fragments());
                if !body.is_empty() {
                    let block = standalone_rule_block(resource.id(), rule, &body);
                    outputs.push(CompilationResult::new(
                        standalone_path(resource.id(), ".md"),
                        self.with_paths_frontmatter(&rule.scope, block),
                        self.name(),
                    ));
                }
            }
            Kind::Ruleset(set) => {
                validate_id(resource.id())?;
                for (item_id, item) in &set.rules {
                    validate_id(item_id)?;
                    validate_rule_name(&item.name)?;

                    let body = resolve_body(&item.body, &set.fragments);
                    if body.is_empty() {
                        continue;
                    }
                    let block = collection_rule_block(resource.id(), set, item_id, item, &body);
                    outputs.push(CompilationResult::new(
                        collection_path(resource.id(), item_id, ".md"),
                        self.with_paths_frontmatter(&item.scope, block),
                        self.name(),
                    ));
                }
            }
            Kind::Prompt(prompt) => {
                validate_id(resource.id())?;

                let body = resolve_body(&prompt.body, &no_fragments());
                if !body.is_empty() {
                    outputs.push(CompilationResult::new(
                        claude_standalone_path(resource.id()),
                        body,
                        self.name(),
                    ));
                }
            }
            Kind::Promptset(set) => {
                validate_id(resource.id())?;
                for (item_id, item) in &set.prompts {
                    validate_id(item_id)?;

                    let body = resolve_body(&item.body, &set.fragments);
                    if body.is_empty() {
                        continue;
                    }
                    outputs.push(CompilationResult::new(
                        claude_collection_path(resource.id(), item_id),
                        body,
                        self.name(),
                    ));
                }
            }
        }

        Ok(outputs)
    }
}
