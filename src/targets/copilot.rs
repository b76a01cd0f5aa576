//! Copilot target
//!
//! Both rules and prompts carry an `applyTo:` frontmatter line with the
//! flattened scope glob list (`[]` when unscoped). Rules land in
//! `.instructions.md` files on top of the metadata block; prompts land in
//! `.prompt.md` files over the bare body. Collection items use the
//! `{collection}_{item}` naming for both.

use crate::error::RulekitResult;
use crate::metadata::{collection_rule_block, resolve_body, standalone_rule_block};
use crate::models::{flatten_scope, CompilationResult, Kind, Resource, ScopeEntry};
use crate::paths::{collection_path, standalone_path};
use crate::targets::{
    check_api_version, no_fragments, yaml_flow_list, TargetCompiler, SUPPORTED_API_VERSIONS,
};
use crate::validate::{validate_id, validate_rule_name};

/// Copilot compiler
pub struct CopilotCompiler;

impl CopilotCompiler {
    pub fn new() -> Self {
        Self
    }

    /// `applyTo:` frontmatter with the flattened scope glob list
    fn apply_to_frontmatter(&self, scope: &[ScopeEntry]) -> String {
        let files = flatten_scope(scope);
        format!("---\napplyTo: {}\n---", yaml_flow_list(&files))
    }
}

impl Default for CopilotCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetCompiler for CopilotCompiler {
    fn name(&self) -> &'static str {
        "copilot"
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
                    let content = format!("{}\n{}", self.apply_to_frontmatter(&rule.scope), block);
                    outputs.push(CompilationResult::new(
                        standalone_path(resource.id(), ".instructions.md"),
                        content,
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
                    let content = format!("{}\n{}", self.apply_to_frontmatter(&item.scope), block);
                    outputs.push(CompilationResult::new(
                        collection_path(resource.id(), item_id, ".instructions.md"),
                        content,
                        self.name(),
                    ));
                }
            }
            Kind::Prompt(prompt) => {
                validate_id(resource.id())?;

                let body = resolve_body(&prompt.body, &no_fragments());
                if !body.is_empty() {
                    let content =
                        format!("{}\n{}", self.apply_to_frontmatter(&prompt.scope), body);
                    outputs.push(CompilationResult::new(
                        standalone_path(resource.id(), ".prompt.md"),
                        content,
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
                    let content =
                        format!("{}\n{}", self.apply_to_frontmatter(&item.scope), body);
                    outputs.push(CompilationResult::new(
                        collection_path(resource.id(), item_id, ".prompt.md"),
                        content,
                        self.name(),
                    ));
                }
            }
        }

        Ok(outputs)
    }
}
