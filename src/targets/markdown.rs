//! Generic markdown target
//!
//! The baseline dialect: rules get the full metadata block, prompts are
//! emitted as bare resolved bodies, everything lands in flat `.md` files.
//! Kiro consumes exactly this layout, so its compiler delegates to
//! `compile_plain` here.

use crate::error::RulekitResult;
use crate::metadata::{collection_rule_block, resolve_body, standalone_rule_block};
use crate::models::{CompilationResult, Kind, Resource};
use crate::paths::{collection_path, standalone_path};
use crate::targets::{check_api_version, no_fragments, TargetCompiler, SUPPORTED_API_VERSIONS};
use crate::validate::{validate_id, validate_rule_name};

/// Generic markdown compiler
pub struct MarkdownCompiler;

impl MarkdownCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetCompiler for MarkdownCompiler {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn supported_versions(&self) -> &'static [&'static str] {
        SUPPORTED_API_VERSIONS
    }

    fn compile(&self, resource: &Resource) -> RulekitResult<Vec<CompilationResult>> {
        compile_plain(resource, self.name(), self.supported_versions())
    }
}

/// Plain-markdown compilation, shared verbatim by the kiro target.
pub(crate) fn compile_plain(
    resource: &Resource,
    target: &'static str,
    supported: &'static [&'static str],
) -> RulekitResult<Vec<CompilationResult>> {
    check_api_version(target, supported, &resource.api_version)?;

    let mut outputs = Vec::new();

    match &resource.kind {
        Kind::Rule(rule) => {
            validate_id(resource.id())?;
            validate_rule_name(&rule.name)?;

            let body = resolve_body(&rule.body, &no_fragments());
            if !body.is_empty() {
                let content = standalone_rule_block(resource.id(), rule, &body);
                outputs.push(CompilationResult::new(
                    standalone_path(resource.id(), ".md"),
                    content,
                    target,
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
                let content = collection_rule_block(resource.id(), set, item_id, item, &body);
                outputs.push(CompilationResult::new(
                    collection_path(resource.id(), item_id, ".md"),
                    content,
                    target,
                ));
            }
        }
        Kind::Prompt(prompt) => {
            validate_id(resource.id())?;

            let body = resolve_body(&prompt.body, &no_fragments());
            if !body.is_empty() {
                outputs.push(CompilationResult::new(
                    standalone_path(resource.id(), ".md"),
                    body,
                    target,
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
                    collection_path(resource.id(), item_id, ".md"),
                    body,
                    target,
                ));
            }
        }
    }

    Ok(outputs)
}
