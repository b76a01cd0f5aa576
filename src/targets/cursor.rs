//! Cursor target
//!
//! Rules become `.mdc` files with MDC frontmatter (`description`, `globs`,
//! `alwaysApply`) stacked on top of the metadata block. `alwaysApply` is
//! true exactly when the enforcement literal is `must`. Prompts are plain
//! `.md` bodies with no frontmatter.

use crate::error::RulekitResult;
use crate::metadata::{collection_rule_block, resolve_body, standalone_rule_block};
use crate::models::{flatten_scope, CompilationResult, Kind, Resource, RuleSpec};
use crate::paths::{collection_path, standalone_path};
use crate::targets::{
    check_api_version, no_fragments, yaml_flow_list, TargetCompiler, SUPPORTED_API_VERSIONS,
};
use crate::validate::{validate_id, validate_rule_name};

/// Cursor compiler
pub struct CursorCompiler;

impl CursorCompiler {
    pub fn new() -> Self {
        Self
    }

    /// MDC frontmatter for a rule
    fn mdc_frontmatter(&self, rule: &RuleSpec) -> String {
        let globs = flatten_scope(&rule.scope);

        let mut fm = String::from("---\n");
        fm.push_str(&format!("description: {}\n", rule.description));
        fm.push_str(&format!("globs: {}\n", yaml_flow_list(&globs)));
        fm.push_str(&format!("alwaysApply: {}\n", rule.enforcement == "must"));
        fm.push_str("---");
        fm
    }
}

impl Default for CursorCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetCompiler for CursorCompiler {
    fn name(&self) -> &'static str {
        "cursor"
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
                    let content = format!("{}\n{}", self.mdc_frontmatter(rule), block);
                    outputs.push(CompilationResult::new(
                        standalone_path(resource.id(), ".mdc"),
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
                    let content = format!("{}\n{}", self.mdc_frontmatter(item), block);
                    outputs.push(CompilationResult::new(
                        collection_path(resource.id(), item_id, ".mdc"),
                        content,
                        self.name(),
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
                        collection_path(resource.id(), item_id, ".md"),
                        body,
                        self.name(),
                    ));
                }
            }
        }

        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Body, Metadata, PromptSpec, ScopeEntry};

    fn resource(id: &str, kind: Kind) -> Resource {
        Resource {
            api_version: "rulekit.dev/v1".to_string(),
            metadata: Metadata { id: id.to_string() },
            kind,
        }
    }

    fn rule(name: &str, enforcement: &str, body: &str) -> RuleSpec {
        RuleSpec {
            name: name.to_string(),
            description: String::new(),
            enforcement: enforcement.to_string(),
            scope: Vec::new(),
            body: Body::Literal(body.to_string()),
        }
    }

    #[test]
    fn compile_rule_uses_mdc_extension() {
        let compiler = CursorCompiler::new();
        let res = resource("style", Kind::Rule(rule("Style", "must", "content")));

        let outputs = compiler.compile(&res).unwrap();

        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].path, "style.mdc");
    }

    #[test]
    fn compile_rule_frontmatter_must_sets_always_apply() {
        let compiler = CursorCompiler::new();
        let res = resource("style", Kind::Rule(rule("Style", "must", "content")));

        let outputs = compiler.compile(&res).unwrap();

        assert!(outputs[0].content.starts_with("---\n"));
        assert!(outputs[0].content.contains("alwaysApply: true"));
        assert!(outputs[0].content.contains("globs: []"));
    }

    #[test]
    fn compile_rule_frontmatter_should_not_always_apply() {
        let compiler = CursorCompiler::new();
        let res = resource("style", Kind::Rule(rule("Style", "should", "content")));

        let outputs = compiler.compile(&res).unwrap();

        assert!(outputs[0].content.contains("alwaysApply: false"));
    }

    #[test]
    fn compile_rule_frontmatter_globs_flattened() {
        let compiler = CursorCompiler::new();
        let mut r = rule("Rust Style", "must", "content");
        r.description = "Rust conventions".to_string();
        r.scope = vec![ScopeEntry {
            name: "rust".to_string(),
            files: vec!["src/**/*.rs".to_string(), "tests/**/*.rs".to_string()],
        }];
        let res = resource("rust-style", Kind::Rule(r));

        let outputs = compiler.compile(&res).unwrap();

        assert!(outputs[0]
            .content
            .contains("globs: [\"src/**/*.rs\", \"tests/**/*.rs\"]"));
        assert!(outputs[0].content.contains("description: Rust conventions"));
    }

    #[test]
    fn compile_rule_stacks_frontmatter_then_metadata_block() {
        let compiler = CursorCompiler::new();
        let res = resource("style", Kind::Rule(rule("Style", "must", "content")));

        let outputs = compiler.compile(&res).unwrap();

        // Frontmatter closes, then the metadata block opens on the next line.
        assert!(outputs[0].content.contains("---\n---\nid: style\n"));
        assert!(outputs[0].content.contains("# Style (MUST)"));
    }

    #[test]
    fn compile_prompt_is_bare_body_with_md_extension() {
        let compiler = CursorCompiler::new();
        let res = resource(
            "deploy",
            Kind::Prompt(PromptSpec {
                body: Body::Literal("Deploy now".to_string()),
                ..PromptSpec::default()
            }),
        );

        let outputs = compiler.compile(&res).unwrap();

        assert_eq!(outputs[0].path, "deploy.md");
        assert_eq!(outputs[0].content, "Deploy now");
    }

    #[test]
    fn compile_ruleset_item_paths_use_mdc() {
        let compiler = CursorCompiler::new();
        let mut set = crate::models::RulesetSpec::default();
        set.rules
            .insert("api".to_string(), rule("API", "must", "Follow REST"));
        let res = resource("backend", Kind::Ruleset(set));

        let outputs = compiler.compile(&res).unwrap();

        assert_eq!(outputs[0].path, "backend_api.mdc");
    }

    #[test]
    fn compile_empty_body_rule_yields_nothing() {
        let compiler = CursorCompiler::new();
        let res = resource("style", Kind::Rule(rule("Style", "must", "")));

        assert!(compiler.compile(&res).unwrap().is_empty());
    }
}
