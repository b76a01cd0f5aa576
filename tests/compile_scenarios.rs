//! End-to-end compile scenarios through the library API: documents go in
//! through the loader, results come out of the engine.

use std::path::Path;

use rulekit::{load_str, CompileOptions, Engine, RulekitError};

fn load(doc: &str) -> rulekit::Resource {
    load_str(doc, Path::new("test.yaml")).expect("fixture document must parse")
}

fn compile(doc: &str, targets: &[&str]) -> Vec<rulekit::CompilationResult> {
    let engine = Engine::new();
    engine
        .compile(&load(doc), &CompileOptions::for_targets(targets.iter().copied()))
        .expect("fixture compile must succeed")
}

#[test]
fn standalone_rule_for_markdown() {
    let doc = r#"
apiVersion: rulekit.dev/v1
kind: Rule
metadata:
  id: meaningfulNames
spec:
  name: Use Meaningful Names
  enforcement: must
  body: Use descriptive names.
"#;
    let results = compile(doc, &["markdown"]);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, "meaningfulNames.md");
    assert!(results[0].content.contains("enforcement: must"));
    assert!(results[0].content.contains("# Use Meaningful Names (MUST)"));
    assert!(results[0].content.ends_with("Use descriptive names."));
}

#[test]
fn ruleset_for_kiro_is_key_sorted() {
    let doc = r#"
apiVersion: rulekit.dev/v1
kind: Ruleset
metadata:
  id: backend
spec:
  rules:
    security:
      name: Security
      enforcement: should
      body: Validate input
    api:
      name: API
      enforcement: must
      body: Follow REST
"#;
    let results = compile(doc, &["kiro"]);

    let paths: Vec<&str> = results.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["backend_api.md", "backend_security.md"]);
}

#[test]
fn prompt_for_claude_is_skill_directory() {
    let doc = r#"
apiVersion: rulekit.dev/v1
kind: Prompt
metadata:
  id: deploy
spec:
  body: Deploy now
"#;
    let results = compile(doc, &["claude"]);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, "deploy/SKILL.md");
    assert_eq!(results[0].content, "Deploy now");
}

#[test]
fn rule_with_empty_body_yields_empty_result_list() {
    let doc = r#"
apiVersion: rulekit.dev/v1
kind: Rule
metadata:
  id: silent
spec:
  name: Silent
  enforcement: must
  body: ""
"#;
    for target in ["markdown", "kiro", "cursor", "claude", "copilot"] {
        let results = compile(doc, &[target]);
        assert!(results.is_empty(), "target {target} should skip empty body");
    }
}

#[test]
fn unknown_target_fails_whole_call() {
    let doc = r#"
apiVersion: rulekit.dev/v1
kind: Rule
metadata:
  id: ok
spec:
  name: Ok
  enforcement: must
  body: content
"#;
    let engine = Engine::new();
    let err = engine
        .compile(
            &load(doc),
            &CompileOptions::for_targets(["markdown", "bogus"]),
        )
        .unwrap_err();

    match err {
        RulekitError::UnknownTarget { name } => assert_eq!(name, "bogus"),
        other => panic!("expected UnknownTarget, got {other:?}"),
    }
}

#[test]
fn ruleset_fragment_resolution_and_sibling_listing() {
    let doc = r#"
apiVersion: rulekit.dev/v1
kind: Ruleset
metadata:
  id: backend
spec:
  name: Backend Rules
  rules:
    api:
      name: API
      enforcement: must
      body:
        - $preamble
        - Follow REST conventions.
    security:
      name: Security
      enforcement: should
      body:
        - $preamble
        - $missingFragment
        - Validate all input.
  fragments:
    preamble: Endpoints are public API surface.
"#;
    let results = compile(doc, &["markdown"]);

    assert_eq!(results.len(), 2);
    // Both items list both sibling ids in their metadata block.
    for result in &results {
        assert!(result.content.contains("  rules:\n    - api\n    - security\n"));
    }
    // Fragment resolved; missing fragment dropped without a trace.
    assert!(results[0]
        .content
        .ends_with("Endpoints are public API surface.\n\nFollow REST conventions."));
    assert!(results[1]
        .content
        .ends_with("Endpoints are public API surface.\n\nValidate all input."));
}

#[test]
fn promptset_compiles_per_target_conventions() {
    let doc = r#"
apiVersion: rulekit.dev/v1
kind: Promptset
metadata:
  id: ops
spec:
  prompts:
    deploy:
      body: Deploy now
    rollback:
      body: Roll back the last release
"#;
    let claude = compile(doc, &["claude"]);
    let copilot = compile(doc, &["copilot"]);
    let cursor = compile(doc, &["cursor"]);

    assert_eq!(claude[0].path, "ops_deploy/SKILL.md");
    assert_eq!(claude[1].path, "ops_rollback/SKILL.md");
    assert_eq!(copilot[0].path, "ops_deploy.prompt.md");
    assert!(copilot[0].content.starts_with("---\napplyTo: []\n---\n"));
    assert_eq!(cursor[0].path, "ops_deploy.md");
    assert_eq!(cursor[0].content, "Deploy now");
}

#[test]
fn multi_target_results_accumulate_in_request_order() {
    let doc = r#"
apiVersion: rulekit.dev/v1
kind: Rule
metadata:
  id: naming
spec:
  name: Naming
  enforcement: should
  body: Pick clear names.
"#;
    let results = compile(doc, &["copilot", "cursor", "markdown"]);

    let pairs: Vec<(&str, &str)> = results
        .iter()
        .map(|r| (r.target.as_str(), r.path.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("copilot", "naming.instructions.md"),
            ("cursor", "naming.mdc"),
            ("markdown", "naming.md"),
        ]
    );
}

#[test]
fn scoped_rule_differs_per_target() {
    let doc = r#"
apiVersion: rulekit.dev/v1
kind: Rule
metadata:
  id: tsStyle
spec:
  name: TypeScript Style
  enforcement: must
  scope:
    - name: src
      files: ["src/**/*.ts"]
    - name: tests
      files: ["tests/**/*.ts"]
  body: Prefer explicit types.
"#;
    let results = compile(doc, &["cursor", "claude", "copilot"]);

    let cursor = &results[0];
    assert!(cursor
        .content
        .contains("globs: [\"src/**/*.ts\", \"tests/**/*.ts\"]"));
    assert!(cursor.content.contains("alwaysApply: true"));

    let claude = &results[1];
    assert!(claude
        .content
        .starts_with("---\npaths:\n  - \"src/**/*.ts\"\n  - \"tests/**/*.ts\"\n---\n\n"));

    let copilot = &results[2];
    assert!(copilot
        .content
        .starts_with("---\napplyTo: [\"src/**/*.ts\", \"tests/**/*.ts\"]\n---\n"));
}

#[test]
fn version_mismatch_reports_declared_and_supported() {
    let doc = r#"
apiVersion: rulekit.dev/v2
kind: Rule
metadata:
  id: ok
spec:
  name: Ok
  enforcement: must
  body: content
"#;
    let engine = Engine::new();
    let err = engine
        .compile(&load(doc), &CompileOptions::for_targets(["claude"]))
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("claude"));
    assert!(msg.contains("rulekit.dev/v2"));
    assert!(msg.contains("rulekit.dev/v1"));
}
