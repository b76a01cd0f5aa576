//! Metadata block generation for compiled rules
//!
//! A compiled rule is a YAML front-block, an enforcement header line and
//! the resolved body, joined by blank lines:
//!
//! ```text
//! ---
//! id: meaningfulNames
//! name: Use Meaningful Names
//! enforcement: must
//! ---
//!
//! # Use Meaningful Names (MUST)
//!
//! Use descriptive names.
//! ```
//!
//! Collection items get a two-section front-block (`ruleset:` / `rule:`)
//! that also lists the sibling item ids. Prompts never get a metadata
//! block; they only share `resolve_body`.

use std::collections::BTreeMap;

use crate::models::{flatten_scope, Body, RuleSpec, RulesetSpec, ScopeEntry};

/// Resolve a body against a fragment dictionary.
///
/// Literal bodies pass through unchanged. Segment lists are resolved one
/// segment at a time: a leading `$` marks a fragment reference, looked up
/// with the prefix stripped. Unknown fragment keys contribute nothing.
/// Contributed parts are joined with a blank line.
pub fn resolve_body(body: &Body, fragments: &BTreeMap<String, String>) -> String {
    match body {
        Body::Literal(text) => text.clone(),
        Body::Segments(segments) => {
            let mut parts: Vec<&str> = Vec::new();
            for segment in segments {
                match segment.strip_prefix('$') {
                    Some(key) => {
                        if let Some(fragment) = fragments.get(key) {
                            parts.push(fragment);
                        }
                        // Unknown key: dropped silently.
                    }
                    None => parts.push(segment),
                }
            }
            parts.join("\n\n")
        }
    }
}

/// Complete compiled content for a standalone rule.
///
/// `body` is the already-resolved body text; callers resolve once so they
/// can skip empty rules before building anything.
pub fn standalone_rule_block(id: &str, rule: &RuleSpec, body: &str) -> String {
    let mut out = String::from("---\n");

    out.push_str(&format!("id: {id}\n"));
    if !rule.name.is_empty() {
        out.push_str(&format!("name: {}\n", rule.name));
    }
    if !rule.description.is_empty() {
        out.push_str(&format!("description: {}\n", rule.description));
    }
    out.push_str(&format!("enforcement: {}\n", rule.enforcement));
    push_scope_files(&mut out, &rule.scope, "");

    out.push_str("---");
    push_header_and_body(&mut out, rule, body);
    out
}

/// Complete compiled content for a rule inside a collection.
///
/// The front-block describes both the collection (including the full
/// ordered list of sibling item ids) and the item being compiled.
pub fn collection_rule_block(
    collection_id: &str,
    collection: &RulesetSpec,
    item_id: &str,
    item: &RuleSpec,
    body: &str,
) -> String {
    let mut out = String::from("---\n");

    out.push_str("ruleset:\n");
    out.push_str(&format!("  id: {collection_id}\n"));
    if !collection.name.is_empty() {
        out.push_str(&format!("  name: {}\n", collection.name));
    }
    if !collection.description.is_empty() {
        out.push_str(&format!("  description: {}\n", collection.description));
    }
    out.push_str("  rules:\n");
    for sibling_id in collection.rules.keys() {
        out.push_str(&format!("    - {sibling_id}\n"));
    }

    out.push_str("rule:\n");
    out.push_str(&format!("  id: {item_id}\n"));
    if !item.name.is_empty() {
        out.push_str(&format!("  name: {}\n", item.name));
    }
    if !item.description.is_empty() {
        out.push_str(&format!("  description: {}\n", item.description));
    }
    out.push_str(&format!("  enforcement: {}\n", item.enforcement));
    push_scope_files(&mut out, &item.scope, "  ");

    out.push_str("---");
    push_header_and_body(&mut out, item, body);
    out
}

/// `# {name} ({ENFORCEMENT})` with the enforcement value ASCII-uppercased
pub fn enforcement_header(name: &str, enforcement: &str) -> String {
    format!("# {} ({})", name, enforcement.to_ascii_uppercase())
}

fn push_header_and_body(out: &mut String, rule: &RuleSpec, body: &str) {
    out.push_str("\n\n");
    out.push_str(&enforcement_header(&rule.name, &rule.enforcement));
    out.push_str("\n\n");
    out.push_str(body);
}

/// Emit a `scope:` / `files:` section when the flattened glob list is
/// non-empty; omit the whole section otherwise.
fn push_scope_files(out: &mut String, scope: &[ScopeEntry], indent: &str) {
    let files = flatten_scope(scope);
    if files.is_empty() {
        return;
    }

    out.push_str(&format!("{indent}scope:\n"));
    out.push_str(&format!("{indent}  files:\n"));
    for glob in files {
        out.push_str(&format!("{indent}    - \"{glob}\"\n"));
    }
}
