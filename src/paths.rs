//! Relative output path construction
//!
//! Pure string concatenation, no filesystem interaction and no validation:
//! callers validate identifiers first. Every target uses the flat
//! single-file convention except Claude prompt output, which is a
//! directory holding a fixed `SKILL.md`.

/// Fixed file name inside a Claude skill directory
const SKILL_FILE: &str = "SKILL.md";

/// Path for a standalone resource: `{id}{ext}`
pub fn standalone_path(resource_id: &str, ext: &str) -> String {
    format!("{resource_id}{ext}")
}

/// Path for a collection item: `{collection}_{item}{ext}`
pub fn collection_path(collection_id: &str, item_id: &str, ext: &str) -> String {
    format!("{collection_id}_{item_id}{ext}")
}

/// Claude prompt path for a standalone resource: `{id}/SKILL.md`
pub fn claude_standalone_path(resource_id: &str) -> String {
    format!("{resource_id}/{SKILL_FILE}")
}

/// Claude prompt path for a collection item: `{collection}_{item}/SKILL.md`
pub fn claude_collection_path(collection_id: &str, item_id: &str) -> String {
    format!("{collection_id}_{item_id}/{SKILL_FILE}")
}
