//! Identifier and rule-name validation
//!
//! Pure checks run by the target compilers before any path or content is
//! built. Identifiers become file names, so the charset is restricted to
//! `[A-Za-z0-9_-]`. Rule names land in the `# Name (ENFORCEMENT)` header,
//! so parentheses are rejected to keep that line parseable.

use crate::error::{RulekitError, RulekitResult};

/// Check that an identifier is non-empty and filesystem-safe.
///
/// Scans left-to-right and reports the first violating character.
pub fn validate_id(id: &str) -> RulekitResult<()> {
    if id.is_empty() {
        return Err(RulekitError::EmptyIdentifier);
    }

    for c in id.chars() {
        if !(c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            return Err(RulekitError::InvalidIdentifier {
                id: id.to_string(),
                found: c,
            });
        }
    }

    Ok(())
}

/// Check that a rule name contains no parenthesis.
///
/// Empty names are valid; only `(` and `)` are rejected.
pub fn validate_rule_name(name: &str) -> RulekitResult<()> {
    for c in name.chars() {
        if c == '(' || c == ')' {
            return Err(RulekitError::InvalidRuleName {
                name: name.to_string(),
                found: c,
            });
        }
    }

    Ok(())
}
