//! Resource document loader
//!
//! Parses a YAML (or JSON - YAML 1.2 is a superset) document into the
//! typed `Resource` model. The kind tag is checked before the payload is
//! deserialized so a missing or unknown kind surfaces as its own error
//! with the offending value, not as a generic parse failure.

use std::fs;
use std::path::Path;

use serde_yaml_ng::Value;

use crate::error::{RulekitError, RulekitResult};
use crate::models::{Kind, Metadata, Resource};

/// Load a resource document from a file
pub fn load_file(path: &Path) -> RulekitResult<Resource> {
    let content = fs::read_to_string(path)?;
    load_str(&content, path)
}

/// Parse a resource document from a string.
///
/// `origin` is only used for error reporting.
pub fn load_str(content: &str, origin: &Path) -> RulekitResult<Resource> {
    let value: Value =
        serde_yaml_ng::from_str(content).map_err(|e| invalid(origin, e.to_string()))?;

    if !value.is_mapping() {
        return Err(invalid(origin, "document must be a mapping".to_string()));
    }

    let api_version = value
        .get("apiVersion")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let metadata = match value.get("metadata") {
        Some(meta) => serde_yaml_ng::from_value::<Metadata>(meta.clone())
            .map_err(|e| invalid(origin, format!("metadata: {e}")))?,
        None => Metadata::default(),
    };

    let kind_tag = match value.get("kind") {
        None | Some(Value::Null) => return Err(RulekitError::MissingField { field: "kind" }),
        Some(Value::String(tag)) => tag.as_str(),
        Some(_) => return Err(invalid(origin, "kind must be a string".to_string())),
    };

    let spec = value.get("spec").cloned().unwrap_or(Value::Null);
    let kind = parse_kind(kind_tag, spec, origin)?;

    Ok(Resource {
        api_version,
        metadata,
        kind,
    })
}

fn parse_kind(tag: &str, spec: Value, origin: &Path) -> RulekitResult<Kind> {
    // A document without a spec section still parses; every payload field
    // has a default and the empty-body skip handles the rest.
    let spec = if spec.is_null() {
        Value::Mapping(Default::default())
    } else {
        spec
    };

    let kind = match tag {
        "Rule" => Kind::Rule(from_spec(spec, origin)?),
        "Ruleset" => Kind::Ruleset(from_spec(spec, origin)?),
        "Prompt" => Kind::Prompt(from_spec(spec, origin)?),
        "Promptset" => Kind::Promptset(from_spec(spec, origin)?),
        other => {
            return Err(RulekitError::UnsupportedKind {
                kind: other.to_string(),
            })
        }
    };

    Ok(kind)
}

fn from_spec<T: serde::de::DeserializeOwned>(spec: Value, origin: &Path) -> RulekitResult<T> {
    serde_yaml_ng::from_value(spec).map_err(|e| invalid(origin, format!("spec: {e}")))
}

fn invalid(origin: &Path, message: String) -> RulekitError {
    RulekitError::InvalidDocument {
        file: origin.to_path_buf(),
        message,
    }
}
