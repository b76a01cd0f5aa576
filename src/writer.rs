//! Output sink for compiled results
//!
//! The engine produces path/content pairs and stays I/O-free; this module
//! decides where they go. Two modes:
//!
//! - stdout: each result rendered as `=== {target}/{path} ===` followed by
//!   its content, for piping and quick inspection
//! - files: results written under `{root}/{target}/{path}`, or `{root}/{path}`
//!   in flat mode (cross-target collisions are the caller's problem there -
//!   last write wins)
//!
//! File writes skip outputs whose on-disk content already matches, so
//! repeated compiles of an unchanged resource touch nothing.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::RulekitResult;
use crate::models::CompilationResult;

/// Outcome of a file-mode write pass
#[derive(Debug, Default)]
pub struct WriteSummary {
    /// Files created or updated
    pub written: Vec<PathBuf>,
    /// Files whose content already matched
    pub skipped: Vec<PathBuf>,
}

impl WriteSummary {
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}

/// Render results in the stdout convention
pub fn render_stdout(results: &[CompilationResult]) -> String {
    let mut out = String::new();
    for result in results {
        out.push_str(&format!(
            "=== {}/{} ===\n{}\n\n",
            result.target, result.path, result.content
        ));
    }
    out
}

/// Write results under `root`, one subdirectory per target unless `flat`
pub fn write_files(
    results: &[CompilationResult],
    root: &Path,
    flat: bool,
) -> RulekitResult<WriteSummary> {
    let mut summary = WriteSummary::default();

    for result in results {
        let dest = if flat {
            root.join(&result.path)
        } else {
            root.join(&result.target).join(&result.path)
        };

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if is_up_to_date(&dest, &result.content) {
            summary.skipped.push(dest);
            continue;
        }

        fs::write(&dest, &result.content)?;
        summary.written.push(dest);
    }

    Ok(summary)
}

/// Human-readable one-screen summary of a write pass
pub fn render_summary(summary: &WriteSummary, unicode: bool) -> String {
    let (check, skip) = if unicode { ("✓", "○") } else { ("[OK]", "[ ]") };

    let mut out = format!(
        "{} {} files written, {} up-to-date\n",
        check,
        summary.written.len(),
        summary.skipped.len()
    );
    for path in &summary.written {
        out.push_str(&format!("  {} {}\n", check, path.display()));
    }
    for path in &summary.skipped {
        out.push_str(&format!("  {} {}\n", skip, path.display()));
    }
    out
}

fn is_up_to_date(dest: &Path, content: &str) -> bool {
    match fs::read(dest) {
        Ok(existing) => content_hash(&existing) == content_hash(content.as_bytes()),
        Err(_) => false,
    }
}

fn content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}
