//! Kiro target
//!
//! Kiro consumes the generic markdown layout unchanged: same `.md`
//! extension, same metadata block for rules, bare bodies for prompts.
//! Only the target tag on the results differs.

use crate::error::RulekitResult;
use crate::models::{CompilationResult, Resource};
use crate::targets::markdown::compile_plain;
use crate::targets::{TargetCompiler, SUPPORTED_API_VERSIONS};

/// Kiro compiler
pub struct KiroCompiler;

impl KiroCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KiroCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetCompiler for KiroCompiler {
    fn name(&self) -> &'static str {
        "kiro"
    }

    fn supported_versions(&self) -> &'static [&'static str] {
        SUPPORTED_API_VERSIONS
    }

    fn compile(&self, resource: &Resource) -> RulekitResult<Vec<CompilationResult>> {
        compile_plain(resource, self.name(), self.supported_versions())
    }
}
