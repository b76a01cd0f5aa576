//! Compile orchestration
//!
//! `Engine` owns a `TargetRegistry` and drives one resource through the
//! requested target compilers, in request order. The whole call fails on
//! the first error; results already computed for earlier targets are
//! discarded. Callers that want partial success drive the engine once per
//! target themselves.

use crate::error::{RulekitError, RulekitResult};
use crate::models::{CompilationResult, Resource};
use crate::targets::{check_api_version, TargetCompiler, TargetRegistry};

/// Options for one compile call
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Target names to compile for, in order. Must be non-empty.
    pub targets: Vec<String>,
}

impl CompileOptions {
    pub fn for_targets<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }
}

/// Compile orchestrator over an explicit target registry
pub struct Engine {
    registry: TargetRegistry,
}

impl Engine {
    /// Engine with the five built-in targets
    pub fn new() -> Self {
        Self {
            registry: TargetRegistry::new(),
        }
    }

    /// Engine over a caller-supplied registry
    pub fn with_registry(registry: TargetRegistry) -> Self {
        Self { registry }
    }

    /// Register (or replace) a target compiler
    pub fn register_target(&mut self, name: impl Into<String>, compiler: Box<dyn TargetCompiler>) {
        self.registry.register(name, compiler);
    }

    /// The registry backing this engine
    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    /// Compile one resource for every requested target.
    ///
    /// Results are accumulated in request order, then compiler-return
    /// order within each target.
    pub fn compile(
        &self,
        resource: &Resource,
        options: &CompileOptions,
    ) -> RulekitResult<Vec<CompilationResult>> {
        if resource.api_version.is_empty() {
            return Err(RulekitError::MissingField { field: "apiVersion" });
        }
        if resource.metadata.id.is_empty() {
            return Err(RulekitError::MissingField {
                field: "metadata.id",
            });
        }
        if options.targets.is_empty() {
            return Err(RulekitError::NoTargetsSpecified);
        }

        let mut results = Vec::new();

        for name in &options.targets {
            let compiler = self
                .registry
                .get(name)
                .ok_or_else(|| RulekitError::UnknownTarget { name: name.clone() })?;

            // The compiler re-checks this itself; both layers must agree,
            // and this one runs first.
            check_api_version(name, compiler.supported_versions(), &resource.api_version)?;

            results.extend(compiler.compile(resource)?);
        }

        Ok(results)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
