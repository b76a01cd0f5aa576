//! Common test utilities for Rulekit CLI tests.
//!
//! Provides `TestEnv`: an isolated temp directory plus helpers to write
//! fixture documents and run the rulekit binary inside it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a rulekit CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp working directory
pub struct TestEnv {
    root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_rulekit")),
        }
    }

    /// Path relative to the environment root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a fixture file relative to the environment root
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture parent dir");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    /// Read a file relative to the environment root
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("read output file")
    }

    /// Run rulekit from the environment root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    /// Run rulekit from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(cwd)
            .args(args)
            .output()
            .expect("run rulekit binary");

        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Standalone rule document used across CLI tests
pub const RULE_DOC: &str = r#"apiVersion: rulekit.dev/v1
kind: Rule
metadata:
  id: meaningfulNames
spec:
  name: Use Meaningful Names
  enforcement: must
  body: Use descriptive names.
"#;

/// Two-item ruleset document used across CLI tests
pub const RULESET_DOC: &str = r#"apiVersion: rulekit.dev/v1
kind: Ruleset
metadata:
  id: backend
spec:
  name: Backend Rules
  rules:
    api:
      name: API
      enforcement: must
      body: Follow REST
    security:
      name: Security
      enforcement: should
      body: Validate input
"#;
