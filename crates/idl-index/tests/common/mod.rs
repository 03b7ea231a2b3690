// Test infrastructure and utilities for idl-index tests

#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DICTIONARY: &str = "dictionary D { long a; DOMString bb; };";
pub const INTERFACE: &str = "interface Foo {\n  attribute long x;\n};\n";
pub const PARTIAL: &str = "partial interface Foo {\n  void f();\n};\n";

/// Temporary directory holding WebIDL fragments and an optional config file
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the workspace and return its full path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn config(&self, content: &str) -> PathBuf {
        self.file("idl-index.toml", content)
    }

    /// The binary, run from inside the workspace with colors off.
    pub fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("idl-index");
        cmd.current_dir(self.dir.path())
            .env("NO_COLOR", "1")
            .env("CLICOLOR", "0")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
