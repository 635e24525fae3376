//! Shared test utilities for the pubgate workspace.
//!
//! Integration tests in several crates need a throwaway git repository with a
//! known index, so the helpers live here instead of in each `tests/` directory.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::process::Command;
use tempfile::TempDir;

/// True when a `git` binary is on PATH. Tests that need a real repository
/// return early without it.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A git repository in a temporary directory, removed on drop.
pub struct TempRepo {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl TempRepo {
    /// `git init` a fresh repository.
    pub fn init() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp path");
        let repo = Self { _dir: dir, root };
        repo.git(&["init", "--quiet"]);
        repo
    }

    /// A plain directory that is not a git repository.
    pub fn bare_dir() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp path");
        Self { _dir: dir, root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write a file (creating parent directories) without staging it.
    pub fn write(&self, rel: &str, contents: &str) -> &Self {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, contents).expect("write file");
        self
    }

    /// Write a file and `git add` it.
    pub fn stage(&self, rel: &str, contents: &str) -> &Self {
        self.write(rel, contents);
        self.git(&["add", "--", rel]);
        self
    }

    /// Commit the index with a throwaway identity.
    pub fn commit(&self, message: &str) -> &Self {
        self.git(&[
            "-c",
            "user.name=pubgate-test",
            "-c",
            "user.email=pubgate-test@example.invalid",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "--quiet",
            "-m",
            message,
        ]);
        self
    }

    /// Run git in the repository root and panic on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .current_dir(&self.root)
            .args(args)
            .output()
            .expect("spawn git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

/// Normalize non-deterministic JSON fields for golden comparison.
///
/// `tool.version` is replaced with `"__VERSION__"` only when the root object
/// looks like an audit report (has `schema`, `tool`, `verdict`, `violations`).
pub fn normalize_report(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_report = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("violations");
        if is_report
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    value
}
