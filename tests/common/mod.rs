//! Common test utilities for integration tests
//!
//! Provides shared fixtures and a scripted prompt used across multiple
//! integration test files.

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use describe_action::TypePrompt;
use tempfile::TempDir;

/// Manifest with two inputs and two outputs, none of them typed.
#[allow(dead_code)]
pub const ACTION_YML: &str = r#"name: Describe
description: Sample action
inputs:
  repo:
    description: The owner and repository name. e.g.) Codertocat/Hello-World.
    required: false
    default: ${{ github.repository }}
  github_token:
    description: A GitHub token.
    required: true
outputs:
  result:
    description: The result of the action.
  note:
    description: The note about the action.
runs:
  using: node20
  main: dist/index.js
"#;

/// Write `contents` to `action.yml` inside a fresh temporary directory.
///
/// Returns the directory guard alongside the file path.
pub fn write_manifest(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("action.yml");
    fs::write(&path, contents).expect("Failed to write manifest");
    (dir, path)
}

/// Replays canned answers and records every message it was shown.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<&'static str>>,
    pub asked: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Option<&'static str>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }
}

impl TypePrompt for ScriptedPrompt {
    fn select_one(&mut self, message: &str, _options: &[&str]) -> Option<String> {
        self.asked.push(message.to_string());
        self.answers.pop_front().flatten().map(str::to_string)
    }
}
