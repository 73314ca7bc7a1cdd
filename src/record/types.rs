//! Resolved record data structures

use serde::{Deserialize, Serialize};

/// Root structure of a resolved launch description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Declared arguments with their effective values
    pub arguments: Vec<(String, String)>,
    pub node: Vec<NodeRecord>,
}

impl LaunchRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One resolved node directive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub executable: String,
    pub package: String,
    pub name: String,
    pub namespace: String,
    pub params: Vec<(String, String)>,
    pub params_files: Vec<String>,
    pub remaps: Vec<(String, String)>,
    pub cmd: Vec<String>,
    pub output: Option<String>,
    pub emulate_tty: bool,
}
