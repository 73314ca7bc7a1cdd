//! Launch context for managing configurations

use std::collections::{HashMap, HashSet};

/// Launch context holding configurations and override state
#[derive(Debug, Clone, Default)]
pub struct LaunchContext {
    configurations: HashMap<String, String>,
    overridden: HashSet<String>,
}

impl LaunchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context pre-seeded with external overrides.
    /// Overridden configurations are pinned: argument defaults may not
    /// replace them.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        let mut context = Self::new();
        for (name, value) in overrides {
            context.set_override(name, value);
        }
        context
    }

    pub fn set_configuration(&mut self, name: String, value: String) {
        self.configurations.insert(name, value);
    }

    pub fn set_override(&mut self, name: String, value: String) {
        self.overridden.insert(name.clone());
        self.configurations.insert(name, value);
    }

    pub fn get_configuration(&self, name: &str) -> Option<String> {
        self.configurations.get(name).cloned()
    }

    pub fn is_overridden(&self, name: &str) -> bool {
        self.overridden.contains(name)
    }

    pub fn configurations(&self) -> &HashMap<String, String> {
        &self.configurations
    }
}

/// Normalize a namespace to a single leading slash and no trailing slash.
/// Empty input maps to the root namespace.
pub fn normalize_namespace(ns: &str) -> String {
    let trimmed = ns.trim().trim_end_matches('/');

    if trimmed.is_empty() {
        return "/".to_string();
    }

    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
