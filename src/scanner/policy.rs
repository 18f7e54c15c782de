use indexmap::IndexSet;

/// Directory names never descended into. Mirrors the skip lists of common
/// Python project tooling (virtualenvs, caches, build output, editors).
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".venv",
    "venv",
    "ENV",
    "env",
    "__pycache__",
    ".pytest_cache",
    ".ruff_cache",
    ".mypy_cache",
    ".tox",
    ".nox",
    "build",
    "dist",
    "site",
    "node_modules",
    "runs",
    "reports",
    ".idea",
    ".vscode",
];

/// Decides which directories a scan may enter.
///
/// Matching is by directory name, never by full path: a name is excluded when
/// it appears in the configured set or starts with a dot. The dot rule is
/// unconditional and survives any reconfiguration of the set.
#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    names: IndexSet<String>,
}

impl ExclusionPolicy {
    #[must_use]
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        name.starts_with('.') || self.names.contains(name)
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_DIRS.iter().map(ToString::to_string))
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
