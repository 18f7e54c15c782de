mod imports;

pub use imports::{ImportStatement, import_statements};

use crate::parser::ParseOutcome;

/// Top-level modules that `core/` code must never import directly.
pub const DEFAULT_FORBIDDEN_MODULES: &[&str] = &["requests", "subprocess", "sqlite3"];

/// Path segment that marks a file as part of the guarded core.
const CORE_SEGMENT: &str = "core";

/// What a boundary violation is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A core file imports a forbidden top-level module.
    ForbiddenImport,
    /// A core file could not be parsed at all.
    SyntaxError,
}

impl ViolationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ForbiddenImport => "forbidden_import",
            Self::SyntaxError => "syntax_error",
        }
    }
}

/// One finding of the boundary checker, tied to a file in the scanned tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub relpath: String,
    pub kind: ViolationKind,
    pub detail: String,
    /// 1-based line, absent when the failure has no usable location.
    pub line: Option<usize>,
}

/// The set of import names the boundary rule rejects. Matching is on the
/// first dotted component only, so forbidding `requests` also rejects
/// `requests.adapters`.
#[derive(Debug, Clone)]
pub struct BoundaryPolicy {
    modules: indexmap::IndexSet<String>,
}

impl BoundaryPolicy {
    #[must_use]
    pub fn new(modules: impl IntoIterator<Item = String>) -> Self {
        Self {
            modules: modules.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_forbidden(&self, top_module: &str) -> bool {
        self.modules.contains(top_module)
    }
}

impl Default for BoundaryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FORBIDDEN_MODULES.iter().map(ToString::to_string))
    }
}

/// Applies the import boundary to core files; everything outside a `core`
/// path segment passes without inspection.
pub struct BoundaryChecker {
    policy: BoundaryPolicy,
}

impl BoundaryChecker {
    #[must_use]
    pub const fn new(policy: BoundaryPolicy) -> Self {
        Self { policy }
    }

    /// Violations for one file, in import order.
    ///
    /// An unparsable core file yields a single syntax violation and nothing
    /// else; its imports are unknowable. Unparsable files outside core stay
    /// silent here.
    #[must_use]
    pub fn check(&self, relpath: &str, outcome: &ParseOutcome) -> Vec<Violation> {
        if !in_core_subtree(relpath) {
            return Vec::new();
        }

        match outcome {
            ParseOutcome::Invalid(issue) => vec![Violation {
                relpath: relpath.to_string(),
                kind: ViolationKind::SyntaxError,
                detail: issue.message.clone(),
                line: issue.line,
            }],
            ParseOutcome::Parsed(tree) => import_statements(tree)
                .into_iter()
                .filter(|import| self.policy.is_forbidden(&import.top_module))
                .map(|import| Violation {
                    relpath: relpath.to_string(),
                    kind: ViolationKind::ForbiddenImport,
                    detail: format!(
                        "{relpath} imports forbidden module '{}'",
                        import.top_module
                    ),
                    line: Some(import.line),
                })
                .collect(),
        }
    }
}

fn in_core_subtree(relpath: &str) -> bool {
    relpath.split('/').any(|segment| segment == CORE_SEGMENT)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
