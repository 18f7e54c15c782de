use tree_sitter::{Node, Parser, Tree};

use crate::error::{RepoDoctorError, Result};

/// Result of parsing one Python module. Health metrics and boundary checks
/// both read from the same outcome, so every file is parsed exactly once.
pub enum ParseOutcome {
    /// The file parsed cleanly and can be traversed.
    Parsed(SyntaxTree),
    /// The file could not be parsed; no tree queries are possible.
    Invalid(SyntaxIssue),
}

/// A parsed Python module together with the text it was parsed from.
pub struct SyntaxTree {
    tree: Tree,
    source: String,
}

impl SyntaxTree {
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    #[must_use]
    pub fn source_bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }
}

/// Why a file failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxIssue {
    pub line: Option<usize>,
    pub message: String,
}

impl SyntaxIssue {
    fn at_line(line: usize) -> Self {
        Self {
            line: Some(line),
            message: format!("invalid syntax at line {line}"),
        }
    }

    fn unlocated() -> Self {
        Self {
            line: None,
            message: "invalid syntax".to_string(),
        }
    }
}

/// Parses Python source into a [`ParseOutcome`].
///
/// A file counts as unparsable when the grammar marks any part of it as an
/// error; there is no partial credit. Per-file syntax problems are reported
/// through [`ParseOutcome::Invalid`], never as an `Err`.
///
/// # Errors
/// Returns an error only when the Python grammar itself cannot be loaded.
pub fn parse_module(source: &str) -> Result<ParseOutcome> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| RepoDoctorError::Parser(format!("failed to load Python grammar: {e}")))?;

    let Some(tree) = parser.parse(source, None) else {
        return Err(RepoDoctorError::Parser(
            "parser returned no syntax tree".to_string(),
        ));
    };

    let root = tree.root_node();
    if root.has_error() {
        let issue = first_error_line(root).map_or_else(SyntaxIssue::unlocated, SyntaxIssue::at_line);
        return Ok(ParseOutcome::Invalid(issue));
    }

    Ok(ParseOutcome::Parsed(SyntaxTree {
        tree,
        source: source.to_string(),
    }))
}

/// Line of the first error or missing node, depth first. Subtrees without
/// errors are skipped wholesale.
fn first_error_line(node: Node<'_>) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(line) = first_error_line(child) {
            return Some(line);
        }
    }
    Some(node.start_position().row + 1)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
