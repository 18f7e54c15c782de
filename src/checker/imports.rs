use tree_sitter::Node;

use crate::parser::SyntaxTree;

/// One import found in a module, reduced to the single name the boundary
/// rule cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// First dotted component of the imported module.
    pub top_module: String,
    /// 1-based line of the statement.
    pub line: usize,
}

/// Extracts import statements from anywhere in the module, including inside
/// functions and conditionals, in source order.
///
/// Plain `import a, b` contributes only its first name, and a bare relative
/// `from . import x` contributes nothing; both match how the import target
/// resolves for boundary purposes.
#[must_use]
pub fn import_statements(tree: &SyntaxTree) -> Vec<ImportStatement> {
    let mut imports = Vec::new();
    collect(tree.root(), tree.source_bytes(), &mut imports);
    imports
}

fn collect(node: Node<'_>, source: &[u8], imports: &mut Vec<ImportStatement>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        let line = child.start_position().row + 1;
        match child.kind() {
            "import_statement" => {
                if let Some(top_module) = first_imported_module(&child, source) {
                    imports.push(ImportStatement { top_module, line });
                }
            }
            "import_from_statement" => {
                if let Some(top_module) = from_import_module(&child, source) {
                    imports.push(ImportStatement { top_module, line });
                }
            }
            "future_import_statement" => {
                imports.push(ImportStatement {
                    top_module: "__future__".to_string(),
                    line,
                });
            }
            _ => collect(child, source, imports),
        }
    }
}

/// First name of a plain `import` statement.
fn first_imported_module(node: &Node<'_>, source: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        let name_node = match child.kind() {
            "dotted_name" => Some(child),
            "aliased_import" => child.child_by_field_name("name"),
            _ => None,
        };
        if let Some(name_node) = name_node {
            return top_level_component(name_node.utf8_text(source).ok()?);
        }
    }
    None
}

/// Module a `from X import ...` statement resolves against, if any.
fn from_import_module(node: &Node<'_>, source: &[u8]) -> Option<String> {
    let module_node = node.child_by_field_name("module_name")?;
    let dotted = if module_node.kind() == "relative_import" {
        // `from .pkg import x` names `pkg`; `from . import x` names nothing.
        let mut cursor = module_node.walk();
        module_node
            .children(&mut cursor)
            .find(|child| child.kind() == "dotted_name")?
    } else {
        module_node
    };
    top_level_component(dotted.utf8_text(source).ok()?)
}

fn top_level_component(dotted: &str) -> Option<String> {
    let first = dotted.split('.').next()?;
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}

#[cfg(test)]
#[path = "imports_tests.rs"]
mod tests;
