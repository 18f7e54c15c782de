use tree_sitter::Node;

use super::FunctionRecord;
use crate::parser::SyntaxTree;

/// Collects a record for every named `def` in the module, at any nesting
/// depth, in source order. Methods and nested functions count like top-level
/// functions; lambdas have no name and are never recorded.
#[must_use]
pub fn function_records(tree: &SyntaxTree, relpath: &str) -> Vec<FunctionRecord> {
    let mut records = Vec::new();
    collect(tree.root(), tree.source_bytes(), relpath, &mut records);
    records
}

fn collect(node: Node<'_>, source: &[u8], relpath: &str, records: &mut Vec<FunctionRecord>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "function_definition"
            && let Some(record) = record_for(&child, source, relpath)
        {
            records.push(record);
        }
        collect(child, source, relpath, records);
    }
}

fn record_for(node: &Node<'_>, source: &[u8], relpath: &str) -> Option<FunctionRecord> {
    let name = node.child_by_field_name("name")?.utf8_text(source).ok()?;
    Some(FunctionRecord {
        relpath: relpath.to_string(),
        name: name.to_string(),
        start_line: node.start_position().row + 1,
        end_line: node.end_position().row + 1,
    })
}

#[cfg(test)]
#[path = "functions_tests.rs"]
mod tests;
