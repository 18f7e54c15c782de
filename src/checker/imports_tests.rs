use super::*;
use crate::parser::{ParseOutcome, parse_module};

fn parsed(source: &str) -> SyntaxTree {
    match parse_module(source).unwrap() {
        ParseOutcome::Parsed(tree) => tree,
        ParseOutcome::Invalid(issue) => panic!("source should parse: {issue:?}"),
    }
}

fn modules(source: &str) -> Vec<String> {
    import_statements(&parsed(source))
        .into_iter()
        .map(|import| import.top_module)
        .collect()
}

#[test]
fn plain_import() {
    assert_eq!(modules("import subprocess\n"), vec!["subprocess"]);
}

#[test]
fn dotted_import_reduces_to_first_component() {
    assert_eq!(modules("import requests.adapters\n"), vec!["requests"]);
}

#[test]
fn aliased_import_uses_real_name() {
    assert_eq!(modules("import subprocess as sp\n"), vec!["subprocess"]);
}

#[test]
fn multi_name_import_contributes_first_name_only() {
    assert_eq!(modules("import os, subprocess\n"), vec!["os"]);
}

#[test]
fn from_import() {
    assert_eq!(modules("from subprocess import run\n"), vec!["subprocess"]);
}

#[test]
fn from_import_with_dotted_module() {
    assert_eq!(
        modules("from requests.adapters import HTTPAdapter\n"),
        vec!["requests"]
    );
}

#[test]
fn bare_relative_import_is_skipped() {
    assert!(modules("from . import helpers\n").is_empty());
}

#[test]
fn named_relative_import_uses_module_name() {
    assert_eq!(modules("from .engine import start\n"), vec!["engine"]);
}

#[test]
fn deep_relative_import_uses_first_named_component() {
    assert_eq!(modules("from ..pkg.mod import thing\n"), vec!["pkg"]);
}

#[test]
fn future_import_names_dunder_future() {
    assert_eq!(
        modules("from __future__ import annotations\n"),
        vec!["__future__"]
    );
}

#[test]
fn wildcard_import_names_its_module() {
    assert_eq!(modules("from subprocess import *\n"), vec!["subprocess"]);
}

#[test]
fn imports_inside_functions_are_found() {
    let source = "def lazy():\n    import sqlite3\n    return sqlite3\n";
    let imports = import_statements(&parsed(source));

    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].top_module, "sqlite3");
    assert_eq!(imports[0].line, 2);
}

#[test]
fn imports_inside_try_blocks_are_found() {
    let source = "try:\n    import requests\nexcept ImportError:\n    requests = None\n";
    let imports = import_statements(&parsed(source));

    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].top_module, "requests");
    assert_eq!(imports[0].line, 2);
}

#[test]
fn imports_come_back_in_source_order() {
    let source = "import os\nimport requests\nfrom subprocess import run\n";
    let imports = import_statements(&parsed(source));

    let seen: Vec<(&str, usize)> = imports
        .iter()
        .map(|import| (import.top_module.as_str(), import.line))
        .collect();
    assert_eq!(
        seen,
        vec![("os", 1), ("requests", 2), ("subprocess", 3)]
    );
}

#[test]
fn module_without_imports_yields_nothing() {
    assert!(modules("x = 1\n\ndef f():\n    return x\n").is_empty());
}
