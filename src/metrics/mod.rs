mod functions;
mod loc;

pub use functions::function_records;
pub use loc::count_logical_lines;

/// Size measurement for one scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub relpath: String,
    pub loc: usize,
}

/// Line span of one named `def`, decorators excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    pub relpath: String,
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
}

impl FunctionRecord {
    /// Inclusive line count of the definition.
    #[must_use]
    pub const fn line_span(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
