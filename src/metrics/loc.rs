/// Counts logical lines of code: every line with any non-whitespace content.
/// Comments and docstrings count; blank and whitespace-only lines do not.
#[must_use]
pub fn count_logical_lines(source: &str) -> usize {
    source.lines().filter(|line| !line.trim().is_empty()).count()
}

#[cfg(test)]
#[path = "loc_tests.rs"]
mod tests;
