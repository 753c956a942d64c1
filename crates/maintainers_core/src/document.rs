//! Final document assembly.

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;

/// Joins the rendered surrounding text and the maintainers table.
///
/// Trailing whitespace of `before` and leading whitespace of `after` are
/// trimmed so exactly one blank line separates each part from the table.
///
/// # Examples
///
/// ```rust
/// use maintainers_core::assemble_document;
///
/// let document = assemble_document("# Maintainers\n\n\n", "| table |", "\n\nFooter\n");
/// assert_eq!(document, "# Maintainers\n\n| table |\n\nFooter\n");
/// ```
pub fn assemble_document(before: &str, table: &str, after: &str) -> String {
    format!("{}\n\n{}\n\n{}", before.trim_end(), table, after.trim_start())
}
