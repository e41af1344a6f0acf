//! Tab-separated reference table parsing

use thiserror::Error;

/// Defines errors that may occur while parsing a code reference table.
#[derive(Error, Debug)]
pub enum TableError {
    /// Error when a data line does not have the expected column count
    #[error("Malformed table line {line}: expected {expected} columns, found {found}")]
    MalformedLine {
        /// 1-based line number in the source text
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Error when the table file cannot be read
    #[error("Failed to read table: {0}")]
    Io(#[from] std::io::Error),
}

/// An immutable name↔code table parsed from tab-separated text.
///
/// The first line is a header and is skipped; blank lines are ignored.
/// Lookups in both directions are case-insensitive and answer `None` for
/// unknown values.
#[derive(Debug)]
pub(super) struct CodeTable {
    entries: Vec<(String, String)>,
}

impl CodeTable {
    /// Parse the table, taking the name from `name_column` and the code
    /// from `code_column` of each line's `expected_columns` fields.
    pub(super) fn parse(
        content: &str,
        expected_columns: usize,
        name_column: usize,
        code_column: usize,
    ) -> Result<Self, TableError> {
        let mut entries = Vec::new();
        for (index, line) in content.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let columns: Vec<&str> = line.split('\t').collect();
            if columns.len() != expected_columns {
                return Err(TableError::MalformedLine {
                    line: index + 1,
                    expected: expected_columns,
                    found: columns.len(),
                });
            }
            let name = columns.get(name_column).copied().unwrap_or_default();
            let code = columns.get(code_column).copied().unwrap_or_default();
            entries.push((name.trim().to_string(), code.trim().to_string()));
        }
        Ok(Self { entries })
    }

    /// Display name for `code`, or `None` when the code is not in the table.
    pub(super) fn name_for(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, entry_code)| entry_code.eq_ignore_ascii_case(code))
            .map(|(name, _)| name.as_str())
    }

    /// Code for the display name `name`, or `None` when unknown.
    pub(super) fn code_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name.eq_ignore_ascii_case(name))
            .map(|(_, code)| code.as_str())
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    const TABLE: &str = "Language\tCode\nGerman\tde\nEnglish\ten\n";

    #[googletest::test]
    fn header_line_is_skipped() {
        let table = CodeTable::parse(TABLE, 2, 0, 1).unwrap();

        expect_that!(table.len(), eq(2));
        expect_that!(table.name_for("Language"), none());
    }

    #[googletest::test]
    fn lookups_are_case_insensitive_and_bidirectional() {
        let table = CodeTable::parse(TABLE, 2, 0, 1).unwrap();

        expect_that!(table.name_for("DE"), some(eq("German")));
        expect_that!(table.code_for("english"), some(eq("en")));
        expect_that!(table.name_for("xx"), none());
        expect_that!(table.code_for("Klingon"), none());
    }

    #[googletest::test]
    fn wrong_column_count_is_rejected() {
        let result = CodeTable::parse("Language\tCode\nGerman\n", 2, 0, 1);

        expect_that!(
            result,
            err(matches_pattern!(TableError::MalformedLine { line: eq(&2), .. }))
        );
    }
}
