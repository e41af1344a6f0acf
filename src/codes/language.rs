//! Language name ↔ code conversion

use super::table::{
    CodeTable,
    TableError,
};

/// Reference table bundled with the binary: name, code.
const BUNDLED_TABLE: &str = include_str!("../../resources/language-codes.txt");

const COLUMNS: usize = 2;
const NAME_COLUMN: usize = 0;
const CODE_COLUMN: usize = 1;

/// Converts between language display names and their short codes.
///
/// Same contract as [`super::CountryCodeConverter`]: lossless for every
/// table entry, `None` for unknown values.
#[derive(Debug)]
pub struct LanguageCodeConverter {
    table: CodeTable,
}

impl LanguageCodeConverter {
    /// Parse the bundled language reference table.
    pub fn bundled() -> Result<Self, TableError> {
        Self::from_tsv(BUNDLED_TABLE)
    }

    /// Parse a language reference table from tab-separated text with a
    /// header line and name / code columns.
    pub fn from_tsv(content: &str) -> Result<Self, TableError> {
        let table = CodeTable::parse(content, COLUMNS, NAME_COLUMN, CODE_COLUMN)?;
        tracing::debug!(languages = table.len(), "loaded language code table");
        Ok(Self { table })
    }

    /// Display name for a language `code`.
    #[must_use]
    pub fn from_language_code(&self, code: &str) -> Option<&str> {
        self.table.name_for(code)
    }

    /// Code for a language display `name`.
    #[must_use]
    pub fn from_language(&self, name: &str) -> Option<&str> {
        self.table.code_for(name)
    }

    /// Number of languages the table covers.
    #[must_use]
    pub fn num_languages(&self) -> usize {
        self.table.len()
    }
}
