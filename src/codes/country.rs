//! Country name ↔ alpha3 conversion

use super::table::{
    CodeTable,
    TableError,
};

/// Reference table bundled with the binary: name, alpha2, alpha3, numeric.
const BUNDLED_TABLE: &str = include_str!("../../resources/country-codes.txt");

const COLUMNS: usize = 4;
const NAME_COLUMN: usize = 0;
const ALPHA3_COLUMN: usize = 2;

/// Converts between country display names and their alpha3 codes.
///
/// Lossless over every table entry, `None` for anything the table does not
/// know. Loaded once, never mutated.
#[derive(Debug)]
pub struct CountryCodeConverter {
    table: CodeTable,
}

impl CountryCodeConverter {
    /// Parse the bundled country reference table.
    pub fn bundled() -> Result<Self, TableError> {
        Self::from_tsv(BUNDLED_TABLE)
    }

    /// Parse a country reference table from tab-separated text with a
    /// header line and name / alpha2 / alpha3 / numeric columns.
    pub fn from_tsv(content: &str) -> Result<Self, TableError> {
        let table = CodeTable::parse(content, COLUMNS, NAME_COLUMN, ALPHA3_COLUMN)?;
        tracing::debug!(countries = table.len(), "loaded country code table");
        Ok(Self { table })
    }

    /// Display name for an alpha3 `code`.
    #[must_use]
    pub fn from_country_code(&self, code: &str) -> Option<&str> {
        self.table.name_for(code)
    }

    /// Alpha3 code for a country display `name`.
    #[must_use]
    pub fn from_country(&self, name: &str) -> Option<&str> {
        self.table.code_for(name)
    }

    /// Number of countries the table covers.
    #[must_use]
    pub fn num_countries(&self) -> usize {
        self.table.len()
    }
}
