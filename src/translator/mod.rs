//! Translation data store
//!
//! The [`Translator`] trait is the query surface the interactive session is
//! written against. [`JsonTranslator`] is the production implementation
//! backed by a JSON dataset; [`InMemoryTranslator`] serves hand-built
//! datasets and tests.

mod error;
mod json;
mod memory;
mod record;

pub use error::LoadError;
pub use json::JsonTranslator;
pub use memory::InMemoryTranslator;
pub use record::{
    CountryRecord,
    RESERVED_KEYS,
};

/// Read-only queries over a loaded country dataset.
///
/// Implementations load their data once at construction and never mutate it
/// afterwards; every query is side-effect-free and infallible. Absence is
/// always an empty result, never an error.
pub trait Translator {
    /// Every record's `alpha3` code, in load order. Duplicates are kept.
    fn countries(&self) -> Vec<String>;

    /// Language codes available for `country` (matched case-insensitively
    /// on `alpha3`), in the record's own key order. Empty when the country
    /// is unknown. When the dataset holds duplicate `alpha3` codes, only
    /// the first record answers.
    fn country_languages(&self, country: &str) -> Vec<String>;

    /// The country's name in `language`, or `None` when either the country
    /// is unknown or its record has no entry for that language.
    fn translate(&self, country: &str, language: &str) -> Option<String>;
}

/// Shared scan logic: the queries differ only in what they extract from the
/// record slice, so both implementations delegate here.
fn countries(records: &[CountryRecord]) -> Vec<String> {
    records.iter().map(|record| record.alpha3().to_string()).collect()
}

fn country_languages(records: &[CountryRecord], country: &str) -> Vec<String> {
    records
        .iter()
        .find(|record| record.matches(country))
        .map(|record| record.languages().map(str::to_string).collect())
        .unwrap_or_default()
}

fn translate(records: &[CountryRecord], country: &str, language: &str) -> Option<String> {
    let record = records.iter().find(|record| record.matches(country))?;
    let translation = record.get(language);
    if translation.is_none() {
        tracing::debug!(country, language, "no translation stored for language");
    }
    translation.map(str::to_string)
}
