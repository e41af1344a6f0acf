//! Hand-built translation data store

use super::record::CountryRecord;
use super::Translator;

/// A [`Translator`] over records assembled in code rather than loaded from
/// a resource. The second implementation the trait exists for: tests and
/// small fixed datasets use it in place of [`super::JsonTranslator`].
#[derive(Debug, Default)]
pub struct InMemoryTranslator {
    records: Vec<CountryRecord>,
}

impl InMemoryTranslator {
    /// An empty store; add records with [`with_record`](Self::with_record).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record. Load order is append order.
    #[must_use]
    pub fn with_record(mut self, record: CountryRecord) -> Self {
        self.records.push(record);
        self
    }
}

impl Translator for InMemoryTranslator {
    fn countries(&self) -> Vec<String> {
        super::countries(&self.records)
    }

    fn country_languages(&self, country: &str) -> Vec<String> {
        super::country_languages(&self.records, country)
    }

    fn translate(&self, country: &str, language: &str) -> Option<String> {
        super::translate(&self.records, country, language)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    fn canada() -> CountryRecord {
        CountryRecord::new("124", "ca", "can")
            .with_translation("de", "Kanada")
            .with_translation("en", "Canada")
            .with_translation("fr", "Canada")
    }

    #[googletest::test]
    fn behaves_like_the_json_store() {
        let translator = InMemoryTranslator::new().with_record(canada());

        expect_that!(translator.countries(), elements_are![eq("can")]);
        expect_that!(
            translator.country_languages("CAN"),
            elements_are![eq("de"), eq("en"), eq("fr")]
        );
        expect_that!(translator.translate("can", "de"), some(eq("Kanada")));
        expect_that!(translator.translate("can", "ja"), none());
    }

    #[googletest::test]
    fn empty_store_answers_with_absence() {
        let translator = InMemoryTranslator::new();

        expect_that!(translator.countries(), is_empty());
        expect_that!(translator.country_languages("can"), is_empty());
        expect_that!(translator.translate("can", "en"), none());
    }
}
