//! JSON-backed translation data store

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use super::error::LoadError;
use super::record::CountryRecord;
use super::Translator;

/// The dataset bundled with the binary, used when no override is given.
const BUNDLED_DATASET: &str = include_str!("../../resources/sample.json");

/// Raw shape of a dataset resource: an array of flat objects.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawDataset(Vec<Value>);

/// A [`Translator`] backed by a JSON dataset, read once at construction.
///
/// The dataset is an array of flat records keyed by `id`, `alpha2`,
/// `alpha3`, and one language code per translation:
///
/// ```json
/// [{"id": 840, "alpha2": "us", "alpha3": "usa", "de": "Vereinigte Staaten", "en": "United States"}]
/// ```
///
/// Construction fails when the resource cannot be read or any record is
/// malformed; queries on a constructed store never fail.
#[derive(Debug)]
pub struct JsonTranslator {
    records: Vec<CountryRecord>,
}

impl JsonTranslator {
    /// Load the bundled sample dataset.
    ///
    /// # Errors
    /// Only if the bundled resource is malformed, which a passing test
    /// suite rules out.
    pub fn bundled() -> Result<Self, LoadError> {
        Self::from_str(BUNDLED_DATASET)
    }

    /// Load a dataset from a file on disk.
    ///
    /// # Errors
    /// [`LoadError::Io`] when the file cannot be read, otherwise as
    /// [`FromStr`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let translator = Self::from_str(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            records = translator.records.len(),
            "loaded translation dataset"
        );
        Ok(translator)
    }
}

/// Parse a dataset from JSON text.
impl FromStr for JsonTranslator {
    type Err = LoadError;

    /// # Errors
    /// [`LoadError::Parse`] when the text is not a JSON array,
    /// [`LoadError::MalformedRecord`] when an element is not a flat object
    /// with an `alpha3` string.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let raw: RawDataset = serde_json::from_str(content)?;
        let records = raw
            .0
            .iter()
            .enumerate()
            .map(|(index, value)| CountryRecord::from_json_object(index, value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }
}

impl Translator for JsonTranslator {
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
