//! Country record definitions

use serde_json::Value;

use super::error::LoadError;

/// Keys that identify a record rather than carry a translation.
pub const RESERVED_KEYS: [&str; 3] = ["id", "alpha2", "alpha3"];

/// One dataset entry: a country's identifiers plus its name in every
/// language the dataset covers for it.
///
/// Entries keep the order the keys appeared in at the source, and
/// language enumeration follows that order. Records are matched by their
/// `alpha3` code, case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    alpha3: String,
    entries: Vec<(String, String)>,
}

impl CountryRecord {
    /// Build a record from its three identifying fields.
    ///
    /// Translations are added with [`with_translation`](Self::with_translation).
    /// This is the constructor for hand-built datasets; JSON loading goes
    /// through [`from_json_object`](Self::from_json_object) instead.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        alpha2: impl Into<String>,
        alpha3: impl Into<String>,
    ) -> Self {
        let alpha3 = alpha3.into();
        let entries = vec![
            ("id".to_string(), id.into()),
            ("alpha2".to_string(), alpha2.into()),
            ("alpha3".to_string(), alpha3.clone()),
        ];
        Self { alpha3, entries }
    }

    /// Append the country's name in one more language.
    #[must_use]
    pub fn with_translation(mut self, language: impl Into<String>, name: impl Into<String>) -> Self {
        self.entries.push((language.into(), name.into()));
        self
    }

    /// Convert one element of the dataset array into a record.
    ///
    /// Scalar values are stringified the way they appear in the file
    /// (`"id": 840` becomes `"840"`); nested objects or arrays are rejected
    /// since the dataset contract is a flat key/value structure. A record
    /// without an `alpha3` string is unusable and also rejected.
    ///
    /// # Errors
    /// [`LoadError::MalformedRecord`] for non-object elements, nested
    /// values, or a missing `alpha3` key.
    pub fn from_json_object(index: usize, value: &Value) -> Result<Self, LoadError> {
        let Value::Object(object) = value else {
            return Err(LoadError::MalformedRecord {
                index,
                reason: "dataset element is not an object".to_string(),
            });
        };

        let mut entries = Vec::with_capacity(object.len());
        for (key, value) in object {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(_) | Value::Bool(_) | Value::Null => value.to_string(),
                Value::Object(_) | Value::Array(_) => {
                    return Err(LoadError::MalformedRecord {
                        index,
                        reason: format!("value for key '{key}' is not a scalar"),
                    });
                }
            };
            entries.push((key.clone(), text));
        }

        let Some(alpha3) = entries
            .iter()
            .find(|(key, _)| key == "alpha3")
            .map(|(_, value)| value.clone())
        else {
            return Err(LoadError::MalformedRecord {
                index,
                reason: "record has no 'alpha3' key".to_string(),
            });
        };

        Ok(Self { alpha3, entries })
    }

    /// The record's three-letter country code.
    #[must_use]
    pub fn alpha3(&self) -> &str {
        &self.alpha3
    }

    /// Whether this record answers for `country`, compared case-insensitively.
    #[must_use]
    pub fn matches(&self, country: &str) -> bool {
        self.alpha3.eq_ignore_ascii_case(country)
    }

    /// Value stored under `key`, reserved keys included.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value.as_str())
    }

    /// Language codes this record carries a translation for, in key order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(|(key, _)| key.as_str())
            .filter(|key| !RESERVED_KEYS.contains(key))
    }
}
