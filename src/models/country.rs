use serde::{Deserialize, Serialize};

use crate::parsers::deserializers::deserialize_nullable_string;

/// A spoken language as reported by the countries dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub code: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
}

/// One country record.
///
/// Rows are identified by their position in the filtered list, not by `code`.
/// `code` is carried along when the source provides it but nothing keys on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub code: String,
    #[serde(deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub native: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub capital: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub emoji: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub currency: String,
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl Country {
    /// Minimal constructor used by tests and benches; remaining fields are empty
    pub fn new(name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            code: String::new(),
            name: name.into(),
            native: String::new(),
            capital: String::new(),
            emoji: String::new(),
            currency: currency.into(),
            languages: Vec::new(),
        }
    }

    /// Individual currency codes (the source joins several with commas, e.g. `USD,USN,USS`)
    pub fn currency_codes(&self) -> impl Iterator<Item = &str> {
        self.currency.split(',').map(str::trim).filter(|code| !code.is_empty())
    }
}
