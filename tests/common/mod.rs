//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use country_explorer::{Country, Language};
use tempfile::TempDir;

/// Path of the bundled sample dataset (15 countries, GraphQL response layout)
pub fn sample_dataset_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("countries.sample.json")
}

/// Builder for a single country record
pub struct CountryBuilder {
    country: Country,
}

impl CountryBuilder {
    pub fn new(name: &str) -> Self {
        Self { country: Country::new(name, "") }
    }

    pub fn code(mut self, code: &str) -> Self {
        self.country.code = code.to_string();
        self
    }

    pub fn capital(mut self, capital: &str) -> Self {
        self.country.capital = capital.to_string();
        self
    }

    pub fn currency(mut self, currency: &str) -> Self {
        self.country.currency = currency.to_string();
        self
    }

    pub fn language(mut self, code: &str, name: &str) -> Self {
        self.country.languages.push(Language { code: code.to_string(), name: name.to_string() });
        self
    }

    pub fn build(self) -> Country {
        self.country
    }
}

/// `n` countries named `Country 0`..`Country n-1`, all using EUR
pub fn numbered_countries(n: usize) -> Vec<Country> {
    (0..n).map(|i| CountryBuilder::new(&format!("Country {i}")).currency("EUR").build()).collect()
}

/// Builder for dataset and config files inside a temp directory
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.temp_dir.path().join("countries.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.json")
    }

    /// Write raw dataset file content
    pub fn with_dataset(self, content: &str) -> Self {
        fs::write(self.dataset_path(), content).expect("Failed to write dataset");
        self
    }

    /// Write countries as a GraphQL response body
    pub fn with_countries(self, countries: &[Country]) -> Self {
        let body = serde_json::json!({ "data": { "countries": countries } });
        let content = serde_json::to_string_pretty(&body).expect("Failed to serialize dataset");
        self.with_dataset(&content)
    }

    pub fn with_config(self, content: &str) -> Self {
        fs::write(self.config_path(), content).expect("Failed to write config");
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}
