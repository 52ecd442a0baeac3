use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{debug, info};

use crate::models::Country;

/// Maximum dataset size (10MB); the full countries list is well under 100KB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted top-level layouts of a dataset file
#[derive(Deserialize)]
#[serde(untagged)]
enum Dataset {
    /// Raw GraphQL response: `{"data": {"countries": [...]}}`
    Response { data: CountriesPayload },
    /// Bare payload: `{"countries": [...]}`
    Payload(CountriesPayload),
    /// Plain array of countries
    List(Vec<Country>),
}

#[derive(Deserialize)]
struct CountriesPayload {
    countries: Vec<Country>,
}

impl Dataset {
    fn into_countries(self) -> Vec<Country> {
        match self {
            Dataset::Response { data } => data.countries,
            Dataset::Payload(payload) => payload.countries,
            Dataset::List(countries) => countries,
        }
    }
}

/// Reject files larger than [`MAX_FILE_SIZE_BYTES`] before reading them
fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Parse countries from a JSON string in any of the accepted layouts
pub fn parse_countries(json: &str) -> Result<Vec<Country>> {
    let dataset: Dataset = serde_json::from_str(json)
        .context("Dataset is not a countries response, payload, or array")?;
    Ok(dataset.into_countries())
}

/// Load the countries dataset from a JSON file.
///
/// Stands in for the GraphQL query of the hosted countries API. Accepts the raw
/// response body (`{"data":{"countries":[...]}}`), the unwrapped payload, or a plain
/// array. Order is preserved exactly as stored since row identity is positional.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, exceeds 10MB, or does not contain a
/// recognizable countries document.
pub fn load_countries(path: &Path) -> Result<Vec<Country>> {
    // Open file and validate size before reading
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut contents = String::new();
    BufReader::new(file)
        .read_to_string(&mut contents)
        .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;
    debug!(bytes = contents.len(), path = %path.display(), "read dataset file");

    let countries = parse_countries(&contents)
        .with_context(|| format!("Failed to parse dataset file: {}", path.display()))?;
    info!(count = countries.len(), path = %path.display(), "loaded countries");

    Ok(countries)
}
