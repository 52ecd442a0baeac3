use tracing::debug;

use super::query::QueryModel;
use crate::models::Country;

/// Apply a query to the dataset, returning the matching countries in dataset order.
///
/// Filter logic (case-insensitive, both sides uppercased so `ß` matches `SS`):
/// - Name contains `search_term`, or `raw_text` when there is no search term
/// - If `group_key` is set, currency must also contain it; empty currencies never match
///
/// Pure and deterministic: no I/O, and an empty dataset yields an empty result.
pub fn apply_query(dataset: &[Country], query: &QueryModel) -> Vec<Country> {
    if query.is_empty() {
        return dataset.to_vec();
    }

    let name_pattern = query.name_pattern().to_uppercase();
    let group_key = query.group_key.to_uppercase();

    let filtered: Vec<Country> = dataset
        .iter()
        .filter(|country| match_name(country, &name_pattern))
        .filter(|country| group_key.is_empty() || match_currency(country, &group_key))
        .cloned()
        .collect();

    debug!(
        total = dataset.len(),
        matched = filtered.len(),
        grouped = query.is_grouped(),
        "applied query"
    );

    filtered
}

/// Match country name against an already-uppercased pattern
fn match_name(country: &Country, upper_pattern: &str) -> bool {
    country.name.to_uppercase().contains(upper_pattern)
}

/// Match currency against an already-uppercased group key
fn match_currency(country: &Country, upper_key: &str) -> bool {
    if country.currency.is_empty() {
        return false;
    }
    country.currency.to_uppercase().contains(upper_key)
}
