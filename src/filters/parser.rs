//! Parser for the filter input mini-language.
//!
//! # Syntax
//!
//! ```text
//! input := token (whitespace token)*
//! token := word | word-containing-"search:" | word-containing-"group:"
//! ```
//!
//! - A token containing `search:` sets the search term to the token with the marker
//!   removed (first occurrence) and trimmed. The last such token wins.
//! - Otherwise a token containing `group:` sets the currency group key the same way.
//! - All other tokens only participate through the raw text.
//!
//! There is no quoting or escaping. A token holding both markers is read as a `search:`
//! token and its `group:` part stays inside the search term.
//!
//! # Examples
//!
//! ```rust
//! # use country_explorer::filters::parser::parse_query;
//! let query = parse_query("Fra search:ger group:EUR");
//! assert_eq!(query.raw_text, "Fra search:ger group:EUR");
//! assert_eq!(query.search_term, "ger");
//! assert_eq!(query.group_key, "EUR");
//! ```

use super::query::{GROUP_MARKER, QueryModel, SEARCH_MARKER};

/// Remove the first occurrence of `marker` from `token` and trim the remainder
fn strip_marker(token: &str, marker: &str) -> String {
    token.replacen(marker, "", 1).trim().to_string()
}

/// Parse filter input into a [`QueryModel`].
///
/// Never fails: any input, including the empty string, yields a valid model.
pub fn parse_query(raw: &str) -> QueryModel {
    let mut query = QueryModel { raw_text: raw.to_string(), ..QueryModel::default() };

    for token in raw.split_whitespace() {
        if token.contains(SEARCH_MARKER) {
            query.search_term = strip_marker(token, SEARCH_MARKER);
        } else if token.contains(GROUP_MARKER) {
            query.group_key = strip_marker(token, GROUP_MARKER);
        }
    }

    query
}
