/// Marker that turns a token into the name search term
pub const SEARCH_MARKER: &str = "search:";
/// Marker that turns a token into the currency group key
pub const GROUP_MARKER: &str = "group:";

/// Parsed form of the free-text filter input.
///
/// Matching rules applied by [`crate::filters::apply_query`] (case folded by uppercasing):
/// - Name: `search_term` when non-empty, otherwise the whole `raw_text`
///   (case-insensitive substring; empty matches everything)
/// - Grouping: when `group_key` is non-empty, only countries whose currency contains it
///   (case-insensitive substring). This is a plain filter, not a clustering; output keeps
///   dataset order and countries without a currency are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryModel {
    /// Input exactly as typed
    pub raw_text: String,
    /// Value of the last `search:` token, trimmed
    pub search_term: String,
    /// Value of the last `group:` token, trimmed
    pub group_key: String,
}

impl QueryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when applying this query keeps every country
    pub fn is_empty(&self) -> bool {
        self.raw_text.is_empty() && self.search_term.is_empty() && self.group_key.is_empty()
    }

    /// The string names are matched against
    pub fn name_pattern(&self) -> &str {
        if self.search_term.is_empty() { &self.raw_text } else { &self.search_term }
    }

    pub fn is_grouped(&self) -> bool {
        !self.group_key.is_empty()
    }
}
