//! Fixed-size paging over the filtered list.
//!
//! Pages are 1-based. Any page outside `1..=page_count` is simply empty; nothing here
//! returns an error.

/// Rows shown per page
pub const PAGE_SIZE: usize = 11;

/// Absolute index of the first row on `page_index`, or `None` for page 0
pub fn page_offset(page_index: usize, page_size: usize) -> Option<usize> {
    page_index.checked_sub(1)?.checked_mul(page_size)
}

/// Return the half-open slice `[(page_index-1)*page_size, page_index*page_size)`,
/// clamped to the bounds of `list`
pub fn page<T>(list: &[T], page_index: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let Some(start) = page_offset(page_index, page_size) else {
        return &[];
    };
    if start >= list.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(list.len());
    &list[start..end]
}

/// Number of pages needed for `len` rows: `ceil(len / page_size)`
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Current page of the result table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl PageState {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self { current_page: 1, page_size }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Back to the first page. Must run whenever the filtered list is rebuilt.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Jump straight to `page` (minimum 1). Past-the-end pages render empty.
    pub fn select(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Advance one page, stopping at the last page of a `len`-row list
    pub fn next(&mut self, len: usize) {
        let last = page_count(len, self.page_size).max(1);
        self.current_page = (self.current_page + 1).min(last);
    }

    pub fn previous(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Absolute index of the first row on the current page
    pub fn offset(&self) -> usize {
        page_offset(self.current_page, self.page_size).unwrap_or(0)
    }

    /// Slice of `list` visible on the current page
    pub fn visible<'a, T>(&self, list: &'a [T]) -> &'a [T] {
        page(list, self.current_page, self.page_size)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
