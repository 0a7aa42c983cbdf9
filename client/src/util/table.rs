//! Client-side filtering and pagination for back-office tables.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Rows per back-office table page.
pub const PAGE_SIZE: usize = 10;

/// Case-insensitive match of `query` against any of `fields`. A blank query
/// matches everything.
#[must_use]
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Keep rows whose searchable text matches `query` and whose status passes
/// `status` (when set).
pub fn filter_rows<T, S, F, G>(rows: &[T], query: &str, status: Option<S>, text: F, status_of: G) -> Vec<T>
where
    T: Clone,
    S: PartialEq + Copy,
    F: Fn(&T) -> Vec<&str>,
    G: Fn(&T) -> S,
{
    rows.iter()
        .filter(|&row| status.is_none_or(|s| status_of(row) == s) && matches_query(query, &text(row)))
        .cloned()
        .collect()
}

/// Number of pages for `len` rows, at least one.
#[must_use]
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Clamp a 1-based page into range.
#[must_use]
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(len, page_size))
}

/// Rows on 1-based `page`.
#[must_use]
pub fn page_slice<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = clamp_page(page, rows.len(), page_size);
    rows.iter().skip((page - 1) * page_size).take(page_size).cloned().collect()
}

/// Find the variant in `all` whose wire name is `raw`; blank means no filter.
pub fn parse_choice<T: Copy>(all: &[T], raw: &str, name: impl Fn(T) -> &'static str) -> Option<T> {
    all.iter().copied().find(|v| name(*v) == raw)
}

/// `(wire name, label key)` select options, led by an "all" entry.
pub fn choice_options<T: Copy>(
    all: &[T],
    name: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> Vec<(String, &'static str)> {
    std::iter::once((String::new(), "common.all"))
        .chain(all.iter().map(|v| (name(*v).to_owned(), label(*v))))
        .collect()
}
