//! Client-side list filtering.
//!
//! Lists are small and fully in memory, so filtering is a linear scan:
//! a case-insensitive substring search over a record's text fields, combined
//! with an exact status match.

use std::collections::BTreeMap;

/// Records that can be searched and grouped by status.
pub trait Searchable {
    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Status value used by status filters and counts.
    fn status(&self) -> &str;

    /// True if any search field contains `term`, ignoring case.
    /// An empty term matches everything.
    fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Search term plus optional status; `status: None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub search: String,
    pub status: Option<String>,
}

impl ListFilter {
    pub fn new() -> Self {
        ListFilter::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Restrict to one status. `"all"` clears the restriction.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        let status = status.into();
        self.status = if status == "all" { None } else { Some(status) };
        self
    }

    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        let status_ok = self
            .status
            .as_deref()
            .map_or(true, |status| record.status() == status);
        status_ok && record.matches_search(self.search.trim())
    }

    /// Matching records, in list order.
    pub fn apply<'a, T: Searchable>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

/// Number of records per status, plus `"all"` for the total.
pub fn status_counts<T: Searchable>(records: &[T]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    counts.insert("all".to_string(), records.len());
    for record in records {
        *counts.entry(record.status().to_string()).or_insert(0) += 1;
    }
    counts
}
