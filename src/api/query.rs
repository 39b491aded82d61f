// src/api/query.rs - Query state for paginated list pages and the outgoing query string

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Sentinel filter value meaning "no filter"; never sent to the backend.
pub const ALL_SENTINEL: &str = "all";

/// Default page size for every list page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Client-side query state shared by every list page: page number,
/// free-text search, and categorical filters with the `"all"` sentinel.
///
/// Mutating any filter or the search text resets the page to 1, so a user
/// narrowing results always starts from the first page of the narrowed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub status: String,
    pub priority: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: String::new(),
            status: ALL_SENTINEL.to_string(),
            priority: ALL_SENTINEL.to_string(),
        }
    }
}

impl ListQuery {
    pub fn with_page(&self, page: u32) -> Self {
        let mut next = self.clone();
        next.page = page.max(1);
        next
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.search = search.into();
        next.page = 1;
        next
    }

    pub fn with_status(&self, status: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.status = status.into();
        next.page = 1;
        next
    }

    pub fn with_priority(&self, priority: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.priority = priority.into();
        next.page = 1;
        next
    }

    /// Starts the outgoing query string with page, limit, and search.
    /// Filters are appended by the caller, which knows the allowed values.
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_num("page", self.page);
        pairs.push_num("limit", self.limit);
        pairs.push("search", &self.search);
        pairs
    }
}

/// Ordered key/value pairs for a query string. Empty values and the `"all"`
/// sentinel are dropped at insertion time, so what goes out is exactly what
/// the backend should see.
#[derive(Debug, Default, Clone)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: &str) -> &mut Self {
        let trimmed = value.trim();
        if !trimmed.is_empty() && trimmed != ALL_SENTINEL {
            self.pairs.push((key.to_string(), trimmed.to_string()));
        }
        self
    }

    /// Pushes a categorical filter only if its value is one of the allowed
    /// enum members. Anything else is silently omitted, never an error.
    pub fn push_if_allowed(&mut self, key: &str, value: &str, allowed: &[&str]) -> &mut Self {
        if allowed.contains(&value.trim()) {
            self.push(key, value);
        }
        self
    }

    pub fn push_num(&mut self, key: &str, value: u32) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encoded `key=value&...` string, no leading `?`.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Monotonically increasing fetch ticket.
///
/// Rapid pagination clicks can leave several responses in flight at once;
/// a response is applied only while its ticket is still the newest one
/// issued, so an earlier response resolving late can never overwrite the
/// state of a later request.
#[derive(Debug, Clone, Default)]
pub struct FetchTicket {
    counter: Arc<AtomicU64>,
}

impl FetchTicket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket, invalidating all previously issued ones.
    pub fn issue(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True while no newer ticket has been issued.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == ticket
    }
}

/// Page to fetch after deleting an item: removing the only item on a page
/// past the first steps back one page instead of refetching an empty page.
pub fn page_after_delete(current_page: u32, items_on_page: usize) -> u32 {
    if items_on_page <= 1 && current_page > 1 {
        current_page - 1
    } else {
        current_page.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_all_values_are_omitted() {
        let mut pairs = QueryPairs::new();
        pairs.push("search", "");
        pairs.push("status", "all");
        pairs.push("priority", "  ");
        assert!(pairs.is_empty());
        assert_eq!(pairs.encode(), "");
    }

    #[test]
    fn test_query_string_includes_only_set_parameters() {
        let query = ListQuery::default().with_search("boots").with_page(3);
        // with_page after with_search, so page survives
        let mut pairs = query.pairs();
        pairs.push_if_allowed("status", &query.status, &["pending", "shipped"]);
        assert_eq!(pairs.encode(), "page=3&limit=10&search=boots");
    }

    #[test]
    fn test_search_is_percent_encoded() {
        let query = ListQuery::default().with_search("blue & white");
        assert_eq!(query.pairs().encode(), "page=1&limit=10&search=blue%20%26%20white");
    }

    #[test]
    fn test_changing_any_filter_resets_page() {
        let query = ListQuery::default().with_page(5);
        assert_eq!(query.with_search("mug").page, 1);
        assert_eq!(query.with_status("pending").page, 1);
        assert_eq!(query.with_priority("high").page, 1);
    }

    #[test]
    fn test_page_is_clamped_to_one() {
        assert_eq!(ListQuery::default().with_page(0).page, 1);
    }

    #[test]
    fn test_disallowed_filter_value_is_omitted() {
        let mut pairs = QueryPairs::new();
        pairs.push_if_allowed("status", "bogus", &["new", "read"]);
        pairs.push_if_allowed("status", "read", &["new", "read"]);
        assert_eq!(pairs.encode(), "status=read");
    }

    #[test]
    fn test_fetch_ticket_invalidates_older_requests() {
        let ticket = FetchTicket::new();
        let first = ticket.issue();
        let second = ticket.issue();
        assert!(!ticket.is_current(first));
        assert!(ticket.is_current(second));
    }

    #[test]
    fn test_page_after_delete_steps_back_from_emptied_page() {
        assert_eq!(page_after_delete(3, 1), 2);
        assert_eq!(page_after_delete(1, 1), 1);
        assert_eq!(page_after_delete(3, 5), 3);
        assert_eq!(page_after_delete(2, 0), 1);
    }
}
