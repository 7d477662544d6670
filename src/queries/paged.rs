//! Paged query results.

use serde::Deserialize;

/// A page of query results.
///
/// Every query endpoint of the platform returns this envelope: the `offset`
/// and `limit` that were applied, the `count` of results in this page, the
/// `total` number of matches, and the `results` themselves. `total` is
/// omitted when the query was sent with `withTotal=false`.
///
/// # Example
///
/// ```rust
/// use commercetools_api::queries::PagedQueryResult;
///
/// let json = r#"{"offset": 0, "limit": 20, "count": 2, "total": 2,
///                "results": [{"id": "a"}, {"id": "b"}]}"#;
/// let page: PagedQueryResult<serde_json::Value> = serde_json::from_str(json).unwrap();
///
/// assert!(page.is_first());
/// assert!(page.is_last());
/// assert_eq!(page.head().unwrap()["id"], "a");
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct PagedQueryResult<T> {
    /// The offset applied to this query.
    pub offset: u64,
    /// The limit applied to this query.
    #[serde(default)]
    pub limit: u64,
    /// The number of results in this page.
    pub count: u64,
    /// The total number of matching resources.
    ///
    /// Absent when the query disabled the total count via `withTotal=false`.
    #[serde(default)]
    pub total: Option<u64>,
    /// The results of this page.
    pub results: Vec<T>,
}

impl<T> PagedQueryResult<T> {
    /// Returns `true` if this is the first page of results.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.offset == 0
    }

    /// Returns `true` if this is the last page of results.
    ///
    /// Without a total count the page cannot see past itself, so it counts
    /// as the last one.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        match self.total {
            Some(total) => self.offset + self.count >= total,
            None => true,
        }
    }

    /// Returns the first result of this page, if any.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.results.first()
    }

    /// Returns `true` if this page contains no results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(offset: u64, count: u64, total: u64) -> PagedQueryResult<u64> {
        PagedQueryResult {
            offset,
            limit: 20,
            count,
            total: Some(total),
            results: (0..count).collect(),
        }
    }

    #[test]
    fn test_first_page_detection() {
        assert!(page(0, 20, 100).is_first());
        assert!(!page(20, 20, 100).is_first());
    }

    #[test]
    fn test_last_page_detection() {
        assert!(!page(0, 20, 100).is_last());
        assert!(page(80, 20, 100).is_last());
        // Final short page
        assert!(page(90, 10, 100).is_last());
    }

    #[test]
    fn test_single_page_is_both_first_and_last() {
        let single = page(0, 5, 5);
        assert!(single.is_first());
        assert!(single.is_last());
    }

    #[test]
    fn test_empty_result_is_first_and_last() {
        let empty = page(0, 0, 0);
        assert!(empty.is_first());
        assert!(empty.is_last());
        assert!(empty.is_empty());
        assert!(empty.head().is_none());
    }

    #[test]
    fn test_envelope_without_total_parses_as_single_page() {
        let json = r#"{"offset": 0, "limit": 20, "count": 2,
                       "results": [{"id": "a"}, {"id": "b"}]}"#;
        let page: PagedQueryResult<serde_json::Value> = serde_json::from_str(json).unwrap();

        assert_eq!(page.total, None);
        assert!(page.is_first());
        assert!(page.is_last());
        assert_eq!(page.count, 2);
    }

    #[test]
    fn test_head_returns_first_result() {
        let page = page(0, 3, 3);
        assert_eq!(page.head(), Some(&0));
    }
}
