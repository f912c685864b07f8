//! Page slicing with clamped parameters.

use pupscore_core::ScoredListing;
use serde::Serialize;

/// One page of results plus the counts needed to render pagination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage<T = ScoredListing> {
    /// Items on this page.
    pub results: Vec<T>,
    /// Matches before pagination.
    pub total: usize,
    /// One-based page number actually served.
    pub page: u32,
    /// Page size actually used.
    pub limit: u32,
    /// Number of pages needed for `total` items.
    pub total_pages: usize,
    /// Whether items remain after this page.
    pub has_more: bool,
}

impl<T> QueryPage<T> {
    /// Page with no results.
    #[must_use]
    pub const fn empty(page: u32, limit: u32) -> Self {
        Self {
            results: Vec::new(),
            total: 0,
            page,
            limit,
            total_pages: 0,
            has_more: false,
        }
    }
}

/// Slice `items` into page `page` of size `limit`.
///
/// Callers clamp `page` to at least 1 and `limit` to `1..=100` first; a page
/// past the end is empty.
///
/// # Examples
/// ```
/// use pupscore_catalog::paginate;
///
/// let page = paginate((1..=45).collect::<Vec<u32>>(), 3, 20);
/// assert_eq!(page.results, (41..=45).collect::<Vec<u32>>());
/// assert_eq!(page.total_pages, 3);
/// assert!(!page.has_more);
/// ```
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> QueryPage<T> {
    let total = items.len();
    let page_size = usize::try_from(limit.max(1)).unwrap_or(usize::MAX);
    let skip = usize::try_from(page.max(1) - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(page_size);
    let results = items.into_iter().skip(skip).take(page_size).collect();
    QueryPage {
        results,
        total,
        page,
        limit,
        total_pages: total.div_ceil(page_size),
        has_more: skip.saturating_add(page_size) < total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 20, 1, 20, true)]
    #[case(2, 20, 21, 20, true)]
    #[case(3, 20, 41, 5, false)]
    #[case(4, 20, 0, 0, false)]
    #[case(1, 100, 1, 45, false)]
    fn pages_through_forty_five_items(
        #[case] page: u32,
        #[case] limit: u32,
        #[case] first: u32,
        #[case] len: usize,
        #[case] has_more: bool,
    ) {
        let result = paginate((1..=45).collect::<Vec<u32>>(), page, limit);
        assert_eq!(result.total, 45);
        assert_eq!(result.results.len(), len);
        assert_eq!(result.results.first().copied().unwrap_or(0), first);
        assert_eq!(result.has_more, has_more);
    }

    #[rstest]
    fn empty_input_has_no_pages() {
        let result = paginate(Vec::<u32>::new(), 1, 20);
        assert_eq!(result, QueryPage::empty(1, 20));
    }

    #[rstest]
    fn huge_page_numbers_do_not_overflow() {
        let result = paginate(vec![1_u8, 2, 3], u32::MAX, 100);
        assert!(result.results.is_empty());
        assert!(!result.has_more);
        assert_eq!(result.total_pages, 1);
    }
}
