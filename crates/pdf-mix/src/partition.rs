//! Two-way split of a page selection for single document reversal
//!
//! Reversing one document in an alternate mix needs two reversed inputs:
//! the highest selected page on its own, and every other selected page.
//! Interleaving them one page at a time yields the whole selection in
//! reverse order.

use crate::page_range::{PageRange, PageRangeSet};
use crate::types::*;

/// Result of splitting a page selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// The single highest selected page
    pub high: PageRangeSet,
    /// Every requested range with the highest page removed
    pub low: PageRangeSet,
    /// Pages covered by the requested ranges, summed range by range
    pub total_selected_pages: u32,
}

/// Split `requested` (empty means all pages) of a `num_pages` document into
/// the high and low sets.
///
/// Fails with [`MixError::InsufficientPages`] when the document or the
/// selection has fewer than two pages.
pub fn partition(num_pages: u32, requested: &PageRangeSet) -> Result<Partition> {
    if requested.is_empty() {
        if num_pages < 2 {
            return Err(MixError::InsufficientPages);
        }
        return Ok(Partition {
            high: PageRange::single(num_pages)?.into(),
            low: PageRange::bounded(1, num_pages - 1)?.into(),
            total_selected_pages: num_pages,
        });
    }

    let highest_page = requested
        .iter()
        .map(|range| range.effective_end(num_pages))
        .max()
        .unwrap_or(0);

    let total_selected_pages = requested
        .iter()
        .fold(0u32, |total, range| {
            total.saturating_add(range.page_count(num_pages))
        });

    // The highest page belongs to the high set only, ranges reduced to
    // nothing are dropped and equal leftovers collapse
    let low = requested
        .iter()
        .filter_map(|range| {
            let mut end = range.effective_end(num_pages);
            if end == highest_page {
                end = end.saturating_sub(1);
            }
            PageRange::bounded(range.start(), end).ok()
        })
        .collect::<PageRangeSet>();

    if total_selected_pages < 2 || num_pages < 2 {
        return Err(MixError::InsufficientPages);
    }

    Ok(Partition {
        high: PageRange::single(highest_page)?.into(),
        low,
        total_selected_pages,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(selection: &str) -> PageRangeSet {
        selection.parse().unwrap()
    }

    #[test]
    fn test_all_pages() {
        for num_pages in 2..50 {
            let result = partition(num_pages, &PageRangeSet::new()).unwrap();
            assert_eq!(
                result.high,
                PageRangeSet::from(PageRange::single(num_pages).unwrap())
            );
            assert_eq!(
                result.low,
                PageRangeSet::from(PageRange::bounded(1, num_pages - 1).unwrap())
            );
            assert_eq!(result.total_selected_pages, num_pages);
        }
    }

    #[test]
    fn test_single_page_document() {
        for selection in ["", "1", "1-", "1-3", "2,5-7"] {
            assert!(matches!(
                partition(1, &ranges(selection)),
                Err(MixError::InsufficientPages)
            ));
        }
        assert!(matches!(
            partition(0, &PageRangeSet::new()),
            Err(MixError::InsufficientPages)
        ));
    }

    #[test]
    fn test_bounded_ranges() {
        let result = partition(10, &ranges("1-5,7-10")).unwrap();
        assert_eq!(result.high, ranges("10"));
        assert_eq!(result.low, ranges("1-5,7-9"));
        assert_eq!(result.total_selected_pages, 9);
    }

    #[test]
    fn test_unbounded_range() {
        let result = partition(5, &ranges("3-")).unwrap();
        assert_eq!(result.high, ranges("5"));
        assert_eq!(result.low, ranges("3-4"));
        assert_eq!(result.total_selected_pages, 3);
    }

    #[test]
    fn test_single_selected_page() {
        assert!(matches!(
            partition(4, &ranges("2")),
            Err(MixError::InsufficientPages)
        ));
    }

    #[test]
    fn test_single_page_ranges_dropped_from_low_set() {
        // [8] is the highest page and disappears from the low set
        let result = partition(10, &ranges("2-4,8")).unwrap();
        assert_eq!(result.high, ranges("8"));
        assert_eq!(result.low, ranges("2-4"));
        assert_eq!(result.total_selected_pages, 4);
    }

    #[test]
    fn test_every_range_ending_on_highest_page_is_shortened() {
        let result = partition(12, &ranges("1-6,4-6,9-")).unwrap();
        assert_eq!(result.high, ranges("12"));
        assert_eq!(result.low, ranges("1-6,4-6,9-11"));

        let result = partition(12, &ranges("1-6,4-6")).unwrap();
        assert_eq!(result.high, ranges("6"));
        assert_eq!(result.low, ranges("1-5,4-5"));
        assert_eq!(result.total_selected_pages, 9);
    }

    #[test]
    fn test_equal_leftovers_collapse() {
        let result = partition(5, &ranges("3-5,3-")).unwrap();
        assert_eq!(result.low.len(), 1);
        assert_eq!(result.low, ranges("3-4"));
        assert_eq!(result.total_selected_pages, 6);
    }

    #[test]
    fn test_hand_built_range_from_page_zero() {
        let requested: PageRangeSet = [PageRange::Bounded {
            start: 0,
            end: u32::MAX,
        }]
        .into_iter()
        .collect();
        assert!(matches!(
            partition(10, &requested),
            Err(MixError::InsufficientPages)
        ));

        let mut requested = ranges("1-5");
        requested.insert(PageRange::Bounded { start: 0, end: 3 });
        let result = partition(10, &requested).unwrap();
        assert_eq!(result.total_selected_pages, 5);
        assert_eq!(result.high, ranges("5"));
        assert_eq!(result.low, ranges("1-4"));
    }

    #[test]
    fn test_idempotent() {
        let requested = ranges("2,5-7,12-");
        let first = partition(20, &requested).unwrap();
        let second = partition(20, &requested).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.low.to_string(), "2,5-7,12-19");
    }
}
