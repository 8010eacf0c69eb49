//! Page ranges and page selections
//!
//! A page selection is written as comma separated tokens, each one of:
//! - `n` a single page
//! - `n-m` pages `n` to `m` inclusive
//! - `n-` page `n` to the last page of the document
//!
//! For example `2,5-7,12-`. Pages are 1-based.

use crate::types::*;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// An inclusive, 1-based interval of pages
///
/// `start` is always at least 1 and a bounded `end` is never below `start`
/// when built through the constructors or the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRange {
    /// Pages `start..=end`
    Bounded { start: u32, end: u32 },
    /// Pages `start` to the last page of the document
    Unbounded { start: u32 },
}

impl PageRange {
    pub fn bounded(start: u32, end: u32) -> Result<Self> {
        if start == 0 || end < start {
            return Err(MixError::InvalidPageSelection(format!("{}-{}", start, end)));
        }
        Ok(PageRange::Bounded { start, end })
    }

    pub fn unbounded(start: u32) -> Result<Self> {
        if start == 0 {
            return Err(MixError::InvalidPageSelection(format!("{}-", start)));
        }
        Ok(PageRange::Unbounded { start })
    }

    pub fn single(page: u32) -> Result<Self> {
        Self::bounded(page, page)
    }

    pub fn start(self) -> u32 {
        match self {
            PageRange::Bounded { start, .. } | PageRange::Unbounded { start } => start,
        }
    }

    /// Last page, `None` when the range runs to the end of the document
    pub fn end(self) -> Option<u32> {
        match self {
            PageRange::Bounded { end, .. } => Some(end),
            PageRange::Unbounded { .. } => None,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, PageRange::Unbounded { .. })
    }

    /// Last page once resolved against a document of `num_pages` pages
    pub fn effective_end(self, num_pages: u32) -> u32 {
        match self {
            PageRange::Bounded { end, .. } => end,
            PageRange::Unbounded { .. } => num_pages,
        }
    }

    /// Number of pages covered when resolved against `num_pages`
    ///
    /// A hand-built range starting at page 0 covers nothing.
    pub fn page_count(self, num_pages: u32) -> u32 {
        let start = self.start();
        if start == 0 {
            return 0;
        }
        self.effective_end(num_pages)
            .checked_sub(start)
            .map_or(0, |span| span.saturating_add(1))
    }
}

impl Ord for PageRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start()
            .cmp(&other.start())
            .then_with(|| match (self.end(), other.end()) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    }
}

impl PartialOrd for PageRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PageRange::Bounded { start, end } if start == end => write!(f, "{}", start),
            PageRange::Bounded { start, end } => write!(f, "{}-{}", start, end),
            PageRange::Unbounded { start } => write!(f, "{}-", start),
        }
    }
}

impl FromStr for PageRange {
    type Err = MixError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let invalid = || MixError::InvalidPageSelection(token.to_string());

        match token.split_once('-') {
            None => PageRange::single(parse_page(token).ok_or_else(invalid)?),
            Some((start, end)) => {
                let start = parse_page(start).ok_or_else(invalid)?;
                let end = end.trim();
                if end.is_empty() {
                    PageRange::unbounded(start)
                } else {
                    let end = parse_page(end).ok_or_else(invalid)?;
                    PageRange::bounded(start, end).map_err(|_| invalid())
                }
            }
        }
    }
}

/// Parse a page number, digits only and at least 1
fn parse_page(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|&page| page > 0)
}

/// Ordered set of page ranges
///
/// Equal ranges collapse into one entry. Iteration follows the `PageRange`
/// ordering so output is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PageRangeSet(BTreeSet<PageRange>);

impl PageRangeSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns false if an equal range was already present
    pub fn insert(&mut self, range: PageRange) -> bool {
        self.0.insert(range)
    }

    pub fn contains(&self, range: &PageRange) -> bool {
        self.0.contains(range)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageRange> {
        self.0.iter()
    }
}

impl From<PageRange> for PageRangeSet {
    fn from(range: PageRange) -> Self {
        Self(BTreeSet::from([range]))
    }
}

impl FromIterator<PageRange> for PageRangeSet {
    fn from_iter<I: IntoIterator<Item = PageRange>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<PageRange> for PageRangeSet {
    fn extend<I: IntoIterator<Item = PageRange>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for PageRangeSet {
    type Item = PageRange;
    type IntoIter = std::collections::btree_set::IntoIter<PageRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PageRangeSet {
    type Item = &'a PageRange;
    type IntoIter = std::collections::btree_set::Iter<'a, PageRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PageRangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}

impl FromStr for PageRangeSet {
    type Err = MixError;

    /// Blank input is the empty set (all pages), empty tokens are skipped
    fn from_str(s: &str) -> Result<Self> {
        s.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(PageRange::from_str)
            .collect()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // Ranges travel in their textual form ("5-23", "12-", "2")
    impl Serialize for PageRange {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for PageRange {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("2".parse::<PageRange>().unwrap(), PageRange::Bounded { start: 2, end: 2 });
        assert_eq!(
            "5-23".parse::<PageRange>().unwrap(),
            PageRange::Bounded { start: 5, end: 23 }
        );
        assert_eq!(" 12- ".parse::<PageRange>().unwrap(), PageRange::Unbounded { start: 12 });
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        for bad in ["0", "-5", "7-3", "a", "1-b", "+3", "2-4-6", "0-"] {
            assert!(bad.parse::<PageRange>().is_err(), "accepted '{}'", bad);
        }
    }

    #[test]
    fn test_ordering_puts_unbounded_last() {
        let mut ranges = vec![
            PageRange::Unbounded { start: 3 },
            PageRange::Bounded { start: 3, end: 90 },
            PageRange::Bounded { start: 1, end: 2 },
        ];
        ranges.sort();
        assert_eq!(
            ranges,
            vec![
                PageRange::Bounded { start: 1, end: 2 },
                PageRange::Bounded { start: 3, end: 90 },
                PageRange::Unbounded { start: 3 },
            ]
        );
    }

    #[test]
    fn test_page_count_past_document_end() {
        let range = PageRange::Unbounded { start: 8 };
        assert_eq!(range.page_count(5), 0);
        assert_eq!(range.page_count(8), 1);
    }
}
