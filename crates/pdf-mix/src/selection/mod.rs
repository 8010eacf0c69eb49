//! Turning selection rows into alternate mix inputs
//!
//! Each row names a source document, a page selection, a pace and a
//! reverse flag. Rows are processed in order:
//! 1. A pace or page selection that does not validate aborts the batch
//! 2. A single reversed document is split in two reversed inputs
//! 3. Any other row becomes one input as entered
//!
//! Rows that cannot be split are reported and skipped.

#[cfg(feature = "serde")]
pub mod table;

use crate::io::{LopdfPageCounter, PageCounter};
use crate::page_range::PageRangeSet;
use crate::partition::partition;
use crate::types::*;
use crate::validation::parse_pace;
use std::sync::Arc;

/// Pace of both inputs produced by a single document split
const SPLIT_PACE: u32 = 1;

/// User entered parameters for one source document
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRow {
    pub source: Arc<PdfSource>,
    /// Page selection text, blank for all pages
    pub page_selection: String,
    /// Pace text, blank for the default pace
    pub pace: String,
    pub reverse: bool,
}

impl SelectionRow {
    pub fn new(source: impl Into<PdfSource>) -> Self {
        Self {
            source: Arc::new(source.into()),
            page_selection: String::new(),
            pace: String::new(),
            reverse: false,
        }
    }

    pub fn with_pages(mut self, page_selection: impl Into<String>) -> Self {
        self.page_selection = page_selection.into();
        self
    }

    pub fn with_pace(mut self, pace: impl Into<String>) -> Self {
        self.pace = pace.into();
        self
    }

    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn to_page_range_set(&self) -> Result<PageRangeSet> {
        self.page_selection.parse()
    }
}

/// A row left out of the plan and the reason
#[derive(Debug)]
pub struct SkippedRow {
    /// 1-based row number
    pub row: usize,
    pub source: Arc<PdfSource>,
    pub error: MixError,
}

/// Ordered mix inputs ready for the mix task
#[derive(Debug, Default)]
pub struct MixPlan {
    pub inputs: Vec<MixInput>,
    pub skipped: Vec<SkippedRow>,
}

impl MixPlan {
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// User facing messages for the skipped rows
    pub fn messages(&self) -> Vec<String> {
        self.skipped
            .iter()
            .map(|skipped| format!("{}: {}", skipped.source.name(), skipped.error))
            .collect()
    }
}

/// Build the mix inputs for `rows`, opening a document through `counter`
/// only when a single document is reversed.
pub fn build_mix_inputs(rows: &[SelectionRow], counter: &dyn PageCounter) -> Result<MixPlan> {
    if rows.is_empty() {
        return Err(MixError::NoDocumentSelected);
    }

    let single_doc = rows.len() == 1;
    let mut plan = MixPlan::default();

    for (index, row) in rows.iter().enumerate() {
        let pace = parse_pace(&row.pace).ok_or_else(|| MixError::InvalidPace {
            row: index + 1,
            value: row.pace.clone(),
        })?;
        let page_ranges = row.to_page_range_set()?;

        if single_doc && row.reverse {
            log::debug!(
                "Splitting {} in two inputs to reverse a single document",
                row.source.name()
            );
            match split_document(row, &page_ranges, counter) {
                Ok(inputs) => plan.inputs.extend(inputs),
                Err(error) => {
                    log::warn!("Skipping {}: {}", row.source.name(), error);
                    plan.skipped.push(SkippedRow {
                        row: index + 1,
                        source: Arc::clone(&row.source),
                        error,
                    });
                }
            }
        } else {
            plan.inputs.push(
                MixInput::new(Arc::clone(&row.source), row.reverse, pace)
                    .with_page_ranges(page_ranges),
            );
        }
    }

    log::debug!(
        "Planned {} mix inputs, skipped {} rows",
        plan.inputs.len(),
        plan.skipped.len()
    );
    Ok(plan)
}

/// Plan `rows` using lopdf to count pages
pub async fn plan(rows: &[SelectionRow]) -> Result<MixPlan> {
    let rows = rows.to_vec();
    tokio::task::spawn_blocking(move || build_mix_inputs(&rows, &LopdfPageCounter)).await?
}

/// Highest selected page first, then everything else, both reversed
fn split_document(
    row: &SelectionRow,
    page_ranges: &PageRangeSet,
    counter: &dyn PageCounter,
) -> Result<[MixInput; 2]> {
    let num_pages = counter.page_count(&row.source)?;
    let split = partition(num_pages, page_ranges)?;

    let high = MixInput::new(Arc::clone(&row.source), true, SPLIT_PACE).with_page_ranges(split.high);
    let low = MixInput::new(Arc::clone(&row.source), true, SPLIT_PACE).with_page_ranges(split.low);
    Ok([high, low])
}
