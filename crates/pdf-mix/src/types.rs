use crate::page_range::PageRangeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MixError {
    #[error("No PDF document has been selected")]
    NoDocumentSelected,
    #[error("Select a positive integer number as pace (row {row}: '{value}')")]
    InvalidPace { row: usize, value: String },
    #[error("Invalid page selection '{0}' (ex: 2 or 5-23 or 2,5-7,12-)")]
    InvalidPageSelection(String),
    #[error("Could not open the given document {}: {reason}", .path.display())]
    CouldNotOpenDocument { path: PathBuf, reason: String },
    #[error("Cannot reverse a single page from a single document")]
    InsufficientPages,
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, MixError>;

/// Read-only descriptor of a source PDF document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PdfSource {
    pub path: PathBuf,
}

impl PdfSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for messages, falls back to the full path
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl From<&str> for PdfSource {
    fn from(path: &str) -> Self {
        PdfSource::new(path)
    }
}

impl From<PathBuf> for PdfSource {
    fn from(path: PathBuf) -> Self {
        PdfSource::new(path)
    }
}

/// One logical input of an alternate mix
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixInput {
    /// Shared with every other input built from the same row
    pub source: Arc<PdfSource>,
    /// Walk the selected pages from last to first
    pub reverse: bool,
    /// Number of consecutive pages taken from this input at each turn
    pub pace: u32,
    /// Pages taken from the document, empty means all pages
    pub page_ranges: PageRangeSet,
}

impl MixInput {
    pub fn new(source: Arc<PdfSource>, reverse: bool, pace: u32) -> Self {
        Self {
            source,
            reverse,
            pace,
            page_ranges: PageRangeSet::new(),
        }
    }

    pub fn with_page_ranges(mut self, page_ranges: PageRangeSet) -> Self {
        self.page_ranges.extend(page_ranges);
        self
    }
}
