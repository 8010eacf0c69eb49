//! Opening source documents to learn their page count

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Supplies the number of pages of a source document
pub trait PageCounter {
    fn page_count(&self, source: &PdfSource) -> Result<u32>;
}

/// Page counter backed by lopdf
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfPageCounter;

impl PageCounter for LopdfPageCounter {
    fn page_count(&self, source: &PdfSource) -> Result<u32> {
        let doc = Document::load(source.path()).map_err(|e| MixError::CouldNotOpenDocument {
            path: source.path.clone(),
            reason: e.to_string(),
        })?;
        page_count_of(&doc)
    }
}

/// Load a PDF and return its page count
pub async fn count_pages(path: impl AsRef<Path>) -> Result<u32> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    page_count_of(&doc)
}

fn page_count_of(doc: &Document) -> Result<u32> {
    let pages = doc.get_pages().len();
    u32::try_from(pages).map_err(|_| MixError::Config(format!("Too many pages: {}", pages)))
}
