//! Selection tables stored as JSON or CSV

use super::SelectionRow;
use crate::types::*;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// One row of a stored selection table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub file: PathBuf,
    #[serde(default)]
    pub pages: String,
    #[serde(default)]
    pub pace: String,
    /// Blank cells read as `false`
    #[serde(default, deserialize_with = "blank_as_false")]
    pub reverse: bool,
}

fn blank_as_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

impl SelectionRecord {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            pages: String::new(),
            pace: String::new(),
            reverse: false,
        }
    }
}

/// Rows of an alternate mix, in mix order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionTable {
    pub rows: Vec<SelectionRecord>,
}

impl SelectionTable {
    /// Load a table from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let table = serde_json::from_slice(&bytes)
            .map_err(|e| MixError::Config(format!("Failed to parse selection table: {}", e)))?;
        Ok(table)
    }

    /// Save the table to a JSON file
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MixError::Config(format!("Failed to serialize selection table: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Load a table from a CSV file with a `file,pages,pace,reverse` header
    pub async fn load_csv(path: impl AsRef<Path>) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path).await?;

        let rows = tokio::task::spawn_blocking(move || {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(contents.as_bytes());
            reader
                .deserialize::<SelectionRecord>()
                .collect::<std::result::Result<Vec<_>, _>>()
        })
        .await??;

        Ok(Self { rows })
    }

    pub fn to_rows(&self) -> Vec<SelectionRow> {
        self.rows
            .iter()
            .map(|record| {
                SelectionRow::new(record.file.clone())
                    .with_pages(record.pages.clone())
                    .with_pace(record.pace.clone())
                    .reversed(record.reverse)
            })
            .collect()
    }
}
