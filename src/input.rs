use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, RowError};

/// One siman as it comes out of the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub id: String,
    pub chapter_id: String,
    pub content: String,
}

/// Columns are optional at the decoding level so a ragged line becomes a
/// per-row failure instead of aborting the whole read.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    chapter_id: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

impl TryFrom<RawRow> for InputRow {
    type Error = RowError;

    fn try_from(raw: RawRow) -> std::result::Result<Self, Self::Error> {
        Ok(InputRow {
            id: raw.id.ok_or(RowError::MissingField("id"))?,
            chapter_id: raw.chapter_id.ok_or(RowError::MissingField("chapter_id"))?,
            content: raw.content.ok_or(RowError::MissingField("content"))?,
        })
    }
}

pub type RowResult = std::result::Result<InputRow, RowError>;

/// Read every data line of the CSV at `path`. The file is closed before this
/// returns.
pub fn read_rows(path: &Path) -> Result<Vec<RowResult>> {
    let file = std::fs::File::open(path)?;
    read_rows_from(file)
}

pub fn read_rows_from<R: Read>(reader: R) -> Result<Vec<RowResult>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    // a broken header is a file-level failure
    rdr.headers()?;
    let rows = rdr
        .deserialize::<RawRow>()
        .map(|r| r.map_err(RowError::from).and_then(InputRow::try_from))
        .collect();
    Ok(rows)
}
