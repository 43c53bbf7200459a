//index_record.rs
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::error::{Result, SheetError};

/// Only rows whose index ID carries this prefix are unique dual indexes.
pub const UDI_PREFIX: &str = "UDI";

/// Column positions in the index plate table.
const COL_WELL: usize = 3;
const COL_INDEX_ID: usize = 4;
const COL_INDEX: usize = 5;
const COL_INDEX2: usize = 7;

/// One UDI well of the index plate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub index_id: String,
    pub well: String,
    /// i7 sequence
    pub index: String,
    /// i5 sequence
    pub index2: String,
}

/// Index ID -> plate record.
pub type IndexTable = HashMap<String, IndexRecord>;

impl IndexRecord {
    /// Build a record from one row of the index table.
    ///
    /// Returns `Ok(None)` for rows that are not UDI rows (headers, other
    /// index sets, short lines); those are skipped by the loader.
    pub fn from_row(row: &csv::StringRecord) -> std::result::Result<Option<Self>, String> {
        let index_id = match row.get(COL_INDEX_ID) {
            Some(id) if id.starts_with(UDI_PREFIX) => id,
            _ => return Ok(None),
        };

        if row.len() <= COL_INDEX2 {
            return Err(format!(
                "UDI row '{}' has {} columns, at least {} are required",
                index_id,
                row.len(),
                COL_INDEX2 + 1
            ));
        }

        Ok(Some(IndexRecord {
            index_id: index_id.to_string(),
            well: row[COL_WELL].to_string(),
            index: row[COL_INDEX].to_string(),
            index2: row[COL_INDEX2].to_string(),
        }))
    }
}

/// Read the index plate table (comma separated, no header).
///
/// A later row with the same index ID replaces the earlier one.
pub fn load_indices<P: AsRef<Path>>(path: P) -> Result<IndexTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SheetError::io(path, e))?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut table = IndexTable::new();
    for rec in rdr.records() {
        let row = rec?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let record = IndexRecord::from_row(&row).map_err(|message| SheetError::Parse {
            path: path.to_path_buf(),
            line,
            message,
        })?;

        if let Some(record) = record {
            if let Some(old) = table.insert(record.index_id.clone(), record) {
                eprintln!(
                    "WARNING: index ID '{}' appears more than once in {} - line {} replaces well {}",
                    old.index_id,
                    path.display(),
                    line,
                    old.well
                );
            }
        }
    }

    Ok(table)
}
