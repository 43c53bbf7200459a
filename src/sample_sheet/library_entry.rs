//library_entry.rs
use std::fs::File;
use std::path::Path;

use crate::error::{Result, SheetError};

/// One line of the library table: a library and the index it was prepared with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryEntry {
    pub name: String,
    pub index_id: String,
    /// any columns after the index ID, kept as read
    pub extra: Vec<String>,
}

/// Library names end up as `Sample_Name` and in FASTQ file names; only
/// ASCII letters, digits and `_` are accepted.
pub fn is_valid_library_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn check_library_name(name: &str) -> Result<()> {
    if is_valid_library_name(name) {
        Ok(())
    } else {
        Err(SheetError::Validation {
            name: name.to_string(),
        })
    }
}

impl LibraryEntry {
    pub fn from_row(row: &csv::StringRecord) -> std::result::Result<Self, String> {
        if row.len() < 2 {
            return Err(format!(
                "expected library name and index ID, found {} column(s)",
                row.len()
            ));
        }
        Ok(LibraryEntry {
            name: row[0].to_string(),
            index_id: row[1].to_string(),
            extra: row.iter().skip(2).map(|s| s.to_string()).collect(),
        })
    }
}

/// Read the library table (comma separated, no header) in file order.
///
/// Stops at the first library name that fails [`check_library_name`].
pub fn load_libraries<P: AsRef<Path>>(path: P) -> Result<Vec<LibraryEntry>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SheetError::io(path, e))?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut libraries = Vec::new();
    for rec in rdr.records() {
        let row = rec?;

        if let Some(name) = row.get(0) {
            check_library_name(name)?;
        }

        let entry = LibraryEntry::from_row(&row).map_err(|message| SheetError::Parse {
            path: path.to_path_buf(),
            line: row.position().map(|p| p.line()).unwrap_or(0),
            message,
        })?;
        libraries.push(entry);
    }

    Ok(libraries)
}
