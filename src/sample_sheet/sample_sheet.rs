// src/sample_sheet/sample_sheet.rs
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use crate::error::{Result, SheetError};
use crate::sample_sheet::index_record::IndexTable;
use crate::sample_sheet::library_entry::LibraryEntry;
use crate::sample_sheet::run_config::RunConfig;

pub const DATE_FORMAT: &str = "%Y.%m.%d";

pub const WORKFLOW: &str = "GenerateFASTQ";
pub const ASSAY: &str = "TruSeq HT";
pub const INDEX_KIT: &str = "IDT-ILMN TruSeq DNA-RNA UD 96 Indexes";
pub const CHEMISTRY: &str = "Amplicon";
pub const READ_LENGTH: &str = "151";
pub const ADAPTER_READ1: &str = "AGATCGGAAGAGCACACGTCTGAACTCCAGTCA";
pub const ADAPTER_READ2: &str = "AGATCGGAAGAGCGTCGTGTAGGGAAAGAGTGT";

pub const DATA_HEADER: [&str; 9] = [
    "Sample_ID",
    "Sample_Name",
    "Index_Plate_Well",
    "I7_Index_ID",
    "index",
    "I5_Index_ID",
    "index2",
    "Sample_Project",
    "Description",
];

/// A rendered Illumina sample sheet.
///
/// Rows are kept as plain cells until written; an empty row is a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleSheet {
    pub rows: Vec<Vec<String>>,
    n_samples: usize,
}

/// What a finished write produced.
#[derive(Debug, Clone)]
pub struct SheetSummary {
    pub path: PathBuf,
    pub n_samples: usize,
    pub md5sum: String,
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

impl SampleSheet {
    /// Build the sheet: fixed header / reads / settings blocks, then one
    /// `[Data]` line per library, numbered from 1 in input order.
    pub fn render(
        config: &RunConfig,
        indices: &IndexTable,
        libraries: &[LibraryEntry],
        date: NaiveDate,
    ) -> Result<Self> {
        let today = date.format(DATE_FORMAT).to_string();

        let mut rows = vec![
            vec![config.run_name.clone()],
            row(&["Date", today.as_str()]),
            row(&["Workflow", WORKFLOW]),
            row(&["Assay", ASSAY]),
            row(&["Index Kit", INDEX_KIT]),
            row(&["Description", config.workflow.description()]),
            row(&["Chemistry", CHEMISTRY]),
            Vec::new(),
            row(&["[Reads]"]),
            row(&[READ_LENGTH]),
            row(&[READ_LENGTH]),
            Vec::new(),
            row(&["[Settings]"]),
            row(&["Adapter", ADAPTER_READ1]),
            // key spelling is part of the established sheet format
            row(&["AdapaterRead2", ADAPTER_READ2]),
            Vec::new(),
            row(&["[Data]"]),
            row(&DATA_HEADER),
        ];

        for (i, lib) in libraries.iter().enumerate() {
            let idx = indices.get(&lib.index_id).ok_or_else(|| SheetError::Lookup {
                index_id: lib.index_id.clone(),
                library: lib.name.clone(),
            })?;

            // I7 and I5 columns both carry the plate's single UDI ID
            rows.push(vec![
                (i + 1).to_string(),
                lib.name.clone(),
                idx.well.clone(),
                lib.index_id.clone(),
                idx.index.clone(),
                lib.index_id.clone(),
                idx.index2.clone(),
                "Project".to_string(),
                "Description".to_string(),
            ]);
        }

        Ok(SampleSheet {
            rows,
            n_samples: libraries.len(),
        })
    }

    /// Number of `[Data]` lines.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// CSV text with minimal quoting and CRLF line ends.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();

        for r in &self.rows {
            if r.is_empty() {
                // csv would write `""` for an empty record
                out.extend_from_slice(b"\r\n");
                continue;
            }
            let mut wtr = csv::WriterBuilder::new()
                .flexible(true)
                .terminator(csv::Terminator::CRLF)
                .from_writer(&mut out);
            wtr.write_record(r)?;
            wtr.flush().map_err(csv::Error::from)?;
        }

        Ok(out)
    }

    /// Write to `<dir>/<run_name>.csv`, replacing an existing file.
    pub fn write<P: AsRef<Path>>(&self, dir: P, run_name: &str) -> Result<SheetSummary> {
        let path = sheet_path(dir, run_name);
        let bytes = self.to_bytes()?;
        write_atomic(&path, &bytes)?;

        Ok(SheetSummary {
            path,
            n_samples: self.n_samples,
            md5sum: md5_hex(&bytes),
        })
    }
}

/// `<dir>/<run_name>.csv` - the run name is used as given.
pub fn sheet_path<P: AsRef<Path>>(dir: P, run_name: &str) -> PathBuf {
    dir.as_ref().join(format!("{run_name}.csv"))
}

/// Hex md5 of a byte slice, as reported next to every written sheet.
pub fn md5_hex(bytes: &[u8]) -> String {
    format!("{:x}", md5::compute(bytes))
}

/// Write into an anonymous temp file next to `path`, then rename it over `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| SheetError::io(dir, e))?;
    tmp.write_all(bytes)
        .and_then(|_| tmp.flush())
        .map_err(|e| SheetError::io(tmp.path(), e))?;

    tmp.persist(path).map_err(|e| SheetError::io(path, e.error))?;
    Ok(())
}
