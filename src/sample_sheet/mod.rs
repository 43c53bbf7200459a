// src/sample_sheet/mod.rs
pub mod index_record;
pub mod library_entry;
pub mod run_config;
pub mod sample_sheet;
pub mod workflow;

pub use index_record::{load_indices, IndexRecord, IndexTable, UDI_PREFIX};
pub use library_entry::{check_library_name, is_valid_library_name, load_libraries, LibraryEntry};
pub use run_config::RunConfig;
pub use sample_sheet::{md5_hex, sheet_path, SampleSheet, SheetSummary};
pub use workflow::Workflow;
