// src/lib.rs
pub mod error;
pub mod sample_sheet;

use chrono::Local;

pub use error::{Result, SheetError};
pub use sample_sheet::{md5_hex, SheetSummary};
use sample_sheet::{load_indices, load_libraries, RunConfig, SampleSheet};

/// Load both tables, render the sheet with today's date and write it to
/// [`RunConfig::output_path`].
///
/// Nothing is written unless every library name is valid and every
/// index ID resolves.
pub fn run(config: &RunConfig) -> Result<SheetSummary> {
    let indices = load_indices(&config.indices)?;
    let libraries = load_libraries(&config.library_names)?;

    let today = Local::now().date_naive();
    let sheet = SampleSheet::render(config, &indices, &libraries, today)?;

    sheet.write(&config.out_dir, &config.run_name)
}
