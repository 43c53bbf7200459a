//run_config.rs
use std::path::PathBuf;

use super::sample_sheet::sheet_path;
use super::Workflow;

/// Everything one invocation needs; built once from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Sheet title and output file stem (`<run_name>.csv`).
    pub run_name: String,
    pub workflow: Workflow,
    /// index plate table
    pub indices: PathBuf,
    /// library name -> index ID table
    pub library_names: PathBuf,
    /// where `<run_name>.csv` is written
    pub out_dir: PathBuf,
}

impl RunConfig {
    pub fn new<I, L>(run_name: &str, workflow: Workflow, indices: I, library_names: L) -> Self
    where
        I: Into<PathBuf>,
        L: Into<PathBuf>,
    {
        Self {
            run_name: run_name.to_string(),
            workflow,
            indices: indices.into(),
            library_names: library_names.into(),
            out_dir: PathBuf::from("."),
        }
    }

    pub fn with_out_dir<P: Into<PathBuf>>(mut self, out_dir: P) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// `<out_dir>/<run_name>.csv` - the run name is used as given.
    pub fn output_path(&self) -> PathBuf {
        sheet_path(&self.out_dir, &self.run_name)
    }
}
