// src/main.rs
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use samplesheet_prep::sample_sheet::{RunConfig, Workflow};

/// Creates a sample sheet for Illumina amplicon sequencing. Outputs to <run-name>.csv
#[derive(Parser)]
#[clap(version = "1.0.0")]
struct Opts {
    /// Name of the sequencing run
    #[clap(short, long, value_name = "RUNNAME")]
    run_name: String,

    /// Type of workflow: 'A' (MiSeq) or 'B' (MiniSeq, NextSeq)
    #[clap(short, long, possible_values = ["A", "B"])]
    workflow: Workflow,

    /// CSV document containing the indices for the appropriate workflow
    #[clap(short, long, parse(from_os_str))]
    indices: PathBuf,

    /// CSV document containing only library name and index ID on each line
    #[clap(short, long, value_name = "LIBNAMES", parse(from_os_str))]
    library_names: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let opts: Opts = Opts::parse();

    eprintln!(
        "REMINDER: You have chosen workflow {}. Make sure you have input the corresponding indices.",
        opts.workflow
    );

    let config = RunConfig::new(&opts.run_name, opts.workflow, opts.indices, opts.library_names);

    let summary = samplesheet_prep::run(&config)
        .with_context(|| format!("could not create sample sheet for run '{}'", config.run_name))?;

    println!(
        "{} samples written to '{}' (md5 {})",
        summary.n_samples,
        summary.path.display(),
        summary.md5sum
    );
    Ok(())
}
