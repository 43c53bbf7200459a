//workflow.rs
use std::fmt;
use std::str::FromStr;

use crate::error::SheetError;

/// Illumina index-read workflow of the target instrument.
///
/// The two workflows read the i5 index on opposite strands, so the index
/// table handed in has to match the instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    /// NovaSeq, MiSeq, HiSeq 2500, HiSeq 2000
    A,
    /// MiniSeq, NextSeq, HiSeq 4000, HiSeq 3000
    B,
}

impl Workflow {
    /// Text for the `Description` line of the sheet header.
    pub fn description(&self) -> &'static str {
        match self {
            Workflow::A => {
                "The Index 2 Read is performed before Read 2 resynthesis, so the Index 2 (i5) adapter is sequenced on the forward strand. \
                 Workflow A is performed on the NovaSeq, MiSeq, HiSeq 2500, and HiSeq 2000."
            }
            Workflow::B => {
                "The Index 2 Read is performed after Read 2. \
                 Workflow B is performed on the MiniSeq, NextSeq, HiSeq 4000, and HiSeq 3000."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Workflow::A => "A",
            Workflow::B => "B",
        }
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Workflow {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Workflow::A),
            "B" => Ok(Workflow::B),
            other => Err(SheetError::InvalidWorkflow(other.to_string())),
        }
    }
}
