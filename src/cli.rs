use std::path::PathBuf;

use clap::Parser;

use crate::data::model::{ColumnSet, DEFAULT_DROP_COLUMNS};
use crate::data::prune::MissingColumnPolicy;
use crate::pipeline::PruneOptions;

/// Where the raw incident export lives relative to the working directory.
pub const DEFAULT_INPUT: &str = "../data/PoliceDataAll.csv";

/// Where the cleaned export is written.
pub const DEFAULT_OUTPUT: &str = "../data/cleaned_data.csv";

/// Drop identifier and coordinate columns from a police-incident CSV
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output CSV file (created or overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Columns to drop; repeat the flag or separate names with commas
    #[arg(
        short = 'd',
        long = "drop",
        value_name = "COLUMN",
        value_delimiter = ',',
        default_values_t = DEFAULT_DROP_COLUMNS.map(String::from)
    )]
    pub drop: Vec<String>,

    /// Fail if a column to drop is not in the header
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    pub fn options(&self) -> PruneOptions {
        PruneOptions {
            columns: ColumnSet::new(self.drop.iter().cloned()),
            policy: if self.strict {
                MissingColumnPolicy::Fail
            } else {
                MissingColumnPolicy::Ignore
            },
        }
    }
}
