use std::path::Path;

use log::info;

use crate::data::loader::load_csv;
use crate::data::model::ColumnSet;
use crate::data::prune::{prune, MissingColumnPolicy};
use crate::data::writer::write_csv;
use crate::error::PruneResult;

// ---------------------------------------------------------------------------
// Options and report
// ---------------------------------------------------------------------------

/// How a single run prunes its input.
#[derive(Debug, Clone, Default)]
pub struct PruneOptions {
    pub columns: ColumnSet,
    pub policy: MissingColumnPolicy,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneReport {
    pub rows: usize,
    pub columns_in: usize,
    pub columns_out: usize,
    /// Requested names that were found and removed.
    pub dropped: Vec<String>,
    /// Requested names that were not in the header.
    pub missing: Vec<String>,
}

// ---------------------------------------------------------------------------
// Entry-point
// ---------------------------------------------------------------------------

/// Read `input`, drop `options.columns`, write the rest to `output`.
///
/// `output` is only created or replaced when every stage succeeds.
pub fn prune_file(input: &Path, output: &Path, options: &PruneOptions) -> PruneResult<PruneReport> {
    let dataset = load_csv(input)?;
    let (pruned, outcome) = prune(&dataset, &options.columns, options.policy)?;

    if !outcome.dropped.is_empty() {
        info!("dropping column(s): {}", outcome.dropped.join(", "));
    }

    write_csv(&pruned, output)?;

    Ok(PruneReport {
        rows: pruned.len(),
        columns_in: dataset.column_count(),
        columns_out: pruned.column_count(),
        dropped: outcome.dropped,
        missing: outcome.missing,
    })
}
