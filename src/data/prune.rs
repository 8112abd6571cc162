use log::debug;

use super::model::{ColumnSet, Dataset};
use crate::error::{PruneError, PruneResult};

// ---------------------------------------------------------------------------
// Missing-column policy
// ---------------------------------------------------------------------------

/// What to do when a requested column is not in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingColumnPolicy {
    /// Skip it. Pruning an already-pruned file is then a no-op.
    #[default]
    Ignore,
    /// Fail with [`PruneError::MissingColumn`].
    Fail,
}

/// Which requested names were found and which were not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PruneOutcome {
    pub dropped: Vec<String>,
    pub missing: Vec<String>,
}

// ---------------------------------------------------------------------------
// Column removal
// ---------------------------------------------------------------------------

/// Remove every header occurrence of each name in `columns`, and the matching
/// cell from every record. Row order and the order of the remaining columns
/// are unchanged.
pub fn prune(
    dataset: &Dataset,
    columns: &ColumnSet,
    policy: MissingColumnPolicy,
) -> PruneResult<(Dataset, PruneOutcome)> {
    let mut outcome = PruneOutcome::default();
    for name in columns.iter() {
        if dataset.column_index(name).is_some() {
            outcome.dropped.push(name.to_string());
        } else {
            outcome.missing.push(name.to_string());
        }
    }

    if !outcome.missing.is_empty() {
        match policy {
            MissingColumnPolicy::Fail => {
                return Err(PruneError::MissingColumn {
                    missing: outcome.missing,
                })
            }
            MissingColumnPolicy::Ignore => {
                debug!("ignoring absent column(s): {}", outcome.missing.join(", "));
            }
        }
    }

    let keep: Vec<usize> = dataset
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !columns.contains(h))
        .map(|(i, _)| i)
        .collect();

    let headers = keep.iter().map(|&i| dataset.headers[i].clone()).collect();
    let records = dataset.records.iter().map(|r| r.project(&keep)).collect();

    Ok((Dataset::new(headers, records), outcome))
}
