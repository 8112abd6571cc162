use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

use super::model::{Dataset, Record};
use crate::error::{PruneError, PruneResult};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a CSV file fully into memory.
///
/// Layout: a header row naming every column, then data rows with exactly as
/// many fields as the header. Blank lines are skipped. Cells are kept as text.
pub fn load_csv(path: &Path) -> PruneResult<Dataset> {
    let file = File::open(path).map_err(|source| PruneError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = read_csv(file, path)?;
    info!(
        "read {} rows x {} columns from {}",
        dataset.len(),
        dataset.column_count(),
        path.display()
    );
    Ok(dataset)
}

/// Parse CSV from any reader. `path` is only used to label errors.
pub fn read_csv<R: Read>(input: R, path: &Path) -> PruneResult<Dataset> {
    let parse_err = |source: csv::Error| PruneError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err(PruneError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(parse_err)?;
        records.push(row.iter().collect::<Record>());
    }

    Ok(Dataset::new(headers, records))
}
