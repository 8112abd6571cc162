use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use super::model::Dataset;
use crate::error::{PruneError, PruneResult};

/// Write `dataset` as CSV to `path`, replacing any existing file.
///
/// Rows go to a temporary file beside `path` which is renamed over it once
/// everything is flushed. If any step fails the temporary file is deleted and
/// `path` is left untouched.
///
/// A replaced file keeps its permissions; a new one gets the same mode a plain
/// `File::create` would give it.
pub fn write_csv(dataset: &Dataset, path: &Path) -> PruneResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let tmp = create_temp(dir, path).map_err(|e| PruneError::write(path, e))?;
    let tmp = write_records(dataset, tmp).map_err(|e| PruneError::write(path, e))?;
    tmp.persist(path)
        .map_err(|e| PruneError::write(path, e.error))?;

    info!(
        "wrote {} rows x {} columns to {}",
        dataset.len(),
        dataset.column_count(),
        path.display()
    );
    Ok(())
}

/// Open the temporary file in `dir` with the mode `target` should end up with.
fn create_temp(dir: &Path, target: &Path) -> io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // open(2) applies the umask to this
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;

    match fs::metadata(target) {
        Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    Ok(tmp)
}

/// Serialize header and records into `out` and hand it back flushed.
pub fn write_records<W: Write>(dataset: &Dataset, out: W) -> Result<W, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(&dataset.headers)?;
    for record in &dataset.records {
        writer.write_record(record.values())?;
    }
    writer.flush()?;

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
