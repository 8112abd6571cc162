use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which step of `load → prune → write` an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Transform,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Read => write!(f, "read"),
            Stage::Transform => write!(f, "transform"),
            Stage::Write => write!(f, "write"),
        }
    }
}

/// Every failure is fatal; nothing is retried.
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("read: cannot open {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read: {} is not valid CSV", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("read: {} has no header row", path.display())]
    EmptyInput { path: PathBuf },

    #[error("transform: column(s) not found in header: {}", missing.join(", "))]
    MissingColumn { missing: Vec<String> },

    #[error("write: cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PruneError {
    pub fn stage(&self) -> Stage {
        match self {
            PruneError::FileNotFound { .. }
            | PruneError::Parse { .. }
            | PruneError::EmptyInput { .. } => Stage::Read,
            PruneError::MissingColumn { .. } => Stage::Transform,
            PruneError::Write { .. } => Stage::Write,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<io::Error>) -> Self {
        PruneError::Write {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type PruneResult<T> = Result<T, PruneError>;
