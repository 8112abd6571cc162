//! Column pruning for police-incident CSV exports.
//!
//! The whole job is `load → prune → write`; see [`pipeline::prune_file`].

pub mod cli;
pub mod data;
pub mod error;
pub mod pipeline;

pub use data::model::{ColumnSet, Dataset, Record, DEFAULT_DROP_COLUMNS};
pub use data::prune::MissingColumnPolicy;
pub use error::{PruneError, PruneResult, Stage};
pub use pipeline::{prune_file, PruneOptions, PruneReport};
