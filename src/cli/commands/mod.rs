//! Subcommands of the `gridcollide` binary

pub mod generate;
pub mod inspect;
pub mod visualize;

use std::path::Path;

use crate::adapters::DatasetFormat;

/// Explicit `--format` wins; otherwise the file extension decides.
pub(crate) fn resolve_format(path: &Path, explicit: Option<DatasetFormat>) -> DatasetFormat {
    explicit.unwrap_or_else(|| DatasetFormat::from_path(path))
}
