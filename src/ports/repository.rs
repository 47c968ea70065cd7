//! Repository port for dataset persistence.
//!
//! Generation and rendering only see this trait; the storage format lives in
//! the adapters.

use std::path::Path;

use crate::{Result, dataset::DatasetRow};

/// Port for persisting and loading generated datasets.
///
/// # Examples
///
/// ```no_run
/// use gridcollide::dataset::DatasetRow;
/// use gridcollide::ports::DatasetRepository;
/// use std::path::Path;
///
/// fn archive<R: DatasetRepository>(
///     repo: &R,
///     rows: &[DatasetRow],
///     path: &Path,
/// ) -> gridcollide::Result<()> {
///     repo.save(rows, path)
/// }
/// ```
pub trait DatasetRepository {
    /// Save rows to `path`, replacing anything stored there.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be written or serialization fails.
    fn save(&self, rows: &[DatasetRow], path: &Path) -> Result<()>;

    /// Load the rows stored at `path`, in the order they were saved.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is stored there, the data is malformed, or
    /// a row fails validation against its grid.
    fn load(&self, path: &Path) -> Result<Vec<DatasetRow>>;
}
