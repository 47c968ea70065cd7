//! In-memory dataset repository for testing.
//!
//! Keeps serialized datasets in a shared map keyed by path, so tests exercise
//! the same serde path as the file adapters without touching the disk.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{Result, dataset::DatasetRow, error::Error, ports::DatasetRepository};

type Storage = HashMap<String, Vec<u8>>;

/// In-memory repository for testing.
///
/// # Examples
///
/// ```
/// use gridcollide::adapters::InMemoryRepository;
/// use gridcollide::dataset::{DatasetGenerator, GeneratorConfig};
/// use gridcollide::ports::DatasetRepository;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// let rows = DatasetGenerator::new(GeneratorConfig::default().with_num_samples(4))?.generate()?;
///
/// repo.save(&rows, Path::new("dataset"))?;
/// assert_eq!(repo.load(Path::new("dataset"))?, rows);
/// # Ok::<(), gridcollide::Error>(())
/// ```
///
/// # Thread Safety
///
/// Clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<Storage>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of datasets currently stored
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    pub fn clear(&self) {
        self.storage().clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(&key(path))
    }

    // A panic while holding the lock cannot leave the map half-written.
    fn storage(&self) -> MutexGuard<'_, Storage> {
        self.storage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl DatasetRepository for InMemoryRepository {
    fn save(&self, rows: &[DatasetRow], path: &Path) -> Result<()> {
        let bytes = rmp_serde::to_vec(rows).map_err(|e| Error::SerializationContext {
            operation: "serialize dataset for in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        self.storage().insert(key(path), bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Vec<DatasetRow>> {
        let storage = self.storage();
        let bytes = storage
            .get(&key(path))
            .ok_or_else(|| Error::DatasetNotFound { path: key(path) })?;

        rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
            operation: "deserialize dataset from in-memory storage".to_string(),
            message: e.to_string(),
        })
    }
}
