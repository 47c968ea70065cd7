//! MessagePack implementation of the dataset repository.
//!
//! Stores the structured rows directly with rmp_serde, which is far more
//! compact than the textual CSV paths.

use std::{fs::File, path::Path};

use crate::{Result, dataset::DatasetRow, error::Error, ports::DatasetRepository};

/// MessagePack-based dataset repository.
///
/// # Examples
///
/// ```no_run
/// use gridcollide::adapters::MsgPackRepository;
/// use gridcollide::dataset::{DatasetGenerator, GeneratorConfig};
/// use gridcollide::ports::DatasetRepository;
/// use std::path::Path;
///
/// let rows = DatasetGenerator::new(GeneratorConfig::default())?.generate()?;
///
/// let repo = MsgPackRepository;
/// repo.save(&rows, Path::new("grid_dataset.msgpack"))?;
/// let loaded = repo.load(Path::new("grid_dataset.msgpack"))?;
/// # Ok::<(), gridcollide::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl DatasetRepository for MsgPackRepository {
    fn save(&self, rows: &[DatasetRow], path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        rmp_serde::encode::write(&mut file, rows).map_err(|e| Error::SerializationContext {
            operation: "serialize dataset to MessagePack".to_string(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Vec<DatasetRow>> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let rows: Vec<DatasetRow> =
            rmp_serde::decode::from_read(&file).map_err(|e| Error::SerializationContext {
                operation: "deserialize dataset from MessagePack".to_string(),
                message: e.to_string(),
            })?;

        for row in &rows {
            row.check_bounds()?;
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::dataset::{DatasetGenerator, DatasetKind, GeneratorConfig};

    #[test]
    fn test_msgpack_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("grid_dataset.msgpack");

        let config = GeneratorConfig::default()
            .with_kind(DatasetKind::FixedDirection)
            .with_num_samples(12)
            .with_seed(21);
        let rows = DatasetGenerator::new(config).unwrap().generate().unwrap();

        let repo = MsgPackRepository::new();
        repo.save(&rows, &file_path).expect("Failed to save");
        let loaded = repo.load(&file_path).expect("Failed to load");

        assert_eq!(loaded, rows);
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = MsgPackRepository::new();
        let result = repo.load(Path::new("/tmp/nonexistent_gridcollide_12345.msgpack"));
        assert!(result.is_err());
    }

    #[test]
    fn test_save_to_invalid_path_returns_error() {
        let repo = MsgPackRepository::new();
        let result = repo.save(&[], Path::new("/invalid_dir_12345/file.msgpack"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
