//! CSV implementation of the dataset repository.
//!
//! This is the interchange format read by downstream classifiers: one row per
//! sample with the header `grid_size,object1_action,object2_action,collision_status`.

use std::{fs::File, path::Path};

use csv::{ReaderBuilder, WriterBuilder};

use crate::{
    Result,
    dataset::{DatasetRecord, DatasetRow},
    error::Error,
    ports::DatasetRepository,
};

/// Column names, in file order
pub const CSV_HEADER: [&str; 4] = [
    "grid_size",
    "object1_action",
    "object2_action",
    "collision_status",
];

/// CSV-based dataset repository.
///
/// # Examples
///
/// ```no_run
/// use gridcollide::adapters::CsvRepository;
/// use gridcollide::dataset::{DatasetGenerator, GeneratorConfig};
/// use gridcollide::ports::DatasetRepository;
/// use std::path::Path;
///
/// let rows = DatasetGenerator::new(GeneratorConfig::default())?.generate()?;
///
/// let repo = CsvRepository::new();
/// repo.save(&rows, Path::new("grid_dataset.csv"))?;
/// let loaded = repo.load(Path::new("grid_dataset.csv"))?;
/// assert_eq!(loaded, rows);
/// # Ok::<(), gridcollide::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRepository;

impl CsvRepository {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetRepository for CsvRepository {
    fn save(&self, rows: &[DatasetRow], path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        // The header is written by hand so an empty dataset still gets one.
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(CSV_HEADER)?;
        for row in rows {
            writer.serialize(DatasetRecord::from(row))?;
        }
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush CSV file {path:?}"),
            source,
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Vec<DatasetRow>> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
        reader
            .deserialize::<DatasetRecord>()
            .map(|record| DatasetRow::try_from(record?))
            .collect()
    }
}
