//! Adapters implementing domain ports.
//!
//! Following hexagonal architecture, adapters depend on domain ports, not the
//! other way around.

pub mod csv_repository;
pub mod in_memory_repository;
pub mod msgpack_repository;

use std::{fmt, path::Path, str::FromStr, sync::Arc};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use csv_repository::{CSV_HEADER, CsvRepository};
pub use in_memory_repository::InMemoryRepository;
pub use msgpack_repository::MsgPackRepository;

use crate::{Error, Result, ports::DatasetRepository};

/// On-disk dataset format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    #[default]
    Csv,
    #[value(name = "msgpack")]
    MsgPack,
}

impl DatasetFormat {
    pub fn extension(self) -> &'static str {
        match self {
            DatasetFormat::Csv => "csv",
            DatasetFormat::MsgPack => "msgpack",
        }
    }

    /// Guess the format from a file extension, defaulting to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("msgpack") || ext.eq_ignore_ascii_case("mp") => {
                DatasetFormat::MsgPack
            }
            _ => DatasetFormat::Csv,
        }
    }

    /// Repository that reads and writes this format
    pub fn repository(self) -> Arc<dyn DatasetRepository + Send + Sync> {
        match self {
            DatasetFormat::Csv => Arc::new(CsvRepository::new()),
            DatasetFormat::MsgPack => Arc::new(MsgPackRepository::new()),
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DatasetFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(DatasetFormat::Csv),
            "msgpack" | "messagepack" => Ok(DatasetFormat::MsgPack),
            _ => Err(Error::ParseEnum {
                kind: "dataset format",
                input: s.to_string(),
                expected: "csv, msgpack".to_string(),
            }),
        }
    }
}
