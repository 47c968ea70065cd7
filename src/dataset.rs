//! Dataset assembly: placement plus a policy, repeated per row
//!
//! - [`config`]: generation parameters and the dataset kind
//! - [`generator`]: deterministic parallel row generation
//! - [`record`]: in-memory rows and their CSV-facing records
//! - [`summary`]: label counts and trajectory length statistics

pub mod config;
pub mod generator;
pub mod record;
pub mod summary;

pub use config::{DatasetKind, GeneratorConfig};
pub use generator::DatasetGenerator;
pub use record::{DatasetRecord, DatasetRow};
pub use summary::{DatasetSummary, LengthStats};
