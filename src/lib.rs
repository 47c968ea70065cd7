//! Labeled two-agent grid trajectories for collision classification
//!
//! This crate provides:
//! - Grid coordinates, occupancy surfaces and min-distance / border placement
//! - Pursuit, avoidance and fixed-direction motion policies whose collision
//!   labels are derived from the simulated positions
//! - Deterministic parallel dataset generation with CSV and MessagePack storage
//! - PNG frame rendering and dataset summaries
//!
//! # Example
//!
//! ```
//! use gridcollide::dataset::{DatasetGenerator, DatasetSummary, GeneratorConfig};
//!
//! let config = GeneratorConfig::default().with_num_samples(10).with_seed(42);
//! let rows = DatasetGenerator::new(config)?.generate()?;
//! let summary = DatasetSummary::from_rows(&rows);
//! assert_eq!(summary.collisions, 5);
//! assert_eq!(summary.mislabeled, 0);
//! # Ok::<(), gridcollide::Error>(())
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod policy;
pub mod ports;
pub mod render;
pub mod trajectory;

pub use error::{Error, Result};
