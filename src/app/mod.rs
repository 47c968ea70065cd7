//! Application layer with dependency injection container.
//!
//! The container owns infrastructure dependencies (the dataset repository and
//! a default seed) and hands out configured domain objects.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           Application Layer (app)           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │            App (DI Container)        │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ owns                      │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Infrastructure (adapters)           │   │
//! │  │  - CsvRepository / MsgPackRepository │   │
//! │  │  - InMemoryRepository (testing)      │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ implements                │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Domain Ports (ports)                │   │
//! │  │  - DatasetRepository trait           │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ used by                   │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Domain Logic                        │   │
//! │  │  - DatasetGenerator                  │   │
//! │  │  - policies, placement               │   │
//! │  └──────────────────────────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use gridcollide::adapters::InMemoryRepository;
//! use gridcollide::app::App;
//! use gridcollide::dataset::GeneratorConfig;
//! use std::path::Path;
//!
//! let app = App::for_testing()
//!     .with_repository(InMemoryRepository::new())
//!     .with_default_seed(42)
//!     .build();
//!
//! let rows = app
//!     .create_generator(GeneratorConfig::default().with_num_samples(4))?
//!     .generate()?;
//! app.save_dataset(&rows, Path::new("dataset"))?;
//! # Ok::<(), gridcollide::Error>(())
//! ```

pub mod container;

pub use container::{App, AppBuilder};
