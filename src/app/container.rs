//! Dependency injection container for the dataset tooling.

use std::{path::Path, sync::Arc};

use crate::{
    Result,
    adapters::DatasetFormat,
    dataset::{DatasetGenerator, DatasetRow, GeneratorConfig},
    ports::DatasetRepository,
};

/// Application with dependency injection.
///
/// # Examples
///
/// ```no_run
/// use gridcollide::adapters::DatasetFormat;
/// use gridcollide::app::App;
/// use gridcollide::dataset::GeneratorConfig;
/// use std::path::Path;
///
/// let app = App::with_format(DatasetFormat::Csv);
/// let rows = app.create_generator(GeneratorConfig::default())?.generate()?;
/// app.save_dataset(&rows, Path::new("grid_dataset.csv"))?;
/// # Ok::<(), gridcollide::Error>(())
/// ```
pub struct App {
    /// Repository for dataset persistence
    dataset_repository: Arc<dyn DatasetRepository + Send + Sync>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with production defaults.
    ///
    /// Uses:
    /// - `CsvRepository` for dataset persistence
    /// - No default seed (non-deterministic RNG)
    pub fn new() -> Self {
        Self::with_format(DatasetFormat::default())
    }

    /// App persisting datasets in `format`
    pub fn with_format(format: DatasetFormat) -> Self {
        Self {
            dataset_repository: format.repository(),
            default_seed: None,
        }
    }

    /// Create a builder for constructing app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the dataset repository.
    pub fn dataset_repository(&self) -> Arc<dyn DatasetRepository + Send + Sync> {
        Arc::clone(&self.dataset_repository)
    }

    /// Create a generator, falling back to the app's default seed when the
    /// config has none.
    pub fn create_generator(&self, mut config: GeneratorConfig) -> Result<DatasetGenerator> {
        if config.seed.is_none() {
            config.seed = self.default_seed;
        }
        DatasetGenerator::new(config)
    }

    pub fn save_dataset(&self, rows: &[DatasetRow], path: &Path) -> Result<()> {
        self.dataset_repository.save(rows, path)
    }

    pub fn load_dataset(&self, path: &Path) -> Result<Vec<DatasetRow>> {
        self.dataset_repository.load(path)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing app with custom dependencies.
///
/// Primarily used for testing to inject in-memory repositories and control
/// randomness.
pub struct AppBuilder {
    dataset_repository: Option<Arc<dyn DatasetRepository + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            dataset_repository: None,
            default_seed: None,
        }
    }

    /// Set a custom dataset repository.
    pub fn with_repository<R: DatasetRepository + Send + Sync + 'static>(mut self, repo: R) -> Self {
        self.dataset_repository = Some(Arc::new(repo));
        self
    }

    /// Seed used by generators whose config leaves the seed unset.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// If no repository was specified, uses `CsvRepository` by default.
    pub fn build(self) -> App {
        App {
            dataset_repository: self
                .dataset_repository
                .unwrap_or_else(|| DatasetFormat::Csv.repository()),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
