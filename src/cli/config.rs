//! Config file loading for CLI commands

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};

use crate::dataset::GeneratorConfig;

/// Read a JSON generator config; absent fields take their defaults.
pub fn load_generator_config(path: &Path) -> Result<GeneratorConfig> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open config file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::dataset::DatasetKind;

    #[test]
    fn loads_partial_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("generator.json");
        fs::write(
            &path,
            r#"{ "kind": "fixed-direction", "num_samples": 12, "seed": 5 }"#,
        )
        .unwrap();

        let config = load_generator_config(&path).unwrap();
        assert_eq!(config.kind, DatasetKind::FixedDirection);
        assert_eq!(config.num_samples, 12);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.grid_size, 10);
    }

    #[test]
    fn reports_the_offending_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_generator_config(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
