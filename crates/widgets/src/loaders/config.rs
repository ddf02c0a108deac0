//! Factory configuration loader.

use std::path::Path;

use dashboard_core::FactoryConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for factory configuration from TOML files.
///
/// ```toml
/// default_aggregation = "sum"
/// default_bins = 24
/// ```
///
/// Missing keys keep their built-in defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<FactoryConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<FactoryConfig> {
        let config: FactoryConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse factory config TOML: {}", e))?;

        if config.default_bins == 0 {
            anyhow::bail!("default_bins must be positive");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use dashboard_core::Aggregation;

    use super::*;

    #[test]
    fn loads_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_aggregation = \"sum\"\ndefault_bins = 24").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.default_aggregation, Aggregation::Sum);
        assert_eq!(config.default_bins, 24);
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let config = ConfigLoader::parse("default_bins = 5").unwrap();
        assert_eq!(config.default_aggregation, Aggregation::Count);
        assert_eq!(config.default_bins, 5);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(ConfigLoader::parse("default_aggregation = \"median\"").is_err());
        assert!(ConfigLoader::parse("default_bins = 0").is_err());
        assert!(ConfigLoader::load(Path::new("/nonexistent/widgets.toml")).is_err());
    }
}
