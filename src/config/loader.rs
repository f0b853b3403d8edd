//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Employee;

use super::types::{DirectoryConfig, MAX_REPORT_DEPTH_CEILING, SeedConfig, ServiceConfig};

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/directory/
/// ├── service.yaml    # Listener address and log level
/// └── employees.yaml  # Employees seeded at startup
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_directory::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/directory")?;
/// println!("Listening on {}", loader.service().bind_address);
/// # Ok::<(), employee_directory::error::DirectoryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: DirectoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - `max_report_depth` is outside `1..=MAX_REPORT_DEPTH_CEILING` (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> DirectoryResult<Self> {
        let path = path.as_ref();

        let service_path = path.join("service.yaml");
        let service = Self::load_yaml::<ServiceConfig>(&service_path)?;
        if !(1..=MAX_REPORT_DEPTH_CEILING).contains(&service.max_report_depth) {
            return Err(DirectoryError::ConfigParseError {
                path: service_path.display().to_string(),
                message: format!(
                    "max_report_depth must be between 1 and {}, got {}",
                    MAX_REPORT_DEPTH_CEILING, service.max_report_depth
                ),
            });
        }
        let seed = Self::load_yaml::<SeedConfig>(&path.join("employees.yaml"))?;

        Ok(Self {
            config: DirectoryConfig::new(service, seed),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: DirectoryConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> DirectoryResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DirectoryError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| DirectoryError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Returns the service settings.
    pub fn service(&self) -> &ServiceConfig {
        self.config.service()
    }

    /// Returns the employees to seed at startup.
    pub fn seed_employees(&self) -> &[Employee] {
        self.config.seed_employees()
    }
}
