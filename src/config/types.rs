//! Configuration types for the employee directory.
//!
//! These structures are deserialized from the YAML files in the
//! configuration directory.

use serde::Deserialize;

use crate::models::Employee;

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_report_depth() -> usize {
    32
}

/// Largest accepted `max_report_depth`.
///
/// Reporting structures are serialized as nested JSON, one object and one
/// array per level.
pub const MAX_REPORT_DEPTH_CEILING: usize = 256;

/// HTTP service settings from `service.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Socket address the HTTP listener binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Deepest report tree a reporting structure may return, in levels below the root.
    #[serde(default = "default_max_report_depth")]
    pub max_report_depth: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            log_level: default_log_level(),
            max_report_depth: default_max_report_depth(),
        }
    }
}

/// Seed data file structure from `employees.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// Employees inserted into the store at startup.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// Complete configuration for the service.
#[derive(Debug, Clone, Default)]
pub struct DirectoryConfig {
    service: ServiceConfig,
    seed: SeedConfig,
}

impl DirectoryConfig {
    /// Creates a configuration from its parts.
    pub fn new(service: ServiceConfig, seed: SeedConfig) -> Self {
        Self { service, seed }
    }

    /// Returns the service settings.
    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }

    /// Returns the seed employees.
    pub fn seed_employees(&self) -> &[Employee] {
        &self.seed.employees
    }
}
