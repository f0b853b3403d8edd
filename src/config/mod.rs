//! Configuration loading for the employee directory service.
//!
//! # Example
//!
//! ```no_run
//! use employee_directory::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/directory").unwrap();
//! println!("Seeding {} employees", config.seed_employees().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DirectoryConfig, MAX_REPORT_DEPTH_CEILING, SeedConfig, ServiceConfig};
