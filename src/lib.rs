//! Employee directory service
//!
//! This crate manages an organization's employee records: creating, reading
//! and replacing employees, computing how many people report to an employee
//! directly or indirectly, and attaching one compensation record per employee.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod store;
