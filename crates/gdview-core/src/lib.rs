//! Gdview Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! bucket registry shared across all gdview components.

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use config::{AppConfig, BucketResolution, StorageBackend};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use filter::filter_contains;
pub use models::{BucketOption, DocType};
pub use registry::Registry;
