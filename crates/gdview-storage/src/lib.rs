//! Gdview Storage Library
//!
//! This crate provides the bucket-listing abstraction and its backends.
//! It includes the `ObjectLister` trait and implementations for S3 and the
//! local filesystem (used for tests and local development).
//!
//! Listers are bucket-agnostic: the target bucket is an argument of every
//! listing call, since the dashboard queries a different bucket per search.

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_lister;
pub use gdview_core::StorageBackend;
#[cfg(feature = "storage-local")]
pub use local::LocalLister;
#[cfg(feature = "storage-s3")]
pub use s3::S3Lister;
pub use traits::{ObjectLister, StorageError, StorageResult};
