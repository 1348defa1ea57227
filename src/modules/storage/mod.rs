//! Storage module for dropped-off file content
//!
//! Provides the `ObjectStore` seam the file operations depend on and a
//! MinIO/S3-compatible client implementing it.

mod minio_client;
mod object_store;

pub use minio_client::MinIOClient;
pub use object_store::ObjectStore;
