use async_trait::async_trait;

use crate::core::error::AppError;

/// Object storage collaborator for the drop-off operations
///
/// Narrow seam over the S3 client: object put/delete, key derivation,
/// and URL resolution. The file service depends on this trait rather
/// than the concrete client so tests can substitute a double.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Put a file under `key`
    async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), AppError>;

    /// Delete the object under `key`
    ///
    /// Compensating callers treat errors from this as best-effort: log
    /// and move on.
    async fn delete(&self, key: &str) -> Result<(), AppError>;

    /// Object key for a pickup code and original file name
    fn object_key(&self, code: &str, name: &str) -> String;

    /// Publicly resolvable URL of the object under `key`
    fn public_url(&self, key: &str) -> String;

    /// Recover the object key from a stored URL
    fn key_from_url(&self, url: &str) -> Option<String>;
}
