use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for pickup records (table `files`)
///
/// A record exists iff its backing object exists in storage, except during
/// the narrow window after an expiry or rollback delete. Rows are immutable
/// once created.
#[derive(Debug, Clone, FromRow)]
pub struct FileRecord {
    pub code: String,
    pub name: String,
    pub url: String,
    pub size: i64,
    pub expire_date: DateTime<Utc>,
}
