use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::files::models::FileRecord;

/// Upload file request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadFileDto {
    /// The file to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// Result of a successful upload: the pickup code plus everything the
/// uploader needs to share. Timestamps serialize as ISO-8601 strings;
/// field names are camelCase, matching the original drop-off surface.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResultDto {
    /// Pickup code identifying the file, e.g. "FV-AB12CD"
    pub code: String,
    /// Original filename as uploaded
    pub name: String,
    /// Public URL of the stored object
    pub url: String,
    /// Size of the file in bytes
    pub size: i64,
    /// Time the upload completed (not persisted)
    pub upload_date: DateTime<Utc>,
    /// Time after which the file is treated as gone
    pub expire_date: DateTime<Utc>,
}

/// A pickup record as returned to a code redeemer.
/// Serializes with its database field names (`expire_date`).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileRecordDto {
    /// Pickup code identifying the file
    pub code: String,
    /// Original filename as uploaded
    pub name: String,
    /// Public URL of the stored object
    pub url: String,
    /// Size of the file in bytes
    pub size: i64,
    /// Time after which the file is treated as gone
    pub expire_date: DateTime<Utc>,
}

/// Aggregate numbers over live (unexpired) pickup records
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsDto {
    /// Number of live pickup records
    pub files: i64,
    /// Combined size in bytes of live records
    pub total_size: i64,
}

impl From<FileRecord> for FileRecordDto {
    fn from(record: FileRecord) -> Self {
        Self {
            code: record.code,
            name: record.name,
            url: record.url,
            size: record.size,
            expire_date: record.expire_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn upload_result_serializes_camel_case_iso8601() {
        let uploaded = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let dto = UploadResultDto {
            code: "FV-AB12CD".to_string(),
            name: "notes.txt".to_string(),
            url: "http://files.example.com/filevault/uploads/FV-AB12CD_notes.txt".to_string(),
            size: 10,
            upload_date: uploaded,
            expire_date: uploaded + chrono::Duration::days(7),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["code"], "FV-AB12CD");
        assert_eq!(value["uploadDate"], "2024-01-01T00:00:00Z");
        assert_eq!(value["expireDate"], "2024-01-08T00:00:00Z");
        assert!(value.get("upload_date").is_none());
    }

    #[test]
    fn record_dto_keeps_database_field_names() {
        let record = FileRecord {
            code: "FV-AB12CD".to_string(),
            name: "notes.txt".to_string(),
            url: "http://files.example.com/filevault/uploads/FV-AB12CD_notes.txt".to_string(),
            size: 10,
            expire_date: Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(FileRecordDto::from(record)).unwrap();
        assert_eq!(value["name"], "notes.txt");
        assert_eq!(value["size"], 10);
        assert!(value.get("expire_date").is_some());
        assert!(value.get("expireDate").is_none());
    }
}
