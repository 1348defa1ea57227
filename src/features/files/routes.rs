use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::files::handlers::{
    download_file, get_file, get_stats, list_recent_files, upload_file,
};
use crate::features::files::services::FileService;

/// Create routes for the files feature
///
/// Note: This feature is public (no authentication required).
/// Static segments ("recent", "stats") win over the `{code}` capture.
pub fn routes(file_service: Arc<FileService>, max_body_size: usize) -> Router {
    Router::new()
        .route(
            "/api/files/upload",
            // Allow body size up to the configured limit + buffer for multipart overhead
            post(upload_file).layer(DefaultBodyLimit::max(max_body_size + 1024 * 1024)),
        )
        .route("/api/files/recent", get(list_recent_files))
        .route("/api/files/stats", get(get_stats))
        .route("/api/files/{code}", get(get_file))
        .route("/api/files/{code}/download", get(download_file))
        .with_state(file_service)
}
