use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::AppError;
use crate::features::files::dtos::{FileRecordDto, StatsDto, UploadFileDto, UploadResultDto};
use crate::features::files::services::FileService;
use crate::shared::types::ApiResponse;

/// Upload a file and receive a pickup code
///
/// Accepts multipart/form-data with a single `file` field. The file name,
/// content type, and size are taken as supplied; nothing is validated
/// beyond the request body limit.
#[utoipa::path(
    post,
    path = "/api/files/upload",
    tag = "files",
    request_body(
        content = UploadFileDto,
        content_type = "multipart/form-data",
        description = "File upload form",
    ),
    responses(
        (status = 201, description = "File uploaded, pickup code issued", body = ApiResponse<UploadResultDto>),
        (status = 400, description = "Missing or unreadable file field"),
        (status = 413, description = "File too large")
    )
)]
pub async fn upload_file(
    State(service): State<Arc<FileService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadResultDto>>), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;

    // Process multipart fields
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let ct = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let fname = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file_data = Some(data.to_vec());
                file_name = Some(fname);
                content_type = Some(ct);
            }
            _ => {
                // Ignore unknown fields
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let file_data =
        file_data.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    let file_name =
        file_name.ok_or_else(|| AppError::BadRequest("Filename is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::BadRequest("Content type is required".to_string()))?;

    let result = service.upload(&file_name, &file_data, &content_type).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(result), None)),
    ))
}

/// Redeem a pickup code for the stored file's metadata and download URL
///
/// Expired codes answer exactly like codes that were never issued.
#[utoipa::path(
    get,
    path = "/api/files/{code}",
    tag = "files",
    params(
        ("code" = String, Path, description = "Pickup code, e.g. FV-AB12CD")
    ),
    responses(
        (status = 200, description = "File found", body = ApiResponse<FileRecordDto>),
        (status = 404, description = "Unknown or expired pickup code")
    )
)]
pub async fn get_file(
    State(service): State<Arc<FileService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<FileRecordDto>>, AppError> {
    let record = service.get_file(&code).await?;
    Ok(Json(ApiResponse::success(Some(record.into()), None)))
}

/// Redirect to the stored file's public URL
#[utoipa::path(
    get,
    path = "/api/files/{code}/download",
    tag = "files",
    params(
        ("code" = String, Path, description = "Pickup code, e.g. FV-AB12CD")
    ),
    responses(
        (status = 307, description = "Redirect to the file's public URL"),
        (status = 404, description = "Unknown or expired pickup code")
    )
)]
pub async fn download_file(
    State(service): State<Arc<FileService>>,
    Path(code): Path<String>,
) -> Result<Redirect, AppError> {
    let record = service.get_file(&code).await?;
    Ok(Redirect::temporary(&record.url))
}

/// List the most recently uploaded live files
///
/// Expired rows are filtered out of the listing but not deleted; deletion
/// happens only when their codes are redeemed.
#[utoipa::path(
    get,
    path = "/api/files/recent",
    tag = "files",
    responses(
        (status = 200, description = "Most recent live uploads, newest first", body = ApiResponse<Vec<FileRecordDto>>)
    )
)]
pub async fn list_recent_files(
    State(service): State<Arc<FileService>>,
) -> Result<Json<ApiResponse<Vec<FileRecordDto>>>, AppError> {
    let records = service.recent().await?;
    let dtos: Vec<FileRecordDto> = records.into_iter().map(FileRecordDto::from).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None)))
}

/// Aggregate counts over live files
#[utoipa::path(
    get,
    path = "/api/files/stats",
    tag = "files",
    responses(
        (status = 200, description = "Live record count and combined size", body = ApiResponse<StatsDto>)
    )
)]
pub async fn get_stats(
    State(service): State<Arc<FileService>>,
) -> Result<Json<ApiResponse<StatsDto>>, AppError> {
    let stats = service.stats().await?;
    Ok(Json(ApiResponse::success(Some(stats), None)))
}
