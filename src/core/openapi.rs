use utoipa::{Modify, OpenApi};

use crate::features::files::{dtos as files_dtos, handlers as files_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        files_handlers::upload_file,
        files_handlers::get_file,
        files_handlers::download_file,
        files_handlers::list_recent_files,
        files_handlers::get_stats,
    ),
    components(
        schemas(
            files_dtos::UploadFileDto,
            files_dtos::UploadResultDto,
            files_dtos::FileRecordDto,
            files_dtos::StatsDto,
            ApiResponse<files_dtos::UploadResultDto>,
            ApiResponse<files_dtos::FileRecordDto>,
            ApiResponse<Vec<files_dtos::FileRecordDto>>,
            ApiResponse<files_dtos::StatsDto>,
        )
    ),
    tags(
        (name = "files", description = "File drop-off: upload and pickup-code retrieval"),
    ),
    info(
        title = "FileVault API",
        version = "0.1.0",
        description = "API documentation for FileVault",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
