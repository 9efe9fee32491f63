//! Upload handlers: paginated listing, creation, fetch, and deletion.

use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, info};

use crate::constants::{
    ERR_NO_PERMISSION_UPLOAD, ERR_UPLOAD_NOT_FOUND, MSG_UPLOAD_CREATED, MSG_UPLOAD_DELETED,
    MSG_UPLOAD_FOUND,
};
use crate::errors::ApiError;
use crate::middleware::{require_access, require_auth};
use crate::models::{
    ApiResponse, PageLinks, UploadListQuery, UploadResponse, HEADER_COUNT, HEADER_NEXT_LINK,
    HEADER_OFFSET, HEADER_PREV_LINK, HEADER_SIZE,
};
use crate::services::{FileService, UploadService};
use crate::validators::validate_page_request;

/// List the caller's uploads with pagination and date filters
///
/// Query parameters are validated in order (size, offset, before, after);
/// the first invalid parameter rejects the request before the store is
/// queried. Navigation links for adjacent pages are returned in the
/// `Next_link` / `Prev_link` response headers.
#[utoipa::path(
    get,
    path = "/api/uploads",
    tag = "Uploads",
    params(
        ("size" = Option<String>, Query, description = "Page size, 1-1000 (default: 25)"),
        ("offset" = Option<String>, Query, description = "Row offset, 0-1000 (default: 0)"),
        ("before" = Option<String>, Query, description = "Only uploads created before this timestamp (RFC 3339 or YYYY-MM-DD)"),
        ("after" = Option<String>, Query, description = "Only uploads created after this timestamp (RFC 3339 or YYYY-MM-DD)"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default: Date)"),
        ("sortOrder" = Option<String>, Query, description = "Sort direction (default: Desc)")
    ),
    responses(
        (status = 200, description = "One page of uploads; Count/Size/Offset and link headers carry the page metadata", body = Vec<UploadResponse>),
        (status = 400, description = "Invalid query parameter", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_uploads(
    upload_service: web::Data<UploadService>,
    query: web::Query<UploadListQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;

    let page = validate_page_request(&query)?;
    debug!(
        "Listing uploads for user {} (size={}, offset={})",
        claims.sub, page.size, page.offset
    );

    let (uploads, count) = upload_service.list_uploads(&claims.sub, &page).await?;
    let links = PageLinks::build(page.offset, page.size, uploads.len(), count);

    let mut response = HttpResponse::Ok();
    response
        .insert_header((HEADER_COUNT, count.to_string()))
        .insert_header((HEADER_SIZE, page.size.to_string()))
        .insert_header((HEADER_OFFSET, page.offset.to_string()));

    if let Some(next) = links.next_header(req.path()) {
        response.insert_header((HEADER_NEXT_LINK, next));
    }
    if let Some(prev) = links.prev_header(req.path()) {
        response.insert_header((HEADER_PREV_LINK, prev));
    }

    Ok(response.json(uploads))
}

/// Upload a file
///
/// Accepts a multipart payload with the file under field name `file`.
/// The stored file is recorded as an upload owned by the caller.
#[utoipa::path(
    post,
    path = "/api/uploads",
    tag = "Uploads",
    request_body(content_type = "multipart/form-data", description = "File to upload"),
    responses(
        (status = 201, description = "Upload created", body = UploadResponse),
        (status = 400, description = "Invalid file type or size", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_upload(
    upload_service: web::Data<UploadService>,
    file_service: web::Data<FileService>,
    mut payload: Multipart,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;

    let stored = file_service.save_upload(&claims.sub, &mut payload).await?;
    let upload = upload_service.create_upload(&claims.sub, stored).await?;
    let upload_response: UploadResponse = upload.into();

    info!(
        "User {} uploaded {} ({} bytes)",
        claims.sub, upload_response.original_name, upload_response.size_bytes
    );
    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_UPLOAD_CREATED, upload_response)))
}

/// Get a specific upload by ID
///
/// Owners can fetch their own uploads, admins can fetch any upload.
#[utoipa::path(
    get,
    path = "/api/uploads/{id}",
    tag = "Uploads",
    params(
        ("id" = String, Path, description = "Upload ID")
    ),
    responses(
        (status = 200, description = "Upload found", body = UploadResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Upload not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_upload(
    upload_service: web::Data<UploadService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let upload_id = path.into_inner();
    let claims = require_auth(&req)?;

    let upload = upload_service
        .get_upload_by_id(&upload_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(ERR_UPLOAD_NOT_FOUND.to_string()))?;

    require_access(&claims, &upload.user_id.to_hex(), ERR_NO_PERMISSION_UPLOAD)?;

    let upload_response: UploadResponse = upload.into();
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_UPLOAD_FOUND, upload_response)))
}

/// Delete an upload
///
/// Removes the record and the backing file. Owners can delete their own
/// uploads, admins can delete any upload.
#[utoipa::path(
    delete,
    path = "/api/uploads/{id}",
    tag = "Uploads",
    params(
        ("id" = String, Path, description = "Upload ID")
    ),
    responses(
        (status = 200, description = "Upload deleted"),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Upload not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_upload(
    upload_service: web::Data<UploadService>,
    file_service: web::Data<FileService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let upload_id = path.into_inner();
    let claims = require_auth(&req)?;

    let upload = upload_service
        .get_upload_by_id(&upload_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(ERR_UPLOAD_NOT_FOUND.to_string()))?;

    require_access(&claims, &upload.user_id.to_hex(), ERR_NO_PERMISSION_UPLOAD)?;

    let deleted = upload_service.delete_upload(&upload_id).await?;
    file_service.delete_file(&deleted.url)?;

    info!("User {} deleted upload {}", claims.sub, upload_id);
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_UPLOAD_DELETED)))
}
