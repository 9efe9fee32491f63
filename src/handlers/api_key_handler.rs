//! API key handlers for issuance, listing, and revocation.

use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use validator::Validate;

use crate::constants::{
    ERR_API_KEY_NOT_FOUND, ERR_NO_PERMISSION_API_KEY, MSG_API_KEYS_LISTED, MSG_API_KEY_CREATED,
    MSG_API_KEY_REVOKED,
};
use crate::errors::ApiError;
use crate::middleware::{require_access, require_auth};
use crate::models::{ApiKeyResponse, ApiResponse, CreateApiKeyRequest, CreatedApiKeyResponse};
use crate::services::ApiKeyService;
use crate::validators::validation_errors_to_api_error;

/// Issue a new API key
///
/// The plaintext key is returned exactly once in this response; only a
/// hash and a display prefix are stored server-side.
#[utoipa::path(
    post,
    path = "/api/keys",
    tag = "API Keys",
    request_body = CreateApiKeyRequest,
    responses(
        (status = 201, description = "API key created", body = CreatedApiKeyResponse),
        (status = 400, description = "Validation error or key limit reached", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_api_key(
    api_key_service: web::Data<ApiKeyService>,
    body: web::Json<CreateApiKeyRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;

    // Validate input
    body.validate().map_err(validation_errors_to_api_error)?;

    let created = api_key_service
        .create_key(&claims.sub, body.into_inner().label)
        .await?;

    info!("User {} issued API key {}", claims.sub, created.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_API_KEY_CREATED, created)))
}

/// List the caller's API keys
///
/// Returns key metadata only; secrets are never included.
#[utoipa::path(
    get,
    path = "/api/keys",
    tag = "API Keys",
    responses(
        (status = 200, description = "List of API keys", body = Vec<ApiKeyResponse>),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_api_keys(
    api_key_service: web::Data<ApiKeyService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;

    let keys = api_key_service.list_keys(&claims.sub).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_API_KEYS_LISTED, keys)))
}

/// Revoke an API key
///
/// Owners can revoke their own keys, admins can revoke any key. Revoked
/// keys are kept for auditability.
#[utoipa::path(
    delete,
    path = "/api/keys/{id}",
    tag = "API Keys",
    params(
        ("id" = String, Path, description = "API key ID")
    ),
    responses(
        (status = 200, description = "API key revoked"),
        (status = 400, description = "Key already revoked", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "API key not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn revoke_api_key(
    api_key_service: web::Data<ApiKeyService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let key_id = path.into_inner();
    let claims = require_auth(&req)?;

    let key = api_key_service
        .get_key_by_id(&key_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(ERR_API_KEY_NOT_FOUND.to_string()))?;

    require_access(&claims, &key.user_id.to_hex(), ERR_NO_PERMISSION_API_KEY)?;

    api_key_service.revoke_key(&key_id).await?;

    info!("User {} revoked API key {}", claims.sub, key_id);
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_API_KEY_REVOKED)))
}
