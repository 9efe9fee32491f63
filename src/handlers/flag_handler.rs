//! Feature flag handler resolving tag-based flags for the caller.

use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;

use crate::constants::MSG_FLAGS_RESOLVED;
use crate::errors::ApiError;
use crate::middleware::require_auth;
use crate::models::{ApiResponse, FeatureFlagState};
use crate::services::FlagService;

/// Get the caller's feature flags
///
/// Every known feature is returned with an enabled boolean derived from
/// the caller's account tags.
#[utoipa::path(
    get,
    path = "/api/flags",
    tag = "Feature Flags",
    responses(
        (status = 200, description = "Resolved feature flags", body = Vec<FeatureFlagState>),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_feature_flags(
    flag_service: web::Data<FlagService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;

    debug!("Resolving feature flags for user {}", claims.sub);

    let flags = flag_service.flags_for_user(&claims.sub).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_FLAGS_RESOLVED, flags)))
}
