//! User handlers for profile access, password changes, and tag administration.

use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, info, warn};
use validator::Validate;

use crate::constants::{
    ERR_CHANGE_OWN_PASSWORD_ONLY, ERR_ONLY_ADMINS_TAGS, ERR_USER_NOT_FOUND, MSG_PASSWORD_CHANGED,
    MSG_TAGS_UPDATED, MSG_USER_PROFILE_RETRIEVED,
};
use crate::errors::ApiError;
use crate::middleware::{require_admin, require_auth};
use crate::models::{ApiResponse, ChangePasswordRequest, UpdateTagsRequest, UserResponse};
use crate::services::UserService;
use crate::validators::validation_errors_to_api_error;

/// Get the currently authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_current_user(
    user_service: web::Data<UserService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;

    debug!("Fetching current user with id: {}", claims.sub);

    let user = user_service
        .get_user_by_id(&claims.sub)
        .await?
        .ok_or_else(|| {
            warn!("Current user not found with id: {}", claims.sub);
            ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
        })?;

    let user_response: UserResponse = user.into();
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_USER_PROFILE_RETRIEVED,
        user_response,
    )))
}

/// Change a user's password
///
/// Users can only change their own password by providing their current password.
#[utoipa::path(
    patch,
    path = "/api/users/{id}/password",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed successfully"),
        (status = 400, description = "Validation error or wrong current password", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn change_password(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<ChangePasswordRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let claims = require_auth(&req)?;

    // Password changes always require knowing the current password,
    // so users (including admins) can only change their own password
    if claims.sub != user_id {
        warn!(
            "User {} (role: {}) attempted to change password of user {}",
            claims.sub, claims.role, user_id
        );
        return Err(ApiError::Unauthorized(
            ERR_CHANGE_OWN_PASSWORD_ONLY.to_string(),
        ));
    }

    // Validate input
    body.validate().map_err(validation_errors_to_api_error)?;

    user_service
        .change_password(&user_id, body.into_inner())
        .await?;

    info!("Successfully changed password for user: {}", user_id);
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_PASSWORD_CHANGED)))
}

/// Replace a user's account tags (admin only)
///
/// Tags gate feature flags; only admins can grant or revoke them.
#[utoipa::path(
    patch,
    path = "/api/users/{id}/tags",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateTagsRequest,
    responses(
        (status = 200, description = "Tags updated", body = UserResponse),
        (status = 400, description = "Invalid tag set", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_tags(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<UpdateTagsRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let claims = require_auth(&req)?;

    require_admin(&claims, ERR_ONLY_ADMINS_TAGS)?;

    info!(
        "Admin {} updating tags of user {} to {:?}",
        claims.sub, user_id, body.tags
    );

    let updated_user = user_service.update_tags(&user_id, &body.tags).await?;
    let user_response: UserResponse = updated_user.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_TAGS_UPDATED, user_response)))
}
