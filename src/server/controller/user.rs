use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::OffsetParams, error::AppError, middleware::auth::AuthGuard,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Current user.
///
/// Resolves the caller's identity through the identity service and returns the local
/// projection, refreshed from that identity.
///
/// # Returns
/// - `200 OK` - Authenticated user
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `503 Service Unavailable` - Identity service unreachable
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Authenticated user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 503, description = "Identity service unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(OffsetParams),
    responses(
        (status = 200, description = "Page of users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<OffsetParams>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db)
        .list(params.offset, params.limit)
        .await?;
    let dtos: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
