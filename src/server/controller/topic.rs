use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        topic::{CreateTopicDto, TopicDto, UpdateTopicDto},
    },
    server::{
        controller::OffsetParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::topic::{CreateTopicParams, TopicPatch},
        service::topic::TopicService,
        state::AppState,
    },
};

/// Tag for grouping topic endpoints in OpenAPI documentation
pub static TOPIC_TAG: &str = "topic";

#[utoipa::path(
    get,
    path = "/api/topics",
    tag = TOPIC_TAG,
    params(OffsetParams),
    responses(
        (status = 200, description = "Page of topics", body = Vec<TopicDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_topics(
    State(state): State<AppState>,
    Query(params): Query<OffsetParams>,
) -> Result<impl IntoResponse, AppError> {
    let topics = TopicService::new(&state.db)
        .list(params.offset, params.limit)
        .await?;
    let dtos: Vec<TopicDto> = topics.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new topic owned by the authenticated user.
///
/// # Returns
/// - `201 Created` - Created topic
/// - `400 Bad Request` - Invalid topic data
/// - `401 Unauthorized` - Missing or invalid credentials
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = TOPIC_TAG,
    request_body = CreateTopicDto,
    responses(
        (status = 201, description = "Successfully created topic", body = TopicDto),
        (status = 400, description = "Invalid topic data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_topic(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateTopicDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let topic = TopicService::new(&state.db)
        .create(CreateTopicParams::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(topic.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}",
    tag = TOPIC_TAG,
    params(("topic_id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Topic", body = TopicDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let topic = TopicService::new(&state.db).get(topic_id).await?;

    Ok((StatusCode::OK, Json(topic.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/topics/{topic_id}",
    tag = TOPIC_TAG,
    params(("topic_id" = Uuid, Path, description = "Topic id")),
    request_body = UpdateTopicDto,
    responses(
        (status = 200, description = "Updated topic", body = TopicDto),
        (status = 400, description = "Invalid topic data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_topic(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(topic_id): Path<Uuid>,
    payload: Result<Json<UpdateTopicDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let topic = TopicService::new(&state.db)
        .update(topic_id, user.id, TopicPatch::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(topic.into_dto())))
}

/// Delete a topic.
///
/// The topic is first removed from every course syllabus it belongs to, so the
/// remaining topics of each course keep contiguous positions.
///
/// # Access Control
/// - Topic creator
///
/// # Returns
/// - `204 No Content` - Topic deleted
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - Topic missing or not owned by the caller
#[utoipa::path(
    delete,
    path = "/api/topics/{topic_id}",
    tag = TOPIC_TAG,
    params(("topic_id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 204, description = "Topic deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_topic(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(topic_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    TopicService::new(&state.db)
        .delete(topic_id, user.id, &state.syllabus_locks)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
