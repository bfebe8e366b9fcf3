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
        scheduler::SchedulerDto,
        training::{CreateTrainingDto, TrainingDto, TrainingListItemDto, UpdateTrainingDto},
    },
    server::{
        controller::PageParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            scheduler::Schedule,
            training::{CreateTrainingParams, Training, TrainingPatch, TrainingWithSchedule},
        },
        service::training::TrainingService,
        state::AppState,
    },
};

/// Tag for grouping training endpoints in OpenAPI documentation
pub static TRAINING_TAG: &str = "training";

fn into_list_dtos(trainings: Vec<Training>) -> Vec<TrainingListItemDto> {
    trainings
        .into_iter()
        .map(|training| training.into_list_item_dto())
        .collect()
}

/// List trainings one page at a time.
///
/// Pages start at 1 and are ordered by creation date.
#[utoipa::path(
    get,
    path = "/api/trainings",
    tag = TRAINING_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of trainings", body = Vec<TrainingListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_trainings(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let trainings = TrainingService::new(&state.db)
        .list(params.page_index(), params.page_size)
        .await?;

    Ok((StatusCode::OK, Json(into_list_dtos(trainings))))
}

#[utoipa::path(
    post,
    path = "/api/trainings",
    tag = TRAINING_TAG,
    request_body = CreateTrainingDto,
    responses(
        (status = 201, description = "Successfully created training", body = TrainingDto),
        (status = 400, description = "Invalid training data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_training(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateTrainingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let training = TrainingService::new(&state.db)
        .create(CreateTrainingParams::from_dto(payload, user.id))
        .await?;

    let dto = TrainingWithSchedule {
        training,
        schedule: None,
    }
    .into_dto();

    Ok((StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/trainings/joined",
    tag = TRAINING_TAG,
    responses(
        (status = 200, description = "Trainings joined by the current user", body = Vec<TrainingListItemDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_joined_trainings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    let trainings = TrainingService::new(&state.db).list_joined(user.id).await?;

    Ok((StatusCode::OK, Json(into_list_dtos(trainings))))
}

#[utoipa::path(
    get,
    path = "/api/trainings/by/me",
    tag = TRAINING_TAG,
    responses(
        (status = 200, description = "Trainings created by the current user", body = Vec<TrainingListItemDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_my_trainings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    let trainings = TrainingService::new(&state.db)
        .list_by_creator(user.id)
        .await?;

    Ok((StatusCode::OK, Json(into_list_dtos(trainings))))
}

#[utoipa::path(
    get,
    path = "/api/trainings/by/{user_id}",
    tag = TRAINING_TAG,
    params(("user_id" = Uuid, Path, description = "Creator id")),
    responses(
        (status = 200, description = "Trainings created by the user", body = Vec<TrainingListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_trainings_by_creator(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let trainings = TrainingService::new(&state.db)
        .list_by_creator(user_id)
        .await?;

    Ok((StatusCode::OK, Json(into_list_dtos(trainings))))
}

/// Read a training with its weekly schedule.
#[utoipa::path(
    get,
    path = "/api/trainings/{training_id}",
    tag = TRAINING_TAG,
    params(("training_id" = Uuid, Path, description = "Training id")),
    responses(
        (status = 200, description = "Training", body = TrainingDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_training(
    State(state): State<AppState>,
    Path(training_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let training = TrainingService::new(&state.db)
        .get_with_schedule(training_id)
        .await?;

    Ok((StatusCode::OK, Json(training.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/trainings/{training_id}",
    tag = TRAINING_TAG,
    params(("training_id" = Uuid, Path, description = "Training id")),
    request_body = UpdateTrainingDto,
    responses(
        (status = 200, description = "Updated training", body = TrainingDto),
        (status = 400, description = "Invalid training data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_training(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(training_id): Path<Uuid>,
    payload: Result<Json<UpdateTrainingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let service = TrainingService::new(&state.db);
    service
        .update(training_id, user.id, TrainingPatch::from_dto(payload))
        .await?;
    let training = service.get_with_schedule(training_id).await?;

    Ok((StatusCode::OK, Json(training.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/trainings/{training_id}",
    tag = TRAINING_TAG,
    params(("training_id" = Uuid, Path, description = "Training id")),
    responses(
        (status = 204, description = "Training deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_training(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(training_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    TrainingService::new(&state.db)
        .delete(training_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Replace the weekly schedule of a training.
///
/// Every day is optional. Times use `HH:MM` on 5-minute boundaries and each day's start
/// must come before its end. The previous schedule is discarded.
///
/// # Access Control
/// - Training creator
///
/// # Returns
/// - `200 OK` - Training with its new schedule
/// - `400 Bad Request` - Malformed or out-of-order times
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - Training missing or not owned by the caller
#[utoipa::path(
    post,
    path = "/api/trainings/{training_id}/schedule",
    tag = TRAINING_TAG,
    params(("training_id" = Uuid, Path, description = "Training id")),
    request_body = SchedulerDto,
    responses(
        (status = 200, description = "Schedule replaced", body = TrainingDto),
        (status = 400, description = "Invalid schedule", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn schedule_training(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(training_id): Path<Uuid>,
    payload: Result<Json<SchedulerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;
    let schedule = Schedule::from_dto(payload)?;

    let training = TrainingService::new(&state.db)
        .schedule(training_id, user.id, schedule)
        .await?;

    Ok((StatusCode::OK, Json(training.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/trainings/{training_id}/students",
    tag = TRAINING_TAG,
    params(("training_id" = Uuid, Path, description = "Training id")),
    responses(
        (status = 200, description = "Ids of students who joined the training", body = Vec<Uuid>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_training_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(training_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    let students = TrainingService::new(&state.db)
        .students(training_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(students)))
}

#[utoipa::path(
    post,
    path = "/api/trainings/{training_id}/join",
    tag = TRAINING_TAG,
    params(("training_id" = Uuid, Path, description = "Training id")),
    responses(
        (status = 204, description = "Joined training"),
        (status = 400, description = "Own training or already joined", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn join_training(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(training_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    TrainingService::new(&state.db)
        .join(training_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/trainings/{training_id}/leave",
    tag = TRAINING_TAG,
    params(("training_id" = Uuid, Path, description = "Training id")),
    responses(
        (status = 204, description = "Left training"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Training not found or not joined", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn leave_training(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(training_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    TrainingService::new(&state.db)
        .leave(training_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
