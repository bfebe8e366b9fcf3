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
        course::{CourseDto, CourseListItemDto, CreateCourseDto, UpdateCourseDto},
        syllabus::{MoveTopicDto, SyllabusEntryDto, SyllabusTopicDto},
    },
    server::{
        controller::OffsetParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::course::{CoursePatch, CreateCourseParams},
        service::{
            course::CourseService, discussion::spawn_course_thread, syllabus::SyllabusLedger,
        },
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// List courses.
///
/// Public endpoint returning courses ordered by creation date.
///
/// # Returns
/// - `200 OK` - Page of courses
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    params(OffsetParams),
    responses(
        (status = 200, description = "Page of courses", body = Vec<CourseListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<OffsetParams>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db)
        .list(params.offset, params.limit)
        .await?;

    let dtos: Vec<CourseListItemDto> = courses
        .into_iter()
        .map(|course| course.into_list_item_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new course.
///
/// The authenticated user becomes the creator. Creating a free course also opens a
/// discussion thread in the Telegram free-course group in the background; the response
/// does not wait for it.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Created course
/// - `400 Bad Request` - Invalid course data
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `503 Service Unavailable` - Identity service unreachable
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 503, description = "Identity service unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateCourseDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let course = CourseService::new(&state.db)
        .create(CreateCourseParams::from_dto(payload, user.id))
        .await?;

    if let Some(bot) = &state.bot {
        spawn_course_thread(state.db.clone(), bot.clone(), &course, user.name.clone());
    }

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/courses/joined",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Courses joined by the current user", body = Vec<CourseListItemDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_joined_courses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    let courses = CourseService::new(&state.db).list_joined(user.id).await?;
    let dtos: Vec<CourseListItemDto> = courses
        .into_iter()
        .map(|course| course.into_list_item_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/courses/by/me",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Courses created by the current user", body = Vec<CourseListItemDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_my_courses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    let courses = CourseService::new(&state.db)
        .list_by_creator(user.id)
        .await?;
    let dtos: Vec<CourseListItemDto> = courses
        .into_iter()
        .map(|course| course.into_list_item_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/courses/by/{user_id}",
    tag = COURSE_TAG,
    params(("user_id" = Uuid, Path, description = "Creator id")),
    responses(
        (status = 200, description = "Courses created by the user", body = Vec<CourseListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_courses_by_creator(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db)
        .list_by_creator(user_id)
        .await?;
    let dtos: Vec<CourseListItemDto> = courses
        .into_iter()
        .map(|course| course.into_list_item_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db).get(course_id).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Update a course.
///
/// Only fields present in the body are changed. Courses the caller did not create are
/// reported as not found.
///
/// # Access Control
/// - Course creator
///
/// # Returns
/// - `200 OK` - Updated course
/// - `400 Bad Request` - Invalid or unknown fields
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - Course missing or not owned by the caller
#[utoipa::path(
    patch,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(("course_id" = Uuid, Path, description = "Course id")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Updated course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<Uuid>,
    payload: Result<Json<UpdateCourseDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let course = CourseService::new(&state.db)
        .update(course_id, user.id, CoursePatch::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Delete a course together with its syllabus and participants.
///
/// # Access Control
/// - Course creator
///
/// # Returns
/// - `204 No Content` - Course deleted
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - Course missing or not owned by the caller
#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    CourseService::new(&state.db)
        .delete(course_id, user.id, &state.syllabus_locks)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Ordered syllabus of a course.
///
/// Returns the course's topics sorted by position, positions running from 1 without gaps.
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/topics",
    tag = COURSE_TAG,
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Syllabus ordered by position", body = Vec<SyllabusTopicDto>),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_course_topics(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    CourseService::new(&state.db).get(course_id).await?;

    let topics = SyllabusLedger::new(&state.db, &state.syllabus_locks)
        .list(course_id)
        .await?;
    let dtos: Vec<SyllabusTopicDto> = topics.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Append a topic to the end of a course syllabus.
///
/// # Access Control
/// - Course creator
///
/// # Returns
/// - `201 Created` - Topic appended at the last position
/// - `400 Bad Request` - Topic already in the syllabus
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - Course or topic not found
#[utoipa::path(
    put,
    path = "/api/courses/{course_id}/topics/{topic_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = Uuid, Path, description = "Course id"),
        ("topic_id" = Uuid, Path, description = "Topic id")
    ),
    responses(
        (status = 201, description = "Topic appended", body = SyllabusEntryDto),
        (status = 400, description = "Topic already in syllabus", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course or topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_course_topic(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, topic_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    CourseService::new(&state.db)
        .get_owned(course_id, user.id)
        .await?;

    let entry = SyllabusLedger::new(&state.db, &state.syllabus_locks)
        .append(course_id, topic_id)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// Move a topic to a new position in the syllabus.
///
/// Positions outside `1..=N` are clamped. The other topics shift to keep the positions
/// contiguous.
///
/// # Access Control
/// - Course creator
///
/// # Returns
/// - `200 OK` - Topic's final position
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - Course not found or topic not in syllabus
#[utoipa::path(
    patch,
    path = "/api/courses/{course_id}/topics/{topic_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = Uuid, Path, description = "Course id"),
        ("topic_id" = Uuid, Path, description = "Topic id")
    ),
    request_body = MoveTopicDto,
    responses(
        (status = 200, description = "Topic moved", body = SyllabusEntryDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found or topic not in syllabus", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn move_course_topic(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, topic_id)): Path<(Uuid, Uuid)>,
    payload: Result<Json<MoveTopicDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    CourseService::new(&state.db)
        .get_owned(course_id, user.id)
        .await?;

    let entry = SyllabusLedger::new(&state.db, &state.syllabus_locks)
        .move_to(course_id, topic_id, payload.position)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}/topics/{topic_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = Uuid, Path, description = "Course id"),
        ("topic_id" = Uuid, Path, description = "Topic id")
    ),
    responses(
        (status = 204, description = "Topic removed from syllabus"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found or topic not in syllabus", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_course_topic(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, topic_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    CourseService::new(&state.db)
        .get_owned(course_id, user.id)
        .await?;

    SyllabusLedger::new(&state.db, &state.syllabus_locks)
        .remove(course_id, topic_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/students",
    tag = COURSE_TAG,
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Ids of students who joined the course", body = Vec<Uuid>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_course_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    let students = CourseService::new(&state.db)
        .students(course_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(students)))
}

/// Join a course as a student.
///
/// # Returns
/// - `204 No Content` - Joined
/// - `400 Bad Request` - Own course or already joined
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - Course not found
#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/join",
    tag = COURSE_TAG,
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 204, description = "Joined course"),
        (status = 400, description = "Own course or already joined", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn join_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    CourseService::new(&state.db)
        .join(course_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/leave",
    tag = COURSE_TAG,
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 204, description = "Left course"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found or not joined", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn leave_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require()
        .await?;

    CourseService::new(&state.db)
        .leave(course_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
