use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        course::{CourseDto, CourseListItemDto, CreateCourseDto, UpdateCourseDto},
        scheduler::{SchedulerDto, TimeRangeDto},
        syllabus::{MoveTopicDto, SyllabusEntryDto, SyllabusTopicDto},
        topic::{CreateTopicDto, TopicDto, UpdateTopicDto},
        training::{CreateTrainingDto, TrainingDto, TrainingListItemDto, UpdateTrainingDto},
        user::UserDto,
    },
    server::{
        controller::{
            course, topic, training, user,
        },
        state::AppState,
    },
};

/// Registers the bearer token scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some(
                        "Access token issued by the identity service. Bots send `Bot <telegram id>` with the X-Internal-Key header instead.",
                    ))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Artadas API",
        description = "Course marketplace backend: courses, topics, syllabi, trainings and participation."
    ),
    paths(
        course::list_courses,
        course::create_course,
        course::list_joined_courses,
        course::list_my_courses,
        course::list_courses_by_creator,
        course::get_course,
        course::update_course,
        course::delete_course,
        course::list_course_topics,
        course::add_course_topic,
        course::move_course_topic,
        course::remove_course_topic,
        course::list_course_students,
        course::join_course,
        course::leave_course,
        topic::list_topics,
        topic::create_topic,
        topic::get_topic,
        topic::update_topic,
        topic::delete_topic,
        training::list_trainings,
        training::create_training,
        training::list_joined_trainings,
        training::list_my_trainings,
        training::list_trainings_by_creator,
        training::get_training,
        training::update_training,
        training::delete_training,
        training::schedule_training,
        training::list_training_students,
        training::join_training,
        training::leave_training,
        user::get_me,
        user::list_users,
        user::get_user,
    ),
    components(schemas(
        ErrorDto,
        CourseDto,
        CourseListItemDto,
        CreateCourseDto,
        UpdateCourseDto,
        SyllabusTopicDto,
        SyllabusEntryDto,
        MoveTopicDto,
        TopicDto,
        CreateTopicDto,
        UpdateTopicDto,
        TrainingDto,
        TrainingListItemDto,
        CreateTrainingDto,
        UpdateTrainingDto,
        SchedulerDto,
        TimeRangeDto,
        UserDto,
    )),
    tags(
        (name = "course", description = "Courses, syllabi and course participation"),
        (name = "topic", description = "Reusable course topics"),
        (name = "training", description = "Trainings, weekly schedules and participation"),
        (name = "user", description = "User projections of identity service accounts"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let api = Router::new()
        .route(
            "/courses",
            get(course::list_courses).post(course::create_course),
        )
        .route("/courses/joined", get(course::list_joined_courses))
        .route("/courses/by/me", get(course::list_my_courses))
        .route("/courses/by/{user_id}", get(course::list_courses_by_creator))
        .route(
            "/courses/{course_id}",
            get(course::get_course)
                .patch(course::update_course)
                .delete(course::delete_course),
        )
        .route("/courses/{course_id}/topics", get(course::list_course_topics))
        .route(
            "/courses/{course_id}/topics/{topic_id}",
            put(course::add_course_topic)
                .patch(course::move_course_topic)
                .delete(course::remove_course_topic),
        )
        .route(
            "/courses/{course_id}/students",
            get(course::list_course_students),
        )
        .route("/courses/{course_id}/join", post(course::join_course))
        .route("/courses/{course_id}/leave", post(course::leave_course))
        .route("/topics", get(topic::list_topics).post(topic::create_topic))
        .route(
            "/topics/{topic_id}",
            get(topic::get_topic)
                .patch(topic::update_topic)
                .delete(topic::delete_topic),
        )
        .route(
            "/trainings",
            get(training::list_trainings).post(training::create_training),
        )
        .route("/trainings/joined", get(training::list_joined_trainings))
        .route("/trainings/by/me", get(training::list_my_trainings))
        .route(
            "/trainings/by/{user_id}",
            get(training::list_trainings_by_creator),
        )
        .route(
            "/trainings/{training_id}",
            get(training::get_training)
                .patch(training::update_training)
                .delete(training::delete_training),
        )
        .route(
            "/trainings/{training_id}/schedule",
            post(training::schedule_training),
        )
        .route(
            "/trainings/{training_id}/students",
            get(training::list_training_students),
        )
        .route("/trainings/{training_id}/join", post(training::join_training))
        .route(
            "/trainings/{training_id}/leave",
            post(training::leave_training),
        )
        .route("/users", get(user::list_users))
        .route("/users/me", get(user::get_me))
        .route("/users/{user_id}", get(user::get_user));

    Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
