//! Discussion threads for free courses.

use sea_orm::DatabaseConnection;

use crate::server::{
    bot::telegram::TelegramBot, data::course::CourseRepository, model::course::Course,
};

/// Spawns a task opening the Telegram thread of a free course and storing its id.
///
/// Paid courses are ignored. Failures are logged only.
pub fn spawn_course_thread(
    db: DatabaseConnection,
    bot: TelegramBot,
    course: &Course,
    creator_name: String,
) -> Option<tokio::task::JoinHandle<()>> {
    if !course.is_free() {
        return None;
    }

    let course_id = course.id;
    let course_name = course.name.clone();

    Some(tokio::spawn(async move {
        let thread_id = match bot.open_course_thread(&course_name, &creator_name).await {
            Ok(thread_id) => thread_id,
            Err(e) => {
                tracing::error!(
                    "Failed to create discussion thread for course {}: {}",
                    course_id,
                    e
                );
                return;
            }
        };

        if let Err(e) = CourseRepository::new(&db)
            .set_tg_group_id(course_id, thread_id.to_string())
            .await
        {
            tracing::error!(
                "Failed to store discussion thread {} for course {}: {}",
                thread_id,
                course_id,
                e
            );
            return;
        }

        tracing::info!(
            "Opened discussion thread {} for course {}",
            thread_id,
            course_id
        );
    }))
}
