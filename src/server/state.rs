//! Application state shared across all request handlers.
//!
//! The state is built once in `main` and cloned into every handler through Axum's state
//! extraction. All fields are cheap to clone: the database connection, gateway and lock
//! registry share their internals through reference counting.

use sea_orm::DatabaseConnection;

use crate::server::{
    bot::telegram::TelegramBot, gateway::AuthGateway, service::syllabus::SyllabusLocks,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Identity service gateway used to authenticate every protected request.
    pub auth: AuthGateway,

    /// Telegram client for free-course discussion threads, absent when not configured.
    pub bot: Option<TelegramBot>,

    /// Per-course mutexes serializing syllabus mutations.
    pub syllabus_locks: SyllabusLocks,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        auth: AuthGateway,
        bot: Option<TelegramBot>,
        syllabus_locks: SyllabusLocks,
    ) -> Self {
        Self {
            db,
            auth,
            bot,
            syllabus_locks,
        }
    }
}
