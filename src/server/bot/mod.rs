//! Telegram Bot API integration.
//!
//! The service does not run a bot of its own. It only calls the Bot API to open a forum
//! topic for every free course in the free-students group, where students of that course
//! discuss it. Calls run in background tasks spawned after the course is stored, and their
//! failures are logged without affecting the HTTP response.

pub mod telegram;
