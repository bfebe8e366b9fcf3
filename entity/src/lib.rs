//! SeaORM entity definitions for the course marketplace schema.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude` module
//! re-exports every entity under its table-style name (`Course`, `Syllabus`, ...) so
//! callers can write `entity::prelude::Course::find()`.

pub mod prelude;

pub mod course;
pub mod course_participation;
pub mod scheduler;
pub mod syllabus;
pub mod topic;
pub mod training;
pub mod training_participation;
pub mod user;
