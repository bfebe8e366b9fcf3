//! Request and response DTOs shared by the HTTP API and its OpenAPI document.

pub mod api;
pub mod course;
pub mod scheduler;
pub mod syllabus;
pub mod topic;
pub mod training;
pub mod user;
