//! Domain models and operation-specific parameter types.
//!
//! Domain models are converted from entities at the repository boundary and into DTOs
//! at the controller boundary. Parameter and patch types carry validated input from
//! controllers into services.

pub mod course;
pub mod participation;
pub mod scheduler;
pub mod syllabus;
pub mod topic;
pub mod training;
pub mod user;
