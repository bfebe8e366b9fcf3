//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They own the rules that
//! span more than one table:
//!
//! - **Syllabus Ledger** (`syllabus`) - Dense 1..N topic ordering per course
//! - **Participation Registry** (`participation`) - Student enrollment in courses and trainings
//! - **Catalog** (`course`, `topic`, `training`) - Creator-owned offerings and their cascades
//! - **User Projection** (`user`) - Local copy of identity service accounts
//! - **Discussion** (`discussion`) - Telegram threads for free courses

pub mod course;
pub mod discussion;
pub mod participation;
pub mod syllabus;
pub mod topic;
pub mod training;
pub mod user;

#[cfg(test)]
mod test;
