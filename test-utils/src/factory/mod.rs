//! Factory methods for creating test data.
//!
//! Each factory inserts a row with sensible defaults and returns the SeaORM model, so tests
//! only spell out the fields they care about. Factories do not create their dependencies
//! implicitly; use `helpers` when a full parent chain is needed.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let course = factory::course::create_course(&db, user.id).await?;
//! let topic = factory::topic::create_topic(&db, user.id).await?;
//! factory::syllabus::link(&db, course.id, topic.id, 1).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let course = factory::course::CourseFactory::new(&db, user.id)
//!     .name("Rust for beginners")
//!     .price(0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - User projections
//! - `course` - Courses
//! - `topic` - Topics
//! - `syllabus` - Course/topic links with explicit sequence
//! - `training` - Trainings
//! - `participation` - Course and training participation rows
//! - `helpers` - Shared counters and parent-chain helpers

pub mod course;
pub mod helpers;
pub mod participation;
pub mod syllabus;
pub mod topic;
pub mod training;
pub mod user;

pub use course::create_course;
pub use topic::create_topic;
pub use training::create_training;
pub use user::create_user;
