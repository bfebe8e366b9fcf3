//! Artadas Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the course
//! marketplace backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas, plus factories for seeding rows.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn appends_topic() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (creator, course) = factory::helpers::create_course_with_creator(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
