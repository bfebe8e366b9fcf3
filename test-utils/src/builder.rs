use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Course, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Course)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign keys
    /// after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for course, topic and syllabus operations.
    ///
    /// Adds in dependency order:
    /// - User
    /// - Course
    /// - Topic
    /// - Syllabus
    /// - CourseParticipation
    pub fn with_course_tables(self) -> Self {
        self.with_table(User)
            .with_table(Course)
            .with_table(Topic)
            .with_table(Syllabus)
            .with_table(CourseParticipation)
    }

    /// Adds the tables needed for training operations.
    ///
    /// Adds in dependency order:
    /// - User
    /// - Training
    /// - TrainingParticipation
    /// - Scheduler
    pub fn with_training_tables(self) -> Self {
        self.with_table(User)
            .with_table(Training)
            .with_table(TrainingParticipation)
            .with_table(Scheduler)
    }

    /// Adds every table of the schema.
    ///
    /// Equivalent to `with_course_tables()` followed by the training tables.
    pub fn with_catalog_tables(self) -> Self {
        self.with_course_tables()
            .with_table(Training)
            .with_table(TrainingParticipation)
            .with_table(Scheduler)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
