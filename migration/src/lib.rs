pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_course_table;
mod m20250301_000003_create_topic_table;
mod m20250301_000004_create_syllabus_table;
mod m20250301_000005_create_course_participation_table;
mod m20250301_000006_create_training_table;
mod m20250301_000007_create_training_participation_table;
mod m20250301_000008_create_scheduler_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_course_table::Migration),
            Box::new(m20250301_000003_create_topic_table::Migration),
            Box::new(m20250301_000004_create_syllabus_table::Migration),
            Box::new(m20250301_000005_create_course_participation_table::Migration),
            Box::new(m20250301_000006_create_training_table::Migration),
            Box::new(m20250301_000007_create_training_participation_table::Migration),
            Box::new(m20250301_000008_create_scheduler_table::Migration),
        ]
    }
}
