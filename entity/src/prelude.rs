pub use super::course::Entity as Course;
pub use super::course_participation::Entity as CourseParticipation;
pub use super::scheduler::Entity as Scheduler;
pub use super::syllabus::Entity as Syllabus;
pub use super::topic::Entity as Topic;
pub use super::training::Entity as Training;
pub use super::training_participation::Entity as TrainingParticipation;
pub use super::user::Entity as User;
