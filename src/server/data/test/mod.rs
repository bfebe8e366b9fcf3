mod course;
mod participation;
mod scheduler;
mod syllabus;
mod user;
