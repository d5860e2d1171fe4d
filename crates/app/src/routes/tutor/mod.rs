pub mod analytics;
pub mod assignments;
pub mod courses;
pub mod create_course;
pub mod live_classes;
pub mod students;
