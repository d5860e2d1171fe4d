pub mod analytics;
pub mod courses;
pub mod dashboard;
pub mod settings;
pub mod students;
pub mod subscriptions;
pub mod tutors;
pub mod users;
