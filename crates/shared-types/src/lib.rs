pub mod assignment;
pub mod course;
pub mod error;
pub mod role;
pub mod user;

pub use assignment::*;
pub use course::*;
pub use error::*;
pub use role::*;
pub use user::*;
