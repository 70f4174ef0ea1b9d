//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the HTTP layer.

pub mod exercise;
pub mod user;

pub use exercise::ExerciseService;
pub use user::UserService;
