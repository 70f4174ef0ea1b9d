//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod exercise;
pub mod user;

pub use exercise::{ExerciseRecord, ExerciseRepository, NewExercise};
pub use user::{UserRecord, UserRepository};
