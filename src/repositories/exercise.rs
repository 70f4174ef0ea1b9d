//! Exercise entry repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Exercise entry record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i32,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an exercise entry
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: Uuid,
    pub description: String,
    pub duration: i32,
    pub date: NaiveDate,
}

/// Exercise entry repository
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Create a new exercise entry
    pub async fn create(pool: &PgPool, input: NewExercise) -> Result<ExerciseRecord> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO exercises (user_id, description, duration, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, description, duration, date, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.description)
        .bind(input.duration)
        .bind(input.date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get a user's exercise entries with optional date bounds and limit
    ///
    /// Bounds are inclusive and independently optional. There is no ORDER BY:
    /// a limit truncates the first N rows in storage-return order, which is
    /// not guaranteed chronological.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: Uuid,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<i64>,
    ) -> Result<Vec<ExerciseRecord>> {
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, user_id, description, duration, date, created_at
            FROM exercises
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            LIMIT $4
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see tests/exercise_integration_test.rs
}
