//! Exercise log service
//!
//! Owns the input normalization around the log: lenient date parsing with a
//! fallback to the current date, and query filters that ignore values they
//! cannot parse instead of rejecting the request.

use crate::error::ApiError;
use crate::repositories::{ExerciseRecord, ExerciseRepository, NewExercise, UserRecord};
use crate::services::user::UserService;
use crate::types::LogQuery;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

/// A newly logged exercise joined with its owner's identity
#[derive(Debug, Clone)]
pub struct LoggedExercise {
    pub user: UserRecord,
    pub entry: ExerciseRecord,
}

/// A user's filtered exercise log
#[derive(Debug, Clone)]
pub struct ExerciseLog {
    pub user: UserRecord,
    pub entries: Vec<ExerciseRecord>,
}

/// Parsed query filters for the log endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<i64>,
}

impl LogFilter {
    /// Build a filter from raw query parameters
    ///
    /// Unparsable dates and non-positive or non-numeric limits are ignored,
    /// as if the parameter had not been sent.
    pub fn from_query(query: &LogQuery) -> Self {
        Self {
            from: query.from.as_deref().and_then(parse_calendar_date),
            to: query.to.as_deref().and_then(parse_calendar_date),
            limit: query
                .limit
                .as_deref()
                .and_then(|raw| raw.trim().parse::<i64>().ok())
                .filter(|n| *n > 0),
        }
    }
}

/// Exercise log service
pub struct ExerciseService;

impl ExerciseService {
    /// Log an exercise against an existing user
    pub async fn add_exercise(
        pool: &PgPool,
        raw_user_id: &str,
        description: String,
        duration: i32,
        date: Option<&str>,
    ) -> Result<LoggedExercise, ApiError> {
        let user = UserService::require_user(pool, raw_user_id).await?;

        let entry = ExerciseRepository::create(
            pool,
            NewExercise {
                user_id: user.id,
                description,
                duration,
                date: normalize_entry_date(date),
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(LoggedExercise { user, entry })
    }

    /// Retrieve a user's exercise log with optional date bounds and limit
    pub async fn get_log(
        pool: &PgPool,
        raw_user_id: &str,
        query: &LogQuery,
    ) -> Result<ExerciseLog, ApiError> {
        let user = UserService::require_user(pool, raw_user_id).await?;
        let filter = LogFilter::from_query(query);

        let entries = ExerciseRepository::find_by_user(
            pool,
            user.id,
            filter.from,
            filter.to,
            filter.limit,
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(ExerciseLog { user, entries })
    }
}

/// Parse a calendar date from its common input representations
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp, or `MM/DD/YYYY`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%m/%d/%Y") {
        return Some(date);
    }

    None
}

/// Normalize an entry date: absent or unparsable input becomes today
///
/// The silent fallback is deliberate; unparsable dates are not errors.
pub fn normalize_entry_date(raw: Option<&str>) -> NaiveDate {
    raw.and_then(parse_calendar_date)
        .unwrap_or_else(|| Utc::now().date_naive())
}
