//! Exercise log API routes

use crate::error::ApiError;
use crate::extract::JsonOrForm;
use crate::services::exercise::ExerciseService;
use crate::state::AppState;
use crate::types::{
    format_date, CreateExerciseRequest, ExerciseResponse, LogEntry, LogQuery, LogResponse,
};
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

/// Create exercise log routes
pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:id/exercises", post(add_exercise))
        .route("/users/:id/logs", get(get_log))
}

/// POST /api/users/:id/exercises - Log an exercise against a user
async fn add_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrForm(req): JsonOrForm<CreateExerciseRequest>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let logged = ExerciseService::add_exercise(
        state.db(),
        &id,
        req.description,
        req.duration,
        req.date.as_deref(),
    )
    .await?;

    Ok(Json(ExerciseResponse {
        id: logged.user.id.to_string(),
        username: logged.user.username,
        description: logged.entry.description,
        duration: logged.entry.duration,
        date: format_date(logged.entry.date),
    }))
}

/// GET /api/users/:id/logs - Get a user's exercise log
async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogResponse>, ApiError> {
    let log = ExerciseService::get_log(state.db(), &id, &query).await?;

    let entries: Vec<LogEntry> = log
        .entries
        .into_iter()
        .map(|e| LogEntry {
            description: e.description,
            duration: e.duration,
            date: format_date(e.date),
        })
        .collect();

    Ok(Json(LogResponse {
        id: log.user.id.to_string(),
        username: log.user.username,
        count: entries.len(),
        log: entries,
    }))
}
