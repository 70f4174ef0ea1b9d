//! API request and response types

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Output format for calendar dates, e.g. "Sun Jan 01 2023"
pub const DATE_DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Format a calendar date for API responses
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

/// Request body for creating a user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
}

/// User projection returned by the directory endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub id: String,
}

/// Request body for logging an exercise
///
/// `duration` accepts either a JSON number or a numeric string, because
/// form-encoded bodies always carry strings. `date` stays raw here; the
/// service layer owns its lenient parsing and fallback.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExerciseRequest {
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub duration: i32,
    #[serde(default)]
    pub date: Option<String>,
}

/// Response for a newly logged exercise: the user's identity joined
/// with the new entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
}

/// Query parameters for the exercise log endpoint
///
/// All fields are raw strings: unparsable values are ignored rather than
/// rejected, so deserialization must never fail on odd input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// One entry in an exercise log response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

/// Response for the exercise log endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogResponse {
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

/// Coerce a duration value to an integer
///
/// Accepts integers, floats (truncated toward zero) and numeric strings.
/// Non-numeric input is a deserialization error; an integer column cannot
/// hold the NaN a looser coercion would produce.
fn deserialize_duration<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Int(n) => n,
        Raw::Float(f) => f as i64,
        Raw::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .or_else(|_| s.parse::<f64>().map(|f| f as i64))
                .map_err(|_| serde::de::Error::custom("duration must be a number"))?
        }
    };

    i32::try_from(value).map_err(|_| serde::de::Error::custom("duration out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duration_of(json: &str) -> Result<i32, serde_json::Error> {
        serde_json::from_str::<CreateExerciseRequest>(json).map(|req| req.duration)
    }

    #[test]
    fn test_duration_from_number() {
        assert_eq!(duration_of(r#"{"description":"test run","duration":30}"#).unwrap(), 30);
    }

    #[test]
    fn test_duration_from_numeric_string() {
        assert_eq!(duration_of(r#"{"description":"test run","duration":"30"}"#).unwrap(), 30);
    }

    #[test]
    fn test_duration_from_float_truncates() {
        assert_eq!(duration_of(r#"{"description":"test run","duration":30.9}"#).unwrap(), 30);
    }

    #[test]
    fn test_duration_rejects_non_numeric() {
        assert!(duration_of(r#"{"description":"test run","duration":"abc"}"#).is_err());
    }

    #[test]
    fn test_date_is_optional() {
        let req: CreateExerciseRequest =
            serde_json::from_str(r#"{"description":"test run","duration":30}"#).unwrap();
        assert!(req.date.is_none());
    }

    #[test]
    fn test_format_date_matches_calendar_string() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(format_date(date), "Sun Jan 01 2023");
    }

    #[test]
    fn test_empty_username_fails_validation() {
        let req = CreateUserRequest {
            username: String::new(),
        };
        assert!(req.validate().is_err());
    }
}
