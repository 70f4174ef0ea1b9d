//! Request body extraction
//!
//! The tracker endpoints accept either JSON or form-encoded bodies, so the
//! handlers use a content-type-sniffing extractor instead of `Json` alone.

use axum::{
    async_trait,
    extract::{Form, FromRequest, Json, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Extractor that accepts `application/json` or form-encoded request bodies
///
/// Anything without a JSON content type is handed to the form parser,
/// matching how browsers submit the landing-page forms.
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send + 'static,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(payload) = Json::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self(payload));
        }

        let Form(payload) = Form::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(Self(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CreateUserRequest;
    use axum::body::Body;

    #[tokio::test]
    async fn test_extracts_json_body() {
        let req = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"username":"fcc_test"}"#))
            .unwrap();

        let JsonOrForm(payload) = JsonOrForm::<CreateUserRequest>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(payload.username, "fcc_test");
    }

    #[tokio::test]
    async fn test_extracts_form_body() {
        let req = Request::builder()
            .method("POST")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("username=fcc_test"))
            .unwrap();

        let JsonOrForm(payload) = JsonOrForm::<CreateUserRequest>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(payload.username, "fcc_test");
    }
}
