use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts},
    http::request::Parts,
};

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::validation::{MSG_INVALID_INPUTS, MSG_MISSING_INPUTS};

/// `Json` with rejections turned into `AppError`, so a broken body gets the
/// same envelope as a failed validation
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                AppError::BadRequest("Expected a JSON request body".to_string())
            }
            // Well-formed JSON of the wrong shape (array, null, scalar) fails the
            // presence check, which runs before every other check
            JsonRejection::JsonDataError(_) => {
                AppError::Validation(MSG_MISSING_INPUTS.to_string())
            }
            _ => AppError::Validation(MSG_INVALID_INPUTS.to_string()),
        }
    }
}

/// The auth middleware stores the token's user in the request extensions
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::post, Router};
    use axum_test::TestServer;
    use serde_json::Value;

    use super::*;

    async fn echo(AppJson(body): AppJson<Value>) -> String {
        body.to_string()
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/echo", post(echo))).unwrap()
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected_with_envelope() {
        let response = server()
            .post("/echo")
            .text("{\"name\": ")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], MSG_INVALID_INPUTS);
    }

    #[derive(serde::Deserialize)]
    struct Named {
        #[allow(dead_code)]
        name: Option<Value>,
    }

    async fn named(AppJson(_): AppJson<Named>) -> StatusCode {
        StatusCode::OK
    }

    #[tokio::test]
    async fn test_non_object_body_fails_presence_check() {
        let server = TestServer::new(Router::new().route("/named", post(named))).unwrap();

        for body in ["[]", "null", "42"] {
            let response = server
                .post("/named")
                .text(body)
                .content_type("application/json")
                .await;

            response.assert_status(StatusCode::BAD_REQUEST);
            let json: Value = response.json();
            assert_eq!(json["message"], MSG_MISSING_INPUTS, "body {}", body);
        }

        server
            .post("/named")
            .json(&serde_json::json!({"name": "Jamia"}))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let response = server().post("/echo").text("{}").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
