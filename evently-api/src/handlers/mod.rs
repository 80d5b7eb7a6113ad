pub mod bookings;
pub mod event_spaces;
pub mod health;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde::de::DeserializeOwned;
use shared_types::FunctionFailure;

use crate::functions::FunctionError;

/// A function failure paired with the message naming the operation that
/// failed. Rendered as `{ success: false, error, message }`.
#[derive(Debug)]
pub struct FailedFunction {
    error: FunctionError,
    message: &'static str,
}

impl FailedFunction {
    pub fn new(error: FunctionError, message: &'static str) -> Self {
        Self { error, message }
    }
}

impl std::fmt::Display for FailedFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.message, self.error)
    }
}

impl ResponseError for FailedFunction {
    fn status_code(&self) -> StatusCode {
        if self.error.is_unauthorized() {
            StatusCode::UNAUTHORIZED
        } else {
            StatusCode::BAD_REQUEST
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(FunctionFailure::new(self.error.to_string(), self.message))
    }
}

/// Logs and wraps a failure; every function failure goes through here
fn reject(error: FunctionError, message: &'static str) -> FailedFunction {
    if error.is_unauthorized() {
        tracing::info!("{}: caller not authenticated", message);
    } else {
        tracing::warn!(error = %error, "{}", message);
    }
    FailedFunction::new(error, message)
}

/// Parses a JSON request body into its typed schema
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, FunctionError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FunctionError::InvalidArgument(
            "Request body must be a JSON object".to_string(),
        ));
    }

    let invalid = |e: serde_json::Error| {
        FunctionError::InvalidArgument(format!("Invalid request body: {}", e))
    };

    let value: serde_json::Value = serde_json::from_slice(body).map_err(invalid)?;
    if !value.is_object() {
        return Err(FunctionError::InvalidArgument(
            "Request body must be a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(invalid)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health)).service(
        web::scope("/functions/v1")
            .route(
                "/delete-event-space",
                web::post().to(event_spaces::delete_event_space),
            )
            .route(
                "/cancel-booking-admin",
                web::post().to(bookings::cancel_booking_admin),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::DeleteEventSpaceRequest;

    #[test]
    fn test_parse_body() {
        let req: DeleteEventSpaceRequest = parse_body(br#"{"spaceId": "annual-gala"}"#).unwrap();
        assert_eq!(req.space_id.as_deref(), Some("annual-gala"));
    }

    #[test]
    fn test_parse_body_rejects_malformed_payloads() {
        let bodies: [&[u8]; 6] = [
            b"",
            b"  \n",
            b"not json",
            b"[1, 2]",
            br#"["annual-gala"]"#,
            br#"{"spaceId": 7}"#,
        ];
        for body in bodies {
            let err = parse_body::<DeleteEventSpaceRequest>(body).unwrap_err();
            assert!(matches!(err, FunctionError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_failed_function_status() {
        let unauthorized = FailedFunction::new(FunctionError::Unauthorized, "Failed");
        assert_eq!(unauthorized.status_code(), StatusCode::UNAUTHORIZED);

        let not_found = FailedFunction::new(FunctionError::NotFound("x".into()), "Failed");
        assert_eq!(not_found.status_code(), StatusCode::BAD_REQUEST);

        let backend = FailedFunction::new(FunctionError::BackendFailure("x".into()), "Failed");
        assert_eq!(backend.status_code(), StatusCode::BAD_REQUEST);
    }
}
