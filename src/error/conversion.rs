/**
 * Error Conversion
 *
 * Implements `IntoResponse` for `AppError`, so handlers can return it
 * directly. Responses are JSON:
 *
 * ```json
 * {
 *   "error": "Passwords do not match",
 *   "status": 400
 * }
 * ```
 *
 * Internal errors are logged here, at the single exit point, and the
 * client only ever sees the normalized public message.
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let message = self.public_message();

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap_or_else(|_| {
                format!(r#"{{"error":"{}","status":{}}}"#, message, status.as_u16())
            })))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}
