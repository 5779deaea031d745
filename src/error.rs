/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - admin gate の三種類の拒否を、契約どおりの status / message に変換
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// No credential at all (header absent, or empty after stripping "Bearer ").
    #[error("no authentication token found")]
    NoToken,
    /// A credential was supplied but did not verify (bad signature, malformed, expired).
    #[error("authentication failed")]
    AuthenticationFailed,
    /// The credential verified but its claims do not assert admin privilege.
    #[error("admin rights required")]
    AdminRequired,
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The three gate rejections are a wire contract; message text is exact.
        let (status, message) = match self {
            AppError::NoToken => (
                StatusCode::UNAUTHORIZED,
                "No authentication token found".to_string(),
            ),
            AppError::AuthenticationFailed => {
                (StatusCode::UNAUTHORIZED, "Authentication failed".to_string())
            }
            AppError::AdminRequired => (
                StatusCode::FORBIDDEN,
                "Access denied. Admin rights required.".to_string(),
            ),
            AppError::NotFound { resource } => {
                (StatusCode::NOT_FOUND, format!("{resource} not found."))
            }
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = ErrorResponse { message };

        (status, Json(body)).into_response()
    }
}
