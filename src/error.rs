use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::render::RenderError;

/// Outcome of a credential check during login.
#[derive(Debug, ThisError)]
pub enum AuthError {
    #[error("User not found.")]
    UserNotFound,

    #[error("Invalid password.")]
    InvalidPassword,

    /// The stored hash could not be parsed or the verifier failed for a
    /// reason other than a mismatch.
    #[error("Error checking password.")]
    HashCheckFailed,
}

#[derive(Debug, ThisError)]
pub enum DeskError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Item not found")]
    ItemNotFound,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Image render error: {0}")]
    Render(#[from] RenderError),
}

impl IntoResponse for DeskError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            DeskError::Auth(AuthError::UserNotFound) => {
                (StatusCode::UNAUTHORIZED, "User not found.")
            }
            DeskError::Auth(AuthError::InvalidPassword) => {
                (StatusCode::UNAUTHORIZED, "Invalid password.")
            }
            DeskError::Auth(AuthError::HashCheckFailed) => {
                error!("password hash verification failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error checking password.")
            }
            DeskError::ItemNotFound => (StatusCode::NOT_FOUND, "Item not found"),
            DeskError::Database(err) => {
                error!(error = %err, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error.")
            }
            DeskError::Render(err) => {
                error!(error = %err, "certificate render error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error creating image.")
            }
        };
        (status, body).into_response()
    }
}
