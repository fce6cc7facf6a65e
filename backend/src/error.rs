//! Error handling for the Assistant Agricole server
//!
//! External calls surface a small closed set of failure kinds; the
//! user-visible fallback text is substituted at the presentation boundary,
//! not inside the clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure kinds for the three outbound HTTP calls
#[derive(Error, Debug)]
pub enum ExternalError {
    #[error("délai d'attente dépassé")]
    Timeout,

    #[error("erreur réseau : {0}")]
    Network(String),

    #[error("réponse {status} du service distant : {message}")]
    Upstream { status: u16, message: String },

    #[error("réponse illisible : {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ExternalError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExternalError::Timeout
        } else if err.is_decode() {
            ExternalError::Decode(err.to_string())
        } else {
            ExternalError::Network(err.to_string())
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Error: {:?}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erreur interne du serveur",
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
