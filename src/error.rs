//! Error types for the lubimyczytac-rss server

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::lubimyczytac::ClientError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("XML writing error: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Building the feed took longer than the request timeout
    #[error("request timed out after {0}s")]
    Timeout(u64),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Client(ClientError::AuthorNotFound) => StatusCode::NOT_FOUND,
            AppError::Client(ClientError::UnexpectedStatus(_))
            | AppError::Client(ClientError::Transport(_))
            | AppError::Client(ClientError::MalformedPage(_))
            | AppError::XmlWrite(_)
            | AppError::Utf8(_)
            | AppError::Timeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Client(ClientError::AuthorNotFound) => {
                tracing::warn!("Author not found");
                "author not found".to_string()
            }
            _ => {
                tracing::error!("Failed to build author feed: {}", self);
                format!("something went wrong while getting author info: {}", self)
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
