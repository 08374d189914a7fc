use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

/// HTTP-facing error with an appropriate status code and a client-safe message.
#[derive(Debug)]
pub enum AppError {
    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    Internal(String),
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-safe error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::Unauthorized(msg) => msg,
            AppError::NotFound(msg) => msg,
            AppError::Internal(msg) => msg,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        // Log the real error but keep the page generic.
        tracing::error!("internal error: {:#}", err);
        AppError::internal("Something went wrong. Please try again.")
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = crate::views::error_page(status, self.message());
        (status, Html(body)).into_response()
    }
}
