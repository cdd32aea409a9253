use axum::http::StatusCode;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("record not found")]
    NotFound,

    #[error("email already registered")]
    DuplicateEmail,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("token rejected: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("token subject is not a user id")]
    InvalidSubject,

    #[error("token lifetime out of range")]
    TokenLifetime,

    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

impl ServiceError {
    /// Status code a handler answers with when a service call fails.
    ///
    /// A missing record is reported as a client error, not a 404.
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::BAD_REQUEST,
            ServiceError::InvalidToken(_) | ServiceError::InvalidSubject => {
                StatusCode::UNAUTHORIZED
            }
            ServiceError::DuplicateEmail
            | ServiceError::Hash(_)
            | ServiceError::TokenLifetime
            | ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
