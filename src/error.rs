use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum XteamError {
    #[error("could not connect to the user store: {0}")]
    StoreConnection(#[source] SqlxError),

    /// The statement ran but did not take effect. Carries the store's diagnostic text.
    #[error("{0}")]
    StoreWrite(String),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("invalid cookie secret: {0}")]
    CookieKey(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}

impl XteamError {
    /// Pull the database's own message out of a sqlx error when there is one.
    pub fn store_diagnostic(e: &SqlxError) -> String {
        match e.as_database_error() {
            Some(db_err) => db_err.message().to_string(),
            None => e.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            XteamError::StoreConnection(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for XteamError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            XteamError::StoreConnection(_) | XteamError::StoreWrite(_) => {
                format!("Error: {self}")
            }
            _ => "Error: an internal server error occurred.".to_string(),
        };
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_failure_keeps_diagnostic_text() {
        let err = XteamError::StoreWrite("UNIQUE constraint failed: User.username".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "UNIQUE constraint failed: User.username");
    }

    #[test]
    fn connection_failure_is_unavailable() {
        let err = XteamError::StoreConnection(SqlxError::PoolTimedOut);
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_string().starts_with("could not connect to the user store"));
    }
}
