use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::{Display, Error};
use log::{error, warn};
use serde::Serialize;

use crate::auth::registry::SessionNotFound;
use crate::auth::session::UnknownRole;

pub type HResult<T> = std::result::Result<T, HandlerError>;

#[derive(Debug, Display, Error, Serialize)]
#[display(fmt = "{}", message)]
pub struct HandlerError {
    pub message: String,
    pub code: u16,
}

impl HandlerError {
    pub fn with_code(code: u16, message: String) -> Self {
        Self { message, code }
    }

    pub fn internal_error() -> Self {
        Self::with_code(500, "Internal Server Error".into())
    }
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

impl From<sqlx::Error> for HandlerError {
    fn from(err: sqlx::Error) -> Self {
        error!("database error: {}", err);
        Self::internal_error()
    }
}

/// The outward body is the same for every rejected token: callers must not be
/// able to tell an unknown token from one that never existed. The offending
/// token only goes to the log.
impl From<SessionNotFound> for HandlerError {
    fn from(err: SessionNotFound) -> Self {
        warn!("auth gate: {}", err);
        Self::from(401)
    }
}

impl From<UnknownRole> for HandlerError {
    fn from(err: UnknownRole) -> Self {
        warn!("session creation refused: {}", err);
        Self::with_code(400, "unknown_role".into())
    }
}

impl From<u16> for HandlerError {
    fn from(code: u16) -> Self {
        let message = match code {
            401 => "not_authenticated".into(),
            403 => "access_denied".into(),
            404 => "not_found".into(),
            _ => StatusCode::from_u16(code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                .to_string(),
        };

        Self::with_code(code, message)
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        Self::with_code(500, message.into())
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        Self::with_code(500, message)
    }
}

impl From<(u16, &'static str)> for HandlerError {
    fn from(tuple: (u16, &'static str)) -> Self {
        Self::with_code(tuple.0, tuple.1.into())
    }
}

pub mod macros {
    macro_rules! err {
        ($code:expr, $msg:expr) => {
            Err(crate::error::HandlerError::from(($code, $msg)))
        };
        ($code:expr) => {
            Err(crate::error::HandlerError::from($code))
        };
        () => {
            Err(crate::error::HandlerError::internal_error())
        };
    }

    pub(crate) use err;
}
