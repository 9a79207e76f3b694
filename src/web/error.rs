use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use super::routes::SubscribeError;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("subscribe error: {0}")]
    Subscribe(#[from] SubscribeError),

    #[error("error awaiting a tokio task: {0}")]
    TokioJoin(#[from] tokio::task::JoinError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        match self {
            Error::Subscribe(subscribe_er) => subscribe_er.status_code_and_client_error(),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ClientError::ServiceError),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The errors a client gets to see. Messages never carry internal details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Invalid request body")]
    InvalidBody,
    #[display("Email is required")]
    EmailMissing,
    #[display("Invalid email format")]
    EmailInvalid,
    #[display("Email already subscribed")]
    AlreadySubscribed,
    #[display("Internal server error")]
    ServiceError,
}
