use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::{info, Span};

use crate::{
    store::{StoreError, SubscriberStore},
    web::{
        types::{
            EmailParsingError, SubscribeRequest, SubscribeResponse, SubscriberEmail,
            SubscribersPreview,
        },
        ClientError, WebResult,
    },
    AppState,
};

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum SubscribeError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("email parsing error: {0}")]
    EmailParsing(#[from] EmailParsingError),
    #[error("email already subscribed")]
    AlreadySubscribed,

    #[error("subscriber store error: {0}")]
    Store(#[from] StoreError),
}

impl SubscribeError {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        match self {
            SubscribeError::InvalidBody(_) => (StatusCode::BAD_REQUEST, ClientError::InvalidBody),
            SubscribeError::EmailParsing(EmailParsingError::EmailMissing) => {
                (StatusCode::BAD_REQUEST, ClientError::EmailMissing)
            }
            SubscribeError::EmailParsing(EmailParsingError::EmailInvalid) => {
                (StatusCode::BAD_REQUEST, ClientError::EmailInvalid)
            }
            SubscribeError::AlreadySubscribed => {
                (StatusCode::CONFLICT, ClientError::AlreadySubscribed)
            }
            SubscribeError::Store(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ClientError::ServiceError)
            }
        }
    }
}

// ###################################
// ->   HANDLERS
// ###################################
#[tracing::instrument(name = "Adding a subscriber to the waitlist", skip_all)]
pub async fn subscribe(
    State(app_state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<(StatusCode, Json<SubscribeResponse>)> {
    let Json(body) = body.map_err(|rej| SubscribeError::InvalidBody(rej.body_text()))?;
    let request = SubscribeRequest::from_json(body)
        .ok_or_else(|| SubscribeError::InvalidBody("expected a JSON object".to_string()))?;
    let email =
        SubscriberEmail::parse(request.email, app_state.email_check).map_err(SubscribeError::from)?;

    // Store I/O blocks, keep it off the async workers.
    let store = app_state.store.clone();
    let span = Span::current();
    let total_subscribers = tokio::task::spawn_blocking(move || {
        span.in_scope(|| add_subscriber(store.as_ref(), email))
    })
    .await??;

    let response = SubscribeResponse {
        message: "Successfully subscribed".to_string(),
        total_subscribers,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

#[tracing::instrument(name = "Previewing the waitlist", skip_all)]
pub async fn subscribers(State(app_state): State<AppState>) -> WebResult<Json<SubscribersPreview>> {
    let store = app_state.store.clone();
    let subscribers = tokio::task::spawn_blocking(move || store.load()).await?;

    Ok(Json(SubscribersPreview::new(
        subscribers,
        app_state.preview_len,
    )))
}

// ###################################
// ->   HELPERS
// ###################################

/// Appends `email` to the stored list and returns the new number of subscribers.
/// Fails with `AlreadySubscribed` if the address is already on the list, leaving the store untouched.
///
/// The load and the save are not atomic: a concurrent call can overwrite this append.
fn add_subscriber(
    store: &dyn SubscriberStore,
    email: SubscriberEmail,
) -> Result<usize, SubscribeError> {
    let email = String::from(email);
    let mut subscribers = store.load();
    if subscribers.contains(&email) {
        return Err(SubscribeError::AlreadySubscribed);
    }

    subscribers.push(email.clone());
    store.save(&subscribers)?;

    let total_subscribers = subscribers.len();
    info!(
        subscriber_email = %email,
        total_subscribers, "New subscriber added to the waitlist."
    );

    Ok(total_subscribers)
}
