use std::{net::SocketAddr, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::AppConfig,
    store::{JsonFileStore, SubscriberStore},
    web::types::{looks_like_email, EmailCheck},
    Result,
};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    pub async fn build_from_config(config: AppConfig) -> Result<Self> {
        let waitlist_config = &config.waitlist_config;
        let store = JsonFileStore::new(waitlist_config.file_path());
        info!("{:<20} - {}", "Subscribers file:", store.path().display());

        let app_state = AppState::new(Arc::new(store), waitlist_config.preview_len);

        let addr = SocketAddr::from((config.net_config.host, config.net_config.app_port));
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        Ok(App::new(app_state, listener))
    }
}

pub struct InternalState {
    pub store: Arc<dyn SubscriberStore>,
    pub email_check: EmailCheck,
    pub preview_len: usize,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    /// Builds the state with the default `looks_like_email` check.
    pub fn new(store: Arc<dyn SubscriberStore>, preview_len: usize) -> Self {
        Self::with_email_check(store, preview_len, looks_like_email)
    }

    pub fn with_email_check(
        store: Arc<dyn SubscriberStore>,
        preview_len: usize,
        email_check: EmailCheck,
    ) -> Self {
        AppState(Arc::new(InternalState {
            store,
            email_check,
            preview_len,
        }))
    }
}
