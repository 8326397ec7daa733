#![allow(dead_code)]

use std::net::TcpListener;

use axum_server::Handle;
use marketing_hub_scrapers::http::{serve, ServerError};
use marketing_hub_scrapers::{create_router, AppConfig, AppState};
use tokio::task::JoinHandle;

/// A server running on an ephemeral localhost port.
pub struct TestApp {
    pub server_url: String,
    pub client: reqwest::Client,
    pub handle: Handle,
    pub task: JoinHandle<Result<(), ServerError>>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_config(AppConfig::default()).await
    }

    pub async fn spawn_with_config(config: AppConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().unwrap();

        let app = create_router(AppState::new(config));
        let handle = Handle::new();
        let task = tokio::spawn(serve(listener, app, handle.clone()));

        Self {
            server_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
            handle,
            task,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }
}
