//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use roster_api::{create_app, create_app_state, AppState};
use roster_common::AppConfig;
use roster_db::MemoryStore;
use roster_service::RecruitmentService;
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server over a fresh in-memory store
    pub async fn start() -> Result<Self> {
        let config = test_config(None)?;
        let engine = RecruitmentService::in_memory(MemoryStore::new(), config.engine);
        Self::start_with_state(AppState::new(Arc::new(engine), config)).await
    }

    /// Start a test server over PostgreSQL at `database_url`
    pub async fn start_postgres(database_url: &str) -> Result<Self> {
        let config = test_config(Some(database_url))?;
        let state = create_app_state(config).await?;
        Self::start_with_state(state).await
    }

    /// Start a test server with a prepared state
    pub async fn start_with_state(state: AppState) -> Result<Self> {
        let app = create_app(state);

        // Bind to any free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }
}

/// Create a test configuration.
///
/// Rate limits are raised so that tests are never throttled.
pub fn test_config(database_url: Option<&str>) -> Result<AppConfig> {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("APP_NAME", "roster-integration"),
        ("API_PORT", "0"),
        ("DATABASE_URL", database_url.unwrap_or("postgres://unused")),
        ("DATABASE_MAX_CONNECTIONS", "4"),
        ("DATABASE_MIN_CONNECTIONS", "1"),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000"),
        ("RATE_LIMIT_BURST", "10000"),
    ]);

    AppConfig::from_lookup(|key| vars.get(key).map(ToString::to_string))
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// The PostgreSQL URL to test against, if one is configured
pub fn test_database_url() -> Option<String> {
    dotenvy::dotenv().ok();

    match std::env::var("DATABASE_URL") {
        Ok(url) => Some(url),
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            None
        }
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
