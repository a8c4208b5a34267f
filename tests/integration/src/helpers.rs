//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chirpy_api::{create_app, create_app_state, create_in_memory_app_state, AppState};
use chirpy_common::AppConfig;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Key the fake billing provider signs webhooks with
pub const TEST_POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub state: AppState,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server on the in-memory store with the given platform
    pub async fn start(platform: &str) -> Result<Self> {
        let config = test_config(platform)?;
        let state = create_in_memory_app_state(config)?;
        Self::start_with_state(state).await
    }

    /// Start a server on PostgreSQL, configured from the environment
    pub async fn start_postgres() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        let state = create_app_state(config).await?;
        Self::start_with_state(state).await
    }

    /// Serve `state` on an ephemeral port
    pub async fn start_with_state(state: AppState) -> Result<Self> {
        let app = create_app(state.clone());

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with a bearer token and no body
    pub async fn post_bearer(&self, path: &str, token: &str) -> Result<Response> {
        Ok(with_bearer(self.client.post(self.url(path)), token)
            .send()
            .await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(with_bearer(self.client.post(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(with_bearer(self.client.put(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(with_bearer(self.client.delete(self.url(path)), token)
            .send()
            .await?)
    }

    /// Deliver a billing webhook with the given API key
    pub async fn post_webhook<T: Serialize>(
        &self,
        api_key: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url("/api/polka/webhooks"))
            .header("Authorization", format!("ApiKey {api_key}"))
            .json(body)
            .send()
            .await?)
    }
}

fn with_bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", format!("Bearer {token}"))
}

/// Configuration for an in-memory server on `platform`
pub fn test_config(platform: &str) -> Result<AppConfig> {
    let vars: HashMap<&str, String> = HashMap::from([
        ("DATABASE_URL", "postgres://unused".to_string()),
        ("JWT_SECRET", "integration-test-secret".to_string()),
        ("POLKA_KEY", TEST_POLKA_KEY.to_string()),
        ("PLATFORM", platform.to_string()),
        ("FILESERVER_ROOT", env!("CARGO_MANIFEST_DIR").to_string()),
    ]);

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Helper to check if a PostgreSQL test environment is available
pub fn check_postgres_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["DATABASE_URL", "JWT_SECRET", "POLKA_KEY"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }

    true
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
