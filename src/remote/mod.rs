//! Center sampling backend.
//!
//! This module provides the HTTP client for the backend's center endpoint
//! and the dispatcher that lets the picker fire requests without waiting
//! for them.

pub mod dispatch;

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::config::BackendConfig;
use crate::error::{PickerError, Result};
use crate::types::{CenterRequest, CentersResponse};

pub use dispatch::{CenterDispatcher, CenterOutcome, DispatchingHost};

const CENTER_ENDPOINT: &str = "ajax/center";

/// Anything that can answer a center request
#[async_trait::async_trait]
pub trait CenterBackend: Send + Sync {
    async fn fetch_centers(&self, request: &CenterRequest) -> Result<CentersResponse>;
}

/// Backend reached over HTTP: the request is POSTed as JSON to
/// `{base_url}/ajax/center`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: Url,
}

impl HttpBackend {
    /// Create a backend client from configuration
    ///
    /// The total request timeout comes from `timeout_secs`.
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: center_endpoint(&config.url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Resolve the center endpoint below `base`, keeping any path prefix
fn center_endpoint(base: &str) -> Result<Url> {
    let mut base = Url::parse(base.trim())?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(CENTER_ENDPOINT)?)
}

#[async_trait::async_trait]
impl CenterBackend for HttpBackend {
    async fn fetch_centers(&self, request: &CenterRequest) -> Result<CentersResponse> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(PickerError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
