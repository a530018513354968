//! HTTP implementation of [`MethodApi`].

use crate::api::{ApiError, MethodApi};
use crate::config::ClientConfig;
use crate::types::key::MethodKey;
use crate::types::method::{MethodDraft, MethodRecord};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// Method API backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpMethodApi {
    client: Client,
    /// Base URL with the public path prefix applied
    endpoint: String,
}

impl HttpMethodApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }

    /// Full URL of the method resource
    pub fn url_for(&self, key: &MethodKey) -> String {
        format!("{}{}", self.endpoint, key.path())
    }
}

#[async_trait]
impl MethodApi for HttpMethodApi {
    async fn get_method(&self, key: &MethodKey) -> Result<MethodRecord, ApiError> {
        let url = self.url_for(key);
        debug!(%url, "fetching method");

        let response = success(self.client.get(&url).send().await?).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn update_method(&self, key: &MethodKey, draft: &MethodDraft) -> Result<(), ApiError> {
        let url = self.url_for(key);
        debug!(%url, name = %draft.name, "updating method");

        success(self.client.put(&url).json(&draft.outgoing()).send().await?).await?;
        Ok(())
    }
}

/// Pass through 2xx responses, turn everything else into [`ApiError::Status`].
async fn success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), "request rejected");
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}
