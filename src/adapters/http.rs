use crate::domain::model::{Parse, ScansionRequest, ScansionResponse};
use crate::domain::ports::{ConfigProvider, ScansionService};
use crate::utils::error::{Result, ScanError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8181/api/parse";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Client for a scansion web service speaking `POST {text, improveVowelSyllables}`.
pub struct HttpScansionService {
    client: Client,
    endpoint: String,
}

impl HttpScansionService {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScanError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.service_url(), config.timeout())
    }

    fn unavailable(&self, reason: impl Into<String>) -> ScanError {
        ScanError::ServiceUnavailable {
            endpoint: self.endpoint.clone(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ScansionService for HttpScansionService {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn scan(&self, request: &ScansionRequest) -> Result<Vec<Parse>> {
        tracing::debug!("Making scansion request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.unavailable(e.to_string()))?;

        let status = response.status();
        tracing::debug!("Scansion response status: {}", status);
        if !status.is_success() {
            return Err(self.unavailable(format!("service responded with {}", status)));
        }

        let body: ScansionResponse = response
            .json()
            .await
            .map_err(|e| self.unavailable(format!("unreadable response: {}", e)))?;

        match body.parses {
            Some(parses) => Ok(parses),
            None => {
                tracing::warn!("Scansion response carried no parses");
                Ok(Vec::new())
            }
        }
    }
}
