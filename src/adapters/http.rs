use crate::domain::model::ReportPayload;
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_REPORT_PATH: &str = "/api/gesture/predict";

/// POSTs each report as JSON. Any HTTP status counts as delivered.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, payload: &ReportPayload) -> Result<()> {
        tracing::debug!("Posting gesture '{}' to: {}", payload.label, self.endpoint);
        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Report endpoint answered with status {}", status);
        }
        Ok(())
    }
}
