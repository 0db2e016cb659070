use super::PairingProvider;
use crate::error::VinoError;
use crate::model::{PairingRequest, WinePairing};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PairingResponse {
    Pairing(WinePairing),
    Error { error: String },
}

/// Pairing from a remote JSON endpoint.
///
/// POSTs `{recipeTitle, ingredients}` and expects `{wineName, description}`
/// or `{error}` back.
pub struct RemotePairing {
    client: Client,
    endpoint: String,
}

impl RemotePairing {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, VinoError> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(Duration::from_secs(30)))
            .build()?;
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
impl PairingProvider for RemotePairing {
    fn provider_name(&self) -> &str {
        "remote"
    }

    async fn pair(&self, request: &PairingRequest) -> Result<WinePairing, VinoError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Pairing endpoint answered {}: {}", status, body);

        match serde_json::from_str::<PairingResponse>(&body) {
            Ok(PairingResponse::Error { error }) => Err(VinoError::PairingError(error)),
            _ if !status.is_success() => Err(VinoError::PairingError(format!(
                "endpoint returned status {status}"
            ))),
            Ok(PairingResponse::Pairing(pairing)) => Ok(pairing),
            Err(e) => Err(VinoError::PairingError(format!(
                "unexpected response body: {e}"
            ))),
        }
    }
}
