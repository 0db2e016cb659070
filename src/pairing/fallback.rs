use crate::config::VinoConfig;
use crate::error::VinoError;
use crate::model::{PairingRequest, WinePairing};
use crate::pairing::{LocalPairing, PairingProvider, RemotePairing};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::time::Duration;
use tokio::time::sleep;

/// Tries each provider in order, retrying before moving on
pub struct FallbackPairing {
    providers: Vec<Box<dyn PairingProvider>>,
    retry_attempts: u32,
    retry_delay_ms: u64,
}

impl FallbackPairing {
    pub fn new(providers: Vec<Box<dyn PairingProvider>>, retry_attempts: u32, retry_delay_ms: u64) -> Self {
        Self {
            providers,
            retry_attempts: retry_attempts.max(1),
            retry_delay_ms,
        }
    }

    /// Create the provider chain from configuration
    ///
    /// The remote endpoint comes first when configured; the local table
    /// follows when `local_fallback` is on or no endpoint is set.
    pub fn from_config(config: &VinoConfig) -> Result<Self, VinoError> {
        let pairing = &config.pairing;
        let mut providers: Vec<Box<dyn PairingProvider>> = Vec::new();

        if let Some(endpoint) = pairing.endpoint.as_deref().filter(|e| !e.trim().is_empty()) {
            let remote = RemotePairing::new(endpoint, Some(Duration::from_secs(config.timeout)))?;
            info!("Added remote pairing '{}' to fallback chain", endpoint);
            providers.push(Box::new(remote));
        }

        if pairing.local_fallback || providers.is_empty() {
            providers.push(Box::new(LocalPairing));
        }

        Ok(Self::new(
            providers,
            pairing.retry_attempts,
            pairing.retry_delay_ms,
        ))
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.provider_name()).collect()
    }

    /// Pair with the first provider that succeeds, returning its name too
    pub async fn pair_with_source(
        &self,
        request: &PairingRequest,
    ) -> Result<(WinePairing, String), VinoError> {
        let mut all_errors: Vec<String> = Vec::new();

        for provider in &self.providers {
            match self.try_provider_with_retry(provider.as_ref(), request).await {
                Ok(pairing) => return Ok((pairing, provider.provider_name().to_string())),
                Err(e) => all_errors.push(format!("{}: {}", provider.provider_name(), e)),
            }
        }

        Err(VinoError::PairingError(format!(
            "All providers failed: {}",
            all_errors.join("; ")
        )))
    }

    async fn try_provider_with_retry(
        &self,
        provider: &dyn PairingProvider,
        request: &PairingRequest,
    ) -> Result<WinePairing, String> {
        let mut last_error = String::new();

        for attempt in 1..=self.retry_attempts {
            debug!(
                "Attempting pairing with {} (attempt {}/{})",
                provider.provider_name(),
                attempt,
                self.retry_attempts
            );

            match provider.pair(request).await {
                Ok(pairing) => {
                    info!(
                        "Paired '{}' with {} using {}",
                        request.recipe_title,
                        pairing.wine_name,
                        provider.provider_name()
                    );
                    return Ok(pairing);
                }
                Err(e) => {
                    warn!(
                        "Provider {} failed (attempt {}/{}): {}",
                        provider.provider_name(),
                        attempt,
                        self.retry_attempts,
                        e
                    );
                    last_error = e.to_string();
                }
            }

            if attempt < self.retry_attempts {
                let delay = Duration::from_millis(retry_delay(self.retry_delay_ms, attempt));
                debug!("Waiting {:?} before retry", delay);
                sleep(delay).await;
            }
        }

        Err(last_error)
    }
}

/// Linear backoff, saturating instead of overflowing
fn retry_delay(base_ms: u64, attempt: u32) -> u64 {
    base_ms.saturating_mul(u64::from(attempt))
}

#[async_trait]
impl PairingProvider for FallbackPairing {
    fn provider_name(&self) -> &str {
        "fallback"
    }

    async fn pair(&self, request: &PairingRequest) -> Result<WinePairing, VinoError> {
        self.pair_with_source(request).await.map(|(pairing, _)| pairing)
    }
}
