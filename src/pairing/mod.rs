mod fallback;
mod local;
mod remote;

pub use fallback::FallbackPairing;
pub use local::{LocalPairing, PairingRule};
pub use remote::RemotePairing;

use crate::error::VinoError;
use crate::model::{PairingRequest, WinePairing};
use async_trait::async_trait;

/// Anything that can suggest a wine for a list of ingredients
#[async_trait]
pub trait PairingProvider: Send + Sync {
    /// Get the provider name (e.g., "local", "remote")
    fn provider_name(&self) -> &str;

    async fn pair(&self, request: &PairingRequest) -> Result<WinePairing, VinoError>;
}
