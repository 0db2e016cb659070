use serde::{Deserialize, Serialize};

/// Outcome of a single scrape.
///
/// Serializes to exactly one of `{ "title": ..., "ingredients": [...] }` or
/// `{ "error": ... }`, the plain shape handed back across the page boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractionResult {
    Success {
        title: String,
        ingredients: Vec<String>,
    },
    Failure {
        error: String,
    },
}

impl ExtractionResult {
    pub fn is_error(&self) -> bool {
        matches!(self, ExtractionResult::Failure { .. })
    }

    /// Ingredients of a successful scrape, empty for a failure
    pub fn ingredients(&self) -> &[String] {
        match self {
            ExtractionResult::Success { ingredients, .. } => ingredients,
            ExtractionResult::Failure { .. } => &[],
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            ExtractionResult::Success { title, .. } => Some(title),
            ExtractionResult::Failure { .. } => None,
        }
    }
}

/// Payload sent to a pairing provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingRequest {
    pub recipe_title: String,
    pub ingredients: Vec<String>,
}

/// A suggested wine and why it fits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinePairing {
    pub wine_name: String,
    pub description: String,
}

/// Everything shown to the user after a successful scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingReport {
    pub title: String,
    pub ingredients: Vec<String>,
    pub pairing: WinePairing,
    /// Name of the provider that produced the pairing
    pub provider: String,
}
