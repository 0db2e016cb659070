use thiserror::Error;

/// Faults raised inside the extraction cascade.
///
/// These abort the whole cascade and are reported to the caller as
/// `{ "error": "..." }` rather than propagated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// A CSS selector could not be parsed
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// An extractor panicked
    #[error("Extractor panicked: {0}")]
    Panicked(String),
}

/// Errors that can occur while scanning a recipe page and pairing a wine
#[derive(Error, Debug)]
pub enum VinoError {
    /// Failed to fetch the recipe page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Failed to read a local file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The page URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No document could be obtained to scan
    #[error("Page unavailable: {0}")]
    PageUnavailable(String),

    /// Extraction ran but hit a fault
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// Extraction finished without finding any ingredients
    #[error("Could not find a valid recipe on this page")]
    NoIngredients,

    /// Every pairing provider failed
    #[error("Pairing failed: {0}")]
    PairingError(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
