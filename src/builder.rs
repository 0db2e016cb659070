use std::time::Duration;

use log::debug;

use crate::config::VinoConfig;
use crate::coordinator::Coordinator;
use crate::fetchers::RequestFetcher;
use crate::pairing::FallbackPairing;
use crate::registry::SelectorRegistry;
use crate::{pair_extraction, ExtractionResult, PairingReport, VinoError};

/// Represents the input source for a scan
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Fetch the page from a URL
    Url(String),
    /// Use already-loaded HTML; `url` supplies the hostname
    Html { content: String, url: String },
}

/// Represents the desired output
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputMode {
    /// Extract ingredients and pair a wine (default)
    #[default]
    Pairing,
    /// Return the extraction result without pairing
    Ingredients,
}

/// Result of a scan
#[derive(Debug, Clone)]
pub enum ScanResult {
    /// Raw extraction result, which may itself carry an error
    Ingredients(ExtractionResult),
    /// Ingredients with a wine suggestion
    Pairing(PairingReport),
}

/// Builder for configuring and executing a recipe scan
#[derive(Default)]
pub struct RecipeVinoBuilder {
    source: Option<InputSource>,
    mode: OutputMode,
    registry: Option<SelectorRegistry>,
    pairing: Option<FallbackPairing>,
    config: Option<VinoConfig>,
    timeout: Option<Duration>,
}

impl RecipeVinoBuilder {
    /// Set the input source to a URL
    ///
    /// # Example
    /// ```
    /// use recipe_vino::RecipeVino;
    ///
    /// let builder = RecipeVino::builder()
    ///     .url("https://www.allrecipes.com/recipe/16354/easy-meatloaf/");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(InputSource::Url(url.into()));
        self
    }

    /// Set the input source to HTML that is already loaded
    ///
    /// # Example
    /// ```
    /// use recipe_vino::RecipeVino;
    ///
    /// let builder = RecipeVino::builder()
    ///     .html("<html>...</html>", "https://www.food52.com/recipes/1");
    /// ```
    pub fn html(mut self, content: impl Into<String>, url: impl Into<String>) -> Self {
        self.source = Some(InputSource::Html {
            content: content.into(),
            url: url.into(),
        });
        self
    }

    /// Return the extraction result only, without pairing
    pub fn extract_only(mut self) -> Self {
        self.mode = OutputMode::Ingredients;
        self
    }

    /// Use a custom site registry instead of the configured one
    pub fn registry(mut self, registry: SelectorRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Use a custom pairing chain instead of the configured one
    pub fn pairing(mut self, pairing: FallbackPairing) -> Self {
        self.pairing = Some(pairing);
        self
    }

    /// Use this configuration instead of the defaults
    pub fn config(mut self, config: VinoConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set a timeout for fetching the page
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build and execute the scan
    ///
    /// # Errors
    /// Returns `VinoError` if:
    /// - No input source was specified
    /// - The page could not be fetched
    /// - In pairing mode, extraction failed or found no ingredients
    /// - Every pairing provider failed
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_vino::{RecipeVino, ScanResult};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = RecipeVino::builder()
    ///     .url("https://www.bbcgoodfood.com/recipes/classic-cottage-pie")
    ///     .build()
    ///     .await?;
    /// if let ScanResult::Pairing(report) = result {
    ///     println!("{}", report.pairing.wine_name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<ScanResult, VinoError> {
        let source = self.source.ok_or_else(|| {
            VinoError::BuilderError("No input source specified. Use .url() or .html()".to_string())
        })?;
        let config = self.config.unwrap_or_default();
        let registry = self.registry.unwrap_or_else(|| config.registry());

        let (content, url) = match source {
            InputSource::Url(url) => {
                let timeout = self
                    .timeout
                    .unwrap_or(Duration::from_secs(config.timeout));
                let content = RequestFetcher::new(Some(timeout))?.fetch(&url).await?;
                (content, url)
            }
            InputSource::Html { content, url } => (content, url),
        };
        if content.trim().is_empty() {
            return Err(VinoError::PageUnavailable(format!("{url} has no content")));
        }

        let extraction = Coordinator::new(registry).scrape_html(&url, &content);
        debug!("Extraction result for {}: {:?}", url, extraction);

        match self.mode {
            OutputMode::Ingredients => Ok(ScanResult::Ingredients(extraction)),
            OutputMode::Pairing => {
                let pairing = match self.pairing {
                    Some(pairing) => pairing,
                    None => FallbackPairing::from_config(&config)?,
                };
                let report = pair_extraction(extraction, &pairing).await?;
                Ok(ScanResult::Pairing(report))
            }
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeVino;

impl RecipeVino {
    /// Creates a new builder for scanning a recipe
    ///
    /// # Example
    /// ```
    /// use recipe_vino::RecipeVino;
    ///
    /// let builder = RecipeVino::builder();
    /// ```
    pub fn builder() -> RecipeVinoBuilder {
        RecipeVinoBuilder::default()
    }
}
