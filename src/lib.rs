//! Scrape the ingredient list from a recipe page and suggest a wine.
//!
//! Extraction tries three strategies in order and stops at the first one
//! that applies: embedded JSON-LD, microdata `itemprop` markers, then the
//! layout selector of a known recipe site.
//!
//! ```
//! use recipe_vino::{scrape_html, ExtractionResult};
//!
//! let html = r#"<h1>Steak</h1><ul><li itemprop="recipeIngredient">1 beef steak</li></ul>"#;
//! let result = scrape_html("https://example.com/steak", html);
//! assert_eq!(
//!     result,
//!     ExtractionResult::Success {
//!         title: "Steak".to_string(),
//!         ingredients: vec!["1 beef steak".to_string()],
//!     }
//! );
//! ```

pub mod builder;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod pairing;
pub mod registry;
pub mod text;

use log::warn;

pub use builder::{InputSource, OutputMode, RecipeVino, RecipeVinoBuilder, ScanResult};
pub use crate::config::VinoConfig;
pub use coordinator::Coordinator;
pub use error::{ExtractionError, VinoError};
pub use model::{ExtractionResult, PairingReport, PairingRequest, WinePairing};
pub use pairing::{FallbackPairing, LocalPairing, PairingProvider, RemotePairing};
pub use registry::{SelectorRegistry, SiteSelector};

/// Scrape already-loaded HTML with the built-in site registry
pub fn scrape_html(url: &str, html: &str) -> ExtractionResult {
    Coordinator::default().scrape_html(url, html)
}

/// Fetch a page and scrape it with the built-in site registry
///
/// A page that cannot be fetched is an `Err`; a fault during extraction is
/// an `Ok(ExtractionResult::Failure)`.
pub async fn scrape_url(url: &str) -> Result<ExtractionResult, VinoError> {
    let html = fetchers::RequestFetcher::new(None)?.fetch(url).await?;
    Ok(scrape_html(url, &html))
}

/// Pick the offline wine for a list of ingredients
pub fn local_pairing<S: AsRef<str>>(ingredients: &[S]) -> WinePairing {
    LocalPairing::resolve(ingredients)
}

/// Turn a scrape result into a pairing report.
///
/// An extraction fault and an empty ingredient list are both failures here.
pub async fn pair_extraction(
    extraction: ExtractionResult,
    pairing: &FallbackPairing,
) -> Result<PairingReport, VinoError> {
    let (title, ingredients) = match extraction {
        ExtractionResult::Failure { error } => {
            warn!("Scrape failed: {}", error);
            return Err(VinoError::ExtractionFailed(error));
        }
        ExtractionResult::Success { ingredients, .. } if ingredients.is_empty() => {
            return Err(VinoError::NoIngredients);
        }
        ExtractionResult::Success { title, ingredients } => (title, ingredients),
    };

    let request = PairingRequest {
        recipe_title: title,
        ingredients,
    };
    let (wine, provider) = pairing.pair_with_source(&request).await?;

    Ok(PairingReport {
        title: request.recipe_title,
        ingredients: request.ingredients,
        pairing: wine,
        provider,
    })
}
