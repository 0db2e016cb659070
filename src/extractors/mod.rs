use crate::error::ExtractionError;
use log::debug;
use scraper::{Html, Selector};
use url::Url;

mod json_ld;
mod microdata;
mod site_selector;

pub use json_ld::JsonLdExtractor;
pub use microdata::MicroDataExtractor;
pub use site_selector::SiteSelectorExtractor;

/// A loaded page snapshot handed to the extractors
pub struct PageContext {
    pub url: String,
    /// Lowercase host of `url`, empty when the URL has none
    pub hostname: String,
    pub document: Html,
}

impl PageContext {
    pub fn new(url: &str, document: Html) -> Self {
        let hostname = match Url::parse(url) {
            Ok(parsed) => parsed.host_str().unwrap_or_default().to_string(),
            Err(e) => {
                debug!("PageContext: could not parse URL '{}': {}", url, e);
                String::new()
            }
        };
        Self {
            url: url.to_string(),
            hostname,
            document,
        }
    }

    pub fn from_html(url: &str, html: &str) -> Self {
        Self::new(url, Html::parse_document(html))
    }
}

/// One strategy of the ingredient cascade.
///
/// `Ok(None)` means the strategy does not apply to this page and the next
/// one should be tried. `Ok(Some(list))` ends the cascade, even when the
/// list is empty. `Err` is a fault that aborts the whole scrape.
pub trait Extractor {
    fn name(&self) -> &'static str;

    fn extract(&self, context: &PageContext) -> Result<Option<Vec<String>>, ExtractionError>;
}

pub(crate) fn parse_selector(css: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(css).map_err(|e| ExtractionError::InvalidSelector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}
