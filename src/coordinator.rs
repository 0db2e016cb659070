use crate::error::ExtractionError;
use crate::extractors::{
    parse_selector, Extractor, JsonLdExtractor, MicroDataExtractor, PageContext,
    SiteSelectorExtractor,
};
use crate::model::ExtractionResult;
use crate::registry::SelectorRegistry;
use crate::text::{normalize_whitespace, rendered_text};
use log::{debug, error, info};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Runs the extraction strategies in priority order.
///
/// Holds no per-scrape state, so one coordinator can scrape any number of
/// pages and scraping the same page twice gives the same result.
pub struct Coordinator {
    extractors: Vec<Box<dyn Extractor>>,
}

impl Coordinator {
    /// JSON-LD, then microdata, then the site selectors of `registry`
    pub fn new(registry: SelectorRegistry) -> Self {
        Self::with_extractors(vec![
            Box::new(JsonLdExtractor),
            Box::new(MicroDataExtractor),
            Box::new(SiteSelectorExtractor::new(registry)),
        ])
    }

    pub fn with_extractors(extractors: Vec<Box<dyn Extractor>>) -> Self {
        Self { extractors }
    }

    pub fn extractor_names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Scrape one page. Faults, including a panicking extractor, become
    /// `ExtractionResult::Failure`.
    pub fn scrape(&self, context: &PageContext) -> ExtractionResult {
        let outcome = catch_unwind(AssertUnwindSafe(|| self.run(context)))
            .unwrap_or_else(|payload| Err(ExtractionError::Panicked(panic_message(payload))));

        match outcome {
            Ok((title, ingredients)) => ExtractionResult::Success { title, ingredients },
            Err(e) => {
                error!("Extraction aborted for {}: {}", context.url, e);
                ExtractionResult::Failure {
                    error: e.to_string(),
                }
            }
        }
    }

    pub fn scrape_html(&self, url: &str, html: &str) -> ExtractionResult {
        self.scrape(&PageContext::from_html(url, html))
    }

    fn run(&self, context: &PageContext) -> Result<(String, Vec<String>), ExtractionError> {
        let mut found = None;
        for extractor in &self.extractors {
            debug!("Trying extractor '{}'", extractor.name());
            if let Some(ingredients) = extractor.extract(context)? {
                info!(
                    "Extractor '{}' found {} ingredients",
                    extractor.name(),
                    ingredients.len()
                );
                found = Some(ingredients);
                break;
            }
        }
        if found.is_none() {
            debug!("No extractor applied to {}", context.url);
        }

        let title = page_title(context)?;
        Ok((title, found.unwrap_or_default()))
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(SelectorRegistry::builtin())
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// First `<h1>` text, or the document `<title>` when there is no usable heading
fn page_title(context: &PageContext) -> Result<String, ExtractionError> {
    let heading = parse_selector("h1")?;
    if let Some(text) = context
        .document
        .select(&heading)
        .next()
        .map(rendered_text)
        .filter(|text| !text.is_empty())
    {
        return Ok(text);
    }

    let title = parse_selector("title")?;
    Ok(context
        .document
        .select(&title)
        .next()
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default())
}
