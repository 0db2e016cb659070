use super::{parse_selector, Extractor, PageContext};
use crate::error::ExtractionError;
use crate::registry::SelectorRegistry;
use crate::text::rendered_text;
use log::debug;
use std::collections::HashSet;

/// Reads ingredient lines using the layout selector of a known site
pub struct SiteSelectorExtractor {
    registry: SelectorRegistry,
}

impl SiteSelectorExtractor {
    pub fn new(registry: SelectorRegistry) -> Self {
        Self { registry }
    }
}

impl Default for SiteSelectorExtractor {
    fn default() -> Self {
        Self::new(SelectorRegistry::builtin())
    }
}

impl Extractor for SiteSelectorExtractor {
    fn name(&self) -> &'static str {
        "site_selector"
    }

    fn extract(&self, context: &PageContext) -> Result<Option<Vec<String>>, ExtractionError> {
        let Some(site) = self.registry.lookup(&context.hostname) else {
            debug!(
                "SiteSelectorExtractor: No registered site for host '{}'",
                context.hostname
            );
            return Ok(None);
        };
        debug!(
            "SiteSelectorExtractor: Host '{}' matched '{}', using selector {}",
            context.hostname, site.host, site.selector
        );

        let selector = parse_selector(&site.selector)?;
        let mut seen = HashSet::new();
        let ingredients: Vec<String> = context
            .document
            .select(&selector)
            .map(rendered_text)
            .filter(|text| !text.is_empty())
            .filter(|text| seen.insert(text.clone()))
            .collect();

        if ingredients.is_empty() {
            return Ok(None);
        }
        Ok(Some(ingredients))
    }
}
