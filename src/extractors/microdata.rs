use super::{parse_selector, Extractor, PageContext};
use crate::error::ExtractionError;
use crate::text::rendered_text;
use log::debug;

/// Microdata markers that tag an element as one ingredient line.
/// `ingredients` is the pre-2017 schema.org name still found on older blogs.
const INGREDIENT_MARKERS: &str = "[itemprop~='recipeIngredient'], [itemprop~='ingredients']";

/// Reads elements tagged with an ingredient `itemprop`
pub struct MicroDataExtractor;

impl Extractor for MicroDataExtractor {
    fn name(&self) -> &'static str {
        "microdata"
    }

    fn extract(&self, context: &PageContext) -> Result<Option<Vec<String>>, ExtractionError> {
        let selector = parse_selector(INGREDIENT_MARKERS)?;
        let elements: Vec<_> = context.document.select(&selector).collect();
        if elements.is_empty() {
            debug!("MicroDataExtractor: No ingredient markers found");
            return Ok(None);
        }

        let ingredients: Vec<String> = elements
            .into_iter()
            .map(rendered_text)
            .filter(|text| !text.is_empty())
            .collect();
        debug!(
            "MicroDataExtractor: Found {} ingredients",
            ingredients.len()
        );
        Ok(Some(ingredients))
    }
}
