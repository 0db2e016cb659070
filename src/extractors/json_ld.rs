use super::{parse_selector, Extractor, PageContext};
use crate::error::ExtractionError;
use crate::text::normalize_whitespace;
use html_escape::decode_html_entities;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Reads `recipeIngredient` from embedded `application/ld+json` blocks
pub struct JsonLdExtractor;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IngredientEntry {
    Text(String),
    Object(IngredientObject),
}

#[derive(Debug, Deserialize)]
struct IngredientObject {
    name: String,
    amount: Option<String>,
}

impl IngredientEntry {
    fn into_line(self) -> String {
        match self {
            IngredientEntry::Text(text) => normalize_whitespace(&decode_html_entities(&text)),
            IngredientEntry::Object(obj) => {
                let name = normalize_whitespace(&decode_html_entities(&obj.name));
                let amount = obj
                    .amount
                    .as_deref()
                    .map(|amount| normalize_whitespace(&decode_html_entities(amount)))
                    .unwrap_or_default();
                if amount.is_empty() || name.is_empty() {
                    name
                } else {
                    format!("{amount} {name}")
                }
            }
        }
    }
}

/// Flatten a parsed block into the objects that may describe a recipe
fn candidates(block: &Value) -> Vec<&Value> {
    match block {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => match map.get("@graph") {
            Some(Value::Array(items)) => items.iter().collect(),
            Some(graph @ Value::Object(_)) => vec![graph],
            _ => vec![block],
        },
        _ => Vec::new(),
    }
}

/// Case-insensitive: a string type matches when it contains "recipe",
/// an array when one member is exactly "recipe".
fn names_recipe(type_value: &Value) -> bool {
    match type_value {
        Value::String(s) => s.to_ascii_lowercase().contains("recipe"),
        Value::Array(types) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| t.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

fn is_recipe(item: &Value) -> bool {
    match item.get("@type") {
        Some(Value::Null) | None => false,
        Some(type_value) => names_recipe(type_value) || item.get("recipeIngredient").is_some(),
    }
}

/// Ingredients of the first recipe in a block.
///
/// `Err` marks the block as malformed; the caller skips it.
fn ingredients_in_block(block: &Value) -> Result<Option<Vec<String>>, serde_json::Error> {
    for item in candidates(block) {
        if !is_recipe(item) {
            continue;
        }
        let Some(list @ Value::Array(_)) = item.get("recipeIngredient") else {
            debug!("JsonLdExtractor: recipe candidate without an ingredient array");
            continue;
        };
        let entries = Vec::<IngredientEntry>::deserialize(list)?;
        let ingredients = entries
            .into_iter()
            .map(IngredientEntry::into_line)
            .filter(|line| !line.is_empty())
            .collect();
        return Ok(Some(ingredients));
    }
    Ok(None)
}

impl Extractor for JsonLdExtractor {
    fn name(&self) -> &'static str {
        "json_ld"
    }

    fn extract(&self, context: &PageContext) -> Result<Option<Vec<String>>, ExtractionError> {
        let selector = parse_selector(r#"script[type="application/ld+json"]"#)?;
        let scripts: Vec<_> = context.document.select(&selector).collect();
        debug!("JsonLdExtractor: Found {} JSON-LD script tags", scripts.len());

        for (index, script) in scripts.iter().enumerate() {
            let raw_json = script.text().collect::<String>();
            let block = match serde_json::from_str::<Value>(raw_json.trim()) {
                Ok(block) => block,
                Err(e) => {
                    debug!("JsonLdExtractor: Failed to parse JSON-LD {}: {}", index, e);
                    continue;
                }
            };

            match ingredients_in_block(&block) {
                Ok(Some(ingredients)) => {
                    debug!(
                        "JsonLdExtractor: Block {} yielded {} ingredients",
                        index,
                        ingredients.len()
                    );
                    return Ok(Some(ingredients));
                }
                Ok(None) => debug!("JsonLdExtractor: No recipe found in block {}", index),
                Err(e) => debug!("JsonLdExtractor: Skipping malformed block {}: {}", index, e),
            }
        }

        Ok(None)
    }
}
