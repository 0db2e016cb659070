use log::warn;
use serde::Deserialize;

/// Where a known site keeps its ingredient list items
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteSelector {
    /// Matched by substring against the page hostname
    pub host: String,
    /// CSS selector for one ingredient line
    pub selector: String,
}

impl SiteSelector {
    pub fn new(host: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            selector: selector.into(),
        }
    }

    /// An empty host never matches
    pub fn matches(&self, hostname: &str) -> bool {
        !self.host.trim().is_empty() && hostname.contains(self.host.as_str())
    }
}

const BUILTIN_SITES: &[(&str, &str)] = &[
    ("allrecipes.com", ".mm-recipes-structured-ingredients__list-item p"),
    ("foodnetwork.com", ".o-Ingredients__a-Ingredient"),
    ("bbcgoodfood.com", ".recipe__ingredients ul li"),
    ("tasty.co", ".ingredient"),
    ("seriouseats.com", ".ingredient-list li"),
    ("simplyrecipes.com", ".structured-ingredients__list-item"),
    ("smittenkitchen.com", ".smittenkitchen-ingredient"),
    ("budgetbytes.com", ".wprm-recipe-ingredient"),
    ("thekitchn.com", ".Recipe__ingredient"),
    ("bonappetit.com", "[data-testid=\"IngredientList\"] p"),
    ("pinchofyum.com", ".tasty-recipes-ingredients-body li"),
    ("food52.com", ".recipe__list-item"),
];

/// Ordered table of per-site ingredient selectors.
///
/// Lookup walks entries in insertion order and the first entry whose host
/// is contained in the hostname wins, so order is priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorRegistry {
    entries: Vec<SiteSelector>,
}

impl SelectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sites supported out of the box
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_SITES
                .iter()
                .map(|(host, selector)| SiteSelector::new(*host, *selector))
                .collect(),
        }
    }

    /// Built-in sites, with `overrides` consulted first.
    /// Overrides with an empty host are dropped.
    pub fn with_overrides(overrides: &[SiteSelector]) -> Self {
        let mut registry = Self {
            entries: overrides
                .iter()
                .filter(|site| {
                    let keep = !site.host.trim().is_empty();
                    if !keep {
                        warn!("Ignoring site selector '{}' with an empty host", site.selector);
                    }
                    keep
                })
                .cloned()
                .collect(),
        };
        registry.entries.extend(Self::builtin().entries);
        registry
    }

    /// Append an entry with the lowest priority
    pub fn push(&mut self, site: SiteSelector) {
        self.entries.push(site);
    }

    pub fn lookup(&self, hostname: &str) -> Option<&SiteSelector> {
        self.entries.iter().find(|site| site.matches(hostname))
    }

    pub fn entries(&self) -> &[SiteSelector] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
