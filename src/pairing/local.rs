use super::PairingProvider;
use crate::error::VinoError;
use crate::model::{PairingRequest, WinePairing};
use async_trait::async_trait;

/// A keyword rule of the offline pairing table.
/// An empty keyword list matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingRule {
    pub keywords: &'static [&'static str],
    pub wine_name: &'static str,
    pub description: &'static str,
}

impl PairingRule {
    fn matches(&self, text: &str) -> bool {
        self.keywords.is_empty() || self.keywords.iter().any(|k| text.contains(k))
    }
}

const RULES: &[PairingRule] = &[
    PairingRule {
        keywords: &["beef", "lamb"],
        wine_name: "Cabernet Sauvignon",
        description: "A bold red like Cabernet Sauvignon stands up well to the rich, savory flavors of red meat dishes.",
    },
    PairingRule {
        keywords: &["chicken", "turkey"],
        wine_name: "Chardonnay",
        description: "An oaked Chardonnay offers a creamy texture and buttery notes that complement poultry beautifully.",
    },
    PairingRule {
        keywords: &["pork"],
        wine_name: "Pinot Noir",
        description: "The earthy notes and bright acidity of Pinot Noir cut through the richness of pork without overpowering it.",
    },
    PairingRule {
        keywords: &["salmon", "tuna"],
        wine_name: "Rosé",
        description: "A dry Rosé provides the perfect balance of fruity freshness and acidity for rich, oily fish.",
    },
    PairingRule {
        keywords: &[],
        wine_name: "Sauvignon Blanc",
        description: "This versatile white wine offers crisp, herbal notes that pair well with a wide variety of lighter dishes.",
    },
];

/// Offline pairing from a fixed keyword table. First matching rule wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPairing;

impl LocalPairing {
    pub fn rules() -> &'static [PairingRule] {
        RULES
    }

    pub fn resolve<S: AsRef<str>>(ingredients: &[S]) -> WinePairing {
        let text = ingredients
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        let rule = RULES
            .iter()
            .find(|rule| rule.matches(&text))
            .unwrap_or(&RULES[RULES.len() - 1]);

        WinePairing {
            wine_name: rule.wine_name.to_string(),
            description: rule.description.to_string(),
        }
    }
}

#[async_trait]
impl PairingProvider for LocalPairing {
    fn provider_name(&self) -> &str {
        "local"
    }

    async fn pair(&self, request: &PairingRequest) -> Result<WinePairing, VinoError> {
        Ok(Self::resolve(&request.ingredients))
    }
}
