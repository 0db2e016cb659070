use recipe_vino::{scrape_html, Coordinator, ExtractionResult, SelectorRegistry, SiteSelector};
use std::collections::HashSet;

fn page(head: &str, body: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Recipe Page</title>
            {head}
        </head>
        <body>
            {body}
        </body>
        </html>
        "#
    )
}

fn json_ld(json: &str) -> String {
    format!(r#"<script type="application/ld+json">{json}</script>"#)
}

const MICRODATA_BODY: &str = r#"
    <h1>Weeknight Chili</h1>
    <ul>
        <li itemprop="recipeIngredient">1 lb ground beef</li>
        <li itemprop="recipeIngredient">1 can beans</li>
    </ul>
"#;

const ALLRECIPES_BODY: &str = r#"
    <h1>Weeknight Chili</h1>
    <ul>
        <li class="mm-recipes-structured-ingredients__list-item"><p>1 onion</p></li>
        <li class="mm-recipes-structured-ingredients__list-item"><p>2 tomatoes</p></li>
        <li class="mm-recipes-structured-ingredients__list-item"><p>1 onion</p></li>
    </ul>
"#;

fn ingredients(result: &ExtractionResult) -> Vec<String> {
    match result {
        ExtractionResult::Success { ingredients, .. } => ingredients.clone(),
        ExtractionResult::Failure { error } => panic!("unexpected failure: {error}"),
    }
}

#[test]
fn test_json_ld_wins_over_other_strategies() {
    let html = page(
        &json_ld(
            r#"{"@context": "https://schema.org", "@type": "Recipe",
                "recipeIngredient": ["  2 lb   chuck roast ", "4\ncarrots"]}"#,
        ),
        &format!("{MICRODATA_BODY}{ALLRECIPES_BODY}"),
    );
    let result = scrape_html("https://www.allrecipes.com/recipe/1/chili/", &html);
    assert_eq!(
        result,
        ExtractionResult::Success {
            title: "Weeknight Chili".to_string(),
            ingredients: vec!["2 lb chuck roast".to_string(), "4 carrots".to_string()],
        }
    );
}

#[test]
fn test_microdata_when_no_json_ld() {
    let html = page("", &format!("{MICRODATA_BODY}{ALLRECIPES_BODY}"));
    let result = scrape_html("https://www.allrecipes.com/recipe/1/chili/", &html);
    assert_eq!(ingredients(&result), vec!["1 lb ground beef", "1 can beans"]);
}

#[test]
fn test_microdata_keeps_duplicates_in_order() {
    let html = page(
        "",
        r#"
        <span itemprop="recipeIngredient">salt</span>
        <span itemprop="recipeIngredient">pepper</span>
        <span itemprop="recipeIngredient">salt</span>
        "#,
    );
    let result = scrape_html("https://example.com/r", &html);
    assert_eq!(ingredients(&result), vec!["salt", "pepper", "salt"]);
}

#[test]
fn test_site_selector_membership() {
    let html = page("", ALLRECIPES_BODY);
    let result = scrape_html("https://www.allrecipes.com/some/recipe", &html);
    let found = ingredients(&result);
    let unique: HashSet<String> = found.iter().cloned().collect();
    assert_eq!(found.len(), unique.len());
    assert_eq!(
        unique,
        HashSet::from(["1 onion".to_string(), "2 tomatoes".to_string()])
    );
}

#[test]
fn test_no_strategy_gives_empty_list_not_error() {
    let html = page("", "<h1>Just a blog post</h1><p>No recipe here.</p>");
    let result = scrape_html("https://example.com/post", &html);
    assert_eq!(
        result,
        ExtractionResult::Success {
            title: "Just a blog post".to_string(),
            ingredients: vec![],
        }
    );
}

#[test]
fn test_unknown_site_with_layout_markup_is_empty() {
    let html = page("", ALLRECIPES_BODY);
    let result = scrape_html("https://copycat.example.com/chili", &html);
    assert!(ingredients(&result).is_empty());
}

#[test]
fn test_malformed_json_ld_does_not_abort() {
    let html = page(&json_ld(r#"{"@type": "Recipe", "recipeIngredient": ["#), MICRODATA_BODY);
    let result = scrape_html("https://example.com/chili", &html);
    assert_eq!(ingredients(&result), vec!["1 lb ground beef", "1 can beans"]);

    let html = page(
        &format!(
            "{}{}",
            json_ld("not json at all"),
            json_ld(r#"{"@type": "Recipe", "recipeIngredient": ["1 cup rice"]}"#)
        ),
        "",
    );
    let result = scrape_html("https://example.com/rice", &html);
    assert_eq!(ingredients(&result), vec!["1 cup rice"]);
}

#[test]
fn test_json_ld_without_recipe_falls_through() {
    let html = page(
        &json_ld(r#"{"@context": "https://schema.org", "@type": "Organization", "name": "Site"}"#),
        MICRODATA_BODY,
    );
    let result = scrape_html("https://example.com/chili", &html);
    assert_eq!(ingredients(&result), vec!["1 lb ground beef", "1 can beans"]);
}

#[test]
fn test_title_falls_back_to_document_title() {
    let html = page("", r#"<span itemprop="recipeIngredient">salt</span>"#);
    let result = scrape_html("https://example.com", &html);
    assert_eq!(result.title(), Some("Recipe Page"));
}

#[test]
fn test_scraping_twice_is_identical() {
    let html = page("", ALLRECIPES_BODY);
    let coordinator = Coordinator::default();
    let first = coordinator.scrape_html("https://www.allrecipes.com/r", &html);
    let second = coordinator.scrape_html("https://www.allrecipes.com/r", &html);
    assert_eq!(first, second);
}

#[test]
fn test_bad_registry_selector_reports_error() {
    let mut registry = SelectorRegistry::new();
    registry.push(SiteSelector::new("example.com", ":::"));
    let html = page("", "<h1>Soup</h1>");
    let result = Coordinator::new(registry).scrape_html("https://example.com/soup", &html);
    match result {
        ExtractionResult::Failure { error } => assert!(error.contains(":::")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn test_result_serializes_for_callers() {
    let html = page("", MICRODATA_BODY);
    let result = scrape_html("https://example.com/chili", &html);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["title"], "Weeknight Chili");
    assert_eq!(json["ingredients"][1], "1 can beans");
    assert!(json.get("error").is_none());
}
