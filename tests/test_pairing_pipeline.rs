use mockito::Matcher;
use recipe_vino::config::PairingConfig;
use recipe_vino::{
    scrape_url, ExtractionResult, FallbackPairing, LocalPairing, RecipeVino, RemotePairing,
    ScanResult, SelectorRegistry, SiteSelector, VinoConfig, VinoError,
};
use std::time::Duration;

fn create_recipe_html(json_ld: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Recipe Page</title>
            <script type="application/ld+json">
                {json_ld}
            </script>
        </head>
        <body>
            <h1>Beef and Chicken Skewers</h1>
        </body>
        </html>
        "#
    )
}

const SKEWERS: &str = r#"
{
    "@context": "https://schema.org",
    "@type": "Recipe",
    "name": "Beef and Chicken Skewers",
    "recipeIngredient": ["1 lb ground beef", "2 chicken breasts", "1 red onion"]
}
"#;

#[tokio::test]
async fn test_scrape_url() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipe")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(create_recipe_html(SKEWERS))
        .create_async()
        .await;

    let result = scrape_url(&format!("{}/recipe", server.url())).await.unwrap();
    assert_eq!(
        result,
        ExtractionResult::Success {
            title: "Beef and Chicken Skewers".to_string(),
            ingredients: vec![
                "1 lb ground beef".to_string(),
                "2 chicken breasts".to_string(),
                "1 red onion".to_string()
            ],
        }
    );
}

#[tokio::test]
async fn test_url_to_local_pairing() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipe")
        .with_status(200)
        .with_body(create_recipe_html(SKEWERS))
        .create_async()
        .await;

    let result = RecipeVino::builder()
        .url(format!("{}/recipe", server.url()))
        .build()
        .await
        .unwrap();

    match result {
        ScanResult::Pairing(report) => {
            assert_eq!(report.title, "Beef and Chicken Skewers");
            assert_eq!(report.ingredients.len(), 3);
            assert_eq!(report.pairing.wine_name, "Cabernet Sauvignon");
            assert_eq!(report.provider, "local");
        }
        other => panic!("expected a pairing, got {other:?}"),
    }
}

#[tokio::test]
async fn test_remote_pairing_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let pair_mock = server
        .mock("POST", "/pair")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "recipeTitle": "Beef and Chicken Skewers"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"wineName": "Syrah", "description": "Smoky and peppery."}"#)
        .create_async()
        .await;

    let config = VinoConfig {
        pairing: PairingConfig {
            endpoint: Some(format!("{}/pair", server.url())),
            ..PairingConfig::default()
        },
        ..VinoConfig::default()
    };

    let result = RecipeVino::builder()
        .html(create_recipe_html(SKEWERS), "https://example.com/skewers")
        .config(config)
        .build()
        .await
        .unwrap();

    let ScanResult::Pairing(report) = result else {
        panic!("expected a pairing");
    };
    assert_eq!(report.pairing.wine_name, "Syrah");
    assert_eq!(report.provider, "remote");
    pair_mock.assert_async().await;
}

#[tokio::test]
async fn test_remote_failure_falls_back_to_local() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/pair")
        .with_status(503)
        .expect(2)
        .create_async()
        .await;

    let remote = RemotePairing::new(format!("{}/pair", server.url()), Some(Duration::from_secs(5)))
        .unwrap();
    let pairing = FallbackPairing::new(vec![Box::new(remote), Box::new(LocalPairing)], 2, 0);

    let result = RecipeVino::builder()
        .html(create_recipe_html(SKEWERS), "https://example.com/skewers")
        .pairing(pairing)
        .build()
        .await
        .unwrap();

    let ScanResult::Pairing(report) = result else {
        panic!("expected a pairing");
    };
    assert_eq!(report.pairing.wine_name, "Cabernet Sauvignon");
    assert_eq!(report.provider, "local");
}

#[tokio::test]
async fn test_empty_page_is_no_ingredients_error() {
    let html = "<html><head><title>Blog</title></head><body><p>hello</p></body></html>";
    let err = RecipeVino::builder()
        .html(html, "https://example.com/post")
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, VinoError::NoIngredients));

    let result = RecipeVino::builder()
        .html(html, "https://example.com/post")
        .extract_only()
        .build()
        .await
        .unwrap();
    match result {
        ScanResult::Ingredients(extraction) => {
            assert!(!extraction.is_error());
            assert!(extraction.ingredients().is_empty());
        }
        other => panic!("expected ingredients, got {other:?}"),
    }
}

#[tokio::test]
async fn test_extraction_fault_is_reported() {
    let mut registry = SelectorRegistry::new();
    registry.push(SiteSelector::new("example.com", "li[["));

    let err = RecipeVino::builder()
        .html("<h1>Soup</h1>", "https://example.com/soup")
        .registry(registry)
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, VinoError::ExtractionFailed(ref msg) if msg.contains("li[[")));
}

#[tokio::test]
async fn test_custom_site_via_builder() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/salmon")
        .with_status(200)
        .with_body(
            r#"<html><body><h1>Seared Salmon</h1>
            <ul class="ingr"><li>2 salmon fillets</li><li>1 lemon</li><li>2 salmon fillets</li></ul>
            </body></html>"#,
        )
        .create_async()
        .await;

    let registry = SelectorRegistry::with_overrides(&[SiteSelector::new("127.0.0.1", ".ingr li")]);
    let result = RecipeVino::builder()
        .url(format!("{}/salmon", server.url()))
        .registry(registry)
        .build()
        .await
        .unwrap();

    let ScanResult::Pairing(report) = result else {
        panic!("expected a pairing");
    };
    assert_eq!(report.ingredients.len(), 2);
    assert_eq!(report.pairing.wine_name, "Rosé");
}

#[tokio::test]
async fn test_fetch_failure_is_boundary_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/gone")
        .with_status(404)
        .create_async()
        .await;

    let err = RecipeVino::builder()
        .url(format!("{}/gone", server.url()))
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, VinoError::PageUnavailable(_)));
}

#[tokio::test]
async fn test_builder_requires_source() {
    let err = RecipeVino::builder().build().await.unwrap_err();
    assert!(matches!(err, VinoError::BuilderError(_)));
}
