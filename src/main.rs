use clap::Parser;
use log::error;
use recipe_vino::{ExtractionResult, RecipeVino, ScanResult, VinoConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "recipe-vino")]
#[command(about = "Find the ingredients on a recipe page and suggest a wine")]
struct Cli {
    /// Recipe page URL
    url: String,

    /// Read the page from a local HTML file instead of fetching the URL
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Only print the extracted ingredients
    #[arg(long)]
    extract_only: bool,

    /// Print machine-readable JSON
    #[arg(long)]
    json: bool,

    /// Remote pairing endpoint, overrides the configuration
    #[arg(long, env = "RECIPE_VINO_ENDPOINT")]
    endpoint: Option<String>,

    /// Never contact a remote pairing endpoint
    #[arg(long, conflicts_with = "endpoint")]
    local: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("Could not find a valid recipe: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config = VinoConfig::load()?;
    if cli.local {
        config.pairing.endpoint = None;
    } else if cli.endpoint.is_some() {
        config.pairing.endpoint = cli.endpoint.clone();
    }

    let mut builder = RecipeVino::builder().config(config);
    builder = match &cli.html {
        Some(path) => builder.html(tokio::fs::read_to_string(path).await?, &cli.url),
        None => builder.url(&cli.url),
    };
    if cli.extract_only {
        builder = builder.extract_only();
    }

    match builder.build().await? {
        ScanResult::Ingredients(result) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_extraction(&result);
            }
            Ok(if result.is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        ScanResult::Pairing(report) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.title);
                println!();
                println!("{}", report.pairing.wine_name);
                println!("\"{}\"", report.pairing.description);
                println!();
                for ingredient in &report.ingredients {
                    println!("  - {ingredient}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_extraction(result: &ExtractionResult) {
    match result {
        ExtractionResult::Success { title, ingredients } => {
            println!("{title}");
            if ingredients.is_empty() {
                println!("  (no ingredients found)");
            }
            for ingredient in ingredients {
                println!("  - {ingredient}");
            }
        }
        ExtractionResult::Failure { error } => {
            eprintln!("Extraction failed: {error}");
        }
    }
}
