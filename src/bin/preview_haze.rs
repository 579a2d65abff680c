//! Preview binary - hazes a sentence and prints the result as JSON
//!
//! Usage:
//!   cargo run --bin preview -- "hello world"
//!   cargo run --bin preview -- "hello world" english spanish --method fuzzy
//!   cargo run --bin preview -- "hello world" english spanish --rehaze
//!
//! Languages default to english → spanish; the method defaults to hybrid.
//!
//! Optional environment variables:
//! - ANTHROPIC_API_KEY (enables sentence composition)
//! - HAZE_OFFLINE (use only the embedded vocabularies)
//! - REHAZE_MAX_ITERATIONS (defaults to 20)
//! - REHAZE_SIMILARITY_THRESHOLD (defaults to 0.96)

use anyhow::{bail, Context, Result};
use haze::config::Config;
use haze::{Hazer, Method, RehazeParameters};
use tracing::info;

struct PreviewArgs {
    text: String,
    lang_a: String,
    lang_b: String,
    method: Method,
    rehaze: bool,
}

impl PreviewArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut positional = Vec::new();
        let mut method = Method::Hybrid;
        let mut rehaze = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--rehaze" => rehaze = true,
                "--method" => {
                    let name = args.next().context("--method needs a value")?;
                    method = name.parse()?;
                }
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let Some(text) = positional.next() else {
            bail!("Usage: preview <text> [lang_a] [lang_b] [--method fuzzy|translate|hybrid] [--rehaze]");
        };

        Ok(Self {
            text,
            lang_a: positional.next().unwrap_or_else(|| "english".to_string()),
            lang_b: positional.next().unwrap_or_else(|| "spanish".to_string()),
            method,
            rehaze,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("haze=info".parse()?),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let args = PreviewArgs::parse(std::env::args().skip(1))?;

    info!("Loading configuration...");
    let config = Config::from_env()?;
    let hazer = Hazer::from_config(&config);

    let json = if args.rehaze {
        let parameters = RehazeParameters::from_config(&config);
        info!(
            "Rehazing {:?} ({} ↔ {}, up to {} iterations)",
            args.text, args.lang_a, args.lang_b, parameters.max_iterations
        );
        let result = hazer
            .rehaze(
                &args.text,
                &args.lang_a,
                &args.lang_b,
                parameters.max_iterations,
                parameters.similarity_threshold,
            )
            .await?;
        serde_json::to_string_pretty(&result)?
    } else {
        info!(
            "Hazing {:?} ({} → {} → {}, {})",
            args.text, args.lang_a, args.lang_b, args.lang_a, args.method
        );
        let result = hazer
            .haze(&args.text, &args.lang_a, &args.lang_b, args.method)
            .await?;
        serde_json::to_string_pretty(&result)?
    };

    println!("{}", json);

    let metrics = hazer.provider().metrics();
    info!(
        "Word lists: {} resolutions, {} cache hits, {} tier failures",
        metrics.resolutions(),
        metrics.cache_hits(),
        metrics.tier_failures()
    );

    Ok(())
}
