use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::io::AsyncBufReadExt;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use profile_extractor::page::{fetch_page, SnapshotPage};
use profile_extractor::responder::{Request, Responder, Response};
use profile_extractor::{ProfileScraper, ScraperConfig};

#[derive(Parser)]
#[command(name = "scrapedin", version, about = "Profile page extraction toolkit")]
struct Cli {
    /// Scraper configuration file (defaults to ./config.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a profile page and print the extracted record as JSON
    Extract {
        /// Saved page markup to extract from
        #[arg(long, conflicts_with = "url")]
        input: Option<PathBuf>,
        /// Fetch the page over HTTP instead
        #[arg(long)]
        url: Option<String>,
        /// Write the record here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Answer ping/extractProfile requests: one JSON request per stdin line,
    /// one JSON response per stdout line
    Respond {
        /// Saved page markup the responder is bound to
        #[arg(long, conflicts_with = "url")]
        input: Option<PathBuf>,
        /// Fetch the page over HTTP instead
        #[arg(long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable JSON.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ScraperConfig::load_from(path)?,
        None => ScraperConfig::load()?,
    };

    match cli.command {
        Commands::Extract {
            input,
            url,
            output,
            pretty,
        } => extract(input.as_deref(), url.as_deref(), output.as_deref(), pretty, config).await,
        Commands::Respond { input, url } => respond(input.as_deref(), url.as_deref(), config).await,
    }
}

async fn extract(
    input: Option<&Path>,
    url: Option<&str>,
    output: Option<&Path>,
    pretty: bool,
    config: ScraperConfig,
) -> Result<()> {
    let mut page = load_page(input, url, &config).await?;

    let record = ProfileScraper::new(config).scrape(&mut page).await?;

    let json = if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };

    match output {
        Some(path) => {
            tokio::fs::write(path, &json)
                .await
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!("Wrote profile record to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

async fn respond(input: Option<&Path>, url: Option<&str>, config: ScraperConfig) -> Result<()> {
    let mut page = load_page(input, url, &config).await?;
    let responder = Responder::new(config);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => responder.handle(request, &mut page).await,
            Err(e) => Response::failure(format!("Invalid request: {}", e)),
        };

        println!("{}", serde_json::to_string(&response)?);
    }

    Ok(())
}

async fn load_page(
    input: Option<&Path>,
    url: Option<&str>,
    config: &ScraperConfig,
) -> Result<SnapshotPage> {
    match (input, url) {
        (Some(path), _) => {
            let html = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read page file: {}", path.display()))?;
            Ok(SnapshotPage::new(html))
        }
        (None, Some(url)) => fetch_page(url, config).await,
        (None, None) => anyhow::bail!("Provide a page via --input <file> or --url <address>"),
    }
}
