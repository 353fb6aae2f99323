//! Command line client for a YOURLS short link service.
//!
//! Runs the same operations as the mail client popup, from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Verify URL and signature
//! cargo run --bin kurlctl -- check
//!
//! # Shorten a URL with a custom keyword
//! cargo run --bin kurlctl -- shorten https://example.com/long --keyword promo
//!
//! # Show stats / delete a short link
//! cargo run --bin kurlctl -- stats https://sho.rt/promo
//! cargo run --bin kurlctl -- delete promo
//!
//! # Decide from a text selection, as the popup does on open
//! cargo run --bin kurlctl -- auto "see https://sho.rt/promo"
//! ```
//!
//! # Environment Variables
//!
//! See [`kurl::config`]. `KURL_SERVICE_URL` and `KURL_API_SIGNATURE` are
//! required by every command except `config`.

use kurl::config::{self, Config, mask_secret};
use kurl::domain::entities::{OperationResult, StatsSummary};
use kurl::server::build_state;
use kurl::state::DefaultService;
use kurl::telemetry;
use kurl::utils::selection::{Selection, classify_selection};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI client for a YOURLS short link service.
#[derive(Parser)]
#[command(name = "kurlctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check connection and credentials
    Check,

    /// Shorten a long URL
    Shorten {
        /// The URL to shorten
        url: String,

        /// Custom keyword
        #[arg(short, long)]
        keyword: Option<String>,

        /// Title stored with the link
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Show statistics of a short URL or keyword
    Stats {
        short_or_keyword: String,
    },

    /// Delete a short URL or keyword
    Delete {
        short_or_keyword: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the effective configuration
    Config,

    /// Show stats for a short link or shorten a long URL found in the text
    Auto {
        selection: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    telemetry::init("warn", &config.log_format);

    if let Commands::Config = cli.command {
        show_config(&config);
        return Ok(());
    }

    let state = build_state(config)?;
    let service = state.service.as_ref();

    match cli.command {
        Commands::Check => check(service).await,
        Commands::Shorten {
            url,
            keyword,
            title,
        } => shorten(service, &url, keyword.as_deref(), title.as_deref()).await,
        Commands::Stats { short_or_keyword } => stats(service, &short_or_keyword).await,
        Commands::Delete {
            short_or_keyword,
            yes,
        } => delete(service, &short_or_keyword, yes).await,
        Commands::Auto { selection } => auto(service, &selection).await,
        Commands::Config => Ok(()),
    }
}

/// Prints configuration without the signature.
fn show_config(config: &Config) {
    println!("{}", "Configuration".bright_blue().bold());
    println!();

    let service_url = if config.service_url.is_empty() {
        "(not set)".red()
    } else {
        config.service_url.cyan()
    };
    println!("  {:<22} {}", "Service URL:", service_url);
    println!(
        "  {:<22} {}",
        "API signature:",
        mask_secret(&config.api_signature).bright_black()
    );
    println!("  {:<22} {}", "Auto copy:", config.auto_copy);
    println!(
        "  {:<22} {}",
        "Allowed origins:",
        config.allowed_origins.join(", ").cyan()
    );
    println!("  {:<22} {}", "Existing URL source:", config.existing_url_source);
    println!("  {:<22} {}s", "HTTP timeout:", config.http_timeout_secs);
    println!();

    if config.is_configured() {
        println!("{}", "Ready".green().bold());
    } else {
        println!(
            "{}",
            "Not configured: set KURL_SERVICE_URL and KURL_API_SIGNATURE".yellow()
        );
    }
}

/// Verifies the connection and prints the total link count.
async fn check(service: &DefaultService) -> Result<()> {
    println!("{}", "Checking connection...".bright_blue());

    let total = into_payload(service.check_connection().await)?;
    println!(
        "{} Total links: {}",
        "Connected.".green().bold(),
        total.to_string().bright_white().bold()
    );
    Ok(())
}

async fn shorten(
    service: &DefaultService,
    url: &str,
    keyword: Option<&str>,
    title: Option<&str>,
) -> Result<()> {
    match service.shorten(url, keyword, title).await {
        OperationResult::Success(short_url) => {
            println!("{}", "Short URL created".green().bold());
            println!("  {}", short_url.bright_yellow().bold());
            Ok(())
        }
        OperationResult::AlreadyExists { short_url } => {
            println!("{}", "URL already exists".yellow().bold());
            match short_url {
                Some(short_url) => println!("  {}", short_url.bright_yellow().bold()),
                None => println!("  {}", "(the service did not report the short URL)".bright_black()),
            }
            Ok(())
        }
        OperationResult::Failure(failure) => fail(&failure.reason),
    }
}

/// Prints short URL, long URL and clicks.
///
/// # Output Format
///
/// ```text
/// Statistics
///
///   Short URL:  https://sho.rt/promo
///   Long URL:   https://example.com/long
///   Clicks:     42
/// ```
async fn stats(service: &DefaultService, short_or_keyword: &str) -> Result<()> {
    let payload = into_payload(service.stats(short_or_keyword).await)?;

    let summary = StatsSummary::from_payload(&payload);
    let dash = || "-".to_string();

    println!("{}", "Statistics".bright_blue().bold());
    println!();
    println!(
        "  {:<11} {}",
        "Short URL:",
        summary.short_url.unwrap_or_else(dash).cyan()
    );
    println!("  {:<11} {}", "Long URL:", summary.long_url.unwrap_or_else(dash));
    println!(
        "  {:<11} {}",
        "Clicks:",
        summary
            .clicks
            .map(|c| c.to_string())
            .unwrap_or_else(dash)
            .bright_white()
            .bold()
    );
    println!();

    Ok(())
}

/// Deletes after confirmation (unless `--yes`).
async fn delete(service: &DefaultService, short_or_keyword: &str, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{}'?", short_or_keyword.trim()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    match service.delete(short_or_keyword).await {
        OperationResult::Failure(failure) => fail(&failure.reason),
        _ => {
            println!("{}", "Short URL deleted".green().bold());
            Ok(())
        }
    }
}

/// Classifies the selection, then shows stats or shortens.
async fn auto(service: &DefaultService, selection: &str) -> Result<()> {
    let base_url = service.base_url().unwrap_or_default();

    match classify_selection(&base_url, selection) {
        Selection::Short(url) => {
            println!("{} {}", "Short link:".bright_black(), url);
            stats(service, &url).await
        }
        Selection::Long(url) => {
            println!("{} {}", "Long URL:".bright_black(), url);
            shorten(service, &url, None, None).await
        }
        Selection::Empty => fail("no URL in selection"),
    }
}

/// Fails the command; the reason is printed by `main` and the exit status is non-zero.
fn fail(reason: &str) -> Result<()> {
    anyhow::bail!("{}", reason)
}

/// Returns the success payload. Any other outcome fails the command.
fn into_payload<T>(outcome: OperationResult<T>) -> Result<T> {
    match outcome {
        OperationResult::Success(payload) => Ok(payload),
        OperationResult::AlreadyExists { .. } => anyhow::bail!("unexpected duplicate reply"),
        OperationResult::Failure(failure) => anyhow::bail!("{}", failure.reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurl::domain::errors::Failure;

    #[test]
    fn test_into_payload_success() {
        assert_eq!(into_payload(OperationResult::Success(5u64)).unwrap(), 5);
    }

    #[test]
    fn test_into_payload_failure_carries_reason() {
        let err = into_payload(OperationResult::<u64>::Failure(Failure::not_configured())).unwrap_err();
        assert_eq!(err.to_string(), "not configured");
    }

    #[test]
    fn test_into_payload_rejects_duplicate() {
        let outcome = OperationResult::<u64>::AlreadyExists { short_url: None };
        assert!(into_payload(outcome).is_err());
    }
}
