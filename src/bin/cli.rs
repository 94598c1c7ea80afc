//! cdxbridge CLI
//!
//! Looks up archived captures of URLs through the remote full-text
//! search index.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use futures::stream::{self, StreamExt};

use cdxbridge::{
    error::{AppError, Result},
    models::{Config, LookupRequest, OutputFormat},
    services::LookupService,
};

/// cdxbridge - Web archive capture lookup gateway
#[derive(Parser, Debug)]
#[command(
    name = "cdxbridge",
    version,
    about = "Capture lookups over a full-text search index"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up captures of a single URL
    Lookup {
        /// URL whose captures are wanted
        url: String,

        /// Target timestamp for a closest-date lookup (1-14 digits)
        #[arg(long)]
        closest: Option<String>,

        /// Lower range bound, ignored with --closest
        #[arg(long)]
        from: Option<String>,

        /// Upper range bound, ignored with --closest
        #[arg(long)]
        to: Option<String>,

        /// Output shape: text or json
        #[arg(long, default_value = "text")]
        output: String,

        /// Comma-separated field names for json output
        #[arg(long)]
        fl: Option<String>,
    },

    /// Look up captures for every URL in a file, one per line
    Batch {
        /// File with one URL per line; # starts a comment
        file: PathBuf,

        /// Output shape: text or json
        #[arg(long, default_value = "text")]
        output: String,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Split a --fl value into trimmed, non-empty field names.
fn parse_fields(fl: Option<String>) -> Vec<String> {
    fl.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Lookup {
            url,
            closest,
            from,
            to,
            output,
            fl,
        } => {
            let request = LookupRequest {
                url,
                closest,
                from,
                to,
                output: output.parse()?,
                fields: parse_fields(fl),
            };

            let service = LookupService::new(config)?;
            for row in service.lookup(&request).await? {
                println!("{row}");
            }
        }

        Command::Batch { file, output } => {
            let output: OutputFormat = output.parse()?;
            let urls: Vec<String> = std::fs::read_to_string(&file)?
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect();

            log::info!("Running {} lookups", urls.len());

            let service = Arc::new(LookupService::new(config.clone())?);
            let concurrency = config.lookup.max_concurrent.max(1);
            let delay = Duration::from_millis(config.lookup.request_delay_ms);

            let mut failures = 0usize;
            let mut results = stream::iter(urls)
                .map(|url| {
                    let service = Arc::clone(&service);
                    async move {
                        let mut request = LookupRequest::for_url(url.clone());
                        request.output = output;
                        let rows = service.lookup(&request).await;
                        (url, rows)
                    }
                })
                .buffer_unordered(concurrency);

            while let Some((url, result)) = results.next().await {
                match result {
                    Ok(rows) => {
                        for row in rows {
                            println!("{row}");
                        }
                    }
                    Err(AppError::NotFound(_)) => {
                        log::warn!("No captures for {url}");
                        failures += 1;
                    }
                    Err(error) => {
                        log::warn!("Lookup failed for {url}: {error}");
                        failures += 1;
                    }
                }

                if delay.as_millis() > 0 {
                    tokio::time::sleep(delay).await;
                }
            }

            if failures > 0 {
                log::info!("{failures} of the lookups returned nothing");
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }

            log::info!("Config OK (endpoint: {})", config.backend.endpoint);
        }
    }

    Ok(())
}
