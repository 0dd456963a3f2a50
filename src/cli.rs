//! Command-line front end for inspecting and normalizing URLs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::{
    host_tld, is_absolute, is_asset, is_home_page, is_plain, is_relative, normalize_url,
    resolve_url, reverse_domain, split_path, UrlRef,
};

/// Top-level CLI for urlutils.
#[derive(Debug, Parser)]
#[command(name = "urlutils")]
#[command(about = "Classify and normalize web URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print every classification for each URL.
    Inspect {
        /// URLs or relative references.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Reduce each URL to http://[www.]domain.tld.
    Normalize {
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print the reverse-domain key of each URL.
    Reverse {
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Cut a URL's path down to the given depth.
    Split {
        url: String,
        /// Number of path segments to keep.
        #[arg(long, allow_negative_numbers = true)]
        depth: isize,
    },

    /// Resolve a reference against a base URL.
    Resolve {
        /// Absolute base URL.
        base: String,
        /// Reference to resolve.
        reference: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        tracing::debug!("parsed command: {:?}", cli.command);
        cli.command.run()
    }

    pub fn run(self) -> Result<()> {
        match self {
            CliCommand::Inspect { urls } => {
                for raw in &urls {
                    let url = parse_arg(raw)?;
                    println!("{}", inspect_report(&url));
                }
            }
            CliCommand::Normalize { urls } => {
                for raw in &urls {
                    let url = parse_arg(raw)?;
                    let normalized =
                        normalize_url(url).with_context(|| format!("cannot normalize {}", raw))?;
                    println!("{}\t{}", raw, normalized);
                }
            }
            CliCommand::Reverse { urls } => {
                for raw in &urls {
                    let url = parse_arg(raw)?;
                    let key =
                        reverse_domain(&url).with_context(|| format!("cannot reverse {}", raw))?;
                    println!("{}\t{}", raw, key);
                }
            }
            CliCommand::Split { url, depth } => {
                let parsed = parse_arg(&url)?;
                let prefix = split_path(&parsed, depth)
                    .with_context(|| format!("cannot split {} at depth {}", url, depth))?;
                println!("{}", prefix);
            }
            CliCommand::Resolve { base, reference } => {
                let resolved = resolve_url(&parse_arg(&base)?, &parse_arg(&reference)?)
                    .with_context(|| format!("cannot resolve {} against {}", reference, base))?;
                tracing::info!(%base, %reference, %resolved, "resolved reference");
                println!("{}", resolved);
            }
        }

        Ok(())
    }
}

fn parse_arg(raw: &str) -> Result<UrlRef> {
    UrlRef::parse(raw).with_context(|| format!("cannot parse {:?}", raw))
}

/// Multi-line summary of everything the library can tell about a reference.
pub fn inspect_report(url: &UrlRef) -> String {
    let kind = if is_absolute(url) {
        "absolute"
    } else if is_relative(url) {
        "relative"
    } else {
        "protocol-relative"
    };

    let mut lines = vec![
        url.to_string(),
        format!("  kind:      {}", kind),
        format!("  asset:     {}", is_asset(&url.to_string())),
        format!("  plain:     {}", is_plain(url)),
        format!("  home page: {}", is_home_page(url)),
    ];

    if let Ok(tld) = host_tld(url) {
        lines.push(format!("  tld:       {}", tld));
    }
    match reverse_domain(url) {
        Ok(key) => lines.push(format!("  reverse:   {}", key)),
        Err(err) => tracing::debug!(url = %url, %err, "no reverse-domain key"),
    }

    lines.join("\n")
}
