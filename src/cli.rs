use crate::api::{self, Components};
use crate::config::Config;
use crate::log::ActivityLogger;
use crate::tools::fetch::normalize_site_url;
use crate::tools::patterns::PatternLibrary;
use crate::tools::report::render_text;
use crate::types::{ApiResponse, Discovery, PageReport};
use anyhow::Context;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "sitefacts",
    version,
    about = "Business facts (contacts, address, hours, services, reviews) from small-business websites"
)]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a site's home and about pages and summarize the business
    Discover(DiscoverArgs),
    /// Extract facts from one saved HTML page (offline)
    Extract(ExtractArgs),
    /// Show the activity log, newest first
    Log(LogArgs),
    /// Print the effective configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct DiscoverArgs {
    /// Site URL; `https://` is assumed when no scheme is given
    url: String,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the number of pages analyzed
    #[arg(long)]
    pages: Option<usize>,
}

#[derive(Args)]
struct ExtractArgs {
    /// HTML file, or `-` for stdin
    file: String,
    /// URL the page was served from
    #[arg(long)]
    url: String,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct LogArgs {
    #[arg(long)]
    errors: bool,
    #[arg(long)]
    domain: Option<String>,
}

#[derive(Args)]
struct ConfigArgs {
    #[arg(long)]
    config: Option<PathBuf>,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Discover(args) => discover_cmd(args),
        Command::Extract(args) => extract_cmd(args),
        Command::Log(LogArgs { errors, domain }) => {
            let logger = ActivityLogger::new().context("opening activity log")?;
            for line in logger.read_logs(domain.as_deref(), errors)? {
                println!("{line}");
            }
            Ok(())
        }
        Command::Config(ConfigArgs { config }) => {
            let config = Config::load(config.as_deref())?;
            print_json(&config)
        }
    }
}

fn discover_cmd(args: DiscoverArgs) -> anyhow::Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(pages) = args.pages {
        config.discover.page_cap = pages;
    }
    let components = Components::from_config(&config).context("building http client")?;
    let result = api::discover_blocking(&args.url, &components);

    if args.json {
        return match result {
            Ok(discovery) => print_json(&ApiResponse::ok(discovery)),
            Err(e) => print_json(&ApiResponse::<()>::err(e.to_string())),
        };
    }
    let discovery = result.with_context(|| format!("discovering {}", args.url))?;
    print!("{}", render_text(&discovery));
    Ok(())
}

fn extract_cmd(args: ExtractArgs) -> anyhow::Result<()> {
    let start_time = Instant::now();
    let url = page_url(&args.url)?;
    let html = read_input(&args.file)?;
    let config = Config::load(args.config.as_deref())?;
    let patterns = PatternLibrary::new(&config.patterns)?;
    let record = api::extract_html(&url, &html, &patterns);

    if args.json {
        return print_json(&ApiResponse::ok(record));
    }
    let discovery = Discovery {
        site_url: url.clone(),
        pages: vec![PageReport::analyzed(url)],
        record,
        duration_ms: start_time.elapsed().as_millis() as u64,
        finished_at: Utc::now(),
    };
    print!("{}", render_text(&discovery));
    Ok(())
}

/// `--url` as typed, with `https://` assumed like `discover` does.
fn page_url(raw: &str) -> anyhow::Result<String> {
    let url = normalize_site_url(raw).with_context(|| format!("invalid --url {raw}"))?;
    Ok(url.to_string())
}

fn read_input(file: &str) -> anyhow::Result<String> {
    if file == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading html from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(file).with_context(|| format!("reading {file}"))
}

fn print_json<T: serde::Serialize>(val: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_assumes_https() {
        assert_eq!(page_url("acmeplumbing.com").unwrap(), "https://acmeplumbing.com/");
        assert_eq!(
            page_url("http://acmeplumbing.com/about").unwrap(),
            "http://acmeplumbing.com/about"
        );
        assert!(page_url("").is_err());
    }

    #[test]
    fn bare_domain_still_names_the_company() {
        let url = page_url("acmeplumbing.com").unwrap();
        let record = api::extract_html(
            &url,
            "<html><head><title>Acme Plumbing | Home</title></head></html>",
            PatternLibrary::standard(),
        );
        assert_eq!(record.company_name.as_deref(), Some("Acme Plumbing"));
    }
}
