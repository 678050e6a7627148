pub mod analyzer;
pub mod cli;
pub mod config;
pub mod fetcher;
pub mod http_client;
pub mod keywords;
pub mod loader;
pub mod metrics;
pub mod models;
pub mod quality;
pub mod readability;
pub mod reporter;
pub mod seo;
pub mod suggestions;

use analyzer::ContentAnalyzer;
use anyhow::{Context, Result};
use cli::Cli;
use colored::*;
use fetcher::{Fetcher, FetcherConfig};
use loader::Document;
use models::ScoredDocument;
use reporter::Reporter;
use std::path::Path;
use url::Url;

fn parse_keyword_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

async fn gather_documents(args: &Cli) -> Result<Vec<Document>> {
    if args.url_list {
        let contents = std::fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read URL list: {}", args.input))?;
        let urls: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();

        if urls.is_empty() {
            anyhow::bail!("URL list is empty: {}", args.input);
        }

        let mut fetcher = Fetcher::new(FetcherConfig {
            concurrency: args.concurrency,
            requests_per_second: args.rate_limit,
        })?;
        if args.output == "text" {
            fetcher.enable_progress_bar();
        }

        Ok(fetcher.fetch_all(&urls).await)
    } else if args.input.starts_with("http://") || args.input.starts_with("https://") {
        let fetcher = Fetcher::new(FetcherConfig {
            concurrency: 1,
            requests_per_second: args.rate_limit,
        })?;
        Ok(vec![fetcher.fetch_one(&args.input).await?])
    } else {
        loader::load_path(Path::new(&args.input))
    }
}

pub async fn run(args: Cli) -> Result<()> {
    if args.output == "text" {
        println!(
            "{}",
            "Scorely - Content Quality & SEO Scorer"
                .bright_cyan()
                .bold()
        );
        println!("{}", "=".repeat(50).bright_blue());
        println!();
    }

    if args.verbose {
        println!("{}", "Loading documents...".bright_yellow());
    }

    let documents = gather_documents(&args).await?;

    if documents.is_empty() {
        anyhow::bail!("No documents to score");
    }

    if args.output == "text" {
        println!(
            "{} {} document(s) loaded",
            "Success:".bright_green().bold(),
            documents.len()
        );
        println!();
    }

    if args.verbose {
        println!("{}", "Scoring content...".bright_yellow());
    }

    let extra_keywords = args
        .keywords
        .as_deref()
        .map(parse_keyword_list)
        .unwrap_or_default();
    let analyzer = ContentAnalyzer::new(args.policy).with_extra_keywords(extra_keywords);

    let scored: Vec<ScoredDocument> = documents
        .into_iter()
        .map(|doc| {
            // Fetched pages know their own host; file paths do not parse as
            // URLs and fall back to the scheme heuristic.
            let base_url = Url::parse(&doc.source)
                .ok()
                .filter(|u| matches!(u.scheme(), "http" | "https"));
            let analysis = analyzer
                .clone()
                .with_base_url(base_url)
                .analyze(&doc.input);

            ScoredDocument {
                source: doc.source,
                title: doc.input.title,
                analysis,
            }
        })
        .collect();

    if args.verbose {
        println!("{}", "Scoring complete".bright_green());
        println!();
    }

    let analyses: Vec<_> = scored.iter().map(|d| d.analysis.clone()).collect();
    let recommendations = suggestions::prioritized(&analyses);

    let report = Reporter::generate_report(&args.input, scored, recommendations);

    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        _ => {
            Reporter::print_text_report(&report);
        }
    }

    if let Some(filename) = args.save {
        Reporter::save_json_report(&report, &filename)?;
    }

    Ok(())
}
