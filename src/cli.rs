use crate::readability::ReadabilityPolicy;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "scorely")]
#[command(about = "A CLI content quality and SEO scoring toolkit", long_about = None)]
pub struct Cli {
    /// File, directory, or http(s) URL to score
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Extra keywords applied to every document (comma-separated)
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub output: String,

    /// Save JSON report to file
    #[arg(short, long)]
    pub save: Option<String>,

    /// Readability banding: balanced treats very easy text as good,
    /// technical flags it as too simple
    #[arg(long, value_enum, default_value_t = ReadabilityPolicy::Balanced)]
    pub policy: ReadabilityPolicy,

    /// Treat INPUT as a file containing one URL per line
    #[arg(long)]
    pub url_list: bool,

    /// Number of concurrent fetches (default: 5)
    #[arg(short = 'c', long, default_value_t = 5)]
    pub concurrency: usize,

    /// Rate limit for fetches per second (optional, e.g., 1.0 for 1 req/s)
    #[arg(short = 'r', long)]
    pub rate_limit: Option<f64>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}
