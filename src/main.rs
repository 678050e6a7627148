use anyhow::Result;
use clap::Parser;
use colored::*;
use scorely::cli::Cli;
use scorely::config::Config;
use scorely::run;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => Some(Config::from_file(std::path::Path::new(path))?),
        None => Config::from_default_paths()?,
    };

    let args = match config {
        Some(config) => config.merge_with_cli(&args),
        None => args,
    };

    if let Err(e) = run(args).await {
        eprintln!("{} {}", "Error:".bright_red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
