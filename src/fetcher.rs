use crate::http_client::build_http_client;
use crate::loader::{Document, input_from_html};
use anyhow::{Context, Result, anyhow};
use futures::stream::{self, StreamExt};
use governor::{
    Quota, RateLimiter, clock::DefaultClock, state::InMemoryState, state::direct::NotKeyed,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::num::NonZeroU32;
use url::Url;

pub struct FetcherConfig {
    pub concurrency: usize,
    pub requests_per_second: Option<f64>,
}

/// Fetches pages and turns them into scoreable documents. Per-URL failures
/// are logged and skipped; one dead URL never sinks a batch.
pub struct Fetcher {
    client: reqwest::Client,
    rate_limiter: Option<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    concurrency: usize,
    progress_bar: Option<ProgressBar>,
}

impl Fetcher {
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let rate_limiter = config.requests_per_second.and_then(|rps| {
            NonZeroU32::new(rps.ceil() as u32).map(|quota| RateLimiter::direct(Quota::per_second(quota)))
        });

        Ok(Self {
            client: build_http_client(30)?,
            rate_limiter,
            concurrency: config.concurrency.max(1),
            progress_bar: None,
        })
    }

    /// Enable a progress bar for batch fetches
    pub fn enable_progress_bar(&mut self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("[{elapsed_precise}] {spinner:.cyan} Fetching: {pos} pages")
                .expect("Progress bar template should be valid"),
        );
        self.progress_bar = Some(pb);
    }

    pub async fn fetch_one(&self, url: &str) -> Result<Document> {
        let parsed = Url::parse(url).context("Invalid URL")?;
        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(anyhow!(
                    "Invalid URL scheme '{}': only http and https are supported",
                    scheme
                ));
            }
        }

        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("{} returned HTTP {}", url, status.as_u16()));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_lowercase());
        if let Some(ct) = &content_type
            && !ct.contains("text/html")
            && !ct.contains("application/xhtml")
        {
            tracing::warn!(url = %url, content_type = %ct, "Non-HTML content type, scoring may be off");
        }

        let html = response.text().await?;

        Ok(Document {
            source: url.to_string(),
            input: input_from_html(&html),
        })
    }

    /// Fetches a batch with bounded concurrency, preserving input order.
    /// Returns whatever succeeded.
    pub async fn fetch_all(&self, urls: &[String]) -> Vec<Document> {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(0);
        }

        let results = stream::iter(urls)
            .map(|url| async move {
                let result = self.fetch_one(url).await;
                if let Some(pb) = &self.progress_bar {
                    pb.inc(1);
                }
                (url, result)
            })
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await;

        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("Fetched {} pages", urls.len()));
        }

        let mut documents = Vec::new();
        for (url, result) in results {
            match result {
                Ok(document) => documents.push(document),
                Err(e) => {
                    tracing::error!(url = %url, error = %e, "Failed to fetch page, skipping");
                }
            }
        }

        documents
    }
}
