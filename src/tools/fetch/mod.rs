mod client;
mod headers;

pub mod types;

// Re-export types for public use
pub use types::*;

use crate::engine::Fetcher;
use async_trait::async_trait;
use reqwest::Client;

/// Production fetcher: one bounded-time HTTP GET per URL through a shared
/// client. Implements the [`Fetcher`] seam the orchestrator runs against.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(timeout_ms: u64) -> Result<Self, String> {
        Ok(Self {
            client: client::build_client(timeout_ms)?,
        })
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch(&self, url: &str) -> FetchOutcome {
        fetch_with_client(&self.client, url).await
    }
}

/// Fetch one page with a one-off client.
///
/// Convenience entry for single URLs; batch callers should reuse a
/// [`ReqwestFetcher`] so fetches share a connection pool.
///
/// # Examples
/// ```no_run
/// use mailsweep::tools::fetch::fetch_page;
///
/// # async fn example() {
/// let outcome = fetch_page("https://example.com", 10_000).await;
/// if let Some(body) = outcome.body() {
///     println!("{} bytes", body.len());
/// }
/// # }
/// ```
pub async fn fetch_page(url: &str, timeout_ms: u64) -> FetchOutcome {
    match client::build_client(timeout_ms) {
        Ok(client) => fetch_with_client(&client, url).await,
        Err(reason) => FetchOutcome::failure(reason),
    }
}

/// Single GET against `url`; every failure mode comes back as a value.
pub(crate) async fn fetch_with_client(client: &Client, url: &str) -> FetchOutcome {
    let response = match client
        .get(url)
        .headers(headers::browser_headers())
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return FetchOutcome::failure(request_error_reason(&e)),
    };

    let status = response.status();
    if !status.is_success() {
        return FetchOutcome::failure(format!("status {}", status));
    }

    match response.text().await {
        Ok(body) => FetchOutcome::success(body),
        Err(e) => FetchOutcome::failure(format!("failed to read response body: {}", e)),
    }
}

fn request_error_reason(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("timed out: {}", e)
    } else {
        format!("request failed: {}", e)
    }
}
