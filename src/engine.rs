use crate::services::log::{log_error, log_info};
use crate::tools::batch::batch;
use crate::tools::extract::extract_emails;
use crate::tools::fetch::FetchOutcome;
use crate::types::{Context, Domain, PageEmails};
use async_trait::async_trait;
use url::Url;

/// A single bounded-time page retrieval.
///
/// Implementations return failures as values; the batch depends on a fetch
/// never raising past its own boundary.
#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

/// Runs the fetch-and-extract pipeline across one batch of URLs.
pub struct Harvester<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub ctx: &'a Context,
}

impl<'a> Harvester<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, ctx: &'a Context) -> Self {
        Self { fetcher, ctx }
    }

    /// Fetch every URL with at most `ctx.concurrency` in flight and pair each
    /// with its extracted emails.
    ///
    /// Exactly one output entry per input URL, in input order. A failed fetch
    /// contributes an empty email list; its reason goes to the activity log,
    /// never into the returned data.
    pub async fn run(&self, urls: &[String]) -> Vec<PageEmails> {
        let fetcher = self.fetcher;
        batch(
            urls.to_vec(),
            self.ctx.concurrency,
            move |url: String| async move {
                match fetcher.fetch(&url).await {
                    FetchOutcome::Success { body } => {
                        let emails = extract_emails(&body);
                        if emails.is_empty() {
                            log_info(host_of(&url).as_deref(), "extract", Some("no matches"));
                        }
                        PageEmails { url, emails }
                    }
                    FetchOutcome::Failure { reason } => {
                        log_error(host_of(&url).as_deref(), "fetch", Some(&reason));
                        PageEmails {
                            url,
                            emails: Vec::new(),
                        }
                    }
                }
            },
        )
        .await
    }
}

/// Canonical host of a URL, for log attribution.
fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| Domain::from_url(&u))
        .map(|d| d.0)
}
