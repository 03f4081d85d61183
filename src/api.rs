use crate::engine::{Fetcher, Harvester};
use crate::error::{Result, SweepError};
use crate::services::log::{log_error, log_info};
use crate::tools::fetch::ReqwestFetcher;
use crate::tools::filter::filter_urls;
use crate::tools::report::{assemble, to_csv};
use crate::types::{Context, PageEmails, ReportRecord};
use std::time::Instant;

/* ------------ public facade components ------------ */

pub struct Components {
    pub fetcher: Box<dyn Fetcher>,
    pub ctx: Context,
}

impl Components {
    /// Build production components for the given configuration.
    pub fn with_ctx(ctx: Context) -> Result<Self> {
        let fetcher = ReqwestFetcher::new(ctx.timeout_ms).map_err(SweepError::Other)?;
        Ok(Self {
            fetcher: Box::new(fetcher),
            ctx,
        })
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::with_ctx(Context::default()).expect("failed to init reqwest client")
    }
}

/* ------------ harvesting entrypoints ------------ */

/// Filter the candidates, then fetch-and-extract under the concurrency bound.
///
/// Returns the ordered (url, emails) pairs: one entry per accepted URL, in
/// submission order, failures included as empty entries.
pub async fn harvest_pages(urls: &[String], components: &Components) -> Vec<PageEmails> {
    let accepted = filter_urls(urls, &components.ctx.block_domains);
    let harvester = Harvester::new(&*components.fetcher, &components.ctx);
    harvester.run(&accepted).await
}

/// Full pipeline: one record per (source site, email) association found.
pub async fn harvest(urls: &[String], components: &Components) -> Vec<ReportRecord> {
    let start_time = Instant::now();
    let pairs = harvest_pages(urls, components).await;
    let records = assemble(&pairs);
    let details = format!(
        "{} urls -> {} records in {}ms",
        urls.len(),
        records.len(),
        start_time.elapsed().as_millis()
    );
    log_info(None, "harvest", Some(&details));
    records
}

/// Full pipeline plus serialization to the `sitios,correos` exchange format.
pub async fn harvest_csv(urls: &[String], components: &Components) -> Result<String> {
    let records = harvest(urls, components).await;
    match to_csv(&records) {
        Ok(csv) => Ok(csv),
        Err(e) => {
            log_error(None, "harvest_csv", Some(&e.to_string()));
            Err(e)
        }
    }
}
