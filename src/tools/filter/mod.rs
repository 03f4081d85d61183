//! Filter Tools


use crate::types::Domain;
use url::Url;

/// Hosts excluded regardless of otherwise-valid URL shape. Social-network
/// profile pages are not operator websites and would pollute extraction.
pub static DEFAULT_BLOCK_DOMAINS: &[&str] = &["facebook.com", "twitter.com", "instagram.com"];

/// Accept or reject a candidate URL.
///
/// Pure predicate: rejects on parse failure, absent scheme or host, or a host
/// containing any blocked substring. Never panics on adversarial input.
pub fn accept(raw: &str, block_domains: &[String]) -> bool {
    screen(raw, block_domains).is_some()
}

/// Keep the accepted candidates in normalized form, preserving input order.
///
/// Duplicates are kept: the batch contract is one output entry per submitted
/// URL, so collapsing them here would change the caller's row count.
pub fn filter_urls(urls: &[String], block_domains: &[String]) -> Vec<String> {
    urls.iter()
        .filter_map(|u| screen(u, block_domains))
        .collect()
}

/// Normalized form of an accepted URL, or None for a reject.
fn screen(raw: &str, block_domains: &[String]) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    let host = Domain::from_raw(url.host_str()?).0;
    let blocked = block_domains
        .iter()
        .any(|b| host.contains(Domain::from_raw(b).0.as_str()));
    if blocked {
        return None;
    }
    Some(url.to_string())
}
