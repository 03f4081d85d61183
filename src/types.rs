use serde::{Deserialize, Serialize};
use url::Url;

/// Default cap on in-flight fetches per batch.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Default per-fetch timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain(pub String);

impl Domain {
    /// Canonicalize host to a stable key: lowercase + IDNA/Punycode
    fn canonicalize(host: &str) -> String {
        let lower = host.to_ascii_lowercase();
        idna::domain_to_ascii(&lower).unwrap_or(lower)
    }

    pub fn from_url(url: &Url) -> Option<Self> {
        url.host_str().map(|h| Domain(Self::canonicalize(h)))
    }

    /// Build a Domain from raw user text (CLI, API callers, etc.)
    pub fn from_raw(host: &str) -> Self {
        Domain(Self::canonicalize(host))
    }
}

/// Explicit configuration threaded into the pipeline entrypoints.
/// No process-wide mutable state; callers build one and pass it down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Maximum fetches in flight at any instant.
    pub concurrency: usize,
    /// Per-fetch timeout in milliseconds.
    pub timeout_ms: u64,
    /// Host substrings excluded by the URL filter.
    pub block_domains: Vec<String>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            block_domains: crate::tools::filter::DEFAULT_BLOCK_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_block_domains(mut self, domains: &[&str]) -> Self {
        self.block_domains = domains.iter().map(|d| d.to_string()).collect();
        self
    }
}

/// One batch entry: a fetched URL paired with the distinct emails found on it,
/// in first-discovered order. A failed fetch leaves `emails` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEmails {
    pub url: String,
    pub emails: Vec<String>,
}

/// One row of the final report: a (source site, email) association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub site: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
