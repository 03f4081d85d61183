use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use crate::selectors::LINK_SELECTOR;

// local-part @ domain labels . alphabetic TLD of two or more chars
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex")
});

/// `mailto:` link targets from HTML input, query string stripped.
///
/// Non-HTML input simply yields no anchors. Targets that do not match the
/// email grammar after stripping are dropped.
pub(super) fn extract_mailto_targets(text: &str) -> Vec<String> {
    let doc = Html::parse_fragment(text);
    let mut results = Vec::new();
    for link in doc.select(&LINK_SELECTOR) {
        if let Some(href) = link.value().attr("href") {
            if let Some(target) = href.strip_prefix("mailto:") {
                let clean = target.split('?').next().unwrap_or(target);
                if let Some(m) = EMAIL_REGEX.find(clean) {
                    results.push(m.as_str().to_string());
                }
            }
        }
    }
    results
}

/// Syntactic email matches over the raw input text.
///
/// The scan runs on the text as-is (markup included), so matches never bleed
/// across tag boundaries the way element-joined text would allow.
pub(super) fn extract_email_matches(text: &str) -> Vec<String> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True if `candidate` is a syntactically valid email match in full.
pub(super) fn matches_email_grammar(candidate: &str) -> bool {
    EMAIL_REGEX
        .find(candidate)
        .map(|m| m.as_str() == candidate)
        .unwrap_or(false)
}
