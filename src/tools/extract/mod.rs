//! Extract Tools

mod utils;

use utils::*;

/// Extract distinct email addresses from raw page text.
///
/// `mailto:` link targets are harvested first, then syntactic matches over the
/// raw text. Duplicates are removed while preserving first-seen order; the
/// report assembler relies on that order being deterministic. Case is kept as
/// found in the source.
///
/// Empty input or zero matches yields an empty vector, never an error.
///
/// # Examples
/// ```
/// use mailsweep::tools::extract::extract_emails;
///
/// let emails = extract_emails("contact: a@b.com or A@B.COM; also a@b.com");
/// assert_eq!(emails, vec!["a@b.com".to_string(), "A@B.COM".to_string()]);
/// ```
pub fn extract_emails(text: &str) -> Vec<String> {
    crate::dedupe!(crate::merge!(
        extract_mailto_targets(text),
        extract_email_matches(text),
    ))
}
