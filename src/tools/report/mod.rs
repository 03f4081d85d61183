//! Report Tools

mod tests;

use crate::error::{Result, SweepError};
use crate::types::{PageEmails, ReportRecord};

/// Fixed header row of the exchange format: source site, email.
pub const CSV_HEADER: &str = "sitios,correos";

/// Flatten ordered (url, emails) pairs into one record per email.
///
/// URL order follows the input; within a URL, emails keep the
/// first-discovered order recorded by the extractor.
pub fn assemble(pairs: &[PageEmails]) -> Vec<ReportRecord> {
    let mut records = Vec::new();
    for page in pairs {
        for email in &page.emails {
            records.push(ReportRecord {
                site: page.url.clone(),
                email: email.clone(),
            });
        }
    }
    records
}

/// Serialize records to the two-column exchange format.
///
/// UTF-8, one record per line, fields quoted when they contain the delimiter,
/// a quote, or a line break. Identical input always produces byte-identical
/// output.
///
/// A record with an empty field has violated its documented shape; that is the
/// one condition surfaced to the caller as a hard error.
pub fn to_csv(records: &[ReportRecord]) -> Result<String> {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 48);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for record in records {
        if record.site.is_empty() || record.email.is_empty() {
            return Err(SweepError::MalformedRecord(format!(
                "empty field in ({:?}, {:?})",
                record.site, record.email
            )));
        }
        push_field(&mut out, &record.site);
        out.push(',');
        push_field(&mut out, &record.email);
        out.push('\n');
    }

    Ok(out)
}

fn push_field(out: &mut String, field: &str) {
    let needs_quoting =
        field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r');
    if needs_quoting {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
