#[cfg(test)]
mod tests {
    use crate::tools::report::{assemble, to_csv, CSV_HEADER};
    use crate::types::{PageEmails, ReportRecord};

    fn page(url: &str, emails: &[&str]) -> PageEmails {
        PageEmails {
            url: url.to_string(),
            emails: emails.iter().map(|e| e.to_string()).collect(),
        }
    }

    fn record(site: &str, email: &str) -> ReportRecord {
        ReportRecord {
            site: site.to_string(),
            email: email.to_string(),
        }
    }

    /// Minimal reader for the produced format, quoted fields included.
    fn parse_csv(csv: &str) -> Vec<(String, String)> {
        let mut rows = Vec::new();
        for line in csv.lines().skip(1) {
            let mut fields = Vec::new();
            let mut field = String::new();
            let mut chars = line.chars().peekable();
            let mut quoted = false;
            while let Some(c) = chars.next() {
                match c {
                    '"' if field.is_empty() && !quoted => quoted = true,
                    '"' if quoted => {
                        if chars.peek() == Some(&'"') {
                            chars.next();
                            field.push('"');
                        } else {
                            quoted = false;
                        }
                    }
                    ',' if !quoted => {
                        fields.push(std::mem::take(&mut field));
                    }
                    c => field.push(c),
                }
            }
            fields.push(field);
            assert_eq!(fields.len(), 2, "bad row: {}", line);
            rows.push((fields[0].clone(), fields[1].clone()));
        }
        rows
    }

    #[test]
    fn test_assemble_flattens_in_order() {
        let pairs = vec![
            page("https://a.example/", &["one@a.example", "two@a.example"]),
            page("https://b.example/", &[]),
            page("https://c.example/", &["zeta@c.example", "alpha@c.example"]),
        ];

        let records = assemble(&pairs);
        assert_eq!(
            records,
            vec![
                record("https://a.example/", "one@a.example"),
                record("https://a.example/", "two@a.example"),
                record("https://c.example/", "zeta@c.example"),
                record("https://c.example/", "alpha@c.example"),
            ]
        );
    }

    #[test]
    fn test_assemble_keeps_cross_site_duplicates() {
        let pairs = vec![
            page("https://a.example/", &["shared@mail.example"]),
            page("https://b.example/", &["shared@mail.example"]),
        ];
        assert_eq!(assemble(&pairs).len(), 2);
    }

    #[test]
    fn test_to_csv_exact_output() {
        let records = vec![
            record("https://a.example/", "one@a.example"),
            record("https://b.example/", "two@b.example"),
        ];
        let csv = to_csv(&records).unwrap();
        assert_eq!(
            csv,
            "sitios,correos\n\
             https://a.example/,one@a.example\n\
             https://b.example/,two@b.example\n"
        );
    }

    #[test]
    fn test_to_csv_empty_records_is_just_the_header() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv, format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_to_csv_quotes_delimiter_and_quote_characters() {
        let records = vec![
            record("https://a.example/?q=1,2", "one@a.example"),
            record("https://b.example/\"quoted\"", "two@b.example"),
        ];
        let csv = to_csv(&records).unwrap();
        assert!(csv.contains("\"https://a.example/?q=1,2\","));
        assert!(csv.contains("\"https://b.example/\"\"quoted\"\"\","));
    }

    #[test]
    fn test_to_csv_is_reproducible() {
        let records = vec![
            record("https://a.example/", "one@a.example"),
            record("https://a.example/?q=1,2", "two@a.example"),
        ];
        assert_eq!(to_csv(&records).unwrap(), to_csv(&records).unwrap());
    }

    #[test]
    fn test_round_trip_recovers_pairs_in_order() {
        let records = vec![
            record("https://a.example/", "one@a.example"),
            record("https://a.example/?q=1,2", "two@a.example"),
            record("https://b.example/", "one@a.example"),
        ];
        let csv = to_csv(&records).unwrap();
        let parsed = parse_csv(&csv);
        let expected: Vec<(String, String)> = records
            .iter()
            .map(|r| (r.site.clone(), r.email.clone()))
            .collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_malformed_record_is_a_hard_error() {
        let records = vec![record("https://a.example/", "")];
        let err = to_csv(&records).unwrap_err();
        assert!(err.to_string().contains("malformed report record"));

        let records = vec![record("", "one@a.example")];
        assert!(to_csv(&records).is_err());
    }
}
