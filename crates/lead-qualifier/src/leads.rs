use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::profile::Lead;

#[derive(Debug, thiserror::Error)]
pub enum LeadImportError {
    #[error("failed to read lead list: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid lead list CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub fn parse_leads_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Lead>, LeadImportError> {
    let file = std::fs::File::open(path)?;
    parse_leads(file)
}

/// Reads a signup export with an `email` column and an optional `name` column. Rows without a
/// usable address are skipped.
pub fn parse_leads<R: Read>(reader: R) -> Result<Vec<Lead>, LeadImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut leads = Vec::new();

    for (index, record) in csv_reader.deserialize::<LeadRow>().enumerate() {
        let row = record?;
        let Some(email) = normalize_email(&row.email) else {
            warn!(row = index + 1, email = %row.email, "skipping lead without a usable email");
            continue;
        };

        leads.push(Lead {
            email,
            name: row.name.map(|name| collapse_whitespace(&name)),
        });
    }

    Ok(leads)
}

#[derive(Debug, Deserialize)]
struct LeadRow {
    #[serde(alias = "Email", alias = "EMAIL", alias = "Email Address")]
    email: String,
    #[serde(
        default,
        alias = "Name",
        alias = "Full Name",
        deserialize_with = "empty_string_as_none"
    )]
    name: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Lowercases and strips stray BOM/zero-width characters; `None` unless the result looks like
/// `local@domain.tld`.
pub(crate) fn normalize_email(value: &str) -> Option<String> {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let email = cleaned.trim().to_ascii_lowercase();

    let (local, domain) = email.split_once('@')?;
    let plausible = !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());

    plausible.then_some(email)
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_emails_and_optional_names() {
        let csv = "email,name,source\n\
ADA@Example.com , Ada   Lovelace,newsletter\n\
grace@navy.mil,,signup\n";
        let leads = parse_leads(Cursor::new(csv)).expect("leads parse");

        assert_eq!(
            leads,
            vec![
                Lead::new("ada@example.com").with_name("Ada Lovelace"),
                Lead::new("grace@navy.mil"),
            ]
        );
    }

    #[test]
    fn accepts_capitalised_headers_without_name_column() {
        let leads = parse_leads(Cursor::new("Email\nlinus@kernel.org\n")).expect("leads parse");
        assert_eq!(leads, vec![Lead::new("linus@kernel.org")]);
    }

    #[test]
    fn skips_rows_without_usable_email() {
        let csv = "email,name\nnot-an-email,Nobody\n@example.com,Nobody\nuser@localhost,Local\nok@example.org,Ok\n";
        let leads = parse_leads(Cursor::new(csv)).expect("leads parse");
        assert_eq!(leads, vec![Lead::new("ok@example.org").with_name("Ok")]);
    }

    #[test]
    fn missing_email_column_is_a_csv_error() {
        let error = parse_leads(Cursor::new("name\nAda\n")).expect_err("email column required");
        assert!(matches!(error, LeadImportError::Csv(_)));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = parse_leads_from_path("./does-not-exist.csv").expect_err("expected io error");
        assert!(matches!(error, LeadImportError::Io(_)));
    }

    #[test]
    fn normalize_email_strips_invisible_characters() {
        assert_eq!(
            normalize_email("\u{feff}Someone@Example.COM"),
            Some("someone@example.com".to_string())
        );
        assert_eq!(normalize_email("two@@example.com"), None);
        assert_eq!(normalize_email("spaced out@example.com"), None);
    }
}
