use crate::error::BoletinError;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

/// The two historical bulletin layouts, selected by publication date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutVersion {
    Legacy,
    Current,
}

impl LayoutVersion {
    /// Bulletins dated strictly before the cutover use the legacy layout.
    pub fn for_date(date: NaiveDate, cutover: NaiveDate) -> LayoutVersion {
        if date < cutover {
            LayoutVersion::Legacy
        } else {
            LayoutVersion::Current
        }
    }
}

impl fmt::Display for LayoutVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutVersion::Legacy => write!(f, "v1"),
            LayoutVersion::Current => write!(f, "v2"),
        }
    }
}

/// Extract the publication date from a bulletin file name
/// (e.g. "2024-05-23.pdf", "boletin_2024-05-23_final.pdf").
pub fn parse_bulletin_date(file_name: &str) -> Result<NaiveDate, BoletinError> {
    let token = DATE_TOKEN
        .find(file_name)
        .ok_or_else(|| BoletinError::MissingDateToken {
            file: file_name.to_string(),
        })?;
    NaiveDate::parse_from_str(token.as_str(), "%Y-%m-%d").map_err(|_| {
        BoletinError::MissingDateToken {
            file: file_name.to_string(),
        }
    })
}
