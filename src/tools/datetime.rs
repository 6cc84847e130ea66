//! Date formatting
//!
//! Parses an optional input date (defaulting to the current local time) and
//! renders it either through a token pattern (`YYYY MM DD HH mm ss`) or as
//! an ISO 8601 timestamp.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use thiserror::Error;

/// Errors produced by the date formatter
#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    /// The input string matched none of the accepted date formats
    #[error("could not parse date '{0}'")]
    Parse(String),
}

/// Format a date according to an optional token pattern.
pub fn format_date(date: Option<&str>, pattern: Option<&str>) -> Result<String, DateError> {
    let dt = match date {
        Some(input) => parse_date(input)?,
        None => Local::now().naive_local(),
    };

    Ok(match pattern {
        Some(pattern) => substitute_tokens(pattern, &dt),
        None => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
    })
}

/// Accepted input formats, tried in order: RFC 3339, then naive datetime,
/// then bare date (midnight).
fn parse_date(input: &str) -> Result<NaiveDateTime, DateError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(dt) = d.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }
    Err(DateError::Parse(input.to_string()))
}

fn substitute_tokens(pattern: &str, dt: &NaiveDateTime) -> String {
    pattern
        .replace("YYYY", &format!("{:04}", dt.year()))
        .replace("MM", &format!("{:02}", dt.month()))
        .replace("DD", &format!("{:02}", dt.day()))
        .replace("HH", &format!("{:02}", dt.hour()))
        .replace("mm", &format!("{:02}", dt.minute()))
        .replace("ss", &format!("{:02}", dt.second()))
}
