//! Validity-date parsing for brochure tiles.
//!
//! Two text forms appear on the listing page:
//!
//! - open-ended: `"von Mo. 01.03.2024"`, a start date only;
//! - range: `"01.03.2024 - 15.03.2024"`.
//!
//! [`try_parse_date_range`] reports why a text was rejected.
//! [`parse_date_range`] never fails and maps every rejection to the
//! `("Unknown", "Unknown")` pair.

use std::sync::LazyLock;

use chrono::NaiveDate;
use prospekt_core::{DATE_FORMAT, UNKNOWN};
use regex::Regex;

use crate::error::DateParseError;

/// Marker word for the open-ended form.
const OPEN_ENDED_MARKER: &str = "von";

const SOURCE_DATE_FORMAT: &str = "%d.%m.%Y";

static EMBEDDED_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{2}\.[0-9]{2}\.[0-9]{4}").expect("valid date regex"));

/// A parsed validity period. `to` is `None` for open-ended listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Formats the range as `(valid_from, valid_to)` strings, using
    /// [`UNKNOWN`] for a missing end date.
    #[must_use]
    pub fn to_strings(&self) -> (String, String) {
        let to = self
            .to
            .map_or_else(|| UNKNOWN.to_string(), |d| d.format(DATE_FORMAT).to_string());
        (self.from.format(DATE_FORMAT).to_string(), to)
    }
}

/// Parses validity text into `(valid_from, valid_to)`.
///
/// Never fails. Any rejection is logged and yields `("Unknown", "Unknown")`;
/// the pair is never partially filled for the range form.
#[must_use]
pub fn parse_date_range(text: &str) -> (String, String) {
    match try_parse_date_range(text) {
        Ok(range) => range.to_strings(),
        Err(e) => {
            tracing::error!(text, error = %e, "error parsing date range");
            (UNKNOWN.to_string(), UNKNOWN.to_string())
        }
    }
}

/// Parses validity text, reporting the reason on failure.
///
/// Text containing `"von"` is treated as open-ended: the first embedded
/// `DD.MM.YYYY` becomes the start date and there is no end date. Any other
/// text must be exactly two dates separated by a hyphen; day and month
/// there may have one or two digits.
///
/// # Errors
///
/// - [`DateParseError::MissingStartDate`] — open-ended text with no date in it.
/// - [`DateParseError::PartCount`] — range text without exactly one hyphen.
/// - [`DateParseError::InvalidDate`] — a date is not `D.M.YYYY` or does not
///   exist on the calendar.
pub fn try_parse_date_range(text: &str) -> Result<DateRange, DateParseError> {
    if text.contains(OPEN_ENDED_MARKER) {
        let found = EMBEDDED_DATE_RE
            .find(text)
            .ok_or_else(|| DateParseError::MissingStartDate {
                text: text.to_owned(),
            })?;
        let from = parse_source_date(found.as_str())?;
        return Ok(DateRange { from, to: None });
    }

    let parts: Vec<&str> = text.split('-').map(str::trim).collect();
    let [from, to] = parts.as_slice() else {
        return Err(DateParseError::PartCount {
            found: parts.len(),
            text: text.to_owned(),
        });
    };

    Ok(DateRange {
        from: parse_source_date(from)?,
        to: Some(parse_source_date(to)?),
    })
}

fn parse_source_date(part: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(part, SOURCE_DATE_FORMAT).map_err(|source| {
        DateParseError::InvalidDate {
            part: part.to_owned(),
            source,
        }
    })
}

#[cfg(test)]
#[path = "dates_test.rs"]
mod tests;
