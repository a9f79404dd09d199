use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// Calendar-date text form used throughout the GnuCash XML dialect.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse GnuCash date text into a calendar date.
///
/// The dialect carries dates either bare (`<gdate>2009-06-30</gdate>`) or
/// with a trailing timestamp (`<ts:date>2012-12-28 00:00:00 -0600</ts:date>`);
/// only the leading calendar-date prefix is significant.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    let head = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(head, DATE_FORMAT)
        .map_err(|_| anyhow!("invalid date text: `{}'", text))
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Accepted input for the schedxaction date setters: an already-parsed
/// [`NaiveDate`] or a `YYYY-MM-DD` string.
pub trait IntoDate {
    fn into_date(self) -> Result<NaiveDate>;
}

impl IntoDate for NaiveDate {
    fn into_date(self) -> Result<NaiveDate> {
        Ok(self)
    }
}

impl IntoDate for &str {
    fn into_date(self) -> Result<NaiveDate> {
        parse_date(self)
    }
}

impl IntoDate for String {
    fn into_date(self) -> Result<NaiveDate> {
        parse_date(&self)
    }
}
