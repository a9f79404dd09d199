//! Curated debug rendering.
//!
//! Every entity kind declares a fixed, ordered list of cheap attributes;
//! [`Inspect::render`] turns that list into a short `#<Kind field: value>`
//! string. Collections and anything else that would walk the entity graph
//! stay out of the lists, so inspecting a whole book costs two date lookups.

use chrono::NaiveDate;

use crate::date::format_date;

pub trait Inspect {
    /// Label used in the rendered string.
    fn kind(&self) -> &'static str;

    /// Ordered (field, rendered value) pairs.
    fn attributes(&self) -> Vec<(&'static str, String)>;

    /// Render as `#<Kind field: value, field: value>`.
    fn render(&self) -> String {
        let attrs = self
            .attributes()
            .iter()
            .map(|(field, value)| format!("{}: {}", field, value))
            .collect::<Vec<_>>()
            .join(", ");
        format!("#<{} {}>", self.kind(), attrs)
    }
}

/// Absent dates render empty.
pub(crate) fn opt_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}
