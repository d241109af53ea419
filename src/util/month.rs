//! Normalization of free-text date labels for the experience timeline.
//!
//! `"January 2020"` becomes `"Jan 2020"`, `"present"` becomes `"Present"`.
//! Anything unrecognized is passed through trimmed rather than rejected.

#[cfg(test)]
#[path = "month_test.rs"]
mod month_test;

/// Month spellings accepted in data files, lower-cased, with their short form.
pub const MONTH_ALIASES: &[(&str, &str)] = &[
    ("jan", "Jan"),
    ("january", "Jan"),
    ("feb", "Feb"),
    ("february", "Feb"),
    ("mar", "Mar"),
    ("march", "Mar"),
    ("apr", "Apr"),
    ("april", "Apr"),
    ("may", "May"),
    ("jun", "Jun"),
    ("june", "Jun"),
    ("jul", "Jul"),
    ("july", "Jul"),
    ("aug", "Aug"),
    ("august", "Aug"),
    ("sep", "Sep"),
    ("sept", "Sep"),
    ("september", "Sep"),
    ("oct", "Oct"),
    ("october", "Oct"),
    ("nov", "Nov"),
    ("november", "Nov"),
    ("dec", "Dec"),
    ("december", "Dec"),
];

/// Look up the short month name for a lower-cased spelling.
#[must_use]
pub fn short_month(lower: &str) -> Option<&'static str> {
    MONTH_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, short)| *short)
}

/// Format a `"<month> <year>"` label as `"<Mon> <year>"`.
///
/// Open-ended labels (`present`, `current`, any casing) keep their text with
/// the first letter upper-cased. The year token is not validated.
#[must_use]
pub fn short_month_year(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let lower = trimmed.to_lowercase();
    if lower == "present" || lower == "current" {
        return capitalize_first(trimmed);
    }

    let mut parts = trimmed.split_whitespace();
    let (Some(month), Some(year)) = (parts.next(), parts.next()) else {
        return trimmed.to_owned();
    };

    match short_month(&month.to_lowercase()) {
        Some(short) => format!("{short} {year}"),
        None => trimmed.to_owned(),
    }
}

/// Same as [`short_month_year`] for an optional label; `None` yields `""`.
#[must_use]
pub fn short_month_year_opt(label: Option<&str>) -> String {
    label.map(short_month_year).unwrap_or_default()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
