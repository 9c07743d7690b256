//! Date formatting helpers

use chrono::{DateTime, TimeZone};

/// Format a date in the long form used on rendered pages (like "January 15, 2024")
pub fn full_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %d, %Y").to_string()
}

/// Format a date as `YYYY-MM-DD` for sitemap lastmod values
pub fn ymd<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%d").to_string()
}
