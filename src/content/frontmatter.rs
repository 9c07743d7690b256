//! Front-matter parsing
//!
//! Posts may begin with a block delimited by `---` lines containing
//! `key: value` pairs. Parsing is deliberately forgiving: malformed
//! blocks degrade to "no metadata" and malformed dates fall back to
//! the current time. The parser itself never fails.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use indexmap::IndexMap;

/// Delimiter for front-matter blocks
const DELIMITER: &str = "---";

/// Front-matter data from a post
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<DateTime<Local>>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,

    /// Unrecognized fields, kept in file order
    pub extra: IndexMap<String, FieldValue>,
}

/// A coerced value for an unrecognized front-matter key
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    List(Vec<String>),
}

impl FrontMatter {
    /// Parse front-matter from content string.
    /// Returns (front_matter, body). A document without an opening
    /// delimiter, or with no closing delimiter, is all body.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(rest) = content.strip_prefix(DELIMITER) else {
            return (Self::default(), content);
        };
        let Some(end) = rest.find(DELIMITER) else {
            return (Self::default(), content);
        };

        let block = rest[..end].trim();
        let body = rest[end + DELIMITER.len()..].trim();

        let mut fm = Self::default();
        for line in block.lines() {
            // Lines without a colon are ignored
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            fm.set(key.trim(), value.trim());
        }

        (fm, body)
    }

    /// Assign one key/value pair; a repeated key overwrites the earlier one
    fn set(&mut self, key: &str, value: &str) {
        if value.starts_with('[') && value.ends_with(']') {
            let items = parse_list(value);
            if key == "tags" {
                self.tags = Some(items);
            } else {
                self.extra.insert(key.to_string(), FieldValue::List(items));
            }
            return;
        }

        let value = strip_quotes(value);
        match key {
            "title" => self.title = Some(value.to_string()),
            "date" => self.date = Some(parse_date(value)),
            "description" => self.description = Some(value.to_string()),
            "image" => self.image = Some(value.to_string()),
            _ => {
                let coerced = if value.eq_ignore_ascii_case("true") {
                    FieldValue::Bool(true)
                } else if value.eq_ignore_ascii_case("false") {
                    FieldValue::Bool(false)
                } else {
                    FieldValue::Text(value.to_string())
                };
                self.extra.insert(key.to_string(), coerced);
            }
        }
    }
}

/// Split a bracketed list value into trimmed, unquoted items
fn parse_list(value: &str) -> Vec<String> {
    let interior = &value[1..value.len() - 1];
    if interior.trim().is_empty() {
        return Vec::new();
    }
    interior
        .split(',')
        .map(|item| strip_quotes(item.trim()).to_string())
        .collect()
}

/// Strip one layer of matching surrounding quotes
fn strip_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Parse a date value; malformed input falls back to the current time
pub fn parse_date(s: &str) -> DateTime<Local> {
    let s = s.trim();

    // RFC 3339 / ISO 8601 with an offset ("Z" included)
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(&Local);
    }

    // Date-only ISO form
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(dt) = d
            .and_hms_opt(0, 0, 0)
            .and_then(|dt| Local.from_local_datetime(&dt).single())
        {
            return dt;
        }
    }

    // Fixed-format parse of the first 19 characters
    let head: String = s.chars().take(19).collect();
    if let Ok(dt) = NaiveDateTime::parse_from_str(&head, "%Y-%m-%dT%H:%M:%S") {
        if let Some(dt) = Local.from_local_datetime(&dt).single() {
            return dt;
        }
    }

    Local::now()
}
