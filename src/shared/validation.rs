//! Field-level checks shared by every submitted form.
//!
//! Checks never short-circuit across fields: each one records its message
//! under the offending field in a [`FieldErrors`] and the caller rejects the
//! whole submission when anything was recorded.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use email_address::EmailAddress;
use regex::Regex;
use serde::Serialize;

pub const REQUIRED_MSG: &str = "This field is required.";

static LEADING_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\W_]").expect("Invalid leading symbol regex"));
static TRAILING_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\W_]$").expect("Invalid trailing symbol regex"));

/// Ordered map of field name to the messages recorded against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Returns the trimmed value, or records the required message and returns `None`.
pub fn required<'a>(errors: &mut FieldErrors, field: &str, value: &'a str) -> Option<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, REQUIRED_MSG);
        None
    } else {
        Some(trimmed)
    }
}

/// Names may neither start nor end with punctuation, whitespace or `_`.
pub fn check_name_boundaries(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: &str,
) -> bool {
    if LEADING_SYMBOL.is_match(value) {
        errors.add(field, format!("{label} cannot begin with that character."));
        false
    } else if TRAILING_SYMBOL.is_match(value) {
        errors.add(field, format!("{label} cannot end with that character."));
        false
    } else {
        true
    }
}

pub fn check_max_len(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: &str,
    max: usize,
) -> bool {
    if value.chars().count() > max {
        errors.add(
            field,
            format!("{label} cannot be longer than {max} characters."),
        );
        false
    } else {
        true
    }
}

pub fn check_email(errors: &mut FieldErrors, field: &str, value: &str) -> bool {
    if EmailAddress::is_valid(value) {
        true
    } else {
        errors.add(field, "Invalid email address format.");
        false
    }
}

/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]` and
/// bare dates (midnight UTC). Naive values are taken as UTC.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Required datetime field.
pub fn required_datetime(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
) -> Option<DateTime<Utc>> {
    let value = required(errors, field, value)?;
    let parsed = parse_datetime(value);
    if parsed.is_none() {
        errors.add(field, "Not a valid datetime value.");
    }
    parsed
}
