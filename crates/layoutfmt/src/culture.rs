//! Locale identifiers and the number and date conventions they select.

use std::{convert::Infallible, fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Languages whose numbers are written with a decimal comma.
const DECIMAL_COMMA_LANGUAGES: &[&str] = &[
    "cs", "da", "de", "es", "fi", "fr", "it", "nb", "nl", "pl", "pt", "ru", "sv", "tr",
];

/// Date-time pattern (`M/d/yyyy h:mm:ss AM`) shared by every culture.
const DATETIME_PATTERN: &str = "%-m/%-d/%Y %-I:%M:%S %p";

/// Locale used when stringifying numbers and dates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Culture {
    /// Culture-neutral conventions.
    #[default]
    Invariant,
    /// A locale identifier such as `en-GB` or `de-DE`, kept verbatim.
    Named(String),
}

impl Culture {
    /// Build a culture from an identifier. Blank identifiers mean [`Culture::Invariant`].
    pub fn named(id: impl Into<String>) -> Self {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            Self::Invariant
        } else {
            Self::Named(trimmed.to_string())
        }
    }

    /// The locale identifier, or an empty string for the invariant culture.
    pub fn id(&self) -> &str {
        match self {
            Self::Invariant => "",
            Self::Named(id) => id,
        }
    }

    /// Language subtag of the identifier (`de` for `de-CH`).
    pub fn language(&self) -> &str {
        self.id().split(['-', '_']).next().unwrap_or_default()
    }

    /// Character separating the integral and fractional parts of a number.
    pub fn decimal_separator(&self) -> char {
        let lang = self.language().to_ascii_lowercase();
        if DECIMAL_COMMA_LANGUAGES.contains(&lang.as_str()) {
            ','
        } else {
            '.'
        }
    }

    /// strftime-style pattern used for date-times.
    pub fn datetime_pattern(&self) -> &'static str {
        DATETIME_PATTERN
    }
}

impl From<String> for Culture {
    fn from(id: String) -> Self {
        Self::named(id)
    }
}

impl From<&str> for Culture {
    fn from(id: &str) -> Self {
        Self::named(id)
    }
}

impl From<Culture> for String {
    fn from(culture: Culture) -> Self {
        culture.id().to_string()
    }
}

impl FromStr for Culture {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::named(s))
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invariant => f.write_str("invariant"),
            Self::Named(id) => f.write_str(id),
        }
    }
}

/// Values that know how to stringify themselves under a culture.
pub trait CultureFormat {
    /// Render `self` as text using the conventions of `culture`.
    fn format_culture(&self, culture: &Culture) -> String;
}

impl CultureFormat for str {
    fn format_culture(&self, _culture: &Culture) -> String {
        self.to_string()
    }
}

impl CultureFormat for String {
    fn format_culture(&self, _culture: &Culture) -> String {
        self.clone()
    }
}

impl CultureFormat for bool {
    fn format_culture(&self, _culture: &Culture) -> String {
        self.to_string()
    }
}

impl CultureFormat for i64 {
    fn format_culture(&self, _culture: &Culture) -> String {
        self.to_string()
    }
}

impl CultureFormat for f64 {
    fn format_culture(&self, culture: &Culture) -> String {
        format_float(*self, culture)
    }
}

impl CultureFormat for NaiveDateTime {
    fn format_culture(&self, culture: &Culture) -> String {
        format_datetime(self, culture)
    }
}

/// Format a float with the culture's decimal separator.
pub fn format_float(value: f64, culture: &Culture) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    let text = value.to_string();
    match culture.decimal_separator() {
        '.' => text,
        sep => text.replace('.', &sep.to_string()),
    }
}

/// Format a date-time using the culture's date-time pattern.
pub fn format_datetime(value: &NaiveDateTime, culture: &Culture) -> String {
    value.format(culture.datetime_pattern()).to_string()
}
