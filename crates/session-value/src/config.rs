//! Configuration for the session value renderer.

use std::{fmt, str::FromStr};

use layoutfmt::{Culture, FormatOptions};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the session layout renderer in layout tokens.
pub const RENDERER_NAME: &str = "session";

/// Renderer names accepted in layout tokens.
const RENDERER_ALIASES: &[&str] = &[RENDERER_NAME, "aspnet-session"];

/// Escape character inside layout tokens.
const ESCAPE: char = '\\';

/// Characters that must be escaped inside a token parameter.
const SPECIAL: &[char] = &[ESCAPE, ':', '=', '}'];

/// What to look up in the session and how to format it.
///
/// Deserializes from camelCase keys with the formatting options flattened in:
///
/// ```json
/// { "variable": "a.b", "evaluateAsNestedProperties": true, "padding": 5 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionValueConfig {
    /// Store key, or dotted path in nested mode.
    pub variable: Option<String>,
    /// Split `variable` on `.` and walk members after the store lookup.
    pub evaluate_as_nested_properties: bool,
    /// Options handed through to the formatting layer.
    #[serde(flatten)]
    pub format: FormatOptions,
}

impl SessionValueConfig {
    /// Configuration for `variable` with default formatting.
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: Some(variable.into()),
            ..Self::default()
        }
    }

    /// Set nested mode.
    pub fn nested(mut self, nested: bool) -> Self {
        self.evaluate_as_nested_properties = nested;
        self
    }

    /// Set the padding width.
    pub fn padding(mut self, padding: i32) -> Self {
        self.format.padding = padding;
        self
    }

    /// Set the padding character.
    pub fn pad_character(mut self, pad_character: char) -> Self {
        self.format.pad_character = pad_character;
        self
    }

    /// Truncate to the padding width.
    pub fn fixed_length(mut self, fixed_length: bool) -> Self {
        self.format.fixed_length = fixed_length;
        self
    }

    /// Upper-case the output.
    pub fn upper_case(mut self, upper_case: bool) -> Self {
        self.format.upper_case = upper_case;
        self
    }

    /// Lower-case the output.
    pub fn lower_case(mut self, lower_case: bool) -> Self {
        self.format.lower_case = lower_case;
        self
    }

    /// Set the formatting culture.
    pub fn culture(mut self, culture: impl Into<Culture>) -> Self {
        self.format.culture = culture.into();
        self
    }

    /// Record the variable, refusing a second one.
    fn set_variable(&mut self, value: &str) -> Result<(), ConfigError> {
        if self.variable.is_some() {
            return Err(ConfigError::DuplicateVariable);
        }
        self.variable = Some(value.to_string());
        Ok(())
    }

    /// Apply one `name=value` option from a layout token.
    fn apply_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "variable" | "item" => self.set_variable(value)?,
            "evaluateasnestedproperties" => {
                self.evaluate_as_nested_properties = parse_bool(name, value)?;
            }
            "padding" => {
                self.format.padding = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    option: name.to_string(),
                    value: value.to_string(),
                    expected: "an integer",
                })?;
            }
            "padcharacter" => {
                let mut chars = value.chars();
                self.format.pad_character = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => {
                        return Err(ConfigError::InvalidValue {
                            option: name.to_string(),
                            value: value.to_string(),
                            expected: "a single character",
                        });
                    }
                };
            }
            "fixedlength" => self.format.fixed_length = parse_bool(name, value)?,
            "uppercase" => self.format.upper_case = parse_bool(name, value)?,
            "lowercase" => self.format.lower_case = parse_bool(name, value)?,
            "culture" => self.format.culture = Culture::named(value),
            _ => {
                return Err(ConfigError::UnknownOption {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Parse `true`/`false`, ignoring case.
fn parse_bool(option: &str, value: &str) -> Result<bool, ConfigError> {
    let v = value.trim();
    if v.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if v.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigError::InvalidValue {
            option: option.to_string(),
            value: value.to_string(),
            expected: "true or false",
        })
    }
}

/// Prefix every special character in `raw` with a backslash.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if SPECIAL.contains(&c) {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Drop escaping backslashes. A trailing lone backslash is kept.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            out.push(chars.next().unwrap_or(ESCAPE));
        } else {
            out.push(c);
        }
    }
    out
}

/// Split `raw` at the first `sep` that is not escaped.
fn split_once_unescaped(raw: &str, sep: char) -> Option<(&str, &str)> {
    let mut escaped = false;
    let (i, _) = raw.char_indices().find(|&(_, c)| {
        if escaped {
            escaped = false;
            false
        } else {
            escaped = c == ESCAPE;
            c == sep
        }
    })?;
    Some((&raw[..i], &raw[i + sep.len_utf8()..]))
}

/// Split `raw` at every `sep` that is not escaped.
fn split_unescaped(raw: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = raw;
    while let Some((head, tail)) = split_once_unescaped(rest, sep) {
        parts.push(head);
        rest = tail;
    }
    parts.push(rest);
    parts
}

/// Parse a layout token such as `${session:a.b:padding=5:evaluateAsNestedProperties=true}`.
///
/// The first parameter without `=` is the variable. Option names ignore case.
/// A backslash escapes the next character, so `\:`, `\=`, `\}` and `\\` can
/// appear in values.
impl FromStr for SessionValueConfig {
    type Err = ConfigError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let body = token
            .trim()
            .strip_prefix("${")
            .and_then(|t| t.strip_suffix('}'))
            .ok_or_else(|| ConfigError::Envelope {
                token: token.to_string(),
            })?;

        let mut parts = split_unescaped(body, ':').into_iter();
        let name = parts.next().unwrap_or_default().trim();
        if !RENDERER_ALIASES.iter().any(|a| a.eq_ignore_ascii_case(name)) {
            return Err(ConfigError::UnknownRenderer {
                name: name.to_string(),
            });
        }

        let mut config = Self::default();
        for part in parts {
            match split_once_unescaped(part, '=') {
                Some((option, value)) => config.apply_option(&unescape(option), &unescape(value))?,
                None => config.set_variable(&unescape(part))?,
            }
        }
        Ok(config)
    }
}

/// Writes the configuration back as a layout token, omitting default options.
/// Special characters in values are escaped so the token parses back.
impl fmt::Display for SessionValueConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let defaults = FormatOptions::default();
        write!(f, "${{{RENDERER_NAME}")?;
        if let Some(variable) = &self.variable {
            write!(f, ":{}", escape(variable))?;
        }
        if self.format.padding != defaults.padding {
            write!(f, ":padding={}", self.format.padding)?;
        }
        if self.format.pad_character != defaults.pad_character {
            let mut buf = [0; 4];
            let pad = self.format.pad_character.encode_utf8(&mut buf);
            write!(f, ":padCharacter={}", escape(pad))?;
        }
        if self.format.fixed_length {
            f.write_str(":fixedLength=true")?;
        }
        if self.format.upper_case {
            f.write_str(":upperCase=true")?;
        }
        if self.format.lower_case {
            f.write_str(":lowerCase=true")?;
        }
        if self.format.culture != defaults.culture {
            write!(f, ":culture={}", escape(self.format.culture.id()))?;
        }
        if self.evaluate_as_nested_properties {
            f.write_str(":evaluateAsNestedProperties=true")?;
        }
        f.write_str("}")
    }
}
