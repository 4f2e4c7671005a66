//! Pass-through formatting options and the padding/case transforms they drive.

use std::iter;

use serde::{Deserialize, Serialize};

use crate::culture::{Culture, CultureFormat};

/// Formatting options shared by every layout renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Target width. Positive values pad on the left, negative on the right.
    pub padding: i32,
    /// Character used to fill up to the padding width.
    pub pad_character: char,
    /// Truncate text longer than the padding width.
    pub fixed_length: bool,
    /// Convert the text to upper case.
    pub upper_case: bool,
    /// Convert the text to lower case. Ignored when `upper_case` is set.
    pub lower_case: bool,
    /// Culture used to stringify numbers and dates.
    pub culture: Culture,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            padding: 0,
            pad_character: ' ',
            fixed_length: false,
            upper_case: false,
            lower_case: false,
            culture: Culture::Invariant,
        }
    }
}

impl FormatOptions {
    /// Apply case conversion and padding to already stringified text.
    pub fn transform(&self, text: String) -> String {
        let text = if self.upper_case {
            text.to_uppercase()
        } else if self.lower_case {
            text.to_lowercase()
        } else {
            text
        };
        pad(text, self.padding, self.pad_character, self.fixed_length)
    }
}

/// Render an optional value to text. Absent values render as empty text,
/// which is still subject to padding.
pub fn render(value: Option<&dyn CultureFormat>, options: &FormatOptions) -> String {
    let text = value
        .map(|v| v.format_culture(&options.culture))
        .unwrap_or_default();
    options.transform(text)
}

/// Like [`render`], appending to `out`.
pub fn render_to(value: Option<&dyn CultureFormat>, options: &FormatOptions, out: &mut String) {
    out.push_str(&render(value, options));
}

/// Largest width [`pad`] will fill or truncate to.
pub const MAX_WIDTH: usize = 1 << 16;

/// Pad `text` to `|padding|` characters, capped at [`MAX_WIDTH`].
///
/// Width is measured in characters. With `fixed_length`, longer text is cut
/// down to its leading `|padding|` characters.
pub fn pad(text: String, padding: i32, pad_character: char, fixed_length: bool) -> String {
    if padding == 0 {
        return text;
    }
    let width = usize::try_from(padding.unsigned_abs()).map_or(MAX_WIDTH, |w| w.min(MAX_WIDTH));
    let len = text.chars().count();
    if len < width {
        let fill: String = iter::repeat_n(pad_character, width - len).collect();
        if padding > 0 { fill + &text } else { text + &fill }
    } else if fixed_length && len > width {
        text.chars().take(width).collect()
    } else {
        text
    }
}
