//! Generic value formatting shared by layout renderers.
//!
//! A renderer resolves some value, then hands it to [`render`] together with
//! the [`FormatOptions`] parsed from its layout token. This crate knows
//! nothing about where values come from: anything implementing
//! [`CultureFormat`] can be rendered.
//!
//! Rendering happens in three steps:
//! - stringify the value under the configured [`Culture`] (absent values
//!   become empty text)
//! - apply case conversion
//! - apply padding, optionally truncating to a fixed width

mod culture;
mod options;

pub use culture::{Culture, CultureFormat, format_datetime, format_float};
pub use options::{FormatOptions, MAX_WIDTH, pad, render, render_to};
