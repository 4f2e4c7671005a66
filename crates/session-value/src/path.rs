//! Validation of nested variable paths.

use std::fmt;

use crate::error::Miss;

/// Separator between the segments of a nested path.
pub const SEPARATOR: char = '.';

/// A validated nested path: a store key followed by member names.
///
/// Every segment is non-empty. `a`, `a.b` and `a.b.c` are valid;
/// `""`, `.a`, `a.` and `a..b` are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariablePath<'a> {
    /// Store key.
    root: &'a str,
    /// Member names, applied in order.
    members: Vec<&'a str>,
}

impl<'a> VariablePath<'a> {
    /// Split `raw` on [`SEPARATOR`], rejecting empty segments.
    pub fn parse(raw: &'a str) -> Result<Self, Miss> {
        let mut segments = raw.split(SEPARATOR);
        let root = segments.next().unwrap_or_default();
        if root.is_empty() {
            return Err(Miss::InvalidPath);
        }
        let members: Vec<&'a str> = segments.collect();
        if members.iter().any(|m| m.is_empty()) {
            return Err(Miss::InvalidPath);
        }
        Ok(Self { root, members })
    }

    /// The store key.
    pub fn root(&self) -> &'a str {
        self.root
    }

    /// Member names following the root.
    pub fn members(&self) -> &[&'a str] {
        &self.members
    }
}

impl fmt::Display for VariablePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root)?;
        for m in &self.members {
            write!(f, "{SEPARATOR}{m}")?;
        }
        Ok(())
    }
}
