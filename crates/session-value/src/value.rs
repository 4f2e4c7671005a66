//! Session values and member access.

use std::{borrow::Cow, collections::BTreeMap, fmt, sync::Arc};

use chrono::NaiveDateTime;
use layoutfmt::{Culture, CultureFormat};
use serde_json::Value as JsonValue;

/// Host types that expose named members to nested path lookups.
///
/// Implement this for application records stored in a session so that
/// `record.field` paths can reach into them.
pub trait MemberAccessible: fmt::Debug + fmt::Display + Send + Sync {
    /// Return the member called `name`, or `None` when there is no such member.
    fn member(&self, name: &str) -> Option<Value>;
}

/// A value held in a session store.
#[derive(Debug, Clone)]
pub enum Value {
    /// An explicitly stored null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text.
    String(String),
    /// Date and time without a zone.
    DateTime(NaiveDateTime),
    /// Ordered sequence. Exposes no members.
    List(Vec<Self>),
    /// String-keyed mapping. Each key is a member.
    Map(BTreeMap<String, Self>),
    /// Opaque host record reached through [`MemberAccessible`].
    Record(Arc<dyn MemberAccessible>),
}

impl Value {
    /// Wrap a host record.
    pub fn record(record: impl MemberAccessible + 'static) -> Self {
        Self::Record(Arc::new(record))
    }

    /// Build a [`Value::Map`] from key/value pairs.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Is this an explicitly stored null?
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::DateTime(_) => "datetime",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
        }
    }

    /// Look up a member by exact name.
    ///
    /// Map entries are borrowed; record members are produced by the record.
    /// Every other variant has no members.
    pub fn member(&self, name: &str) -> Option<Cow<'_, Self>> {
        match self {
            Self::Map(entries) => entries.get(name).map(Cow::Borrowed),
            Self::Record(record) => record.member(name).map(Cow::Owned),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            // Records have no structural equality; compare identity.
            (Self::Record(a), Self::Record(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl CultureFormat for Value {
    fn format_culture(&self, culture: &Culture) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.format_culture(culture),
            Self::Int(i) => i.format_culture(culture),
            Self::Float(f) => f.format_culture(culture),
            Self::String(s) => s.clone(),
            Self::DateTime(dt) => dt.format_culture(culture),
            Self::List(items) => items
                .iter()
                .map(|item| item.format_culture(culture))
                .collect::<Vec<_>>()
                .join(", "),
            Self::Map(entries) => {
                if entries.is_empty() {
                    return "{ }".to_string();
                }
                let body = entries
                    .iter()
                    .map(|(k, v)| format!("{k} = {}", v.format_culture(culture)))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{ {body} }}")
            }
            Self::Record(record) => record.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_culture(&Culture::Invariant))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(entries: BTreeMap<String, Self>) -> Self {
        Self::Map(entries)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::record(record)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if n.is_u64() {
                    // Above `i64::MAX`: keep every digit as text.
                    Self::String(n.to_string())
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    Self::String(n.to_string())
                }
            }
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            JsonValue::Object(entries) => {
                Self::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// A named record with ordered fields.
///
/// Displays like an anonymous object: `{ b = c, n = 1 }`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// Name of the record type, for diagnostics.
    type_name: String,
    /// Fields in insertion order.
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Set a field, replacing any field with the same name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    /// The record's type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl MemberAccessible for Record {
    fn member(&self, name: &str) -> Option<Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name} = {value}")?;
        }
        f.write_str(" }")
    }
}
