//! HTML attributes.
//!
//! Attribute values are a closed set of types with a fixed text form, and
//! attributes keep insertion order so rendering is deterministic.

use std::fmt;

use indexmap::IndexMap;

/// An attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// String value, written as given
    Text(String),
    /// Boolean value, written as `true` or `false`
    Bool(bool),
    /// Integer value, written in decimal
    Int(i64),
}

impl AttrValue {
    fn write_text(&self, out: &mut String) {
        match self {
            AttrValue::Text(text) => out.push_str(text),
            AttrValue::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
            AttrValue::Int(n) => out.push_str(&n.to_string()),
        }
    }

    fn write_literal(&self, out: &mut String) {
        match self {
            AttrValue::Text(text) => write_str_literal(text, out),
            _ => self.write_text(out),
        }
    }
}

/// Canonical text form, as used inside `key="..."`
impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        self.write_text(&mut text);
        f.write_str(&text)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

/// Ordered attribute map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    entries: IndexMap<String, AttrValue>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute.
    ///
    /// Re-inserting an existing name replaces its value and keeps its
    /// original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Render as ` name="value"` pairs.
    ///
    /// Values are not escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        for (name, value) in &self.entries {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            value.write_text(out);
            out.push('"');
        }
    }
}

/// Map literal form: `{'class': 'btn', 'checked': true}`
impl fmt::Display for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::from("{");
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_str_literal(name, &mut out);
            out.push_str(": ");
            value.write_literal(&mut out);
        }
        out.push('}');
        f.write_str(&out)
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (name, value) in iter {
            props.insert(name, value);
        }
        props
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Props
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Write a quoted string literal.
///
/// Single quotes unless the text holds a single quote and no double quote.
fn write_str_literal(text: &str, out: &mut String) {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}
