//! Item records and field values.
//!
//! A picker item is a flat record of named fields. The engine never assumes
//! a fixed struct shape: which field carries the value, the label, or the
//! parent reference is decided by the resolved [`Schema`](crate::Schema), so
//! hosts can feed records straight from their own data sources.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A cheaply cloneable reference to an icon resource.
///
/// The engine never interprets icon data; it only stores and hands back an
/// opaque identifier (an asset path, a glyph name, a sprite key) for the
/// presentation layer to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconRef(Arc<str>);

impl IconRef {
    /// Create an icon reference from any string-like identifier.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The underlying identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for IconRef {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A dynamically typed field value stored on an [`Item`].
///
/// Selection values are compared with `==`, so two items whose value fields
/// hold `Int(1)` and `Str("1")` are distinct.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The absent value. Fields that are present but null behave as unset
    /// for parent resolution and display-label fallback.
    Null,
    /// A boolean flag, used for roles like `disabled` and `selectable`.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A UTF-8 string.
    Str(String),
    /// An opaque icon reference.
    Icon(IconRef),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Null
    }
}

impl FieldValue {
    /// Whether this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The icon payload, if this is an `Icon`.
    pub fn as_icon(&self) -> Option<&IconRef> {
        match self {
            Self::Icon(icon) => Some(icon),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<IconRef> for FieldValue {
    fn from(icon: IconRef) -> Self {
        Self::Icon(icon)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => f.write_str(s),
            Self::Icon(icon) => f.write_str(icon.as_str()),
        }
    }
}

/// A single picker entry: a bag of named fields.
///
/// Fields are addressed by name; the resolved schema decides which names
/// carry the engine roles. Unknown fields pass through untouched, so hosts
/// can stash arbitrary payload on items and read it back from the engine's
/// sorted or selected views.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    fields: HashMap<String, FieldValue>,
}

impl Item {
    /// Create an item with the default `value` and `label` field names
    /// populated.
    ///
    /// For custom field layouts, build an empty item with
    /// [`Item::default`] and fill it with [`with_field`](Self::with_field).
    pub fn new(value: impl Into<FieldValue>, label: impl Into<FieldValue>) -> Self {
        Self::default()
            .with_field(crate::schema::fields::VALUE, value)
            .with_field(crate::schema::fields::LABEL, label)
    }

    /// Set a field by name, builder style.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set the default `parent` field.
    pub fn with_parent(self, parent: impl Into<FieldValue>) -> Self {
        self.with_field(crate::schema::fields::PARENT, parent)
    }

    /// Set the default `icon` field.
    pub fn with_icon(self, icon: impl Into<IconRef>) -> Self {
        self.with_field(crate::schema::fields::ICON, icon.into())
    }

    /// Set the default `disabled` field.
    pub fn with_disabled(self, disabled: bool) -> Self {
        self.with_field(crate::schema::fields::DISABLED, disabled)
    }

    /// Set the default `selectable` field.
    pub fn with_selectable(self, selectable: bool) -> Self {
        self.with_field(crate::schema::fields::SELECTABLE, selectable)
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Set a field by name on an existing item.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Iterate over all fields in arbitrary order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overwrite this item's fields with those of `fresh`, keeping fields
    /// `fresh` does not carry.
    ///
    /// Used when a new item list arrives and a cached selection entry must
    /// pick up the latest metadata without losing host-only payload.
    pub fn merge_from(&mut self, fresh: &Item) {
        for (name, value) in &fresh.fields {
            self.fields.insert(name.clone(), value.clone());
        }
    }
}

/// Pick an entry from `palette` for `key`, stable across calls.
///
/// The index is the sum of the key's bytes modulo the palette length, so the
/// same label always lands on the same palette entry. Returns `None` for an
/// empty palette.
pub fn pick_from_palette<'a, T>(key: &str, palette: &'a [T]) -> Option<&'a T> {
    if palette.is_empty() {
        return None;
    }
    let sum: usize = key.bytes().map(usize::from).sum();
    palette.get(sum % palette.len())
}
